use super::with_options;

use tessel_core::{Expr, Params};

/// Options `concat` recognizes.
pub const CONCAT_OPTIONS: &[&str] = &["separator"];

/// Joins an array of strings, with the `separator` option between them.
pub fn concat(strings: impl Into<Expr>, params: Params) -> Expr {
    with_options(Expr::call("concat", strings), &params, CONCAT_OPTIONS)
}

/// Normalizes case for case-insensitive comparison.
pub fn casefold(string: impl Into<Expr>) -> Expr {
    Expr::call("casefold", string)
}
