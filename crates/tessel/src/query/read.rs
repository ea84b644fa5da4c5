use super::with_options;

use tessel_core::{Expr, Params};

/// Options `get` recognizes.
pub const GET_OPTIONS: &[&str] = &["ts"];

/// Options `exists` recognizes.
pub const EXISTS_OPTIONS: &[&str] = &["ts"];

/// Options `paginate` recognizes.
pub const PAGINATE_OPTIONS: &[&str] = &["ts", "after", "before", "size", "events", "sources"];

/// Options `count` recognizes.
pub const COUNT_OPTIONS: &[&str] = &["events"];

/// Reads the instance at `reference`, optionally at a point in time (`ts`).
pub fn get(reference: impl Into<Expr>, params: Params) -> Expr {
    with_options(Expr::call("get", reference), &params, GET_OPTIONS)
}

/// Reads one window of `set`.
///
/// Options outside [`PAGINATE_OPTIONS`] are dropped.
pub fn paginate(set: impl Into<Expr>, params: Params) -> Expr {
    with_options(Expr::call("paginate", set), &params, PAGINATE_OPTIONS)
}

pub fn exists(reference: impl Into<Expr>, params: Params) -> Expr {
    with_options(Expr::call("exists", reference), &params, EXISTS_OPTIONS)
}

pub fn count(set: impl Into<Expr>, params: Params) -> Expr {
    with_options(Expr::call("count", set), &params, COUNT_OPTIONS)
}
