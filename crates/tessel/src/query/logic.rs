use super::math::variadic_fn;
use super::variadic;

use tessel_core::Expr;

variadic_fn! {
    and => "and";
    or => "or";
}

pub fn not(boolean: impl Into<Expr>) -> Expr {
    Expr::call("not", boolean)
}
