//! Arithmetic and comparison.
//!
//! These forms are variadic and follow the service's rules for short argument
//! lists: `add([])` is an error, `subtract([x])` and `divide([x])` are `x`.
//! Nothing is folded locally.

use super::variadic;

use tessel_core::Expr;

macro_rules! variadic_fn {
    ( $( $(#[$attr:meta])* $name:ident => $form:literal; )* ) => {
        $(
            $(#[$attr])*
            pub fn $name<T: Into<Expr>>(args: impl IntoIterator<Item = T>) -> Expr {
                variadic($form, args)
            }
        )*
    };
}

pub(super) use variadic_fn;

variadic_fn! {
    add => "add";
    multiply => "multiply";
    subtract => "subtract";
    divide => "divide";
    modulo => "modulo";

    /// `true` if all arguments are equal.
    equals => "equals";

    /// `true` if the arguments are strictly increasing.
    lt => "lt";
    lte => "lte";
    gt => "gt";
    gte => "gte";
}
