//! Functions assembling query expressions.
//!
//! Every function is pure: it builds an [`Expr`] whose value mirrors one form
//! of the remote query language, and nothing is checked until the service
//! evaluates it. Names that collide with Rust keywords carry a trailing
//! underscore (`let_`, `if_`, `do_`, `match_`, `ref_`).
//!
//! ```
//! use tessel::query::*;
//!
//! let expr = map(
//!     paginate(match_(index("spells_by_element"), ["fire"]), Default::default()),
//!     lambda("spell", |spell| get(spell, Default::default())),
//! );
//! ```

mod auth;
pub use auth::*;

mod basic;
pub use basic::*;

mod collection;
pub use collection::*;

mod logic;
pub use logic::*;

mod math;
pub use math::*;

mod misc;
pub use misc::*;

mod read;
pub use read::*;

mod set;
pub use set::*;

mod string;
pub use string::*;

mod time;
pub use time::*;

mod write;
pub use write::*;

pub use tessel_core::{Expr, Params};

/// Argument of a variadic form: a single argument is sent bare, anything else
/// as an array.
fn varargs<T: Into<Expr>>(args: impl IntoIterator<Item = T>) -> Expr {
    let mut args: Vec<Expr> = args.into_iter().map(Into::into).collect();

    if args.len() == 1 {
        args.remove(0)
    } else {
        Expr::array(args)
    }
}

/// `{name: varargs(args)}`
fn variadic<T: Into<Expr>>(name: &str, args: impl IntoIterator<Item = T>) -> Expr {
    Expr::call(name, varargs(args))
}

/// Appends the entries of `params` whose key is in `allowed`. Anything else
/// is dropped without error.
fn with_options(mut expr: Expr, params: &Params, allowed: &[&str]) -> Expr {
    for (key, value) in params.allowed(allowed).iter() {
        expr = expr.with_field(key, value.clone());
    }
    expr
}
