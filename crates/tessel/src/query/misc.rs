use super::{varargs, with_options};

use tessel_core::{Expr, Params};

/// Options `select` recognizes.
pub const SELECT_OPTIONS: &[&str] = &["default"];

/// A reference to instance `id` of `class_ref`.
pub fn ref_(class_ref: impl Into<Expr>, id: impl Into<Expr>) -> Expr {
    Expr::object([("ref", class_ref.into()), ("id", id.into())])
}

pub fn class(name: impl Into<Expr>) -> Expr {
    Expr::call("class", name)
}

pub fn index(name: impl Into<Expr>) -> Expr {
    Expr::call("index", name)
}

pub fn database(name: impl Into<Expr>) -> Expr {
    Expr::call("database", name)
}

pub fn function(name: impl Into<Expr>) -> Expr {
    Expr::call("function", name)
}

/// A fresh id, for building refs before creating instances.
pub fn next_id() -> Expr {
    Expr::call("next_id", Expr::null())
}

/// Calls the stored function `function` with `args`.
pub fn call<T: Into<Expr>>(function: impl Into<Expr>, args: impl IntoIterator<Item = T>) -> Expr {
    Expr::object([("call", function.into()), ("arguments", varargs(args))])
}

/// Wraps `lambda` as a value, for storing in a function's `body`.
pub fn query(lambda: impl Into<Expr>) -> Expr {
    Expr::call("query", lambda)
}

/// Fails the transaction with `message`.
pub fn abort(message: impl Into<Expr>) -> Expr {
    Expr::call("abort", message)
}

/// Evaluates `expr` as of the snapshot at `ts`.
pub fn at(ts: impl Into<Expr>, expr: impl Into<Expr>) -> Expr {
    Expr::object([("at", ts.into()), ("expr", expr.into())])
}

/// `true` if `path` (a key, an index or an array of them) exists in `value`.
pub fn contains(path: impl Into<Expr>, value: impl Into<Expr>) -> Expr {
    Expr::object([("contains", path.into()), ("in", value.into())])
}

/// Extracts the value at `path` in `from`.
///
/// Fails with "value not found" unless the `default` option is set.
pub fn select(path: impl Into<Expr>, from: impl Into<Expr>, params: Params) -> Expr {
    let expr = Expr::object([("select", path.into()), ("from", from.into())]);
    with_options(expr, &params, SELECT_OPTIONS)
}

/// Every value at `path` in `from`, descending through arrays.
pub fn select_all(path: impl Into<Expr>, from: impl Into<Expr>) -> Expr {
    Expr::object([("select_all", path.into()), ("from", from.into())])
}
