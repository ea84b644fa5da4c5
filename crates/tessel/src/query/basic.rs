use super::varargs;

use tessel_core::{Expr, Value};

/// Binds `bindings` for the evaluation of `body`.
///
/// `{let: {name: value, ..}, in: body}`
pub fn let_<K, V>(bindings: impl IntoIterator<Item = (K, V)>, body: impl Into<Expr>) -> Expr
where
    K: Into<String>,
    V: Into<Expr>,
{
    Expr::object([
        (
            "let",
            Expr::object(
                bindings
                    .into_iter()
                    .map(|(name, value)| (name.into(), value.into())),
            ),
        ),
        ("in", body.into()),
    ])
}

/// A reference to a variable bound by [`let_`] or a lambda.
pub fn var(name: &str) -> Expr {
    Expr::call("var", Expr::from(name))
}

pub fn if_(condition: impl Into<Expr>, then: impl Into<Expr>, otherwise: impl Into<Expr>) -> Expr {
    Expr::object([
        ("if", condition.into()),
        ("then", then.into()),
        ("else", otherwise.into()),
    ])
}

/// Evaluates each expression in order and returns the last result.
pub fn do_<T: Into<Expr>>(exprs: impl IntoIterator<Item = T>) -> Expr {
    Expr::call("do", varargs(exprs))
}

/// An object whose field values are evaluated by the service.
pub fn object<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Expr
where
    K: Into<String>,
    V: Into<Expr>,
{
    Expr::call(
        "object",
        Expr::object(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        ),
    )
}

/// Sends `expr` as data. The service does not evaluate it.
pub fn quote(expr: impl Into<Expr>) -> Expr {
    Expr::call("quote", expr)
}

/// A one-parameter lambda. `f` receives `var(param)` and returns the body.
///
/// ```
/// use tessel::query::*;
///
/// let double = lambda("x", |x| multiply([x, 2.into()]));
/// ```
pub fn lambda(param: &str, f: impl FnOnce(Expr) -> Expr) -> Expr {
    lambda_expr(param, f(var(param)))
}

/// A lambda taking `N` parameters, destructured from an array.
pub fn lambda_n<const N: usize>(params: [&str; N], f: impl FnOnce([Expr; N]) -> Expr) -> Expr {
    let body = f(params.map(var));
    lambda_expr(params.map(Expr::from), body)
}

/// A lambda from its raw parts: a parameter name or array of names, and a body.
pub fn lambda_expr(params: impl Into<Expr>, body: impl Into<Expr>) -> Expr {
    Expr::object([("lambda", params.into()), ("expr", body.into())])
}

/// The empty expression, sent as `null`.
pub fn null() -> Expr {
    Expr::new(Value::Null)
}
