use super::variadic;

use tessel_core::Expr;

/// The set of entries of `index` matching `terms`.
///
/// With no terms, the whole index is matched and `terms` is omitted.
pub fn match_<T: Into<Expr>>(index: impl Into<Expr>, terms: impl IntoIterator<Item = T>) -> Expr {
    let terms: Vec<Expr> = terms.into_iter().map(Into::into).collect();
    let expr = Expr::call("match", index);

    if terms.is_empty() {
        expr
    } else {
        expr.with_field("terms", super::varargs(terms))
    }
}

pub fn union<T: Into<Expr>>(sets: impl IntoIterator<Item = T>) -> Expr {
    variadic("union", sets)
}

pub fn intersection<T: Into<Expr>>(sets: impl IntoIterator<Item = T>) -> Expr {
    variadic("intersection", sets)
}

/// Elements of `source` that are in none of `others`.
pub fn difference<T: Into<Expr>>(source: impl Into<Expr>, others: impl IntoIterator<Item = T>) -> Expr {
    variadic(
        "difference",
        std::iter::once(source.into()).chain(others.into_iter().map(Into::into)),
    )
}

/// Derives a set by applying `target` (an index or a lambda) to each element
/// of `source`.
pub fn join(source: impl Into<Expr>, target: impl Into<Expr>) -> Expr {
    Expr::object([("join", source.into()), ("with", target.into())])
}

pub fn distinct(set: impl Into<Expr>) -> Expr {
    Expr::call("distinct", set)
}

/// The set of events of the singleton `reference`.
pub fn singleton(reference: impl Into<Expr>) -> Expr {
    Expr::call("singleton", reference)
}

/// The events of a reference or set, for paginating their history.
pub fn events(ref_or_set: impl Into<Expr>) -> Expr {
    Expr::call("events", ref_or_set)
}
