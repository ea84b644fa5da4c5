use tessel_core::Expr;

/// Parses an ISO-8601 timestamp, or `"now"`.
pub fn time(string: impl Into<Expr>) -> Expr {
    Expr::call("time", string)
}

/// A timestamp `number` units after the epoch. `unit` is one of `second`,
/// `millisecond`, `microsecond` or `nanosecond`.
pub fn epoch(number: impl Into<Expr>, unit: impl Into<Expr>) -> Expr {
    Expr::object([("epoch", number.into()), ("unit", unit.into())])
}

/// Parses an ISO-8601 date.
pub fn date(string: impl Into<Expr>) -> Expr {
    Expr::call("date", string)
}
