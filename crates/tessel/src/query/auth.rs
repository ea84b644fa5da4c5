use tessel_core::Expr;

/// Exchanges the credentials in `params` (usually `password`) for a token.
pub fn login(reference: impl Into<Expr>, params: impl Into<Expr>) -> Expr {
    Expr::object([("login", reference.into()), ("params", params.into())])
}

/// Invalidates the current token, or every token of the identity when
/// `all_tokens` is set.
pub fn logout(all_tokens: impl Into<Expr>) -> Expr {
    Expr::call("logout", all_tokens)
}

/// `true` if `password` is valid for the identity at `reference`.
pub fn identify(reference: impl Into<Expr>, password: impl Into<Expr>) -> Expr {
    Expr::object([("identify", reference.into()), ("password", password.into())])
}

/// The reference of the identity the current key belongs to.
pub fn identity() -> Expr {
    Expr::call("identity", Expr::null())
}

pub fn has_identity() -> Expr {
    Expr::call("has_identity", Expr::null())
}
