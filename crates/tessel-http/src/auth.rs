use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// The `Authorization` header value for `secret`.
///
/// The secret is split at its first `:` into user and password; a secret
/// with no colon is the user with an empty password.
pub(crate) fn basic(secret: &str) -> String {
    let (user, password) = secret.split_once(':').unwrap_or((secret, ""));
    format!("Basic {}", STANDARD.encode(format!("{user}:{password}")))
}
