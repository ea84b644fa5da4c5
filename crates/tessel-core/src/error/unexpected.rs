use super::Error;
use crate::RequestResult;

/// Error when a response does not follow the wire protocol.
///
/// This occurs when:
/// - The body is not valid JSON
/// - A failed response has no `errors` array, or an empty one
/// - The status code is outside the known taxonomy
#[derive(Debug)]
pub(super) struct UnexpectedError {
    message: Box<str>,
    pub(super) result: Box<RequestResult>,
}

impl core::fmt::Display for UnexpectedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unexpected response (status {}): {}",
            self.result.status_code, self.message
        )
    }
}

impl Error {
    /// Creates an unexpected response error.
    ///
    /// The raw response stays reachable through [`Error::request_result`]
    /// for diagnostics.
    pub fn unexpected(message: impl Into<String>, result: RequestResult) -> Error {
        Error::from(super::ErrorKind::Unexpected(UnexpectedError {
            message: message.into().into(),
            result: Box::new(result),
        }))
    }

    /// Returns `true` if this error is an unexpected response error.
    pub fn is_unexpected(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Unexpected(_))
    }
}
