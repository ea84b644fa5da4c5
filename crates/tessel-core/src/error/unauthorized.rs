use super::{Error, ErrorData, RequestFailure};
use crate::RequestResult;

impl Error {
    /// Creates an unauthorized error (HTTP 401).
    ///
    /// Raised when the secret is missing or not recognized by the service.
    pub fn unauthorized(errors: Vec<ErrorData>, result: RequestResult) -> Error {
        Error::from(super::ErrorKind::Unauthorized(RequestFailure::new(
            errors, result,
        )))
    }

    /// Returns `true` if this error is an unauthorized error.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Unauthorized(_))
    }
}
