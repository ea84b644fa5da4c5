use super::{Error, ErrorData, RequestFailure};
use crate::RequestResult;

impl Error {
    /// Creates an internal error (HTTP 500).
    ///
    /// The service faulted while handling the request. The description and
    /// stacktrace reported by the service are passed through untouched.
    pub fn internal(errors: Vec<ErrorData>, result: RequestResult) -> Error {
        Error::from(super::ErrorKind::Internal(RequestFailure::new(
            errors, result,
        )))
    }

    /// Returns `true` if this error is an internal error.
    pub fn is_internal(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Internal(_))
    }
}
