use super::{Error, ErrorData, RequestFailure};
use crate::RequestResult;

impl Error {
    /// Creates a method not allowed error (HTTP 405).
    pub fn method_not_allowed(errors: Vec<ErrorData>, result: RequestResult) -> Error {
        Error::from(super::ErrorKind::MethodNotAllowed(RequestFailure::new(
            errors, result,
        )))
    }

    /// Returns `true` if this error is a method not allowed error.
    pub fn is_method_not_allowed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MethodNotAllowed(_))
    }
}
