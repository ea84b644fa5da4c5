use super::{Error, ErrorData, RequestFailure};
use crate::RequestResult;

impl Error {
    /// Creates a not found error (HTTP 404).
    ///
    /// Raised for reads of instances that do not exist, and for `select`
    /// paths that are missing when no default was given.
    pub fn not_found(errors: Vec<ErrorData>, result: RequestResult) -> Error {
        Error::from(super::ErrorKind::NotFound(RequestFailure::new(
            errors, result,
        )))
    }

    /// Returns `true` if this error is a not found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotFound(_))
    }
}
