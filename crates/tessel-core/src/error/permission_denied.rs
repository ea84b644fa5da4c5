use super::{Error, ErrorData, RequestFailure};
use crate::RequestResult;

impl Error {
    /// Creates a permission denied error (HTTP 403).
    pub fn permission_denied(errors: Vec<ErrorData>, result: RequestResult) -> Error {
        Error::from(super::ErrorKind::PermissionDenied(RequestFailure::new(
            errors, result,
        )))
    }

    /// Returns `true` if this error is a permission denied error.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::PermissionDenied(_))
    }
}
