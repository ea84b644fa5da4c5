use super::{Error, ErrorData, RequestFailure};
use crate::RequestResult;

impl Error {
    /// Creates a bad request error (HTTP 400).
    ///
    /// A bad request is a query error: the expression was rejected by the
    /// service, and the caller can recover by fixing it. Each [`ErrorData`]
    /// carries the position of the offending sub-expression and, for
    /// validation failures, the list of field-level failures.
    pub fn bad_request(errors: Vec<ErrorData>, result: RequestResult) -> Error {
        Error::from(super::ErrorKind::BadRequest(RequestFailure::new(
            errors, result,
        )))
    }

    /// Returns `true` if this error is a bad request error.
    pub fn is_bad_request(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::BadRequest(_))
    }
}
