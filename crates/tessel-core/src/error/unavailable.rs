use super::{Error, ErrorData, RequestFailure};
use crate::RequestResult;

/// Error when the service could not be reached or could not serve the request.
#[derive(Debug)]
pub(super) struct UnavailableError {
    pub(super) failure: Option<RequestFailure>,
}

impl core::fmt::Display for UnavailableError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("service unavailable")?;
        if let Some(ref failure) = self.failure {
            write!(f, " ({failure})")?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an unavailable error.
    ///
    /// This covers HTTP 502, 503 and 504 responses, in which case `result`
    /// is the exchange, as well as transport failures (timeouts, refused
    /// connections, undecodable bodies), in which case there is no exchange
    /// to report and the transport error is attached as the cause.
    pub fn unavailable(errors: Vec<ErrorData>, result: Option<RequestResult>) -> Error {
        Error::from(super::ErrorKind::Unavailable(UnavailableError {
            failure: result.map(|result| RequestFailure::new(errors, result)),
        }))
    }

    /// Returns `true` if this error is an unavailable error.
    ///
    /// Callers that retry should retry on exactly this category.
    pub fn is_unavailable(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Unavailable(_))
    }
}
