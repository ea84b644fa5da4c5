use super::ErrorData;
use crate::RequestResult;

/// The decoded error envelope of a failed exchange, along with the exchange.
#[derive(Debug)]
pub(super) struct RequestFailure {
    pub(super) errors: Vec<ErrorData>,
    pub(super) result: Box<RequestResult>,
}

impl RequestFailure {
    pub(super) fn new(errors: Vec<ErrorData>, result: RequestResult) -> RequestFailure {
        RequestFailure {
            errors,
            result: Box::new(result),
        }
    }
}

impl core::fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "status {}", self.result.status_code);
        }

        for (i, data) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", data.code, data.description)?;
        }

        Ok(())
    }
}
