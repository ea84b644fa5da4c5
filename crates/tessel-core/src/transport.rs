mod method;
pub use method::Method;

mod request;
pub use request::{HttpRequest, HttpResponse};

mod request_result;
pub use request_result::{Builder as RequestResultBuilder, RequestResult};

use crate::async_trait;

use std::fmt::Debug;

/// Executes HTTP exchanges on behalf of a client.
///
/// A transport owns everything below the wire protocol: connection reuse,
/// TLS, credential encoding and response decompression. It reports
/// failures to reach the service with [`Error::transport`](crate::Error::transport);
/// any HTTP status, including error statuses, is a successful exchange.
#[async_trait]
pub trait Transport: Debug + Send + Sync + 'static {
    /// Execute a single exchange.
    async fn execute(&self, request: HttpRequest) -> crate::Result<HttpResponse>;
}
