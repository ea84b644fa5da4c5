use crate::ExecLog;

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use tessel_core::{async_trait, err, Error, HttpRequest, HttpResponse, Result, Transport};

/// A transport that replays canned responses, in order, and records every
/// request it receives.
#[derive(Debug, Clone)]
pub struct StubTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse>>>>,
    log: ExecLog,
}

impl StubTransport {
    pub fn new() -> Self {
        Self {
            responses: Arc::default(),
            log: ExecLog::new(Arc::default()),
        }
    }

    /// Queue a response with the given status and body
    pub fn respond(self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.respond_with(HttpResponse::new(status, body))
    }

    /// Queue a full response
    pub fn respond_with(self, response: HttpResponse) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queue a transport-level failure
    pub fn fail(self, err: Error) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    /// Get a handle to the request log
    pub fn exec_log(&self) -> ExecLog {
        self.log.clone()
    }
}

impl Default for StubTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.log.push(request.clone());

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(err!("no canned response for {} /{}", request.method, request.path)))
    }
}
