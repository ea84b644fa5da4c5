use super::Method;

use indexmap::IndexMap;
use std::time::{Duration, Instant};

/// A record of one HTTP exchange.
///
/// Passed to the client's observer after every exchange and attached to
/// errors raised from a response. Never mutated once built.
#[derive(Debug, Clone)]
pub struct RequestResult {
    pub method: Method,
    pub path: String,
    pub query: Option<IndexMap<String, String>>,

    /// The secret the request was sent with.
    pub auth: Option<String>,

    /// Request body, as sent.
    pub request_content: Option<serde_json::Value>,

    /// Response body as received, after decompression.
    pub response_raw: String,

    /// Response body parsed as JSON, if it parsed.
    pub response_content: Option<serde_json::Value>,

    pub status_code: u16,
    pub response_headers: IndexMap<String, String>,
    pub start_time: Instant,
    pub end_time: Instant,
}

impl RequestResult {
    pub fn builder(method: Method, path: impl Into<String>) -> Builder {
        let now = Instant::now();

        Builder {
            result: RequestResult {
                method,
                path: path.into(),
                query: None,
                auth: None,
                request_content: None,
                response_raw: String::new(),
                response_content: None,
                status_code: 0,
                response_headers: IndexMap::new(),
                start_time: now,
                end_time: now,
            },
        }
    }

    /// Wall time between sending the request and receiving the response.
    pub fn time_taken(&self) -> Duration {
        self.end_time.saturating_duration_since(self.start_time)
    }
}

#[derive(Debug)]
pub struct Builder {
    result: RequestResult,
}

impl Builder {
    pub fn query(mut self, query: Option<IndexMap<String, String>>) -> Self {
        self.result.query = query;
        self
    }

    pub fn auth(mut self, auth: Option<String>) -> Self {
        self.result.auth = auth;
        self
    }

    pub fn request_content(mut self, content: Option<serde_json::Value>) -> Self {
        self.result.request_content = content;
        self
    }

    pub fn response_raw(mut self, raw: impl Into<String>) -> Self {
        self.result.response_raw = raw.into();
        self
    }

    pub fn response_content(mut self, content: Option<serde_json::Value>) -> Self {
        self.result.response_content = content;
        self
    }

    pub fn status_code(mut self, status: u16) -> Self {
        self.result.status_code = status;
        self
    }

    pub fn response_headers(mut self, headers: IndexMap<String, String>) -> Self {
        self.result.response_headers = headers;
        self
    }

    pub fn timing(mut self, start: Instant, end: Instant) -> Self {
        self.result.start_time = start;
        self.result.end_time = end;
        self
    }

    pub fn build(self) -> RequestResult {
        self.result
    }
}
