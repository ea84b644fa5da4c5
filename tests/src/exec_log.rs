use std::sync::{Arc, Mutex};
use tessel_core::{HttpRequest, Method};

/// A wrapper around the request log that provides a clean API for tests
#[derive(Debug, Clone)]
pub struct ExecLog {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ExecLog {
    pub(crate) fn new(requests: Arc<Mutex<Vec<HttpRequest>>>) -> Self {
        Self { requests }
    }

    pub(crate) fn push(&self, request: HttpRequest) {
        self.requests.lock().unwrap().push(request);
    }

    /// Get the number of logged requests
    pub fn len(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.requests.lock().unwrap().is_empty()
    }

    /// Count requests matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&HttpRequest) -> bool,
    {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|request| predicate(request))
            .count()
    }

    /// Number of query executions (POSTs to the root)
    pub fn queries(&self) -> usize {
        self.count(|request| request.method == Method::Post && request.path.is_empty())
    }

    /// Clear the log
    pub fn clear(&self) {
        self.requests.lock().unwrap().clear();
    }

    /// Remove and return the first request from the log
    pub fn pop(&self) -> Option<HttpRequest> {
        let mut requests = self.requests.lock().unwrap();
        if requests.is_empty() {
            None
        } else {
            Some(requests.remove(0))
        }
    }

    /// The body of the last request, parsed as JSON
    pub fn last_body(&self) -> Option<serde_json::Value> {
        let requests = self.requests.lock().unwrap();
        let body = requests.last()?.body.as_ref()?;
        serde_json::from_slice(body).ok()
    }
}
