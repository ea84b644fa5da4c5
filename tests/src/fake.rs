//! An in-memory stand-in for the database service.
//!
//! [`FakeServer`] implements [`Transport`] by decoding each query and
//! evaluating the subset of the query language the client tests rely on.
//! Results come back in the legacy `{"resource": ..}` envelope and failures
//! in the real error envelope, so the whole client stack runs unmodified.

mod db;
use db::Db;
pub use db::IndexDef;

use eval::{Env, EvalError};

use crate::ExecLog;

use serde_json::json;
use std::sync::{Arc, Mutex};
use tessel_core::{
    async_trait, json, HttpRequest, HttpResponse, Method, Ref, Result, Transport, Value,
};

#[derive(Debug, Clone)]
pub struct FakeServer {
    db: Arc<Mutex<Db>>,
    log: ExecLog,
}

impl FakeServer {
    pub fn new() -> Self {
        Self {
            db: Arc::default(),
            log: ExecLog::new(Arc::default()),
        }
    }

    /// Define an index over a class
    pub fn define_index(&self, index: IndexDef) {
        self.db.lock().unwrap().define_index(index);
    }

    /// Store an instance directly, bypassing the query path
    pub fn insert(&self, class: &str, data: impl Into<Value>) -> Ref {
        self.db.lock().unwrap().create(class, data.into())
    }

    /// Whether an instance is stored
    pub fn contains(&self, reference: &Ref) -> bool {
        self.db.lock().unwrap().get(reference).is_some()
    }

    /// Number of instances stored for a class
    pub fn len(&self, class: &str) -> usize {
        self.db.lock().unwrap().len(class)
    }

    /// Get a handle to the request log
    pub fn exec_log(&self) -> ExecLog {
        self.log.clone()
    }

    fn handle(&self, request: &HttpRequest) -> (u16, serde_json::Value) {
        match (request.method, &request.path[..]) {
            (Method::Get, "ping") => {
                let scope = request
                    .query
                    .as_ref()
                    .and_then(|query| query.get("scope"))
                    .map(String::as_str)
                    .unwrap_or("global");
                (200, json!({"resource": format!("Scope {scope} is OK")}))
            }
            (Method::Post, "") => match self.query(request) {
                Ok(value) => (200, json!({"resource": json::encode(&value)})),
                Err(err) => (err.status, err.to_envelope()),
            },
            _ => {
                let err = EvalError::new(404, "not found", "Endpoint not found.");
                (err.status, err.to_envelope())
            }
        }
    }

    fn query(&self, request: &HttpRequest) -> std::result::Result<Value, EvalError> {
        let body = request
            .body
            .as_deref()
            .ok_or_else(|| EvalError::bad_request("invalid expression", "Request body is empty."))?;

        let expr = json::from_slice(body)
            .map_err(|err| EvalError::bad_request("invalid expression", err.to_string()))?;

        // Queries run atomically
        let mut db = self.db.lock().unwrap();
        eval::eval(&mut db, &Env::default(), &expr)
    }
}

impl Default for FakeServer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for FakeServer {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.log.push(request.clone());

        let (status, body) = self.handle(&request);
        let mut response = HttpResponse::new(status, body.to_string());
        response.headers.insert(
            "content-type".to_string(),
            "application/json;charset=utf-8".to_string(),
        );

        Ok(response)
    }
}
