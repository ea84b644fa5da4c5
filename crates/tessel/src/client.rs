mod builder;
pub use builder::Builder;

pub mod logger;

mod observer;
pub use observer::Observer;

mod response;

use crate::{Page, Result};

use tessel_core::{
    json, Error, Expr, HttpRequest, Method, Params, RequestResult, Transport, Value,
};

use indexmap::IndexMap;
use std::{fmt, sync::Arc, time::Instant};

/// State shared between every client derived from the same builder.
pub(crate) struct Shared {
    transport: Box<dyn Transport>,
    observer: Option<Observer>,
}

/// A handle to the database service.
///
/// Cloning is cheap and clones share the transport. A client never changes
/// after construction; [`Client::with_secret`] returns a new one instead of
/// updating the credential in place, so a single client can be used from many
/// tasks at once.
#[derive(Clone)]
pub struct Client {
    shared: Arc<Shared>,
    secret: Option<Arc<str>>,
}

impl Client {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns a client using `secret` over the same transport and observer.
    pub fn with_secret(&self, secret: impl Into<String>) -> Client {
        Client {
            shared: self.shared.clone(),
            secret: Some(secret.into().into()),
        }
    }

    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    /// Executes a query expression and returns its decoded result.
    pub async fn query(&self, expr: impl Into<Expr>) -> Result<Value> {
        let expr = expr.into();
        self.execute(Method::Post, "", None, Some(json::encode_expr(&expr)))
            .await
    }

    /// Builds a query with `f` and executes it.
    ///
    /// Equivalent to `client.query(f())`, for call sites that assemble a query
    /// from [`query`](crate::query) functions inline.
    pub async fn query_with<F>(&self, f: F) -> Result<Value>
    where
        F: FnOnce() -> Expr,
    {
        self.query(f()).await
    }

    /// Returns a lazily loaded [`Page`] over `set`.
    pub fn paginate(&self, set: impl Into<Expr>, params: Params) -> Page {
        Page::new(self.clone(), set, params)
    }

    /// Checks that the service is up, optionally for a given `scope`
    /// (`"node"`, `"local"`, `"global"` or `"all"`).
    pub async fn ping(&self, scope: Option<&str>) -> Result<String> {
        let query = scope.map(|scope| IndexMap::from([("scope".to_string(), scope.to_string())]));

        match self.execute(Method::Get, "ping", query, None).await? {
            Value::String(status) => Ok(status),
            other => Err(tessel_core::err!("ping returned a non-string value: {other}")),
        }
    }

    pub async fn get(&self, path: &str, params: Params) -> Result<Value> {
        self.execute(Method::Get, path, query_string(&params), None)
            .await
    }

    pub async fn post(&self, path: &str, body: impl Into<Expr>) -> Result<Value> {
        self.execute(Method::Post, path, None, Some(json::encode_expr(&body.into())))
            .await
    }

    pub async fn put(&self, path: &str, body: impl Into<Expr>) -> Result<Value> {
        self.execute(Method::Put, path, None, Some(json::encode_expr(&body.into())))
            .await
    }

    pub async fn patch(&self, path: &str, body: impl Into<Expr>) -> Result<Value> {
        self.execute(Method::Patch, path, None, Some(json::encode_expr(&body.into())))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.execute(Method::Delete, path, None, None).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Option<IndexMap<String, String>>,
        body: Option<serde_json::Value>,
    ) -> Result<Value> {
        let path = path.trim_start_matches('/');

        let request = HttpRequest {
            method,
            path: path.to_string(),
            query: query.clone(),
            body: body
                .as_ref()
                .map(|body| serde_json::to_vec(body).unwrap_or_default()),
            secret: self.secret.as_deref().map(str::to_string),
        };

        let start = Instant::now();

        let response = match self.shared.transport.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(%method, path, error = %err, "request failed in transport");

                return Err(if err.is_unavailable() {
                    err
                } else {
                    err.context(Error::unavailable(vec![], None))
                });
            }
        };

        let end = Instant::now();
        let response_raw = String::from_utf8_lossy(&response.body).into_owned();
        let response_content = serde_json::from_str(&response_raw).ok();

        let result = RequestResult::builder(method, path)
            .query(query)
            .auth(self.secret.as_deref().map(str::to_string))
            .request_content(body)
            .response_raw(response_raw)
            .response_content(response_content)
            .status_code(response.status)
            .response_headers(response.headers)
            .timing(start, end)
            .build();

        tracing::debug!(
            %method,
            path,
            status = result.status_code,
            latency_ms = result.time_taken().as_millis() as u64,
            "request complete"
        );

        if let Some(observer) = &self.shared.observer {
            observer.notify(&result);
        }

        response::handle(result)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("transport", &self.shared.transport)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Renders params as a URL query. Strings are sent verbatim, everything else
/// as its JSON wire form.
fn query_string(params: &Params) -> Option<IndexMap<String, String>> {
    if params.is_empty() {
        return None;
    }

    Some(
        params
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(value) => value.clone(),
                    value => json::encode(value).to_string(),
                };
                (key.to_string(), value)
            })
            .collect(),
    )
}
