use super::Method;

use indexmap::IndexMap;

/// A request handed to a [`Transport`](super::Transport).
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,

    /// Path relative to the service root, without a leading slash.
    pub path: String,

    pub query: Option<IndexMap<String, String>>,

    /// UTF-8 JSON body.
    pub body: Option<Vec<u8>>,

    /// Opaque credential; the transport decides how to encode it.
    pub secret: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, path: impl Into<String>) -> HttpRequest {
        HttpRequest {
            method,
            path: path.into(),
            query: None,
            body: None,
            secret: None,
        }
    }

    /// The body as text, if there is one and it is valid UTF-8.
    pub fn body_str(&self) -> Option<&str> {
        self.body
            .as_deref()
            .and_then(|body| std::str::from_utf8(body).ok())
    }
}

/// The response to an [`HttpRequest`], with the body already decompressed.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: IndexMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> HttpResponse {
        HttpResponse {
            status,
            headers: IndexMap::new(),
            body: body.into(),
        }
    }
}
