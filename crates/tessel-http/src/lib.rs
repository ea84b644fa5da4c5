mod auth;

mod config;
pub use config::Config;

mod decode;

use tessel_core::{
    async_trait, err, Error, HttpRequest, HttpResponse, Method, Result, Transport,
};

use indexmap::IndexMap;
use reqwest::header::{ACCEPT_ENCODING, AUTHORIZATION, CONTENT_ENCODING, CONTENT_TYPE};
use url::Url;

/// A [`Transport`] over HTTP(S).
///
/// Holds a connection pool; clone the client built on top of it rather than
/// building several transports.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: Config) -> Result<HttpTransport> {
        let base_url = config.base_url()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| err!("failed to build HTTP client: {e}"))?;

        Ok(HttpTransport { client, base_url })
    }

    /// Connects to the endpoint at `url`, with default timeouts.
    pub fn connect(url: &str) -> Result<HttpTransport> {
        HttpTransport::new(Config::from_url(url)?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, request: &HttpRequest) -> Result<Url> {
        let mut url = self.base_url.clone();

        // Appended segment by segment, so a path such as `keys:1` can never
        // be read as an absolute URL of its own
        url.path_segments_mut()
            .map_err(|_| err!("endpoint URL cannot take a path; url={}", self.base_url))?
            .pop_if_empty()
            .extend(request.path.split('/').filter(|segment| !segment.is_empty()));

        if let Some(query) = &request.query {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = self.url(&request)?;

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json;charset=utf-8")
            .header(ACCEPT_ENCODING, "gzip, deflate");

        if let Some(secret) = &request.secret {
            builder = builder.header(AUTHORIZATION, auth::basic(secret));
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| Error::transport(e))?;

        let status = response.status().as_u16();

        let headers: IndexMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                Some((name.as_str().to_string(), value.to_str().ok()?.to_string()))
            })
            .collect();

        let encoding = response
            .headers()
            .get(CONTENT_ENCODING)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport(e))?
            .to_vec();

        let body = decode::decompress(encoding.as_deref(), body)?;

        tracing::trace!(status, bytes = body.len(), "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
