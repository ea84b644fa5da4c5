use tessel_core::{err, Result};

use std::time::Duration;
use url::Url;

/// Where and how to reach the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub domain: String,
    pub scheme: String,

    /// Defaults to the scheme's port.
    pub port: Option<u16>,

    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            domain: "db.fauna.com".to_string(),
            scheme: "https".to_string(),
            port: None,
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(60),
        }
    }
}

impl Config {
    /// Reads the scheme, domain and port from an endpoint URL such as
    /// `http://localhost:8443`. Timeouts keep their defaults.
    pub fn from_url(url: &str) -> Result<Config> {
        let url = Url::parse(url).map_err(|e| err!("invalid endpoint URL {url:?}: {e}"))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(err!(
                "endpoint URL must use http or https; url={}",
                url
            ));
        }

        let domain = url
            .host_str()
            .ok_or_else(|| err!("missing host in endpoint URL; url={}", url))?;

        Ok(Config {
            domain: domain.to_string(),
            scheme: url.scheme().to_string(),
            port: url.port(),
            ..Config::default()
        })
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Config {
        self.domain = domain.into();
        self
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Config {
        self.scheme = scheme.into();
        self
    }

    pub fn port(mut self, port: u16) -> Config {
        self.port = Some(port);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Config {
        self.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Config {
        self.connect_timeout = timeout;
        self
    }

    /// The root all request paths are resolved against.
    pub fn base_url(&self) -> Result<Url> {
        let mut url = Url::parse(&format!("{}://{}/", self.scheme, self.domain))
            .map_err(|e| err!("invalid endpoint {}://{}: {e}", self.scheme, self.domain))?;

        if let Some(port) = self.port {
            url.set_port(Some(port))
                .map_err(|()| err!("cannot set port on {url}"))?;
        }

        Ok(url)
    }
}
