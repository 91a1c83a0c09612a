//! Connection configuration for the management service.

use std::time::Duration;

use url::Url;

use crate::errors::CatalogError;

/// Host used when `--host` is not given.
pub const DEFAULT_HOST: &str = "localhost";
/// Port used when `--port` is not given.
pub const DEFAULT_PORT: u16 = 8181;
/// Request timeout used unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const MANAGEMENT_API_PATH: [&str; 3] = ["api", "management", "v1"];

/// Where and how to reach the management service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root URL of the service, without the API path.
    pub base_url: Url,
    /// Bearer token sent with every request, if any.
    pub access_token: Option<String>,
    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration for the service at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, CatalogError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            CatalogError::Configuration(format!("invalid base URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::Configuration(format!(
                "base URL '{}' cannot carry a path",
                base_url
            )));
        }
        Ok(Self {
            base_url,
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Resolves command-line values, falling back to defaults for anything unset.
    ///
    /// # Arguments
    /// * `host` - Service host name
    /// * `port` - Service port
    /// * `access_token` - Bearer token; empty is treated as unset
    pub fn from_options(
        host: Option<String>,
        port: Option<u16>,
        access_token: Option<String>,
    ) -> Result<Self, CatalogError> {
        let host = host
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = port.unwrap_or(DEFAULT_PORT);
        let config = Self::new(&format!("http://{}:{}", host, port))?;
        Ok(config.with_access_token(access_token))
    }

    /// Sets the bearer token.
    pub fn with_access_token(mut self, access_token: Option<String>) -> Self {
        self.access_token = access_token.filter(|t| !t.is_empty());
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the URL of a management API resource from its path segments.
    ///
    /// Each segment is percent-encoded on its own, so a catalog name cannot
    /// escape its path position.
    pub fn management_url(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                CatalogError::Configuration(format!(
                    "base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(MANAGEMENT_API_PATH)
            .extend(segments);
        Ok(url)
    }
}
