use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt;
use tracing::{debug, warn};
use url::Url;

use crate::catalog::{Catalog, CreateCatalogRequest, ListCatalogsResponse, UpdateCatalogRequest};
use crate::cli_utils;
use crate::commands::errors::format_cli_error;
use crate::config::ClientConfig;
use crate::errors::CatalogError;
use crate::management::CatalogManagementClient;

const NO_ERROR_DETAILS: &str = "No error details";

/// A failed call to the management service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    /// The operation that failed, e.g. `Get catalog analytics`.
    pub operation: String,
    /// The HTTP status, when the server answered.
    pub status: Option<u16>,
    /// Response body or transport error text.
    pub details: String,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(status) = self.status {
            write!(
                f,
                "{} failed (HTTP {}): {}",
                self.operation, status, self.details
            )
        } else {
            write!(f, "{} failed: {}", self.operation, self.details)
        }
    }
}

impl Error for HttpError {}

impl HttpError {
    /// Creates an error for a failure that produced no HTTP status.
    pub fn new(operation: &str, details: &str) -> Self {
        Self {
            operation: operation.to_string(),
            status: None,
            details: details.to_string(),
        }
    }

    /// Creates an error for a response with a non-success status.
    pub fn with_status(operation: &str, status: u16, details: &str) -> Self {
        Self {
            operation: operation.to_string(),
            status: Some(status),
            details: if details.is_empty() {
                NO_ERROR_DETAILS.to_string()
            } else {
                details.to_string()
            },
        }
    }

    /// Creates an error from a non-success response, consuming its body.
    pub async fn from_response(response: Response, operation: &str) -> Self {
        let status = response.status().as_u16();
        let details = response.text().await.unwrap_or_default();
        Self::with_status(operation, status, &details)
    }

    fn transport(operation: &str, error: &reqwest::Error) -> Self {
        Self {
            operation: operation.to_string(),
            status: error.status().map(|s| s.as_u16()),
            details: error.to_string(),
        }
    }
}

/// HTTP client for the Polaris management API.
pub struct PolarisClient {
    client: Client,
    config: ClientConfig,
}

impl PolarisClient {
    /// Creates a client for the service described by `config`.
    pub fn new(config: ClientConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Configuration(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn catalogs_url(&self, name: Option<&str>) -> Result<Url, CatalogError> {
        match name {
            Some(name) => self.config.management_url(&["catalogs", name]),
            None => self.config.management_url(&["catalogs"]),
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends a request and deserializes a successful JSON response.
    async fn send_json<T>(&self, request: RequestBuilder, operation: &str) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(request, operation).await?;
        response
            .json()
            .await
            .map_err(|e| HttpError::transport(operation, &e))
    }

    /// Sends a request, discarding the body of a successful response.
    async fn send_empty(&self, request: RequestBuilder, operation: &str) -> Result<(), HttpError> {
        self.send(request, operation).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder, operation: &str) -> Result<Response, HttpError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| HttpError::transport(operation, &e))
            .inspect_err(|e| warn!(operation, error = %e, "request failed"))?;

        if response.status().is_success() {
            debug!(operation, status = response.status().as_u16(), "request succeeded");
            Ok(response)
        } else {
            let error = HttpError::from_response(response, operation).await;
            warn!(operation, status = ?error.status, details = %error.details, "request rejected");
            Err(error)
        }
    }
}

impl CatalogManagementClient for PolarisClient {
    async fn create_catalog(&self, request: &CreateCatalogRequest) -> Result<(), CatalogError> {
        let operation = format!("Create catalog {}", request.catalog.name());
        let url = self.catalogs_url(None)?;
        debug!(%url, "POST");
        self.send_empty(self.client.post(url).json(request), &operation)
            .await?;
        Ok(())
    }

    async fn delete_catalog(&self, name: &str) -> Result<(), CatalogError> {
        let operation = format!("Delete catalog {}", name);
        let url = self.catalogs_url(Some(name))?;
        debug!(%url, "DELETE");
        self.send_empty(self.client.delete(url), &operation).await?;
        Ok(())
    }

    async fn get_catalog(&self, name: &str) -> Result<Catalog, CatalogError> {
        let operation = format!("Get catalog {}", name);
        let url = self.catalogs_url(Some(name))?;
        debug!(%url, "GET");
        Ok(self.send_json(self.client.get(url), &operation).await?)
    }

    async fn list_catalogs(&self) -> Result<ListCatalogsResponse, CatalogError> {
        let url = self.catalogs_url(None)?;
        debug!(%url, "GET");
        Ok(self.send_json(self.client.get(url), "List catalogs").await?)
    }

    async fn update_catalog(
        &self,
        name: &str,
        request: &UpdateCatalogRequest,
    ) -> Result<(), CatalogError> {
        let operation = format!("Update catalog {}", name);
        let url = self.catalogs_url(Some(name))?;
        debug!(%url, entity_version = request.current_entity_version, "PUT");
        self.send_empty(self.client.put(url).json(request), &operation)
            .await?;
        Ok(())
    }
}

/// Execute an operation and exit on error with formatted message
pub async fn execute_or_exit<T, F, Fut>(operation: F) -> T
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T, CatalogError>>,
{
    match operation().await {
        Ok(result) => result,
        Err(e) => cli_utils::exit_with_message(&format_cli_error(&e)),
    }
}
