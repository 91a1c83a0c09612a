//! The management API surface the catalog commands are written against.

use crate::catalog::{Catalog, CreateCatalogRequest, ListCatalogsResponse, UpdateCatalogRequest};
use crate::errors::CatalogError;

/// Catalog operations of the Polaris management API.
///
/// [`PolarisClient`](crate::http_utils::PolarisClient) implements this over
/// HTTP. Errors are returned unchanged to the caller; implementations do not
/// retry.
#[allow(async_fn_in_trait)]
pub trait CatalogManagementClient {
    /// Creates a catalog.
    async fn create_catalog(&self, request: &CreateCatalogRequest) -> Result<(), CatalogError>;

    /// Deletes the named catalog.
    async fn delete_catalog(&self, name: &str) -> Result<(), CatalogError>;

    /// Fetches the named catalog.
    async fn get_catalog(&self, name: &str) -> Result<Catalog, CatalogError>;

    /// Lists all catalogs.
    async fn list_catalogs(&self) -> Result<ListCatalogsResponse, CatalogError>;

    /// Updates the named catalog.
    async fn update_catalog(
        &self,
        name: &str,
        request: &UpdateCatalogRequest,
    ) -> Result<(), CatalogError>;
}
