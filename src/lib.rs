//! # polaris-catalogs: Catalog Management for Polaris
//!
//! This crate implements the `catalogs` command group of a command-line client
//! for the Polaris management API. A catalog is a named collection of tables
//! and namespaces, together with the cloud storage it may write to.
//!
//! The crate provides:
//!
//! - **Option Validation**: Subcommand-specific required flags and mutually
//!   exclusive storage settings are checked before any request is sent
//! - **Storage Configuration**: S3, Azure and GCS settings are mapped onto the
//!   storage configuration the service expects
//! - **Request Dispatch**: create, update, get, list and delete are translated
//!   into calls on a [`CatalogManagementClient`]
//! - **HTTP Client**: [`PolarisClient`] implements the management API over REST
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ polarisctl (flag parsing, exit codes)   │
//! ├─────────────────────────────────────────┤
//! │ CatalogsCommand (validate, execute)     │
//! ├─────────────────────────────────────────┤
//! │ CatalogManagementClient (trait)         │
//! ├─────────────────────────────────────────┤
//! │ PolarisClient (reqwest, JSON)           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage Examples
//!
//! ### Building a Create Request
//!
//! ```rust
//! # use polaris_catalogs::{CatalogOptions, CatalogsCommand, NewCatalog, StorageType, Subcommand};
//! let mut options = CatalogOptions::new(Subcommand::Create, "analytics");
//! options.storage_type = Some(StorageType::S3);
//! options.default_base_location = Some("s3://bucket/analytics".to_string());
//! options.role_arn = Some("arn:aws:iam::123456789012:role/polaris".to_string());
//!
//! let command = CatalogsCommand::new(options);
//! command.validate().unwrap();
//!
//! let request = command.create_request().unwrap();
//! assert_eq!(request.catalog.name(), "analytics");
//! assert_eq!(
//!     request.catalog.storage_config_info().map(|s| s.storage_type()),
//!     Some("S3")
//! );
//! ```
//!
//! ### Talking to a Server
//!
//! ```rust,no_run
//! # use polaris_catalogs::{CatalogOptions, CatalogsCommand, ClientConfig, PolarisClient, Subcommand};
//! # async fn run() -> Result<(), polaris_catalogs::CatalogError> {
//! let config = ClientConfig::from_options(None, None, Some("token".to_string()))?;
//! let client = PolarisClient::new(config)?;
//!
//! let command = CatalogsCommand::new(CatalogOptions::new(Subcommand::List, ""));
//! for line in command.execute(&client).await?.lines {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
mod catalog;
mod config;
mod errors;
mod management;
mod options;
mod storage;
mod validate;

/// Command-line interface utilities for program termination, output and logging.
pub mod cli_utils;

/// Command-line interface command handlers.
///
/// This module contains the handler for the `catalogs` command group along
/// with the shared argument and error-rendering helpers it uses.
pub mod commands;

/// HTTP client for the Polaris management API.
///
/// This module provides [`PolarisClient`], which implements
/// [`CatalogManagementClient`] over REST, and the [`HttpError`] it reports.
pub mod http_utils;

pub use catalog::{
    AwsStorageConfig, AzureStorageConfig, Catalog, CatalogType, CreateCatalogRequest,
    DEFAULT_BASE_LOCATION, FileStorageConfig, GcpStorageConfig, ListCatalogsResponse, NewCatalog,
    StorageConfigInfo, UpdateCatalogRequest, merge_properties,
};
pub use commands::{CatalogsCommand, CommandOutput};
pub use config::{ClientConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT};
pub use errors::CatalogError;
pub use http_utils::{HttpError, PolarisClient};
pub use management::CatalogManagementClient;
pub use options::{
    CatalogFlags, CatalogOptions, StorageType, Subcommand, parse_list, parse_properties,
};
pub use storage::build_storage_config;
pub use validate::{ValidationError, validate_options};
