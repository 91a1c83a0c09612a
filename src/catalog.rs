//! Wire model of the Polaris management API.
//!
//! These types mirror the JSON documents exchanged with the catalog endpoints.
//! Field names are camelCase on the wire; optional fields are omitted when absent.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validate::ValidationError;

/// Property key under which a catalog records its default base location.
pub const DEFAULT_BASE_LOCATION: &str = "default-base-location";

/// Whether a catalog is managed by the service or federated to a remote one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CatalogType {
    /// A catalog whose metadata lives in the service itself.
    #[default]
    Internal,
    /// A catalog backed by a remote catalog reachable at a URL.
    External,
}

impl fmt::Display for CatalogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal => write!(f, "internal"),
            Self::External => write!(f, "external"),
        }
    }
}

impl FromStr for CatalogType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "internal" => Ok(Self::Internal),
            "external" => Ok(Self::External),
            _ => Err(ValidationError::InvalidValue {
                flag: "--catalog-type",
                value: s.to_string(),
                reason: "expected one of: internal, external".to_string(),
            }),
        }
    }
}

/// Storage configuration for an AWS S3 backed catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsStorageConfig {
    /// Locations tables in this catalog may be placed under.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_locations: Vec<String>,
    /// IAM role the service assumes to access the bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// External id passed when assuming the role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// IAM user the service acts as.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_arn: Option<String>,
}

/// Storage configuration for an Azure backed catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureStorageConfig {
    /// Locations tables in this catalog may be placed under.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_locations: Vec<String>,
    /// Azure tenant that owns the storage account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Name of the multi-tenant application registered for the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_tenant_app_name: Option<String>,
    /// URL an administrator visits to grant consent to the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent_url: Option<String>,
}

/// Storage configuration for a Google Cloud Storage backed catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GcpStorageConfig {
    /// Locations tables in this catalog may be placed under.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_locations: Vec<String>,
    /// Tenant identifier carried over from the command options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Application name carried over from the command options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_tenant_app_name: Option<String>,
    /// Service account reported by the server for this catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcs_service_account: Option<String>,
}

/// Storage configuration for a catalog on a local filesystem.
///
/// Only ever decoded from server responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStorageConfig {
    /// Locations tables in this catalog may be placed under.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_locations: Vec<String>,
}

/// Cloud storage configuration attached to a catalog, tagged by `storageType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "storageType")]
pub enum StorageConfigInfo {
    /// Amazon S3.
    #[serde(rename = "S3")]
    Aws(AwsStorageConfig),
    /// Azure Data Lake / Blob storage.
    #[serde(rename = "AZURE")]
    Azure(AzureStorageConfig),
    /// Google Cloud Storage.
    #[serde(rename = "GCS")]
    Gcp(GcpStorageConfig),
    /// Local filesystem.
    #[serde(rename = "FILE")]
    File(FileStorageConfig),
}

impl StorageConfigInfo {
    /// Returns the wire name of the storage type.
    pub fn storage_type(&self) -> &'static str {
        match self {
            Self::Aws(_) => "S3",
            Self::Azure(_) => "AZURE",
            Self::Gcp(_) => "GCS",
            Self::File(_) => "FILE",
        }
    }

    /// Returns the locations this configuration allows.
    pub fn allowed_locations(&self) -> &[String] {
        match self {
            Self::Aws(c) => &c.allowed_locations,
            Self::Azure(c) => &c.allowed_locations,
            Self::Gcp(c) => &c.allowed_locations,
            Self::File(c) => &c.allowed_locations,
        }
    }
}

/// A catalog as reported by the management service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Internal or external.
    #[serde(rename = "type")]
    pub catalog_type: CatalogType,
    /// Unique catalog name.
    pub name: String,
    /// URL of the remote catalog for external catalogs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
    /// Catalog properties, including `default-base-location`.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    /// Creation time in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_timestamp: Option<i64>,
    /// Last modification time in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_timestamp: Option<i64>,
    /// Version token used for optimistic concurrency on update.
    #[serde(default)]
    pub entity_version: i64,
    /// Storage configuration, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_config_info: Option<StorageConfigInfo>,
}

impl Catalog {
    /// Renders the catalog as a single line of compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Payload describing a catalog to be created, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum NewCatalog {
    /// A catalog whose metadata lives in the service.
    #[serde(rename_all = "camelCase")]
    Internal {
        /// Catalog name.
        name: String,
        /// Catalog properties.
        properties: BTreeMap<String, String>,
        /// Storage configuration, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        storage_config_info: Option<StorageConfigInfo>,
    },
    /// A catalog federated to a remote catalog.
    #[serde(rename_all = "camelCase")]
    External {
        /// Catalog name.
        name: String,
        /// URL of the remote catalog.
        remote_url: String,
        /// Catalog properties.
        properties: BTreeMap<String, String>,
        /// Storage configuration, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        storage_config_info: Option<StorageConfigInfo>,
    },
}

impl NewCatalog {
    /// Returns the name of the catalog to create.
    pub fn name(&self) -> &str {
        match self {
            Self::Internal { name, .. } | Self::External { name, .. } => name,
        }
    }

    /// Returns the storage configuration of the catalog to create.
    pub fn storage_config_info(&self) -> Option<&StorageConfigInfo> {
        match self {
            Self::Internal {
                storage_config_info,
                ..
            }
            | Self::External {
                storage_config_info,
                ..
            } => storage_config_info.as_ref(),
        }
    }
}

/// Request body for `POST /catalogs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCatalogRequest {
    /// The catalog to create.
    pub catalog: NewCatalog,
}

/// Request body for `PUT /catalogs/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCatalogRequest {
    /// Entity version the update was computed against.
    pub current_entity_version: i64,
    /// Replacement catalog properties.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    /// Replacement storage configuration, omitted to keep the current one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_config_info: Option<StorageConfigInfo>,
}

impl UpdateCatalogRequest {
    /// Creates an update request from a catalog carrying the desired properties.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            current_entity_version: catalog.entity_version,
            properties: catalog.properties.clone(),
            storage_config_info: None,
        }
    }

    /// Attaches a storage configuration to the request.
    pub fn with_storage_config(mut self, storage_config_info: Option<StorageConfigInfo>) -> Self {
        self.storage_config_info = storage_config_info;
        self
    }
}

/// Response body for `GET /catalogs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCatalogsResponse {
    /// Catalogs in the order the server returned them.
    #[serde(default)]
    pub catalogs: Vec<Catalog>,
}

/// Builds a property map from an optional default base location and an overlay.
///
/// The base location is inserted first and the overlay applied on top, so an
/// explicit `default-base-location` property wins.
pub fn merge_properties(
    default_base_location: Option<&str>,
    overlay: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut merged = BTreeMap::new();
    if let Some(location) = default_base_location {
        merged.insert(DEFAULT_BASE_LOCATION.to_string(), location.to_string());
    }
    merged.extend(overlay.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}
