//! Resolved options for the `catalogs` command group.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::catalog::CatalogType;
use crate::errors::CatalogError;
use crate::validate::ValidationError;

/// The operation to perform on catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    /// Create a catalog.
    Create,
    /// Update an existing catalog.
    Update,
    /// Fetch a single catalog.
    Get,
    /// List all catalogs.
    List,
    /// Delete a catalog.
    Delete,
}

impl Subcommand {
    /// Returns the name used for this subcommand on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Get => "get",
            Self::List => "list",
            Self::Delete => "delete",
        }
    }

    /// Whether the subcommand operates on a single named catalog.
    pub fn takes_catalog_name(&self) -> bool {
        !matches!(self, Self::List)
    }
}

impl fmt::Display for Subcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subcommand {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "get" => Ok(Self::Get),
            "list" => Ok(Self::List),
            "delete" => Ok(Self::Delete),
            _ => Err(CatalogError::UnsupportedSubcommand(s.to_string())),
        }
    }
}

/// Cloud storage backend for a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// Amazon S3.
    S3,
    /// Azure storage.
    Azure,
    /// Google Cloud Storage.
    Gcs,
}

impl StorageType {
    /// Returns the lowercase name accepted by `--storage-type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S3 => "s3",
            Self::Azure => "azure",
            Self::Gcs => "gcs",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s3" => Ok(Self::S3),
            "azure" => Ok(Self::Azure),
            "gcs" => Ok(Self::Gcs),
            _ => Err(ValidationError::InvalidValue {
                flag: "--storage-type",
                value: s.to_string(),
                reason: "expected one of: s3, azure, gcs".to_string(),
            }),
        }
    }
}

/// Raw flag values as typed by the user.
///
/// Every field is a plain string; an empty string means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFlags {
    /// `--catalog-type`: internal or external.
    pub catalog_type: String,
    /// `--remote-url`.
    pub remote_url: String,
    /// `--default-base-location`.
    pub default_base_location: String,
    /// `--storage-type`: s3, azure or gcs.
    pub storage_type: String,
    /// `--allowed-locations`: comma-separated list.
    pub allowed_locations: String,
    /// `--role-arn`.
    pub role_arn: String,
    /// `--external-id`.
    pub external_id: String,
    /// `--user-arn`.
    pub user_arn: String,
    /// `--tenant-id`.
    pub tenant_id: String,
    /// `--multi-tenant-app-name`.
    pub multi_tenant_app_name: String,
    /// `--consent-url`.
    pub consent_url: String,
    /// `--service-account`.
    pub service_account: String,
    /// `--properties`: comma-separated `key=value` pairs.
    pub properties: String,
}

/// Fully resolved options for one `catalogs` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Operation to perform.
    pub subcommand: Subcommand,
    /// Internal or external catalog.
    pub catalog_type: CatalogType,
    /// Name of the target catalog; empty for `list`.
    pub catalog_name: String,
    /// Remote catalog URL for external catalogs.
    pub remote_url: Option<String>,
    /// Default base location for tables in the catalog.
    pub default_base_location: Option<String>,
    /// Storage backend.
    pub storage_type: Option<StorageType>,
    /// Locations the catalog may use, in the order given.
    pub allowed_locations: Vec<String>,
    /// S3: IAM role to assume.
    pub role_arn: Option<String>,
    /// S3: external id for role assumption.
    pub external_id: Option<String>,
    /// S3: IAM user.
    pub user_arn: Option<String>,
    /// Azure: tenant id.
    pub tenant_id: Option<String>,
    /// Azure: multi-tenant application name.
    pub multi_tenant_app_name: Option<String>,
    /// Azure: consent URL.
    pub consent_url: Option<String>,
    /// GCS: service account.
    pub service_account: Option<String>,
    /// Additional catalog properties.
    pub properties: BTreeMap<String, String>,
}

impl CatalogOptions {
    /// Creates options for `subcommand` on `catalog_name` with every optional field unset.
    pub fn new(subcommand: Subcommand, catalog_name: impl Into<String>) -> Self {
        Self {
            subcommand,
            catalog_type: CatalogType::default(),
            catalog_name: catalog_name.into(),
            remote_url: None,
            default_base_location: None,
            storage_type: None,
            allowed_locations: Vec::new(),
            role_arn: None,
            external_id: None,
            user_arn: None,
            tenant_id: None,
            multi_tenant_app_name: None,
            consent_url: None,
            service_account: None,
            properties: BTreeMap::new(),
        }
    }

    /// Resolves raw command-line flags into options.
    pub fn from_flags(
        subcommand: Subcommand,
        catalog_name: impl Into<String>,
        flags: &CatalogFlags,
    ) -> Result<Self, ValidationError> {
        let catalog_type = match non_empty(&flags.catalog_type) {
            Some(s) => s.parse()?,
            None => CatalogType::default(),
        };
        let storage_type = non_empty(&flags.storage_type)
            .map(|s| s.parse::<StorageType>())
            .transpose()?;

        Ok(Self {
            catalog_type,
            remote_url: non_empty(&flags.remote_url),
            default_base_location: non_empty(&flags.default_base_location),
            storage_type,
            allowed_locations: parse_list(&flags.allowed_locations),
            role_arn: non_empty(&flags.role_arn),
            external_id: non_empty(&flags.external_id),
            user_arn: non_empty(&flags.user_arn),
            tenant_id: non_empty(&flags.tenant_id),
            multi_tenant_app_name: non_empty(&flags.multi_tenant_app_name),
            consent_url: non_empty(&flags.consent_url),
            service_account: non_empty(&flags.service_account),
            properties: parse_properties(&flags.properties)?,
            ..Self::new(subcommand, catalog_name)
        })
    }

    /// Whether any S3-specific field is set.
    pub fn has_aws_storage_info(&self) -> bool {
        self.role_arn.is_some() || self.external_id.is_some() || self.user_arn.is_some()
    }

    /// Whether any Azure-specific field is set.
    pub fn has_azure_storage_info(&self) -> bool {
        self.tenant_id.is_some()
            || self.multi_tenant_app_name.is_some()
            || self.consent_url.is_some()
    }

    /// Whether any GCS-specific field is set.
    pub fn has_gcs_storage_info(&self) -> bool {
        self.service_account.is_some()
    }

    /// Whether any option that affects storage configuration is set.
    pub fn has_storage_options(&self) -> bool {
        !self.allowed_locations.is_empty()
            || self.has_aws_storage_info()
            || self.has_azure_storage_info()
            || self.has_gcs_storage_info()
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Splits a comma-separated flag value, dropping empty entries.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Parses comma-separated `key=value` pairs; later keys replace earlier ones.
pub fn parse_properties(value: &str) -> Result<BTreeMap<String, String>, ValidationError> {
    let mut properties = BTreeMap::new();
    for pair in parse_list(value) {
        let Some((key, val)) = pair.split_once('=') else {
            return Err(ValidationError::InvalidValue {
                flag: "--properties",
                value: pair.clone(),
                reason: "expected key=value".to_string(),
            });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(ValidationError::InvalidValue {
                flag: "--properties",
                value: pair.clone(),
                reason: "property key must not be empty".to_string(),
            });
        }
        properties.insert(key.to_string(), val.trim().to_string());
    }
    Ok(properties)
}
