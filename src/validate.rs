//! # Catalog Option Validation
//!
//! Checks that the options for a `catalogs` subcommand are complete and
//! consistent before any request is sent.
//!
//! Rules are evaluated in a fixed order and the first failure is reported:
//!
//! 1. `create` needs a storage type and a default base location, plus a remote
//!    URL for external catalogs.
//! 2. `update` needs a storage type whenever allowed locations are given.
//! 3. Storage fields must belong to the selected storage type.
//!
//! ## Usage Examples
//!
//! ```rust
//! use polaris_catalogs::{CatalogOptions, StorageType, Subcommand, validate_options};
//!
//! let mut options = CatalogOptions::new(Subcommand::Create, "analytics");
//! options.storage_type = Some(StorageType::S3);
//! options.default_base_location = Some("s3://bucket/analytics".to_string());
//! assert!(validate_options(&options).is_err()); // --role-arn is missing
//!
//! options.role_arn = Some("arn:aws:iam::123456789012:role/polaris".to_string());
//! assert!(validate_options(&options).is_ok());
//! ```

use crate::catalog::CatalogType;
use crate::options::{CatalogOptions, StorageType, Subcommand};

/// Errors describing why a set of catalog options was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A flag required in this context was not supplied.
    MissingArgument {
        /// The missing flag, e.g. `--storage-type`.
        flag: &'static str,
        /// Why the flag is required, if it is only conditionally required.
        context: Option<String>,
    },
    /// Storage fields from a different storage type were supplied.
    UnsupportedStorageOptions {
        /// The storage type whose fields are allowed.
        storage_type: StorageType,
    },
    /// A flag value could not be parsed.
    InvalidValue {
        /// The offending flag.
        flag: &'static str,
        /// The value that was supplied.
        value: String,
        /// What was expected instead.
        reason: String,
    },
}

impl ValidationError {
    /// Returns the flag this error is about.
    pub fn flag(&self) -> &'static str {
        match self {
            Self::MissingArgument { flag, .. } | Self::InvalidValue { flag, .. } => flag,
            Self::UnsupportedStorageOptions { .. } => "--storage-type",
        }
    }

    fn missing(flag: &'static str) -> Self {
        Self::MissingArgument {
            flag,
            context: None,
        }
    }

    fn missing_for(flag: &'static str, context: impl Into<String>) -> Self {
        Self::MissingArgument {
            flag,
            context: Some(context.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingArgument {
                flag,
                context: None,
            } => write!(f, "Missing required argument: {}", flag),
            ValidationError::MissingArgument {
                flag,
                context: Some(context),
            } => write!(f, "Missing required argument {}: {}", context, flag),
            ValidationError::UnsupportedStorageOptions { storage_type } => match storage_type {
                StorageType::S3 => write!(
                    f,
                    "Storage type 's3' supports the storage configurations --role-arn, \
                     --external-id, and --user-arn"
                ),
                StorageType::Azure => write!(
                    f,
                    "Storage type 'azure' supports the storage configurations --tenant-id, \
                     --multi-tenant-app-name, and --consent-url"
                ),
                StorageType::Gcs => write!(
                    f,
                    "Storage type 'gcs' supports the storage configuration: --service-account"
                ),
            },
            ValidationError::InvalidValue {
                flag,
                value,
                reason,
            } => write!(f, "Invalid {}: '{}' - {}", flag, value, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

type Rule = fn(&CatalogOptions) -> Result<(), ValidationError>;

const RULES: &[Rule] = &[
    check_create_requirements,
    check_update_requirements,
    check_storage_fields,
];

/// Validates catalog options, reporting the first rule that fails.
pub fn validate_options(options: &CatalogOptions) -> Result<(), ValidationError> {
    RULES.iter().try_for_each(|rule| rule(options))
}

fn check_create_requirements(options: &CatalogOptions) -> Result<(), ValidationError> {
    if options.subcommand != Subcommand::Create {
        return Ok(());
    }
    if options.storage_type.is_none() {
        return Err(ValidationError::missing("--storage-type"));
    }
    if options.default_base_location.is_none() {
        return Err(ValidationError::missing("--default-base-location"));
    }
    if options.catalog_type == CatalogType::External && options.remote_url.is_none() {
        return Err(ValidationError::missing_for(
            "--remote-url",
            format!("for {} catalog", CatalogType::External),
        ));
    }
    Ok(())
}

fn check_update_requirements(options: &CatalogOptions) -> Result<(), ValidationError> {
    if options.subcommand == Subcommand::Update
        && !options.allowed_locations.is_empty()
        && options.storage_type.is_none()
    {
        return Err(ValidationError::missing_for(
            "--storage-type",
            "when updating allowed locations for a catalog",
        ));
    }
    Ok(())
}

// An unset storage type falls through to the GCS check.
fn check_storage_fields(options: &CatalogOptions) -> Result<(), ValidationError> {
    match options.storage_type {
        Some(StorageType::S3) => {
            if options.role_arn.is_none() {
                return Err(ValidationError::missing_for(
                    "--role-arn",
                    "for storage type 's3'",
                ));
            }
            if options.has_azure_storage_info() || options.has_gcs_storage_info() {
                return Err(ValidationError::UnsupportedStorageOptions {
                    storage_type: StorageType::S3,
                });
            }
        }
        Some(StorageType::Azure) => {
            if options.tenant_id.is_none() {
                return Err(ValidationError::missing_for(
                    "--tenant-id",
                    "for storage type 'azure'",
                ));
            }
            if options.has_aws_storage_info() || options.has_gcs_storage_info() {
                return Err(ValidationError::UnsupportedStorageOptions {
                    storage_type: StorageType::Azure,
                });
            }
        }
        Some(StorageType::Gcs) | None => {
            if options.has_aws_storage_info() || options.has_azure_storage_info() {
                return Err(ValidationError::UnsupportedStorageOptions {
                    storage_type: StorageType::Gcs,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_s3() -> CatalogOptions {
        let mut options = CatalogOptions::new(Subcommand::Create, "c1");
        options.storage_type = Some(StorageType::S3);
        options.default_base_location = Some("s3://b/p".to_string());
        options.role_arn = Some("arn:aws:iam::1:role/r".to_string());
        options
    }

    #[test]
    fn create_s3_passes() {
        assert_eq!(validate_options(&create_s3()), Ok(()));
    }

    #[test]
    fn create_requires_storage_type_first() {
        let options = CatalogOptions::new(Subcommand::Create, "c1");
        let err = validate_options(&options).unwrap_err();
        assert_eq!(err.flag(), "--storage-type");
        assert_eq!(err.to_string(), "Missing required argument: --storage-type");
    }

    #[test]
    fn create_requires_default_base_location() {
        let mut options = create_s3();
        options.default_base_location = None;
        let err = validate_options(&options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required argument: --default-base-location"
        );
    }

    #[test]
    fn external_create_requires_remote_url() {
        let mut options = create_s3();
        options.catalog_type = CatalogType::External;
        let err = validate_options(&options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required argument for external catalog: --remote-url"
        );

        options.remote_url = Some("https://x".to_string());
        assert!(validate_options(&options).is_ok());
    }

    #[test]
    fn update_allowed_locations_require_storage_type() {
        let mut options = CatalogOptions::new(Subcommand::Update, "c1");
        options.allowed_locations = vec!["s3://b/other".to_string()];
        let err = validate_options(&options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required argument when updating allowed locations for a catalog: --storage-type"
        );
    }

    #[test]
    fn update_with_only_base_location_passes() {
        let mut options = CatalogOptions::new(Subcommand::Update, "c1");
        options.default_base_location = Some("s3://b/new".to_string());
        assert!(validate_options(&options).is_ok());
    }

    #[test]
    fn s3_requires_role_arn() {
        let mut options = CatalogOptions::new(Subcommand::Update, "c1");
        options.storage_type = Some(StorageType::S3);
        let err = validate_options(&options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required argument for storage type 's3': --role-arn"
        );
    }

    #[test]
    fn s3_rejects_azure_and_gcs_fields() {
        let mut options = create_s3();
        options.consent_url = Some("https://consent".to_string());
        assert_eq!(
            validate_options(&options),
            Err(ValidationError::UnsupportedStorageOptions {
                storage_type: StorageType::S3
            })
        );

        let mut options = create_s3();
        options.service_account = Some("sa@example".to_string());
        assert!(validate_options(&options).is_err());
    }

    #[test]
    fn azure_requires_tenant_and_rejects_aws_fields() {
        let mut options = CatalogOptions::new(Subcommand::Create, "c1");
        options.storage_type = Some(StorageType::Azure);
        options.default_base_location = Some("abfss://c@a.dfs.core.windows.net/p".to_string());
        let err = validate_options(&options).unwrap_err();
        assert_eq!(err.flag(), "--tenant-id");

        options.tenant_id = Some("tenant".to_string());
        assert!(validate_options(&options).is_ok());

        options.user_arn = Some("arn:aws:iam::1:user/u".to_string());
        let err = validate_options(&options).unwrap_err();
        assert!(err.to_string().starts_with("Storage type 'azure'"));
    }

    #[test]
    fn gcs_rejects_aws_and_azure_fields() {
        let mut options = CatalogOptions::new(Subcommand::Create, "c1");
        options.storage_type = Some(StorageType::Gcs);
        options.default_base_location = Some("gs://b/p".to_string());
        options.service_account = Some("sa@example".to_string());
        assert!(validate_options(&options).is_ok());

        options.tenant_id = Some("tenant".to_string());
        assert_eq!(
            validate_options(&options).unwrap_err().to_string(),
            "Storage type 'gcs' supports the storage configuration: --service-account"
        );
    }

    #[test]
    fn unset_storage_type_uses_gcs_check() {
        let mut options = CatalogOptions::new(Subcommand::Update, "c1");
        options.role_arn = Some("arn:aws:iam::1:role/r".to_string());
        assert_eq!(
            validate_options(&options),
            Err(ValidationError::UnsupportedStorageOptions {
                storage_type: StorageType::Gcs
            })
        );
    }

    #[test]
    fn read_only_subcommands_pass_without_options() {
        for subcommand in [Subcommand::Get, Subcommand::List, Subcommand::Delete] {
            let options = CatalogOptions::new(subcommand, "c1");
            assert!(validate_options(&options).is_ok());
        }
    }
}
