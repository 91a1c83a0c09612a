//! Builds the storage configuration sent with create and update requests.

use crate::catalog::{AwsStorageConfig, AzureStorageConfig, GcpStorageConfig, StorageConfigInfo};
use crate::options::{CatalogOptions, StorageType};

/// Maps the selected storage type and its fields to a storage configuration.
///
/// Returns `None` when no storage type was selected.
pub fn build_storage_config(options: &CatalogOptions) -> Option<StorageConfigInfo> {
    let allowed_locations = options.allowed_locations.clone();
    let config = match options.storage_type? {
        StorageType::S3 => StorageConfigInfo::Aws(AwsStorageConfig {
            allowed_locations,
            role_arn: options.role_arn.clone(),
            external_id: options.external_id.clone(),
            user_arn: options.user_arn.clone(),
        }),
        StorageType::Azure => StorageConfigInfo::Azure(AzureStorageConfig {
            allowed_locations,
            tenant_id: options.tenant_id.clone(),
            multi_tenant_app_name: options.multi_tenant_app_name.clone(),
            consent_url: options.consent_url.clone(),
        }),
        // GCS carries the Azure tenant fields; --service-account is not forwarded.
        StorageType::Gcs => StorageConfigInfo::Gcp(GcpStorageConfig {
            allowed_locations,
            tenant_id: options.tenant_id.clone(),
            multi_tenant_app_name: options.multi_tenant_app_name.clone(),
            gcs_service_account: None,
        }),
    };
    Some(config)
}
