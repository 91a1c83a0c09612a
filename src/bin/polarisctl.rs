use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use polaris_catalogs::{
    CatalogFlags, ClientConfig, PolarisClient,
    cli_utils::{self, exit_with_message},
    commands::{errors::format_cli_error, handle_catalogs_command},
};

#[derive(CommandLine, Default, PartialEq, Eq)]
struct Options {
    #[arrrg(optional, "Host of the Polaris management service")]
    host: Option<String>,
    #[arrrg(optional, "Port of the Polaris management service")]
    port: Option<u16>,
    #[arrrg(optional, "Bearer token used to authenticate requests")]
    access_token: Option<String>,
    #[arrrg(flag, "Enable verbose logging")]
    verbose: bool,
    #[arrrg(optional, "Catalog type: internal or external (default: internal)")]
    catalog_type: String,
    #[arrrg(optional, "URL of the remote catalog for external catalogs")]
    remote_url: String,
    #[arrrg(optional, "Default base location for tables in the catalog")]
    default_base_location: String,
    #[arrrg(optional, "Storage type: s3, azure or gcs")]
    storage_type: String,
    #[arrrg(optional, "Comma-separated list of allowed storage locations")]
    allowed_locations: String,
    #[arrrg(optional, "S3: IAM role ARN")]
    role_arn: String,
    #[arrrg(optional, "S3: external id used when assuming the role")]
    external_id: String,
    #[arrrg(optional, "S3: IAM user ARN")]
    user_arn: String,
    #[arrrg(optional, "Azure: tenant id")]
    tenant_id: String,
    #[arrrg(optional, "Azure: multi-tenant application name")]
    multi_tenant_app_name: String,
    #[arrrg(optional, "Azure: consent URL")]
    consent_url: String,
    #[arrrg(optional, "GCS: service account")]
    service_account: String,
    #[arrrg(optional, "Comma-separated key=value catalog properties")]
    properties: String,
}

impl Options {
    fn catalog_flags(&self) -> CatalogFlags {
        CatalogFlags {
            catalog_type: self.catalog_type.clone(),
            remote_url: self.remote_url.clone(),
            default_base_location: self.default_base_location.clone(),
            storage_type: self.storage_type.clone(),
            allowed_locations: self.allowed_locations.clone(),
            role_arn: self.role_arn.clone(),
            external_id: self.external_id.clone(),
            user_arn: self.user_arn.clone(),
            tenant_id: self.tenant_id.clone(),
            multi_tenant_app_name: self.multi_tenant_app_name.clone(),
            consent_url: self.consent_url.clone(),
            service_account: self.service_account.clone(),
            properties: self.properties.clone(),
        }
    }
}

const USAGE: &str = r#"Usage: polarisctl [options] catalogs <subcommand> [catalog-name]

Connection:
  --host <host>                    Management service host (default: localhost)
  --port <port>                    Management service port (default: 8181)
  --access-token <token>           Bearer token used to authenticate requests
  --verbose                        Log requests to stderr

Commands:
  catalogs create <name>           Create a catalog
      --storage-type <s3|azure|gcs> --default-base-location <uri> [--catalog-type internal|external]
      [--remote-url <url>] [--allowed-locations <uri,...>] [--properties <k=v,...>]
      S3:    --role-arn <arn> [--external-id <id>] [--user-arn <arn>]
      Azure: --tenant-id <id> [--multi-tenant-app-name <name>] [--consent-url <url>]
      GCS:   [--service-account <account>]
  catalogs update <name>           Update a catalog's properties and storage
      [--default-base-location <uri>] [--properties <k=v,...>]
      [--storage-type <type> --allowed-locations <uri,...>] [storage flags as above]
  catalogs get <name>              Print a catalog as JSON
  catalogs list                    Print every catalog as JSON, one per line
  catalogs delete <name>           Delete a catalog"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (options, free) =
        Options::from_command_line_relaxed("USAGE: polarisctl [options] catalogs <subcommand>");

    if free.is_empty() {
        cli_utils::exit_with_usage_error("No command specified", USAGE);
    }

    cli_utils::init_logging(options.verbose);

    let config = ClientConfig::from_options(
        options.host.clone(),
        options.port,
        options.access_token.clone(),
    )
    .unwrap_or_else(|e| exit_with_message(&format_cli_error(&e)));
    let client =
        PolarisClient::new(config).unwrap_or_else(|e| exit_with_message(&format_cli_error(&e)));

    match free[0].as_str() {
        "catalogs" => {
            handle_catalogs_command(&free[1..], &options.catalog_flags(), &client).await;
        }
        _ => {
            cli_utils::exit_with_usage_error(
                &format!("Unknown command '{}'. Available commands: catalogs", free[0]),
                USAGE,
            );
        }
    }

    Ok(())
}
