//! # Catalogs Command Handler
//!
//! This module handles the `catalogs` command group: creation, update,
//! retrieval, listing and deletion of catalogs on the management service.

use tracing::debug;

use crate::catalog::{
    Catalog, CatalogType, CreateCatalogRequest, NewCatalog, UpdateCatalogRequest,
    merge_properties,
};
use crate::commands::errors::format_cli_error;
use crate::commands::shared::validate_args_count_or_exit;
use crate::errors::CatalogError;
use crate::management::CatalogManagementClient;
use crate::options::{CatalogFlags, CatalogOptions, Subcommand};
use crate::storage::build_storage_config;
use crate::validate::{ValidationError, validate_options};
use crate::{cli_utils, http_utils};

const CATALOGS_USAGE: &str =
    "Usage: polarisctl catalogs <create|update|get|list|delete> [catalog-name] [options]";

/// Lines produced by a catalogs command, one serialized catalog per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Rendered output lines in display order.
    pub lines: Vec<String>,
}

impl CommandOutput {
    fn from_catalogs<'a>(
        catalogs: impl IntoIterator<Item = &'a Catalog>,
    ) -> Result<Self, CatalogError> {
        let lines = catalogs
            .into_iter()
            .map(Catalog::to_json)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { lines })
    }

    /// Whether the command produced no output.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A single `catalogs` invocation: validated options plus the dispatch to the API.
#[derive(Debug, Clone)]
pub struct CatalogsCommand {
    options: CatalogOptions,
}

impl CatalogsCommand {
    /// Wraps resolved options into a command.
    pub fn new(options: CatalogOptions) -> Self {
        Self { options }
    }

    /// Returns the options this command runs with.
    pub fn options(&self) -> &CatalogOptions {
        &self.options
    }

    /// Checks the options before anything is sent to the service.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_options(&self.options)
    }

    /// Runs the subcommand against `api`.
    ///
    /// `update` reads the catalog first to obtain its entity version, then
    /// writes the new properties. Remote errors are returned unchanged.
    pub async fn execute<C>(&self, api: &C) -> Result<CommandOutput, CatalogError>
    where
        C: CatalogManagementClient,
    {
        let options = &self.options;
        debug!(
            subcommand = %options.subcommand,
            catalog = %options.catalog_name,
            "executing catalogs command"
        );

        match options.subcommand {
            Subcommand::Create => {
                let request = self.create_request()?;
                api.create_catalog(&request).await?;
                Ok(CommandOutput::default())
            }
            Subcommand::Delete => {
                api.delete_catalog(&options.catalog_name).await?;
                Ok(CommandOutput::default())
            }
            Subcommand::Get => {
                let catalog = api.get_catalog(&options.catalog_name).await?;
                CommandOutput::from_catalogs([&catalog])
            }
            Subcommand::List => {
                let response = api.list_catalogs().await?;
                CommandOutput::from_catalogs(&response.catalogs)
            }
            Subcommand::Update => {
                let mut catalog = api.get_catalog(&options.catalog_name).await?;
                catalog.properties = merge_properties(
                    options.default_base_location.as_deref(),
                    &options.properties,
                );

                let mut request = UpdateCatalogRequest::for_catalog(&catalog);
                if options.has_storage_options() {
                    request = request.with_storage_config(build_storage_config(options));
                }
                api.update_catalog(&options.catalog_name, &request).await?;
                Ok(CommandOutput::default())
            }
        }
    }

    /// Builds the request body for `create`.
    pub fn create_request(&self) -> Result<CreateCatalogRequest, CatalogError> {
        let options = &self.options;
        let name = options.catalog_name.clone();
        let properties = merge_properties(
            options.default_base_location.as_deref(),
            &options.properties,
        );
        let storage_config_info = build_storage_config(options);

        let catalog = match options.catalog_type {
            CatalogType::External => {
                let remote_url = options.remote_url.clone().ok_or_else(|| {
                    ValidationError::MissingArgument {
                        flag: "--remote-url",
                        context: Some(format!("for {} catalog", CatalogType::External)),
                    }
                })?;
                NewCatalog::External {
                    name,
                    remote_url,
                    properties,
                    storage_config_info,
                }
            }
            CatalogType::Internal => NewCatalog::Internal {
                name,
                properties,
                storage_config_info,
            },
        };
        Ok(CreateCatalogRequest { catalog })
    }
}

/// Handles all catalogs commands.
///
/// # Arguments
/// * `args` - Command arguments (first element is the subcommand)
/// * `flags` - Catalog flags given on the command line
/// * `client` - HTTP client for API communication
pub async fn handle_catalogs_command(
    args: &[String],
    flags: &CatalogFlags,
    client: &http_utils::PolarisClient,
) {
    if args.is_empty() {
        cli_utils::exit_with_usage_error(
            "catalogs command requires a subcommand",
            CATALOGS_USAGE,
        );
    }

    let subcommand: Subcommand = args[0]
        .parse()
        .unwrap_or_else(|e: CatalogError| cli_utils::exit_with_message(&format_cli_error(&e)));

    let catalog_name = if subcommand.takes_catalog_name() {
        validate_args_count_or_exit(
            args,
            2,
            2,
            subcommand.as_str(),
            &format!("Usage: polarisctl catalogs {} <catalog-name> [options]", subcommand),
        );
        args[1].clone()
    } else {
        validate_args_count_or_exit(
            args,
            1,
            1,
            subcommand.as_str(),
            "Usage: polarisctl catalogs list",
        );
        String::new()
    };

    let options = CatalogOptions::from_flags(subcommand, catalog_name, flags)
        .unwrap_or_else(|e| cli_utils::exit_with_message(&format_cli_error(&e)));
    let command = CatalogsCommand::new(options);
    if let Err(e) = command.validate() {
        cli_utils::exit_with_message(&format_cli_error(&e));
    }

    let output = http_utils::execute_or_exit(|| command.execute(client)).await;
    cli_utils::print_lines(&output.lines);
}
