//! # Command Handlers
//!
//! This module contains the command handlers for the polarisctl CLI application.
//!
//! ## Structure
//!
//! - `catalogs` - Catalog management commands (create, update, get, list, delete)
//! - `errors` - User-facing error messages and hints
//! - `shared` - Shared argument validation

pub mod catalogs;
pub mod errors;
pub mod shared;

pub use catalogs::{CatalogsCommand, CommandOutput, handle_catalogs_command};
