//! # azinject
//!
//! Generate Azure provider blocks from JSON settings and append them to
//! Terraform configurations.
//!
//! ## Overview
//!
//! `azinject` turns a typed settings document into one `provider` block of
//! HCL and appends it to an existing `.tf` file:
//!
//! - A JSON settings document is parsed into a [`config::ProviderConfig`]
//!   record. Absent fields keep their defaults.
//! - The emitter walks a declarative mapping table and renders exactly the
//!   fields that are present: non-empty strings become provider attributes,
//!   grouped flags become nested blocks under `features`, standalone flags
//!   become single-attribute blocks, and the auxiliary tenant list becomes a
//!   list attribute.
//! - The rendered block is appended to the target file, which must already
//!   exist. Each invocation appends one independent block; nothing is merged
//!   or deduplicated.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # fn main() -> azinject::error::Result<()> {
//! let bytes = azinject::inject("azure.json", "main.tf", "azurerm")?;
//! println!("appended {bytes} bytes");
//! # Ok(())
//! # }
//! ```
//!
//! With a settings document of
//!
//! ```json
//! {
//!     "Azure": {
//!         "ClientId": "abc",
//!         "UseMsi": true,
//!         "Features": { "KeyVault": { "PurgeOnDestroy": true } }
//!     }
//! }
//! ```
//!
//! the appended block is
//!
//! ```hcl
//! provider "azurerm" {
//!   client_id = "abc"
//!
//!   features {
//!     key_vault {
//!       recover_soft_deleted_key_vaults = true
//!       purge_soft_delete_on_destroy = false
//!     }
//!
//!     use_msi = true
//!   }
//! }
//! ```
//!
//! ## Error handling
//!
//! Every failure surfaces as a typed [`error::InjectError`]; the crate never
//! terminates the process. Failures are fatal to the operation: no retries,
//! no partial-write cleanup.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod config;
pub mod emit;
pub mod error;

use std::path::Path;

/// Load a settings document and append the rendered provider block to a
/// Terraform file.
///
/// Convenience for [`config::load_path`] followed by
/// [`emit::append_to_file`]. Returns the number of bytes appended.
///
/// # Errors
///
/// Any of the loader or emitter errors: `ReadError`, `ParseError`,
/// `OpenError`, `WriteError`, `SerializeError`.
pub fn inject(
    settings_path: impl AsRef<Path>,
    target_path: impl AsRef<Path>,
    label: &str,
) -> error::Result<usize> {
    let config = config::load_path(settings_path)?;
    emit::append_to_file(target_path, label, &config.azure)
}

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::config::{AzureSettings, Features, ProviderConfig};
    pub use crate::emit::{append_to_file, render};
    pub use crate::error::{InjectError, Result};
    pub use crate::inject;
}
