//! Loading and parsing of settings documents.

use crate::config::ProviderConfig;
use crate::error::{InjectError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a settings document from a JSON file.
///
/// # Errors
///
/// Returns `ReadError` when the file cannot be read and `ParseError` when its
/// contents are not well-formed JSON.
///
/// # Examples
///
/// ```rust,no_run
/// use azinject::config;
///
/// # fn main() -> azinject::error::Result<()> {
/// let settings = config::load_path("azure.json")?;
/// println!("tenant: {}", settings.azure.tenant_id);
/// # Ok(())
/// # }
/// ```
pub fn load_path(path: impl AsRef<Path>) -> Result<ProviderConfig> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .map_err(|e| InjectError::ReadError(format!("{}: {}", path.display(), e)))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read settings file");
    load_slice(&bytes)
}

/// Parse a settings document from raw bytes.
///
/// # Errors
///
/// Returns `ParseError` when the bytes are not well-formed JSON.
pub fn load_slice(bytes: &[u8]) -> Result<ProviderConfig> {
    serde_json::from_slice(bytes).map_err(|e| InjectError::ParseError(e.to_string()))
}

/// Parse a settings document from a string.
///
/// # Errors
///
/// Returns `ParseError` when the string is not well-formed JSON.
pub fn load_str(text: &str) -> Result<ProviderConfig> {
    load_slice(text.as_bytes())
}
