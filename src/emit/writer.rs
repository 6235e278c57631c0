//! Appending rendered provider blocks to Terraform files.

use crate::config::AzureSettings;
use crate::emit::provider::render;
use crate::error::{InjectError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Render the provider block for `label` and append it to the file at `path`.
///
/// The target file must already exist; it is opened in append mode and never
/// created. Returns the number of bytes written. Running twice against the
/// same file appends a second, independent block.
///
/// # Errors
///
/// Returns `OpenError` when the target cannot be opened for append and
/// `WriteError` when the append itself fails. A failed write leaves whatever
/// bytes made it to the file in place; there is no rollback.
///
/// # Examples
///
/// ```rust,no_run
/// use azinject::config::AzureSettings;
/// use azinject::emit::append_to_file;
///
/// # fn main() -> azinject::error::Result<()> {
/// let settings = AzureSettings::default();
/// let bytes = append_to_file("main.tf", "azurerm", &settings)?;
/// println!("appended {bytes} bytes");
/// # Ok(())
/// # }
/// ```
pub fn append_to_file(
    path: impl AsRef<Path>,
    label: &str,
    settings: &AzureSettings,
) -> Result<usize> {
    let path = path.as_ref();
    let rendered = render(label, settings)?;

    let mut target = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| InjectError::OpenError(format!("{}: {}", path.display(), e)))?;

    target
        .write_all(rendered.as_bytes())
        .map_err(|e| InjectError::WriteError(format!("{}: {}", path.display(), e)))?;

    info!(path = %path.display(), bytes = rendered.len(), "appended provider block");
    Ok(rendered.len())
}
