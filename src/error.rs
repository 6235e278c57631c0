//! Error types for azinject.

/// Result type alias for injection operations.
pub type Result<T> = std::result::Result<T, InjectError>;

/// Errors that can occur while loading settings or appending provider blocks.
///
/// Every variant is fatal to the operation that produced it: nothing is
/// retried and nothing is downgraded to partial success. Callers decide
/// whether the process continues.
#[derive(Debug, thiserror::Error)]
pub enum InjectError {
    /// Failed to read the settings document.
    #[error("Failed to read settings: {0}")]
    ReadError(String),

    /// The settings document is not well-formed JSON.
    #[error("Failed to parse settings: {0}")]
    ParseError(String),

    /// The target file is missing or cannot be opened for append.
    #[error("Failed to open target file: {0}")]
    OpenError(String),

    /// Appending the rendered block to the target file failed.
    #[error("Failed to write provider block: {0}")]
    WriteError(String),

    /// The provider block could not be serialized to HCL.
    #[error("Failed to serialize provider block: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = InjectError::OpenError("main.tf: No such file or directory".to_string());
        assert!(err.to_string().contains("main.tf"));
        assert!(err.to_string().starts_with("Failed to open target file"));
    }
}
