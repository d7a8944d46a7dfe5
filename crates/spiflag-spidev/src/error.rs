//! Error types for spidev discovery

use thiserror::Error;

/// Errors raised while scanning for spidev nodes
#[derive(Debug, Error)]
pub enum ScanError {
    /// Failed to read the device directory
    #[error("Failed to read {dir}: {source}")]
    ReadDir {
        dir: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for spidev discovery
pub type Result<T> = std::result::Result<T, ScanError>;
