//! Error types for the scanner

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Music directory path is empty")]
    EmptyRoot,

    #[error("Failed to scan {root}: {source}")]
    Walk {
        root: String,
        #[source]
        source: walkdir::Error,
    },
}
