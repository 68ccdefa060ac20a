//! Rekon Source Scanner
//!
//! Builds the Source Index: every file under the configured music
//! directories, keyed by Root Name.
//!
//! # Architecture
//!
//! - `scanner`: Recursive directory expansion into `/`-separated file paths
//! - `index`: Root Name → disk path mapping (last path seen wins)

mod error;

pub mod index;
pub mod scanner;

pub use error::ScanError;
pub use index::SourceIndex;
pub use scanner::FileScanner;

/// Re-export commonly used types
pub type Result<T> = std::result::Result<T, ScanError>;

/// Scan `roots` with default scanner settings and index the files found
pub fn build_source_index<S: AsRef<str>>(roots: &[S]) -> Result<SourceIndex> {
    FileScanner::new().build_index(roots)
}
