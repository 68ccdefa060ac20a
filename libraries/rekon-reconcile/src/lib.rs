//! Rekon - Library Reconciliation
//!
//! Brings a parsed DJ library in line with the audio files on disk.
//!
//! This crate provides:
//! - Grouping of tracks by Root Name (file name without a trailing `-<digits>`)
//! - Duplicate resolution: the highest rated take of each Root Name survives
//! - Removal of tracks with no matching file on disk
//! - `Location` rewriting to the indexed file
//! - Optional playlist remapping onto the surviving takes
//!
//! # Example
//!
//! ```rust
//! use rekon_core::{Collection, LibraryDocument, Track};
//! use rekon_reconcile::Reconciler;
//! use rekon_scanner::SourceIndex;
//!
//! let mut library = LibraryDocument::new(Collection::new(vec![
//!     Track::new("1", "file://localhost/old/intro.mp3", "51"),
//!     Track::new("2", "file://localhost/old/intro-1.mp3", "255"),
//! ]));
//! let index = SourceIndex::from_paths(["/music/intro.mp3"]);
//!
//! let report = Reconciler::new().reconcile(&mut library, &index).unwrap();
//!
//! assert_eq!(report.kept, 1);
//! assert_eq!(library.collection.tracks[0].id.as_str(), "2");
//! assert_eq!(
//!     library.collection.tracks[0].location,
//!     "file://localhost/music/intro.mp3"
//! );
//! ```

pub mod dedup;
pub mod group;
pub mod playlists;
pub mod reconciler;
pub mod report;

pub use dedup::{resolve_duplicates, DuplicateMap};
pub use group::RootNameGroups;
pub use playlists::remap_playlists;
pub use reconciler::Reconciler;
pub use report::{PlaylistRemapStats, ReconcileReport};

use rekon_core::{LibraryDocument, Result};
use rekon_scanner::SourceIndex;

/// Reconcile with default options
pub fn reconcile(document: &mut LibraryDocument, index: &SourceIndex) -> Result<ReconcileReport> {
    Reconciler::new().reconcile(document, index)
}
