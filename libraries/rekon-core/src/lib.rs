//! Rekon Core
//!
//! Typed library model, Root Name derivation and error handling shared by
//! every Rekon crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `LibraryDocument`, `Collection`, `Track`, `Playlists`
//! - **Root Names**: grouping key for alternate takes of one audio file
//! - **Locations**: `file://localhost/` URI parsing and construction
//! - **Error Handling**: Unified `RekonError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use rekon_core::{root_name, Track};
//!
//! let track = Track::new("1", "file://localhost/Music/intro-2.mp3", "255");
//! assert_eq!(track.root_name().unwrap(), "intro.mp3");
//! assert_eq!(root_name("intro-12.mp3"), "intro.mp3");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod location;
pub mod root_name;
pub mod types;

// Re-export commonly used types
pub use error::{RekonError, Result};
pub use location::{location_file_name, location_for_path, LOCATION_PREFIX};
pub use root_name::root_name;

pub use types::{
    Attribute, Collection, LibraryDocument, PlaylistEntry, PlaylistNode, PlaylistTrack, Playlists,
    Rating, RatingOrder, Section, Track, TrackId, XmlElement, XmlNode,
};
