//! Rekon XML
//!
//! Reads and writes DJ library documents (`DJ_PLAYLISTS` → `COLLECTION` →
//! `TRACK`) as typed `LibraryDocument`s.
//!
//! This crate provides:
//! - `parse_library`: XML text to a typed document
//! - `write_library`: typed document back to indented XML text
//!
//! Everything the reconciler does not touch (product info, track children,
//! unknown attributes, playlists) is carried through a parse/write cycle.
//!
//! # Example
//!
//! ```rust
//! let xml = r#"<DJ_PLAYLISTS Version="1.0.0">
//!   <COLLECTION Entries="1">
//!     <TRACK TrackID="1" Rating="255" Location="file://localhost/Music/a.mp3"/>
//!   </COLLECTION>
//! </DJ_PLAYLISTS>"#;
//!
//! let document = rekon_xml::parse_library(xml).unwrap();
//! assert_eq!(document.collection.len(), 1);
//!
//! let written = rekon_xml::write_library(&document).unwrap();
//! assert!(written.contains(r#"TrackID="1""#));
//! ```

mod reader;
mod writer;

pub use reader::parse_element_tree;
pub use writer::write_element_tree;

use rekon_core::{LibraryDocument, Result};

/// Parse a library document from XML text
pub fn parse_library(xml: &str) -> Result<LibraryDocument> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let root = parse_element_tree(xml)?;
    let document = LibraryDocument::from_element(root)?;

    tracing::debug!(
        tracks = document.collection.len(),
        playlists = document.playlists.is_some(),
        "Parsed library document"
    );

    Ok(document)
}

/// Serialize a library document to XML text
pub fn write_library(document: &LibraryDocument) -> Result<String> {
    write_element_tree(&document.to_element())
}
