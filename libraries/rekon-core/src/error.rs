/// Core error types for Rekon
use crate::types::TrackId;
use thiserror::Error;

/// Result type alias using `RekonError`
pub type Result<T> = std::result::Result<T, RekonError>;

/// Core error type for Rekon
#[derive(Error, Debug)]
pub enum RekonError {
    /// A track `Location` that cannot be read as a file URI
    #[error("Invalid track location {location:?}: {reason}")]
    InvalidLocation { location: String, reason: String },

    /// Document is not well-formed XML
    #[error("XML error: {0}")]
    Xml(String),

    /// Required element absent from the document
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// Required attribute absent from an element
    #[error("<{element}> is missing required attribute {attribute}")]
    MissingAttribute { element: String, attribute: String },

    /// Document root is not `DJ_PLAYLISTS`
    #[error("Unexpected root element <{0}>, expected <DJ_PLAYLISTS>")]
    UnexpectedRoot(String),

    /// Two tracks share one `TrackID`
    #[error("Duplicate TrackID: {0}")]
    DuplicateTrackId(TrackId),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RekonError {
    /// Create an invalid location error
    pub fn invalid_location(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLocation {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Create an XML error
    pub fn xml(msg: impl Into<String>) -> Self {
        Self::Xml(msg.into())
    }

    /// Create a missing attribute error
    pub fn missing_attribute(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Whether this error was caused by malformed input rather than I/O
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
