mod ids;
mod library;
mod playlist;
mod track;
mod xml;

pub use ids::{Rating, RatingOrder, TrackId};
pub use library::{LibraryDocument, Section};
pub use playlist::{PlaylistEntry, PlaylistNode, PlaylistTrack, Playlists};
pub use track::{Collection, Track};
pub use xml::{Attribute, XmlElement, XmlNode};
