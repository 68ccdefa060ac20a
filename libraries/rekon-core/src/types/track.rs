/// Track and collection domain types
use crate::error::{RekonError, Result};
use crate::location::location_file_name;
use crate::root_name::root_name;
use crate::types::xml::{find_attribute, set_attribute, update_attribute};
use crate::types::{Attribute, Rating, TrackId, XmlElement, XmlNode};
use std::collections::{HashMap, HashSet};

pub(crate) const TRACK_ELEMENT: &str = "TRACK";
pub(crate) const COLLECTION_ELEMENT: &str = "COLLECTION";

const TRACK_ID_ATTR: &str = "TrackID";
const LOCATION_ATTR: &str = "Location";
const RATING_ATTR: &str = "Rating";
const ENTRIES_ATTR: &str = "Entries";

/// One `TRACK` entry of the collection
///
/// `id`, `location` and `rating` are the typed fields reconciliation reads
/// and writes. Every other attribute keeps its original position and value,
/// and child elements (tempo grids, cue points) are carried unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// `file://` URI of the audio file
    pub location: String,

    /// Rating, compared as a string by default
    pub rating: Rating,

    /// All attributes in document order; typed ones are refreshed on write
    attributes: Vec<Attribute>,

    /// Child nodes, passed through
    pub children: Vec<XmlNode>,
}

impl Track {
    /// Create a track with only the typed attributes
    pub fn new(id: impl Into<String>, location: impl Into<String>, rating: impl Into<String>) -> Self {
        let id = TrackId::new(id);
        let location = location.into();
        let rating = Rating::new(rating);
        let attributes = vec![
            Attribute::new(TRACK_ID_ATTR, id.as_str()),
            Attribute::new(RATING_ATTR, rating.as_str()),
            Attribute::new(LOCATION_ATTR, location.as_str()),
        ];

        Self {
            id,
            location,
            rating,
            attributes,
            children: Vec::new(),
        }
    }

    /// Add or replace a pass-through attribute
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match name {
            TRACK_ID_ATTR => self.id = TrackId::new(value.clone()),
            LOCATION_ATTR => self.location.clone_from(&value),
            RATING_ATTR => self.rating = Rating::new(value.clone()),
            _ => {}
        }
        set_attribute(&mut self.attributes, name, value);
        self
    }

    /// Read a `TRACK` element
    ///
    /// `TrackID` and `Location` are required; a missing `Rating` reads as
    /// the empty string and is not added on write.
    pub fn from_element(element: XmlElement) -> Result<Self> {
        let required = |name: &str| {
            find_attribute(&element.attributes, name)
                .map(str::to_string)
                .ok_or_else(|| RekonError::missing_attribute(TRACK_ELEMENT, name))
        };
        let id = TrackId::new(required(TRACK_ID_ATTR)?);
        let location = required(LOCATION_ATTR)?;
        let rating = Rating::new(find_attribute(&element.attributes, RATING_ATTR).unwrap_or_default());

        Ok(Self {
            id,
            location,
            rating,
            attributes: element.attributes,
            children: element.children,
        })
    }

    /// Write back as a `TRACK` element with the typed values applied
    pub fn to_element(&self) -> XmlElement {
        XmlElement {
            name: TRACK_ELEMENT.to_string(),
            attributes: self
                .attributes
                .iter()
                .map(|attr| Attribute::new(attr.name.as_str(), self.value_of(attr)))
                .collect(),
            children: self.children.clone(),
        }
    }

    /// Current value of any attribute, typed fields included
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| self.value_of(attr))
    }

    /// Percent-decoded file name of `location`
    pub fn file_name(&self) -> Result<String> {
        location_file_name(&self.location)
    }

    /// Root Name of this track's file
    pub fn root_name(&self) -> Result<String> {
        self.file_name().map(|name| root_name(&name))
    }

    fn value_of<'a>(&'a self, attr: &'a Attribute) -> &'a str {
        match attr.name.as_str() {
            TRACK_ID_ATTR => self.id.as_str(),
            LOCATION_ATTR => &self.location,
            RATING_ATTR => self.rating.as_str(),
            _ => &attr.value,
        }
    }
}

/// The `COLLECTION` element: ordered tracks plus its own attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// Collection attributes (`Entries`)
    pub attributes: Vec<Attribute>,

    /// Tracks in document order
    pub tracks: Vec<Track>,

    /// Document order of the children as read, used to put non-`TRACK`
    /// nodes back where they were
    layout: Vec<CollectionSlot>,
}

/// A child of `COLLECTION` as it appeared in the document
#[derive(Debug, Clone, PartialEq, Eq)]
enum CollectionSlot {
    Track(TrackId),
    Other(XmlNode),
}

impl Collection {
    /// Create a collection holding `tracks`, with an `Entries` count
    pub fn new(tracks: Vec<Track>) -> Self {
        let mut collection = Self {
            attributes: vec![Attribute::new(ENTRIES_ATTR, "0")],
            tracks,
            layout: Vec::new(),
        };
        collection.sync_entries();
        collection
    }

    /// Read a `COLLECTION` element
    pub fn from_element(element: XmlElement) -> Result<Self> {
        let mut tracks = Vec::new();
        let mut layout = Vec::with_capacity(element.children.len());

        for child in element.children {
            match child {
                XmlNode::Element(el) if el.name == TRACK_ELEMENT => {
                    let track = Track::from_element(el)?;
                    layout.push(CollectionSlot::Track(track.id.clone()));
                    tracks.push(track);
                }
                other => layout.push(CollectionSlot::Other(other)),
            }
        }

        let collection = Self {
            attributes: element.attributes,
            tracks,
            layout,
        };
        collection.validate_unique_ids()?;
        Ok(collection)
    }

    /// Write back as a `COLLECTION` element
    ///
    /// Tracks are written in `tracks` order. Every other node follows the
    /// nearest track before it that is still in the collection, or leads the
    /// list when there is none.
    pub fn to_element(&self) -> XmlElement {
        let present = self.track_ids();
        let mut leading = Vec::new();
        let mut following: HashMap<&str, Vec<&XmlNode>> = HashMap::new();
        let mut anchor = None;

        for slot in &self.layout {
            match slot {
                CollectionSlot::Track(id) if present.contains(id.as_str()) => {
                    anchor = Some(id.as_str());
                }
                CollectionSlot::Track(_) => {}
                CollectionSlot::Other(node) => match anchor {
                    Some(id) => following.entry(id).or_default().push(node),
                    None => leading.push(node),
                },
            }
        }

        let mut children: Vec<XmlNode> = leading.into_iter().cloned().collect();
        for track in &self.tracks {
            children.push(XmlNode::Element(track.to_element()));
            if let Some(nodes) = following.get(track.id.as_str()) {
                children.extend(nodes.iter().map(|node| (*node).clone()));
            }
        }

        XmlElement {
            name: COLLECTION_ELEMENT.to_string(),
            attributes: self.attributes.clone(),
            children,
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Value of a collection attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        find_attribute(&self.attributes, name)
    }

    /// Bring `Entries` in line with the track count, if the attribute exists
    pub fn sync_entries(&mut self) {
        update_attribute(&mut self.attributes, ENTRIES_ATTR, self.tracks.len().to_string());
    }

    /// Reject collections where two tracks share an id
    pub fn validate_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.tracks.len());
        for track in &self.tracks {
            if !seen.insert(&track.id) {
                return Err(RekonError::DuplicateTrackId(track.id.clone()));
            }
        }
        Ok(())
    }

    /// Ids of every track
    pub fn track_ids(&self) -> HashSet<&str> {
        self.tracks.iter().map(|track| track.id.as_str()).collect()
    }
}
