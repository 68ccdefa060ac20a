/// Playlist tree domain types
///
/// `PLAYLISTS` holds a tree of `NODE` elements. Folder nodes (`Type="0"`)
/// contain further nodes and carry a `Count`; playlist nodes (`Type="1"`)
/// contain `TRACK Key="..."` references and carry `Entries`. A playlist's
/// `KeyType` says whether keys are track ids (`0`, the default) or locations.
/// A `TRACK` without a `Key` is not a reference and is carried untouched.
use crate::types::xml::{find_attribute, update_attribute};
use crate::types::{Attribute, XmlElement, XmlNode};

pub(crate) const PLAYLISTS_ELEMENT: &str = "PLAYLISTS";
const NODE_ELEMENT: &str = "NODE";
const TRACK_ELEMENT: &str = "TRACK";
const KEY_ATTR: &str = "Key";

/// The `PLAYLISTS` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlists {
    pub attributes: Vec<Attribute>,
    pub entries: Vec<PlaylistEntry>,
}

/// A child of `PLAYLISTS` or of a `NODE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistEntry {
    Node(PlaylistNode),
    Track(PlaylistTrack),
    /// Anything else, keyless `TRACK`s included
    Other(XmlNode),
}

/// A folder or playlist `NODE`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistNode {
    pub attributes: Vec<Attribute>,
    pub entries: Vec<PlaylistEntry>,
}

/// A `TRACK` reference inside a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistTrack {
    /// Track id or location, depending on the playlist's `KeyType`
    pub key: String,

    attributes: Vec<Attribute>,
    children: Vec<XmlNode>,
}

impl Playlists {
    pub fn from_element(element: XmlElement) -> Self {
        Self {
            attributes: element.attributes,
            entries: entries_from_nodes(element.children),
        }
    }

    pub fn to_element(&self) -> XmlElement {
        XmlElement {
            name: PLAYLISTS_ELEMENT.to_string(),
            attributes: self.attributes.clone(),
            children: entries_to_nodes(&self.entries),
        }
    }

    /// Every playlist node in the tree, depth first
    pub fn playlists_mut(&mut self) -> Vec<&mut PlaylistNode> {
        let mut found = Vec::new();
        collect_playlists(&mut self.entries, &mut found);
        found
    }
}

impl PlaylistNode {
    /// Create a playlist node keyed by track id
    pub fn playlist(name: impl Into<String>, keys: &[&str]) -> Self {
        Self {
            attributes: vec![
                Attribute::new("Name", name),
                Attribute::new("Type", "1"),
                Attribute::new("KeyType", "0"),
                Attribute::new("Entries", keys.len().to_string()),
            ],
            entries: keys
                .iter()
                .map(|key| PlaylistEntry::Track(PlaylistTrack::new(*key)))
                .collect(),
        }
    }

    /// Create a folder node
    pub fn folder(name: impl Into<String>, entries: Vec<PlaylistEntry>) -> Self {
        let mut node = Self {
            attributes: vec![
                Attribute::new("Type", "0"),
                Attribute::new("Name", name),
                Attribute::new("Count", "0"),
            ],
            entries,
        };
        node.sync_counts();
        node
    }

    fn from_element(element: XmlElement) -> Self {
        Self {
            attributes: element.attributes,
            entries: entries_from_nodes(element.children),
        }
    }

    fn to_element(&self) -> XmlElement {
        XmlElement {
            name: NODE_ELEMENT.to_string(),
            attributes: self.attributes.clone(),
            children: entries_to_nodes(&self.entries),
        }
    }

    pub fn name(&self) -> Option<&str> {
        find_attribute(&self.attributes, "Name")
    }

    /// Whether this node is a folder (`Type="0"`)
    pub fn is_folder(&self) -> bool {
        find_attribute(&self.attributes, "Type") == Some("0")
    }

    /// Whether track keys are `TrackID`s rather than locations
    pub fn keyed_by_track_id(&self) -> bool {
        matches!(find_attribute(&self.attributes, "KeyType"), None | Some("0"))
    }

    /// Track references of this node, in order
    pub fn tracks(&self) -> impl Iterator<Item = &PlaylistTrack> {
        self.entries.iter().filter_map(|entry| match entry {
            PlaylistEntry::Track(track) => Some(track),
            _ => None,
        })
    }

    /// Update `Entries` (`TRACK` children) and `Count` (child nodes) where present
    pub fn sync_counts(&mut self) {
        let tracks = self
            .entries
            .iter()
            .filter(|entry| match entry {
                PlaylistEntry::Track(_) => true,
                PlaylistEntry::Other(XmlNode::Element(element)) => element.name == TRACK_ELEMENT,
                _ => false,
            })
            .count();
        let nodes = self
            .entries
            .iter()
            .filter(|entry| matches!(entry, PlaylistEntry::Node(_)))
            .count();
        update_attribute(&mut self.attributes, "Entries", tracks.to_string());
        update_attribute(&mut self.attributes, "Count", nodes.to_string());
    }
}

impl PlaylistTrack {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            attributes: vec![Attribute::new(KEY_ATTR, key.as_str())],
            key,
            children: Vec::new(),
        }
    }

    /// Read a `TRACK` reference, or hand the element back when it has no `Key`
    fn from_element(element: XmlElement) -> std::result::Result<Self, XmlElement> {
        match find_attribute(&element.attributes, KEY_ATTR) {
            Some(key) => Ok(Self {
                key: key.to_string(),
                attributes: element.attributes,
                children: element.children,
            }),
            None => Err(element),
        }
    }

    fn to_element(&self) -> XmlElement {
        let attributes = self
            .attributes
            .iter()
            .map(|attr| {
                if attr.name == KEY_ATTR {
                    Attribute::new(KEY_ATTR, self.key.as_str())
                } else {
                    attr.clone()
                }
            })
            .collect();

        XmlElement {
            name: TRACK_ELEMENT.to_string(),
            attributes,
            children: self.children.clone(),
        }
    }
}

fn entries_from_nodes(nodes: Vec<XmlNode>) -> Vec<PlaylistEntry> {
    nodes
        .into_iter()
        .map(|node| match node {
            XmlNode::Element(element) if element.name == NODE_ELEMENT => {
                PlaylistEntry::Node(PlaylistNode::from_element(element))
            }
            XmlNode::Element(element) if element.name == TRACK_ELEMENT => {
                match PlaylistTrack::from_element(element) {
                    Ok(track) => PlaylistEntry::Track(track),
                    Err(element) => PlaylistEntry::Other(XmlNode::Element(element)),
                }
            }
            other => PlaylistEntry::Other(other),
        })
        .collect()
}

fn entries_to_nodes(entries: &[PlaylistEntry]) -> Vec<XmlNode> {
    entries
        .iter()
        .map(|entry| match entry {
            PlaylistEntry::Node(node) => XmlNode::Element(node.to_element()),
            PlaylistEntry::Track(track) => XmlNode::Element(track.to_element()),
            PlaylistEntry::Other(node) => node.clone(),
        })
        .collect()
}

fn collect_playlists<'a>(entries: &'a mut [PlaylistEntry], found: &mut Vec<&'a mut PlaylistNode>) {
    for entry in entries {
        if let PlaylistEntry::Node(node) = entry {
            if node.is_folder() {
                collect_playlists(&mut node.entries, found);
            } else {
                found.push(node);
            }
        }
    }
}
