/// Library document: the typed `DJ_PLAYLISTS` tree
use crate::error::{RekonError, Result};
use crate::types::playlist::PLAYLISTS_ELEMENT;
use crate::types::track::COLLECTION_ELEMENT;
use crate::types::{Attribute, Collection, Playlists, XmlElement, XmlNode};

const ROOT_ELEMENT: &str = "DJ_PLAYLISTS";

/// Position of a root child, so siblings are written back in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// Where the typed `COLLECTION` goes
    Collection,

    /// Where the typed `PLAYLISTS` goes
    Playlists,

    /// Any other child (`PRODUCT`, comments), carried as-is
    Passthrough(XmlNode),
}

/// A parsed DJ library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryDocument {
    /// `DJ_PLAYLISTS` attributes (`Version`)
    pub root_attributes: Vec<Attribute>,

    /// The track collection
    pub collection: Collection,

    /// The playlist tree, when the document has one
    pub playlists: Option<Playlists>,

    layout: Vec<Section>,
}

impl LibraryDocument {
    /// Create a minimal document holding only a collection
    pub fn new(collection: Collection) -> Self {
        Self {
            root_attributes: vec![Attribute::new("Version", "1.0.0")],
            collection,
            playlists: None,
            layout: vec![Section::Collection],
        }
    }

    /// Attach a playlist tree after the collection
    pub fn with_playlists(mut self, playlists: Playlists) -> Self {
        if !self.layout.contains(&Section::Playlists) {
            self.layout.push(Section::Playlists);
        }
        self.playlists = Some(playlists);
        self
    }

    /// Build the typed document from a generic element tree
    ///
    /// The root must be `DJ_PLAYLISTS` with exactly one `COLLECTION`.
    pub fn from_element(root: XmlElement) -> Result<Self> {
        if root.name != ROOT_ELEMENT {
            return Err(RekonError::UnexpectedRoot(root.name));
        }

        let mut collection = None;
        let mut playlists = None;
        let mut layout = Vec::with_capacity(root.children.len());

        for child in root.children {
            match child {
                XmlNode::Element(element) if element.name == COLLECTION_ELEMENT => {
                    if collection.is_some() {
                        return Err(RekonError::xml("document has more than one <COLLECTION>"));
                    }
                    collection = Some(Collection::from_element(element)?);
                    layout.push(Section::Collection);
                }
                XmlNode::Element(element)
                    if element.name == PLAYLISTS_ELEMENT && playlists.is_none() =>
                {
                    playlists = Some(Playlists::from_element(element));
                    layout.push(Section::Playlists);
                }
                other => layout.push(Section::Passthrough(other)),
            }
        }

        let collection = collection
            .ok_or_else(|| RekonError::MissingElement(format!("{ROOT_ELEMENT}/{COLLECTION_ELEMENT}")))?;

        Ok(Self {
            root_attributes: root.attributes,
            collection,
            playlists,
            layout,
        })
    }

    /// Flatten back into a generic element tree
    pub fn to_element(&self) -> XmlElement {
        let children = self
            .layout
            .iter()
            .filter_map(|section| match section {
                Section::Collection => Some(XmlNode::Element(self.collection.to_element())),
                Section::Playlists => self
                    .playlists
                    .as_ref()
                    .map(|playlists| XmlNode::Element(playlists.to_element())),
                Section::Passthrough(node) => Some(node.clone()),
            })
            .collect();

        XmlElement {
            name: ROOT_ELEMENT.to_string(),
            attributes: self.root_attributes.clone(),
            children,
        }
    }

    /// Root children other than the collection and playlists
    pub fn passthrough(&self) -> impl Iterator<Item = &XmlNode> {
        self.layout.iter().filter_map(|section| match section {
            Section::Passthrough(node) => Some(node),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PlaylistEntry, PlaylistNode, Track};

    fn root_with(children: Vec<XmlNode>) -> XmlElement {
        XmlElement {
            name: "DJ_PLAYLISTS".to_string(),
            attributes: vec![Attribute::new("Version", "1.0.0")],
            children,
        }
    }

    #[test]
    fn test_rejects_wrong_root() {
        let err = LibraryDocument::from_element(XmlElement::new("plist")).unwrap_err();
        assert!(matches!(err, RekonError::UnexpectedRoot(name) if name == "plist"));
    }

    #[test]
    fn test_requires_collection() {
        let err = LibraryDocument::from_element(root_with(vec![])).unwrap_err();
        assert!(matches!(err, RekonError::MissingElement(_)));
    }

    #[test]
    fn test_keeps_sibling_order() {
        let product = XmlElement::new("PRODUCT").with_attribute("Name", "rekordbox");
        let root = root_with(vec![
            XmlNode::Element(product.clone()),
            XmlNode::Element(Collection::new(vec![]).to_element()),
            XmlNode::Element(Playlists::default().to_element()),
        ]);

        let document = LibraryDocument::from_element(root.clone()).unwrap();
        assert_eq!(document.passthrough().count(), 1);
        assert!(document.playlists.is_some());
        assert_eq!(document.to_element(), root);
    }

    #[test]
    fn test_new_document_layout() {
        let collection = Collection::new(vec![Track::new("1", "file://localhost/a.mp3", "0")]);
        let playlists = Playlists {
            attributes: vec![],
            entries: vec![PlaylistEntry::Node(PlaylistNode::playlist("Set", &["1"]))],
        };
        let document = LibraryDocument::new(collection).with_playlists(playlists);

        let names: Vec<_> = document
            .to_element()
            .child_elements()
            .map(|e| e.name.clone())
            .collect();
        assert_eq!(names, vec!["COLLECTION", "PLAYLISTS"]);
    }
}
