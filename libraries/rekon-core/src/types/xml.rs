/// Untyped XML content carried through reconciliation unchanged
use serde::{Deserialize, Serialize};

/// A single `name="value"` attribute, value unescaped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Generic element with ordered attributes and children
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an element with no attributes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute append
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Value of the first attribute called `name`
    pub fn attribute(&self, name: &str) -> Option<&str> {
        find_attribute(&self.attributes, name)
    }

    /// Child elements, skipping text and comments
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            _ => None,
        })
    }
}

/// One node of pass-through content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
    CData(String),
    Comment(String),
}

/// Look up an attribute value by name
pub(crate) fn find_attribute<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|attr| attr.name == name)
        .map(|attr| attr.value.as_str())
}

/// Replace the value of `name` in place, appending it when absent
pub(crate) fn set_attribute(attributes: &mut Vec<Attribute>, name: &str, value: String) {
    match attributes.iter_mut().find(|attr| attr.name == name) {
        Some(attr) => attr.value = value,
        None => attributes.push(Attribute::new(name, value)),
    }
}

/// Replace the value of `name` in place only when it is already present
pub(crate) fn update_attribute(attributes: &mut [Attribute], name: &str, value: String) {
    if let Some(attr) = attributes.iter_mut().find(|attr| attr.name == name) {
        attr.value = value;
    }
}
