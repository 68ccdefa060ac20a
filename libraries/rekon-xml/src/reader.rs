/// XML text to generic element tree
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use rekon_core::{Attribute, RekonError, Result, XmlElement, XmlNode};

/// Parse a whole document into its root element
///
/// Whitespace-only text is dropped; the declaration, processing
/// instructions, doctype and anything outside the root element are ignored.
pub fn parse_element_tree(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                stack.push(element_from_start(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                let element = element_from_start(e)?;
                close_element(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| RekonError::xml("closing tag without matching opening tag"))?;
                close_element(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(e)) => {
                if let Some(parent) = stack.last_mut() {
                    let text = e
                        .unescape()
                        .map_err(|err| RekonError::xml(format!("Invalid text in <{}>: {}", parent.name, err)))?;
                    parent.children.push(XmlNode::Text(text.into_owned()));
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(parent) = stack.last_mut() {
                    parent
                        .children
                        .push(XmlNode::CData(String::from_utf8_lossy(&e).into_owned()));
                }
            }
            Ok(Event::Comment(e)) => {
                if let Some(parent) = stack.last_mut() {
                    parent
                        .children
                        .push(XmlNode::Comment(String::from_utf8_lossy(&e).into_owned()));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(RekonError::xml(format!(
                    "Error at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
        }
    }

    if let Some(open) = stack.last() {
        return Err(RekonError::xml(format!("Unclosed element <{}>", open.name)));
    }

    root.ok_or_else(|| RekonError::xml("Document has no root element"))
}

fn element_from_start(e: &BytesStart) -> Result<XmlElement> {
    let name = std::str::from_utf8(e.name().as_ref())
        .map_err(|err| RekonError::xml(format!("Invalid UTF-8 in element name: {}", err)))?
        .to_string();

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr =
            attr.map_err(|err| RekonError::xml(format!("Malformed attribute in <{}>: {}", name, err)))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| RekonError::xml(format!("Invalid UTF-8 in attribute name: {}", err)))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|err| RekonError::xml(format!("Invalid value for {} in <{}>: {}", key, name, err)))?
            .into_owned();
        attributes.push(Attribute::new(key, value));
    }

    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
    })
}

fn close_element(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(XmlNode::Element(element)),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(RekonError::xml(format!(
                "Unexpected second root element <{}>",
                element.name
            )))
        }
    }
    Ok(())
}
