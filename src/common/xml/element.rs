//! Minimal owned XML element tree.
//!
//! The tree is built from quick-xml events and keeps only what the content
//! parser needs: local names, attributes, text and children in document order.

use super::escape::{resolve_entity, unescape_references, unescape_xml};
use crate::common::format::ContentFormat;
use crate::common::{Error, Result};
use quick_xml::events::{BytesStart, Event};

/// An XML element with namespace prefixes stripped from its name and
/// attribute keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element with the given local name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Parse an XML document and return its root element.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = quick_xml::Reader::from_str(xml);
        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    stack.push(Self::from_start(e)?);
                },
                Ok(Event::Empty(ref e)) => {
                    let element = Self::from_start(e)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                },
                Ok(Event::Text(ref t)) => {
                    if let Some(current) = stack.last_mut() {
                        let text = std::str::from_utf8(t).map_err(|_| {
                            Error::parse(ContentFormat::Xml, "invalid UTF-8 in text content")
                        })?;
                        current.text.push_str(&unescape_xml(text));
                    }
                },
                Ok(Event::CData(ref t)) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(t));
                    }
                },
                Ok(Event::GeneralRef(ref r)) => {
                    if let Some(current) = stack.last_mut() {
                        let name = String::from_utf8_lossy(r);
                        match resolve_entity(&name) {
                            Some(c) => current.text.push(c),
                            None => {
                                current.text.push('&');
                                current.text.push_str(&name);
                                current.text.push(';');
                            },
                        }
                    }
                },
                Ok(Event::End(_)) => {
                    if let Some(element) = stack.pop() {
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(element),
                            None => return Ok(element),
                        }
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::parse(
                        ContentFormat::Xml,
                        format!(
                            "XML parsing error at position {}: {}",
                            reader.buffer_position(),
                            e
                        ),
                    ));
                },
                _ => {},
            }
            buf.clear();
        }

        Err(Error::parse(ContentFormat::Xml, "no root element found"))
    }

    fn from_start(e: &BytesStart) -> Result<Self> {
        let name = std::str::from_utf8(e.local_name().as_ref())
            .map_err(|_| Error::parse(ContentFormat::Xml, "invalid UTF-8 in tag name"))?
            .to_string();

        let mut attributes = Vec::new();
        for attr_result in e.attributes() {
            let attr = attr_result.map_err(|err| {
                Error::parse(ContentFormat::Xml, format!("invalid attribute: {}", err))
            })?;
            let key = attr.key.local_name();
            let key = String::from_utf8_lossy(key.as_ref()).into_owned();
            let value = unescape_references(&String::from_utf8_lossy(&attr.value));
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    /// Local name of this element (without namespace prefix).
    #[inline]
    pub fn local_name(&self) -> &str {
        &self.name
    }

    /// Whether this element's local name equals `name`.
    #[inline]
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Attribute value looked up by local name.
    ///
    /// `xlink:href` and `href` both answer to `"href"`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First attribute present among `names`, in the order given.
    pub fn first_attribute(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.attribute(name))
    }

    /// Text content of this element with surrounding whitespace removed.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// All direct children.
    #[inline]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First direct child with the given local name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.is(name))
    }

    /// Direct children with the given local name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.is(name))
    }

    /// Trimmed text of the first direct child named `name`, or `""`.
    pub fn child_text(&self, name: &str) -> &str {
        self.child(name).map(Element::text).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_prefixes() {
        let xml = r#"<x:root xmlns:x="urn:x" xmlns:xlink="http://www.w3.org/1999/xlink">
            <x:item xlink:href="http://a.example"/>
        </x:root>"#;
        let root = Element::parse(xml).unwrap();
        assert_eq!(root.local_name(), "root");
        let item = root.child("item").unwrap();
        assert_eq!(item.attribute("href"), Some("http://a.example"));
    }

    #[test]
    fn test_parse_resolves_entities_and_cdata() {
        let xml = "<a><b>x &amp; y&#10;z</b><c><![CDATA[<raw>]]></c></a>";
        let root = Element::parse(xml).unwrap();
        assert_eq!(root.child_text("b"), "x & y\nz");
        assert_eq!(root.child_text("c"), "<raw>");
    }

    #[test]
    fn test_attribute_character_references() {
        let xml = r#"<topic xlink:href="https://a.example/?q=1&#38;r=2&amp;s=&#x33;"/>"#;
        let root = Element::parse(xml).unwrap();
        assert_eq!(root.attribute("href"), Some("https://a.example/?q=1&r=2&s=3"));
    }

    #[test]
    fn test_children_named_keeps_order() {
        let root = Element::parse("<r><t>1</t><u/><t>2</t></r>").unwrap();
        let texts: Vec<_> = root.children_named("t").map(Element::text).collect();
        assert_eq!(texts, vec!["1", "2"]);
        assert_eq!(root.children().len(), 3);
    }

    #[test]
    fn test_first_attribute_order() {
        let root = Element::parse(r#"<m id="b" marker-id="a"/>"#).unwrap();
        assert_eq!(root.first_attribute(&["marker-id", "id"]), Some("a"));
        assert_eq!(root.first_attribute(&["markerId"]), None);
    }

    #[test]
    fn test_malformed_xml_is_parse_error() {
        let err = Element::parse("<a><b></a>").unwrap_err();
        assert!(matches!(
            err,
            Error::Parse {
                format: ContentFormat::Xml,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_input_has_no_root() {
        assert!(Element::parse("").is_err());
    }
}
