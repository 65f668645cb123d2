//! Owned XML element tree built from quick-xml pull events

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Reader;

use super::CtmlError;

/// A single XML element with its attributes, direct text and children
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Tag name
    pub name: String,

    /// Attributes in document order
    pub attributes: Vec<(String, String)>,

    /// Direct character data, trimmed at each text segment
    pub text: String,

    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element with the given tag
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Read and parse a CTML file, returning its root element
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CtmlError> {
        let file = File::open(path.as_ref())?;
        parse_document(BufReader::with_capacity(64 * 1024, file))
    }

    /// Attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attribute value by name, failing if absent
    pub fn require_attr(&self, name: &str) -> Result<&str, CtmlError> {
        self.attr(name).ok_or_else(|| CtmlError::MissingAttribute {
            element: self.name.clone(),
            attribute: name.to_string(),
        })
    }

    /// First direct child with the given tag
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// First direct child with the given tag, failing if absent
    pub fn require(&self, name: &str) -> Result<&Element, CtmlError> {
        self.find(name).ok_or_else(|| CtmlError::MissingElement {
            parent: self.name.clone(),
            child: name.to_string(),
        })
    }

    /// All direct children with the given tag, in document order
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// First direct child with the given tag whose attribute matches `value`
    pub fn find_with_attr(&self, name: &str, attribute: &str, value: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|child| child.name == name && child.attr(attribute) == Some(value))
    }

    /// Text of the first direct child with the given tag
    pub fn find_text(&self, name: &str) -> Option<&str> {
        self.find(name).map(|child| child.text.as_str())
    }

    /// First child element regardless of tag
    pub fn first_child(&self) -> Option<&Element> {
        self.children.first()
    }
}

/// Parse a complete XML document from any buffered source
pub fn parse_document<R: BufRead>(source: R) -> Result<Element, CtmlError> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                stack.push(start_element(e, &reader)?);
            }
            Event::Empty(ref e) => {
                let element = start_element(e, &reader)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut root, element)?;
                }
            }
            Event::Text(ref t) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&t.unescape()?);
                }
            }
            Event::CData(ref t) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(std::str::from_utf8(t)?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(CtmlError::InvalidStructure(format!(
            "unclosed element <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| CtmlError::InvalidStructure("document has no root element".to_string()))
}

fn start_element<R>(e: &BytesStart, reader: &Reader<R>) -> Result<Element, CtmlError> {
    let mut element = Element::new(decode_name(e.name())?);
    for attr in e.attributes() {
        let attr = attr.map_err(|e| CtmlError::XmlError(quick_xml::Error::from(e)))?;
        let key = decode_name(attr.key)?;
        let value = attr.decode_and_unescape_value(reader.decoder())?;
        element.attributes.push((key, value.into_owned()));
    }
    Ok(element)
}

fn decode_name(name: QName) -> Result<String, CtmlError> {
    Ok(std::str::from_utf8(name.as_ref())?.to_string())
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), CtmlError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(CtmlError::InvalidStructure(format!(
                "second root element <{}>",
                element.name
            )))
        }
    }
    Ok(())
}
