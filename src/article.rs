//! XML article document tree.
//!
//! A minimal element tree is all the output format needs: the article
//! schema used here has no attributes and no mixed content, so [`Element`]
//! stores just a tag name, optional text, and children. Serialisation goes
//! through quick-xml's indenting [`Writer`]; parsing (for the standalone
//! validate entry point) is a SAX-style event loop that rebuilds the tree
//! with an explicit stack.

use crate::error::Pdf2XmlError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::BufReader;
use std::path::Path;

/// One node of the article document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name, e.g. `"article-title"`.
    pub name: String,
    /// Text content. `None` for purely structural elements.
    pub text: Option<String>,
    /// Child elements, in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Create an element holding only text.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    /// Append a child and return a mutable reference to it.
    pub fn push(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        self.children.last_mut().unwrap()
    }

    /// Find the first direct child with the given tag name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Find the first element with the given tag name anywhere in the
    /// subtree (depth-first, self included).
    pub fn find(&self, name: &str) -> Option<&Element> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    /// Serialise the tree to a pretty-printed UTF-8 XML string with an XML
    /// declaration and two-space indentation.
    pub fn to_xml_string(&self) -> Result<String, Pdf2XmlError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(|e| Pdf2XmlError::Internal(format!("XML write: {e}")))?;
        write_element(&mut writer, self)?;
        let mut bytes = writer.into_inner();
        bytes.push(b'\n');
        String::from_utf8(bytes).map_err(|e| Pdf2XmlError::Internal(format!("XML encoding: {e}")))
    }

    /// Parse an XML file into an element tree.
    ///
    /// Attributes are discarded (the article schema carries none we check)
    /// and text is trimmed. A malformed file is a fatal
    /// [`Pdf2XmlError::XmlParse`].
    pub fn from_path(path: &Path) -> Result<Self, Pdf2XmlError> {
        let file = std::fs::File::open(path).map_err(|e| Pdf2XmlError::XmlParse {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        let mut reader = Reader::from_reader(BufReader::new(file));
        parse_tree(&mut reader).map_err(|detail| Pdf2XmlError::XmlParse {
            path: path.to_path_buf(),
            detail,
        })
    }

    /// Parse an XML string into an element tree.
    pub fn from_str(xml: &str) -> Result<Self, Pdf2XmlError> {
        let mut reader = Reader::from_reader(BufReader::new(xml.as_bytes()));
        parse_tree(&mut reader).map_err(|detail| Pdf2XmlError::XmlParse {
            path: "<string>".into(),
            detail,
        })
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, el: &Element) -> Result<(), Pdf2XmlError> {
    if el.children.is_empty() && el.text.is_none() {
        // Self-closing, e.g. <ref-list/>
        return writer
            .write_event(Event::Empty(BytesStart::new(&el.name)))
            .map_err(|e| Pdf2XmlError::Internal(format!("XML write: {e}")));
    }

    writer
        .write_event(Event::Start(BytesStart::new(&el.name)))
        .map_err(|e| Pdf2XmlError::Internal(format!("XML write: {e}")))?;
    if let Some(ref text) = el.text {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|e| Pdf2XmlError::Internal(format!("XML write: {e}")))?;
    }
    for child in &el.children {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(&el.name)))
        .map_err(|e| Pdf2XmlError::Internal(format!("XML write: {e}")))
}

/// Event loop rebuilding the tree with an explicit element stack.
fn parse_tree<R: std::io::BufRead>(reader: &mut Reader<R>) -> Result<Element, String> {
    let mut buf = Vec::with_capacity(1024);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                stack.push(Element::new(name));
            }
            Ok(Event::Empty(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let el = Element::new(name);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(el),
                    None if root.is_none() => root = Some(el),
                    None => return Err("multiple root elements".into()),
                }
            }
            Ok(Event::Text(ref t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| e.to_string())?
                    .trim()
                    .to_string();
                if text.is_empty() {
                    // Inter-element whitespace from pretty-printing.
                } else if let Some(el) = stack.last_mut() {
                    match el.text {
                        Some(ref mut existing) => {
                            existing.push(' ');
                            existing.push_str(&text);
                        }
                        None => el.text = Some(text),
                    }
                }
            }
            Ok(Event::End(_)) => {
                let el = stack.pop().ok_or_else(|| "unmatched end tag".to_string())?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(el),
                    None if root.is_none() => root = Some(el),
                    None => return Err("multiple root elements".into()),
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // declarations, comments, PIs
            Err(e) => return Err(e.to_string()),
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err("unexpected end of file inside an element".into());
    }
    root.ok_or_else(|| "no root element".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        let mut article = Element::new("article");
        let front = article.push(Element::new("front"));
        front.push(Element::with_text("article-title", "A & B < C"));
        article.push(Element::with_text("body", "text"));
        article.push(Element::new("back"));
        article
    }

    #[test]
    fn serialises_with_declaration_and_indent() {
        let xml = sample().to_xml_string().unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(xml.contains("\n  <front>"), "two-space indent: {xml}");
        assert!(xml.ends_with('\n'));
    }

    #[test]
    fn empty_elements_self_close() {
        let xml = Element::new("ref-list").to_xml_string().unwrap();
        assert!(xml.contains("<ref-list/>"), "got: {xml}");
    }

    #[test]
    fn text_is_escaped() {
        let xml = sample().to_xml_string().unwrap();
        assert!(xml.contains("A &amp; B &lt; C"), "got: {xml}");
    }

    #[test]
    fn parse_round_trip() {
        let original = sample();
        let xml = original.to_xml_string().unwrap();
        let parsed = Element::from_str(&xml).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(Element::from_str("<article><front></article>").is_err());
        assert!(Element::from_str("plain text, no markup at all").is_err());
    }

    #[test]
    fn child_and_find() {
        let article = sample();
        assert!(article.child("front").is_some());
        assert!(article.child("article-title").is_none(), "not a direct child");
        assert_eq!(
            article.find("article-title").unwrap().text.as_deref(),
            Some("A & B < C")
        );
    }
}
