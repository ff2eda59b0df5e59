use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::{Decoder, Reader};

use crate::error::{Error, Result};

/// A child node encountered while scanning an element's content.
#[derive(Debug)]
pub(crate) enum Node {
    /// Start of a child element (or a self-closing child).
    Element(Element),
    /// Character data between elements.
    Text(String),
    /// The closing tag of the element being scanned.
    End,
}

/// An element start tag with its name and attributes copied into owned
/// storage, so no reader buffer lifetimes leak into the parsers.
#[derive(Debug)]
pub(crate) struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    self_closing: bool,
}

impl Element {
    fn from_start(decoder: Decoder, start: &BytesStart, self_closing: bool) -> Result<Self> {
        let name = decoder.decode(start.name().as_ref())?.into_owned();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = decoder.decode(attr.key.as_ref())?.into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        Ok(Element {
            name,
            attributes,
            self_closing,
        })
    }

    /// Local part of the element name, with any namespace prefix removed.
    pub(crate) fn local_name(&self) -> &str {
        match self.name.rsplit_once(':') {
            Some((_, local)) => local,
            None => &self.name,
        }
    }

    /// Value of the named attribute, if present.
    ///
    /// Lookup is by local attribute name, consistent with element dispatch.
    pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| {
                let local = match key.rsplit_once(':') {
                    Some((_, local)) => local,
                    None => key.as_str(),
                };
                local == name
            })
            .map(|(_, value)| value.as_str())
    }

    /// Whether the element was written as a self-closing tag (`<url/>`).
    pub(crate) fn is_self_closing(&self) -> bool {
        self.self_closing
    }
}

/// A forward-only cursor over an XML token stream.
///
/// Wraps a [`quick_xml::Reader`] and its internal buffer. Each parse call
/// advances the cursor past exactly the content it consumes, so consecutive
/// calls walk sibling elements in document order.
pub struct ElementReader<B: BufRead> {
    reader: Reader<B>,
    buf: Vec<u8>,
}

impl<B: BufRead> ElementReader<B> {
    /// Construct a cursor over an already-open reader.
    ///
    /// The crate performs no I/O of its own; the caller supplies the stream.
    pub fn new(input: B) -> Self {
        Self {
            reader: Reader::from_reader(input),
            buf: Vec::new(),
        }
    }

    /// Consume the next start tag, skipping the XML prolog and comments.
    ///
    /// Anything else before the start tag is an error.
    pub(crate) fn expect_start(&mut self) -> Result<Element> {
        loop {
            self.buf.clear();
            let decoder = self.reader.decoder();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(ref start) => return Element::from_start(decoder, start, false),
                Event::Empty(ref start) => return Element::from_start(decoder, start, true),
                Event::Decl(_) | Event::DocType(_) | Event::PI(_) | Event::Comment(_) => continue,
                Event::Text(ref text) if text.iter().all(|b| b.is_ascii_whitespace()) => continue,
                Event::Text(_) | Event::CData(_) => return Err(Error::UnexpectedNode("text")),
                Event::End(_) => return Err(Error::UnexpectedNode("end tag")),
                Event::Eof => return Err(Error::UnexpectedEof),
            }
        }
    }

    /// Produce the next node while scanning the children of the current
    /// element. Returns [`Node::End`] at the element's closing tag.
    pub(crate) fn next_node(&mut self) -> Result<Node> {
        loop {
            self.buf.clear();
            let decoder = self.reader.decoder();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(ref start) => {
                    return Ok(Node::Element(Element::from_start(decoder, start, false)?))
                }
                Event::Empty(ref start) => {
                    return Ok(Node::Element(Element::from_start(decoder, start, true)?))
                }
                Event::End(_) => return Ok(Node::End),
                Event::Text(ref text) => return Ok(Node::Text(text.unescape()?.into_owned())),
                Event::CData(ref cdata) => {
                    return Ok(Node::Text(decoder.decode(cdata)?.into_owned()))
                }
                Event::Comment(_) | Event::PI(_) => continue,
                Event::Decl(_) | Event::DocType(_) => {
                    return Err(Error::UnexpectedNode("declaration"))
                }
                Event::Eof => return Err(Error::UnexpectedEof),
            }
        }
    }

    /// Read the remaining content of `element` as text and consume its
    /// closing tag. Entity references are resolved; CDATA is accepted.
    ///
    /// Self-closing elements yield the empty string. A child element inside
    /// the content is a mixed-content error.
    pub(crate) fn read_text(&mut self, element: &Element) -> Result<String> {
        if element.is_self_closing() {
            return Ok(String::new());
        }

        let mut content = String::new();
        loop {
            match self.next_node()? {
                Node::Text(text) => content.push_str(&text),
                Node::End => return Ok(content),
                Node::Element(_) => {
                    return Err(Error::MixedContent(element.local_name().to_string()))
                }
            }
        }
    }

    /// Skip the remaining content of `element`, including its closing tag.
    pub(crate) fn skip(&mut self, element: &Element) -> Result<()> {
        if element.is_self_closing() {
            return Ok(());
        }

        let mut scratch = Vec::new();
        self.reader
            .read_to_end_into(QName(element.name.as_bytes()), &mut scratch)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(input: &str) -> ElementReader<&[u8]> {
        ElementReader::new(input.as_bytes())
    }

    #[test]
    fn start_after_prolog() {
        let mut r = reader("<?xml version=\"1.0\"?>\n<!-- feed -->\n<entry/>");
        let el = r.expect_start().unwrap();
        assert_eq!(el.local_name(), "entry");
        assert!(el.is_self_closing());
    }

    #[test]
    fn local_name_strips_prefix() {
        let mut r = reader("<a:title type=\"text\">Hi</a:title>");
        let el = r.expect_start().unwrap();
        assert_eq!(el.local_name(), "title");
        assert_eq!(el.attribute("type"), Some("text"));
    }

    #[test]
    fn read_text_resolves_entities() {
        let mut r = reader("<url>a &amp; b</url>");
        let el = r.expect_start().unwrap();
        assert_eq!(r.read_text(&el).unwrap(), "a & b");
    }

    #[test]
    fn read_text_accepts_cdata() {
        let mut r = reader("<url><![CDATA[a < b]]></url>");
        let el = r.expect_start().unwrap();
        assert_eq!(r.read_text(&el).unwrap(), "a < b");
    }

    #[test]
    fn read_text_rejects_mixed_content() {
        let mut r = reader("<url>a<b/>c</url>");
        let el = r.expect_start().unwrap();
        let err = r.read_text(&el).unwrap_err();
        assert!(matches!(err, Error::MixedContent(ref name) if name == "url"));
    }

    #[test]
    fn skip_consumes_whole_subtree() {
        let mut r = reader("<e><unknown><nested>x</nested></unknown><version>1</version></e>");
        let el = r.expect_start().unwrap();
        assert!(!el.is_self_closing());
        match r.next_node().unwrap() {
            Node::Element(child) => {
                assert_eq!(child.local_name(), "unknown");
                r.skip(&child).unwrap();
            }
            other => panic!("expected element, got {:?}", other),
        }
        match r.next_node().unwrap() {
            Node::Element(child) => assert_eq!(child.local_name(), "version"),
            other => panic!("expected element, got {:?}", other),
        }
    }

    #[test]
    fn eof_before_start() {
        let mut r = reader("   ");
        assert!(matches!(r.expect_start().unwrap_err(), Error::UnexpectedEof));
    }

    #[test]
    fn text_before_start() {
        let mut r = reader("stray<entry/>");
        assert!(matches!(
            r.expect_start().unwrap_err(),
            Error::UnexpectedNode("text")
        ));
    }
}
