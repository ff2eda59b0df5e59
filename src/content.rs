use std::fmt;
use std::io::BufRead;

use crate::error::Result;
use crate::reader::{Element, ElementReader};

/// Discriminator carried by a content element's `type` attribute.
///
/// Atom-style feeds mark content as plain text or markup; anything else is
/// preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// `type="text"` — plain text.
    Text,
    /// `type="html"` — escaped markup.
    Html,
    /// Any other discriminator, kept as written.
    Other(String),
}

impl From<&str> for ContentKind {
    fn from(s: &str) -> Self {
        match s {
            "text" => ContentKind::Text,
            "html" => ContentKind::Html,
            other => ContentKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContentKind::Text => write!(f, "text"),
            ContentKind::Html => write!(f, "html"),
            ContentKind::Other(s) => write!(f, "{}", s),
        }
    }
}

/// A structured content element, such as an entry's `title`.
///
/// Pairs the element's text value with the `type` discriminator from its
/// attribute; the attribute may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentNode {
    /// The `type` attribute, if present.
    pub kind: Option<ContentKind>,
    /// The element's text value.
    pub value: String,
}

impl ContentNode {
    /// Consume the already-opened `element` and build the content node.
    ///
    /// On return the cursor sits just past the element's closing tag.
    pub(crate) fn parse_element<B: BufRead>(
        reader: &mut ElementReader<B>,
        element: &Element,
    ) -> Result<ContentNode> {
        let kind = element.attribute("type").map(ContentKind::from);
        let value = reader.read_text(element)?;
        Ok(ContentNode { kind, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> ContentNode {
        let mut reader = ElementReader::new(input.as_bytes());
        let element = reader.expect_start().unwrap();
        ContentNode::parse_element(&mut reader, &element).unwrap()
    }

    #[test]
    fn text_kind() {
        let node = parse("<a:title type=\"text\">My App</a:title>");
        assert_eq!(node.kind, Some(ContentKind::Text));
        assert_eq!(node.value, "My App");
    }

    #[test]
    fn html_kind() {
        let node = parse("<title type=\"html\">&lt;b&gt;My App&lt;/b&gt;</title>");
        assert_eq!(node.kind, Some(ContentKind::Html));
        assert_eq!(node.value, "<b>My App</b>");
    }

    #[test]
    fn missing_type_attribute() {
        let node = parse("<title>My App</title>");
        assert_eq!(node.kind, None);
        assert_eq!(node.value, "My App");
    }

    #[test]
    fn unknown_kind_preserved() {
        let node = parse("<title type=\"xhtml\">x</title>");
        assert_eq!(node.kind, Some(ContentKind::Other("xhtml".to_string())));
    }

    #[test]
    fn self_closing_is_empty() {
        let node = parse("<title type=\"text\"/>");
        assert_eq!(node.kind, Some(ContentKind::Text));
        assert_eq!(node.value, "");
    }

    #[test]
    fn kind_display_round_trip() {
        for s in ["text", "html", "xhtml"] {
            assert_eq!(ContentKind::from(s).to_string(), s);
        }
    }
}
