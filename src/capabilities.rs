use std::io::BufRead;

use quick_xml::escape::unescape;

use crate::error::{Error, Result};
use crate::reader::{Element, ElementReader, Node};
use crate::value;

/// A single device capability required by an application, such as
/// `ID_CAP_LOCATION`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capability {
    /// The capability identifier.
    pub id: Option<String>,
    /// Whether the capability is disclosed to the user at install time.
    pub disclosed: Option<bool>,
}

/// The device-capabilities sub-record of an application entry.
///
/// The feed does not deliver this as child elements: the payload arrives as
/// entity-encoded XML inside a text node. [`CapabilitiesNode::parse_encoded`]
/// decodes the entities, wraps the result in a synthetic root element and
/// parses that as an independent document, then discards the wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitiesNode {
    /// Required capabilities, in feed order.
    pub capabilities: Vec<Capability>,
}

impl CapabilitiesNode {
    /// Decode an entity-encoded capabilities payload and parse it.
    ///
    /// An exactly-empty payload yields `None` without error. The decode step
    /// is applied before any parsing, so a doubly-encoded payload (entities
    /// escaped once by the feed serializer and once more by the enclosing
    /// text node) comes out well-formed; on an already-decoded payload the
    /// pass is the identity.
    pub(crate) fn parse_encoded(encoded: &str) -> Result<Option<CapabilitiesNode>> {
        if encoded.is_empty() {
            return Ok(None);
        }

        let decoded =
            unescape(encoded).map_err(|e| Error::InvalidCapabilities(e.to_string()))?;
        let document = format!("<root>{}</root>", decoded);

        Ok(Some(Self::parse_fragment(&document)?))
    }

    /// Parse a decoded, single-rooted capabilities document.
    fn parse_fragment(document: &str) -> Result<CapabilitiesNode> {
        let mut reader = ElementReader::new(document.as_bytes());
        let root = reader.expect_start()?;
        Self::parse_children(&mut reader, &root)
    }

    /// Scan the children of `parent`, collecting capabilities.
    ///
    /// Accepts both a `capabilities` wrapper around `capability` children and
    /// bare `capability` elements; anything else is skipped.
    fn parse_children<B: BufRead>(
        reader: &mut ElementReader<B>,
        parent: &Element,
    ) -> Result<CapabilitiesNode> {
        let mut node = CapabilitiesNode::default();
        if parent.is_self_closing() {
            return Ok(node);
        }

        loop {
            match reader.next_node()? {
                Node::End => break,
                Node::Text(_) => continue,
                Node::Element(child) => match child.local_name() {
                    "capabilities" => node.collect_list(reader, &child)?,
                    "capability" => node
                        .capabilities
                        .push(Capability::parse_element(reader, &child)?),
                    _ => reader.skip(&child)?,
                },
            }
        }

        Ok(node)
    }

    /// Collect the `capability` children of a `capabilities` wrapper.
    fn collect_list<B: BufRead>(
        &mut self,
        reader: &mut ElementReader<B>,
        parent: &Element,
    ) -> Result<()> {
        if parent.is_self_closing() {
            return Ok(());
        }

        loop {
            match reader.next_node()? {
                Node::End => return Ok(()),
                Node::Text(_) => continue,
                Node::Element(child) => match child.local_name() {
                    "capability" => self
                        .capabilities
                        .push(Capability::parse_element(reader, &child)?),
                    _ => reader.skip(&child)?,
                },
            }
        }
    }
}

impl Capability {
    /// Consume one `capability` element.
    ///
    /// The identifier comes from a `name` or `id` attribute, or from a child
    /// `id` element's text; `disclosed` from a child boolean element.
    fn parse_element<B: BufRead>(
        reader: &mut ElementReader<B>,
        element: &Element,
    ) -> Result<Capability> {
        let mut capability = Capability {
            id: element
                .attribute("name")
                .or_else(|| element.attribute("id"))
                .map(str::to_string),
            disclosed: None,
        };

        if element.is_self_closing() {
            return Ok(capability);
        }

        loop {
            match reader.next_node()? {
                Node::End => break,
                Node::Text(_) => continue,
                Node::Element(child) => match child.local_name() {
                    "id" => capability.id = Some(reader.read_text(&child)?),
                    "disclosed" => {
                        let text = reader.read_text(&child)?;
                        capability.disclosed = Some(value::parse_boolean(&text)?);
                    }
                    _ => reader.skip(&child)?,
                },
            }
        }

        Ok(capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_is_absent() {
        assert_eq!(CapabilitiesNode::parse_encoded("").unwrap(), None);
    }

    #[test]
    fn whitespace_payload_is_present_and_empty() {
        // Only the exactly-empty payload stays absent.
        let node = CapabilitiesNode::parse_encoded("  ").unwrap().unwrap();
        assert!(node.capabilities.is_empty());
    }

    #[test]
    fn attribute_form() {
        let node = CapabilitiesNode::parse_encoded(
            "&lt;capability name=\"ID_CAP_LOCATION\"/&gt;&lt;capability name=\"ID_CAP_NETWORKING\"/&gt;",
        )
        .unwrap()
        .unwrap();
        assert_eq!(node.capabilities.len(), 2);
        assert_eq!(node.capabilities[0].id.as_deref(), Some("ID_CAP_LOCATION"));
        assert_eq!(
            node.capabilities[1].id.as_deref(),
            Some("ID_CAP_NETWORKING")
        );
    }

    #[test]
    fn wrapper_with_child_elements() {
        let node = CapabilitiesNode::parse_encoded(
            "&lt;capabilities&gt;\
             &lt;capability&gt;&lt;id&gt;ID_CAP_MICROPHONE&lt;/id&gt;\
             &lt;disclosed&gt;true&lt;/disclosed&gt;&lt;/capability&gt;\
             &lt;/capabilities&gt;",
        )
        .unwrap()
        .unwrap();
        assert_eq!(node.capabilities.len(), 1);
        assert_eq!(
            node.capabilities[0].id.as_deref(),
            Some("ID_CAP_MICROPHONE")
        );
        assert_eq!(node.capabilities[0].disclosed, Some(true));
    }

    #[test]
    fn already_decoded_payload() {
        // The decode pass is the identity when no entities remain.
        let node = CapabilitiesNode::parse_encoded("<capability name=\"ID_CAP_CAMERA\"/>")
            .unwrap()
            .unwrap();
        assert_eq!(node.capabilities.len(), 1);
        assert_eq!(node.capabilities[0].id.as_deref(), Some("ID_CAP_CAMERA"));
    }

    #[test]
    fn unknown_elements_skipped() {
        let node = CapabilitiesNode::parse_encoded(
            "&lt;publisherDeviceAccess&gt;x&lt;/publisherDeviceAccess&gt;\
             &lt;capability name=\"ID_CAP_LOCATION\"/&gt;",
        )
        .unwrap()
        .unwrap();
        assert_eq!(node.capabilities.len(), 1);
    }

    #[test]
    fn malformed_fragment_is_fatal() {
        let err = CapabilitiesNode::parse_encoded("&lt;capability").unwrap_err();
        assert!(matches!(err, Error::Xml(_) | Error::UnexpectedEof));
    }

    #[test]
    fn malformed_disclosed_is_fatal() {
        let err = CapabilitiesNode::parse_encoded(
            "&lt;capability&gt;&lt;disclosed&gt;maybe&lt;/disclosed&gt;&lt;/capability&gt;",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidBoolean(_)));
    }
}
