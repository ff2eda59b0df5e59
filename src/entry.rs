use std::io::BufRead;

use chrono::{DateTime, Utc};

use crate::capabilities::CapabilitiesNode;
use crate::content::ContentNode;
use crate::error::Result;
use crate::reader::{Element, ElementReader, Node};
use crate::urn::strip_urn;
use crate::value;

/// One application listing from a marketplace feed.
///
/// Every field is independently optional: a missing source element leaves the
/// field `None`, never a zero or `false` default. The record is built fresh
/// per parse call and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppEntry {
    /// When the entry was last updated.
    pub updated: Option<DateTime<Utc>>,

    /// The entry title.
    pub title: Option<ContentNode>,

    /// The application identifier, with its `urn:uuid:` prefix stripped.
    pub id: Option<String>,

    /// The application version string.
    pub version: Option<String>,

    /// The payload identifier, URN-unwrapped.
    pub payload_id: Option<String>,

    /// The SKU identifier, URN-unwrapped.
    pub sku_id: Option<String>,

    /// When the SKU was last updated.
    pub sku_last_updated: Option<DateTime<Utc>>,

    /// Whether the application is available in the requesting country.
    pub is_available_in_country: Option<bool>,

    /// Whether the application is available in the store.
    pub is_available_in_store: Option<bool>,

    /// Whether the application is compatible with the client type.
    pub is_client_type_compatible: Option<bool>,

    /// Whether the application is compatible with the device hardware.
    pub is_hardware_compatible: Option<bool>,

    /// Whether the application is blacklisted.
    pub is_blacklisted: Option<bool>,

    /// The application detail URL.
    pub url: Option<String>,

    /// Download package size in bytes.
    pub package_size: Option<u64>,

    /// Installed size in bytes.
    pub install_size: Option<u64>,

    /// Supported client types, in feed order.
    pub client_types: Option<Vec<String>>,

    /// Supported languages, in feed order.
    pub supported_languages: Option<Vec<String>>,

    /// Device capabilities, parsed from the entity-encoded payload.
    pub device_capabilities: Option<CapabilitiesNode>,
}

impl AppEntry {
    /// Parse an `entry` element held as text.
    ///
    /// # Examples
    ///
    /// ```
    /// use marketplace_feed::AppEntry;
    ///
    /// let entry = AppEntry::parse_str(
    ///     "<entry><version>1.0</version><packageSize>1024</packageSize></entry>",
    /// )
    /// .unwrap();
    /// assert_eq!(entry.version.as_deref(), Some("1.0"));
    /// assert_eq!(entry.package_size, Some(1024));
    /// assert!(entry.updated.is_none());
    /// ```
    pub fn parse_str(input: &str) -> Result<AppEntry> {
        let mut reader = ElementReader::new(input.as_bytes());
        AppEntry::parse(&mut reader)
    }

    /// Consume the element the reader is positioned at and build the record.
    ///
    /// The cursor must sit immediately before the entry's start tag. Exactly
    /// that element is consumed; on return the cursor sits just past its
    /// closing tag, so consecutive calls walk sibling entries.
    ///
    /// Child elements are dispatched by local name; unrecognized elements are
    /// skipped wholesale, so unknown future fields cannot break parsing. A
    /// present element whose content fails to convert is fatal for the whole
    /// entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use marketplace_feed::{AppEntry, ElementReader};
    ///
    /// let input = "<entry><version>1.0</version></entry>\
    ///              <entry><version>2.0</version></entry>";
    /// let mut reader = ElementReader::new(input.as_bytes());
    /// let first = AppEntry::parse(&mut reader).unwrap();
    /// let second = AppEntry::parse(&mut reader).unwrap();
    /// assert_eq!(first.version.as_deref(), Some("1.0"));
    /// assert_eq!(second.version.as_deref(), Some("2.0"));
    /// ```
    pub fn parse<B: BufRead>(reader: &mut ElementReader<B>) -> Result<AppEntry> {
        let start = reader.expect_start()?;
        Self::parse_children(reader, &start)
    }

    /// Scan the children of an already-consumed start tag.
    pub(crate) fn parse_children<B: BufRead>(
        reader: &mut ElementReader<B>,
        start: &Element,
    ) -> Result<AppEntry> {
        let mut entry = AppEntry::default();
        if start.is_self_closing() {
            return Ok(entry);
        }

        loop {
            match reader.next_node()? {
                Node::End => break,
                Node::Text(_) => continue,
                Node::Element(child) => match child.local_name() {
                    "updated" => {
                        let text = reader.read_text(&child)?;
                        entry.updated = Some(value::parse_timestamp(&text)?);
                    }
                    "title" => {
                        entry.title = Some(ContentNode::parse_element(reader, &child)?);
                    }
                    "id" => {
                        let text = reader.read_text(&child)?;
                        entry.id = Some(strip_urn(&text).to_string());
                    }
                    "version" => entry.version = Some(reader.read_text(&child)?),
                    "payloadId" => {
                        let text = reader.read_text(&child)?;
                        entry.payload_id = Some(strip_urn(&text).to_string());
                    }
                    "skuId" => {
                        let text = reader.read_text(&child)?;
                        entry.sku_id = Some(strip_urn(&text).to_string());
                    }
                    "skuLastUpdated" => {
                        let text = reader.read_text(&child)?;
                        entry.sku_last_updated = Some(value::parse_timestamp(&text)?);
                    }
                    "isAvailableInCountry" => {
                        let text = reader.read_text(&child)?;
                        entry.is_available_in_country = Some(value::parse_boolean(&text)?);
                    }
                    "isAvailableInStore" => {
                        let text = reader.read_text(&child)?;
                        entry.is_available_in_store = Some(value::parse_boolean(&text)?);
                    }
                    "isClientTypeCompatible" => {
                        let text = reader.read_text(&child)?;
                        entry.is_client_type_compatible = Some(value::parse_boolean(&text)?);
                    }
                    "isHardwareCompatible" => {
                        let text = reader.read_text(&child)?;
                        entry.is_hardware_compatible = Some(value::parse_boolean(&text)?);
                    }
                    "isBlacklisted" => {
                        let text = reader.read_text(&child)?;
                        entry.is_blacklisted = Some(value::parse_boolean(&text)?);
                    }
                    "url" => entry.url = Some(reader.read_text(&child)?),
                    "packageSize" => {
                        let text = reader.read_text(&child)?;
                        entry.package_size = Some(value::parse_byte_count(&text)?);
                    }
                    "installSize" => {
                        let text = reader.read_text(&child)?;
                        entry.install_size = Some(value::parse_byte_count(&text)?);
                    }
                    "clientTypes" => {
                        entry.client_types = Some(read_text_sequence(reader, &child)?);
                    }
                    "supportedLanguages" => {
                        entry.supported_languages = Some(read_text_sequence(reader, &child)?);
                    }
                    "deviceCapabilities" => {
                        let text = reader.read_text(&child)?;
                        entry.device_capabilities = CapabilitiesNode::parse_encoded(&text)?;
                    }
                    _ => reader.skip(&child)?,
                },
            }
        }

        Ok(entry)
    }
}

/// Read the child elements of `parent` as an ordered sequence of strings.
///
/// Child element names are not inspected; each child contributes its text
/// content, in document order.
fn read_text_sequence<B: BufRead>(
    reader: &mut ElementReader<B>,
    parent: &Element,
) -> Result<Vec<String>> {
    let mut items = Vec::new();
    if parent.is_self_closing() {
        return Ok(items);
    }

    loop {
        match reader.next_node()? {
            Node::End => return Ok(items),
            Node::Text(_) => continue,
            Node::Element(child) => items.push(reader.read_text(&child)?),
        }
    }
}
