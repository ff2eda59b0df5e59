use std::io::BufRead;

use chrono::{DateTime, Utc};

use crate::content::ContentNode;
use crate::entry::AppEntry;
use crate::error::Result;
use crate::reader::{ElementReader, Node};
use crate::value;

/// A marketplace feed document: feed-level metadata plus its application
/// entries in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppFeed {
    /// When the feed was generated.
    pub updated: Option<DateTime<Utc>>,

    /// The feed title.
    pub title: Option<ContentNode>,

    /// The application entries, in document order.
    pub entries: Vec<AppEntry>,
}

impl AppFeed {
    /// Parse a whole feed document held as text.
    ///
    /// # Examples
    ///
    /// ```
    /// use marketplace_feed::AppFeed;
    ///
    /// let feed = AppFeed::parse_str(
    ///     "<?xml version=\"1.0\"?>\
    ///      <feed>\
    ///      <entry><version>1.0</version></entry>\
    ///      <entry><version>2.0</version></entry>\
    ///      </feed>",
    /// )
    /// .unwrap();
    /// assert_eq!(feed.entries.len(), 2);
    /// assert_eq!(feed.entries[1].version.as_deref(), Some("2.0"));
    /// ```
    pub fn parse_str(input: &str) -> Result<AppFeed> {
        let mut reader = ElementReader::new(input.as_bytes());
        AppFeed::parse(&mut reader)
    }

    /// Consume the `feed` element the reader is positioned at.
    ///
    /// The XML prolog and comments before the root are skipped. Unknown
    /// feed-level elements are skipped, same as entry-level ones.
    pub fn parse<B: BufRead>(reader: &mut ElementReader<B>) -> Result<AppFeed> {
        let root = reader.expect_start()?;
        let mut feed = AppFeed::default();
        if root.is_self_closing() {
            return Ok(feed);
        }

        loop {
            match reader.next_node()? {
                Node::End => break,
                Node::Text(_) => continue,
                Node::Element(child) => match child.local_name() {
                    "updated" => {
                        let text = reader.read_text(&child)?;
                        feed.updated = Some(value::parse_timestamp(&text)?);
                    }
                    "title" => feed.title = Some(ContentNode::parse_element(reader, &child)?),
                    "entry" => feed.entries.push(AppEntry::parse_children(reader, &child)?),
                    _ => reader.skip(&child)?,
                },
            }
        }

        Ok(feed)
    }
}
