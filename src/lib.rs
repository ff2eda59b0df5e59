//! Mobile marketplace Atom feed entry types and parser.
//!
//! This crate provides types for representing one application listing from a
//! marketplace feed and a single-pass parser for the `entry` element format.
//!
//! # Overview
//!
//! The marketplace serves search and catalog results as an Atom-style XML
//! feed. Each `entry` element describes one application listing: identifiers,
//! availability flags, sizes, supported client types and languages. One field
//! is delivered oddly: the device-capabilities payload arrives as
//! entity-encoded XML inside a text node, and is decoded, wrapped in a
//! synthetic root and re-parsed as an independent fragment.
//!
//! Every field is optional; a missing element leaves its field `None` rather
//! than a zero or `false` default. Unknown elements are skipped wholesale so
//! that future feed fields cannot break parsing.
//!
//! The parser performs no I/O of its own: the caller supplies an open reader,
//! and each parse call consumes exactly one element, leaving the cursor ready
//! for the next sibling.
//!
//! # Examples
//!
//! Parse a single entry:
//!
//! ```
//! use marketplace_feed::AppEntry;
//!
//! let input = r#"<entry>
//!     <a:title type="text">My App</a:title>
//!     <version>1.0</version>
//!     <packageSize>1024</packageSize>
//! </entry>"#;
//! let entry = AppEntry::parse_str(input).unwrap();
//! assert_eq!(entry.title.unwrap().value, "My App");
//! assert_eq!(entry.version.as_deref(), Some("1.0"));
//! assert_eq!(entry.package_size, Some(1024));
//! assert!(entry.is_blacklisted.is_none());
//! ```

mod capabilities;
mod content;
mod entry;
mod error;
mod feed;
mod reader;
mod urn;
mod value;

// Re-export public types
pub use capabilities::{CapabilitiesNode, Capability};
pub use content::{ContentKind, ContentNode};
pub use entry::AppEntry;
pub use error::{Error, Result};
pub use feed::AppFeed;
pub use reader::ElementReader;
