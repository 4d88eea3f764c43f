//! The `Item` capability contract the document builders are parameterized
//! over.
//!
//! An item is "a thing renderable as a IIIF manifest or canvas-level
//! document": it supplies a base URI for derived ids, an ordered page list,
//! and descriptive metadata. The assembly algorithms live in free functions
//! ([`crate::canvas`], [`crate::manifest`]) generic over `&dyn Item` — not
//! in overridable method bodies — so any caller-side type can plug in.
//!
//! ## Optional capabilities
//!
//! Whether a canvas links out to per-page annotation lists (OCR text
//! blocks, search hits) is signalled by a typed [`Capabilities`] descriptor.
//! Presence of a flag — not the content of any list — gates the
//! corresponding `otherContent` entry; the lists themselves are served by an
//! external collaborator and only referenced by URI. An absent capability
//! is a normal branch, never an error.

use serde::{Deserialize, Serialize};

use crate::types::{MetadataEntry, Page};

/// Document granularity an item renders at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// A whole paginated object — renders as `sc:Manifest`.
    Manifest,
    /// A single page-level resource — renders as `sc:Canvas`.
    Canvas,
}

/// Typed descriptor of the two optional per-page annotation-list hooks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Capabilities {
    /// Each canvas links an OCR textblock annotation list at `list/{page}`.
    pub textblock_lists: bool,
    /// Each canvas links a search-hit list at `list/{page}?q=...` when an
    /// active query is present.
    pub search_hit_lists: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        textblock_lists: false,
        search_hit_lists: false,
    };
}

/// A renderable paginated object with already-resolved metadata.
///
/// `base_uri` must be trailing-slash-terminated; every derived URI is
/// `base_uri` plus a path segment plus an identifier (see [`crate::uri`]).
/// `pages` ordering is significant: it fixes canvas order and selects the
/// manifest thumbnail (the first page).
pub trait Item {
    /// Trailing-slash-terminated root for all derived URIs.
    fn base_uri(&self) -> &str;
    /// Ordered pages; may be empty (a minimal manifest, not an error).
    fn pages(&self) -> &[Page];
    /// Manifest display label.
    fn label(&self) -> &str;
    /// Navigation date, passed through verbatim as `navDate`.
    fn date(&self) -> Option<&str>;
    fn license(&self) -> Option<&str>;
    fn attribution(&self) -> Option<&str>;
    /// Descriptive label/value pairs for the manifest `metadata` array.
    fn metadata(&self) -> &[MetadataEntry];
    /// Active search term, if any; gates the search-hit `otherContent` entry.
    fn query(&self) -> Option<&str>;
    /// Rendering granularity. The builders here always produce manifests;
    /// this exists for routing callers that also serve canvas-level items
    /// and need to dispatch on what an item can render as.
    fn granularity(&self) -> Granularity;
    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE
    }
}

/// Serializable item description: everything an [`IssueItem`] carries except
/// the base URI, which comes from the resolved issue URI at construction.
///
/// This is the wire format the CLI reads and what a routing caller hands to
/// [`crate::manifest::generate_manifest`] after metadata resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemDescriptor {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<MetadataEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<Page>,
    #[serde(default)]
    pub capabilities: Capabilities,
}

/// Concrete manifest-level [`Item`] for a digitized issue.
///
/// Built from a fully resolved issue URI plus an [`ItemDescriptor`]. The
/// issue URI is normalized to end with `/` so URI derivation stays pure
/// concatenation.
#[derive(Debug, Clone)]
pub struct IssueItem {
    base_uri: String,
    descriptor: ItemDescriptor,
    query: Option<String>,
}

impl IssueItem {
    pub fn new(issue_uri: impl Into<String>, descriptor: ItemDescriptor) -> Self {
        let mut base_uri = issue_uri.into();
        if !base_uri.ends_with('/') {
            base_uri.push('/');
        }
        Self {
            base_uri,
            descriptor,
            query: None,
        }
    }

    /// Attach an active search term. Empty strings are treated as no query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = (!query.is_empty()).then_some(query);
        self
    }
}

impl Item for IssueItem {
    fn base_uri(&self) -> &str {
        &self.base_uri
    }

    fn pages(&self) -> &[Page] {
        &self.descriptor.pages
    }

    fn label(&self) -> &str {
        &self.descriptor.label
    }

    fn date(&self) -> Option<&str> {
        self.descriptor.date.as_deref()
    }

    fn license(&self) -> Option<&str> {
        self.descriptor.license.as_deref()
    }

    fn attribution(&self) -> Option<&str> {
        self.descriptor.attribution.as_deref()
    }

    fn metadata(&self) -> &[MetadataEntry] {
        &self.descriptor.metadata
    }

    fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    fn granularity(&self) -> Granularity {
        Granularity::Manifest
    }

    fn capabilities(&self) -> Capabilities {
        self.descriptor.capabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_descriptor() -> ItemDescriptor {
        ItemDescriptor {
            label: "Test Issue".into(),
            date: None,
            license: None,
            attribution: None,
            metadata: vec![],
            pages: vec![],
            capabilities: Capabilities::NONE,
        }
    }

    #[test]
    fn issue_uri_gains_trailing_slash() {
        let item = IssueItem::new("https://example.org/issue", minimal_descriptor());
        assert_eq!(item.base_uri(), "https://example.org/issue/");
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        let item = IssueItem::new("https://example.org/issue/", minimal_descriptor());
        assert_eq!(item.base_uri(), "https://example.org/issue/");
    }

    #[test]
    fn empty_query_counts_as_absent() {
        let item = IssueItem::new("https://example.org/i/", minimal_descriptor()).with_query("");
        assert_eq!(item.query(), None);
    }

    #[test]
    fn capabilities_default_to_none() {
        let descriptor: ItemDescriptor =
            serde_json::from_str(r#"{"label": "Bare"}"#).unwrap();
        assert_eq!(descriptor.capabilities, Capabilities::NONE);
        assert!(descriptor.pages.is_empty());
    }

    #[test]
    fn descriptor_round_trips_through_json() {
        let json = serde_json::json!({
            "label": "The Daily Courier, 1903-05-01",
            "date": "1903-05-01T00:00:00Z",
            "attribution": "Example Libraries",
            "metadata": [{"label": "Volume", "value": "3"}],
            "pages": [{
                "id": "p1",
                "label": "Page 1",
                "image": {"id": "img1", "width": 1000, "height": 1500}
            }],
            "capabilities": {"textblock_lists": true}
        });
        let descriptor: ItemDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(descriptor.pages.len(), 1);
        assert!(descriptor.capabilities.textblock_lists);
        assert!(!descriptor.capabilities.search_hit_lists);
    }
}
