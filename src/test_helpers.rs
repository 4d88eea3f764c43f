//! Shared test utilities for the iiif-folio test suite.
//!
//! Provides a configurable [`TestItem`] plus page fixtures so unit tests
//! can exercise the builders without writing an `Item` impl per case.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let item = item_with(vec![page("p1", "img1"), page("p2", "img2")])
//!     .capabilities(Capabilities { textblock_lists: true, search_hit_lists: true })
//!     .query("dawn");
//! ```

use crate::item::{Capabilities, Granularity, Item};
use crate::types::{Image, MetadataEntry, Page};

/// A page fixture with the standard test geometry (1000x1500).
///
/// Ids follow the `pN` convention; the label becomes "Page N".
pub fn page(id: &str, image_id: &str) -> Page {
    Page {
        id: id.to_string(),
        label: format!("Page {}", id.strip_prefix('p').unwrap_or(id)),
        image: Image {
            id: image_id.to_string(),
            width: 1000,
            height: 1500,
            uri: None,
        },
        uri: None,
    }
}

/// A manifest-level item rooted at `https://example.org/x/`.
pub fn item_with(pages: Vec<Page>) -> TestItem {
    TestItem {
        base_uri: "https://example.org/x/".to_string(),
        pages,
        label: "Test Issue".to_string(),
        date: None,
        license: None,
        attribution: None,
        metadata: Vec::new(),
        query: None,
        capabilities: Capabilities::NONE,
    }
}

/// Builder-style `Item` implementation for tests.
#[derive(Debug, Clone)]
pub struct TestItem {
    pub base_uri: String,
    pub pages: Vec<Page>,
    pub label: String,
    pub date: Option<String>,
    pub license: Option<String>,
    pub attribution: Option<String>,
    pub metadata: Vec<MetadataEntry>,
    pub query: Option<String>,
    pub capabilities: Capabilities,
}

impl TestItem {
    pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }

    pub fn metadata(mut self, metadata: Vec<MetadataEntry>) -> Self {
        self.metadata = metadata;
        self
    }
}

impl Item for TestItem {
    fn base_uri(&self) -> &str {
        &self.base_uri
    }

    fn pages(&self) -> &[Page] {
        &self.pages
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    fn attribution(&self) -> Option<&str> {
        self.attribution.as_deref()
    }

    fn metadata(&self) -> &[MetadataEntry] {
        &self.metadata
    }

    fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    fn granularity(&self) -> Granularity {
        Granularity::Manifest
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }
}
