//! Shared value objects consumed by the document builders.
//!
//! These types carry already-resolved page and image metadata into a single
//! document-generation call. They are built fresh per call from upstream
//! data, stay immutable for the duration of that call, and are never cached
//! or persisted by this crate.

use serde::{Deserialize, Serialize};

/// One raster asset backing a page.
///
/// `width` and `height` must be positive — they become the canvas geometry
/// and the image-service dimensions. Zero dimensions are rejected by the
/// canvas builder, not silently defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// Stable identifier, used to derive the image-service and annotation URIs
    pub id: String,
    /// Pixel width of the full-size asset
    pub width: u32,
    /// Pixel height of the full-size asset
    pub height: u32,
    /// Canonical source URI of the asset, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// One displayable unit of the object — a scanned leaf, a newspaper page.
///
/// Each page owns exactly one [`Image`]; there is no sharing of raster
/// assets between pages in this model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Stable identifier, used to derive the canvas and list URIs
    pub id: String,
    /// Display label (e.g. "Page 1")
    pub label: String,
    /// The raster asset painted onto this page's canvas
    pub image: Image,
    /// Canonical source URI of the page, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// A manifest `metadata` entry value: either a single string or a list.
///
/// IIIF metadata values may be multivalued (e.g. several subjects under one
/// label). Untagged serde keeps the JSON shape the Presentation API expects:
/// a bare string or a bare array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MetadataValue {
    Single(String),
    Many(Vec<String>),
}

/// A label/value pair in the manifest's descriptive `metadata` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub label: String,
    pub value: MetadataValue,
}

impl MetadataEntry {
    pub fn single(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: MetadataValue::Single(value.into()),
        }
    }

    pub fn many(label: impl Into<String>, values: impl IntoIterator<Item = String>) -> Self {
        Self {
            label: label.into(),
            value: MetadataValue::Many(values.into_iter().collect()),
        }
    }
}
