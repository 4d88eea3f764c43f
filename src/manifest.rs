//! Manifest assembly: descriptive fields, thumbnail, and the canvas
//! sequence composed into the top-level `sc:Manifest` document.
//!
//! The assembler is a single branch on "any pages?" that builds each
//! variant completely:
//!
//! - no pages → `sequences: []` and `thumbnail: {}` — a valid, minimal
//!   manifest, not an error;
//! - pages → a thumbnail derived from the first page's image at the
//!   configured constrained size, and exactly one sequence labeled
//!   "Current Page Order" whose `startCanvas` is the first canvas.
//!
//! Generation is deterministic: the same item and config always serialize
//! to byte-identical JSON.

use serde::Serialize;
use thiserror::Error;

use crate::canvas::{self, Canvas, CanvasError, ImageService};
use crate::config::GeneratorConfig;
use crate::item::{IssueItem, Item, ItemDescriptor};
use crate::types::MetadataEntry;
use crate::uri::{
    self, IMAGE_CONTEXT, ImageParams, LEVEL1_PROFILE, PRESENTATION_CONTEXT, canvas_uri,
    manifest_uri, sequence_uri,
};

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("malformed item data: {0}")]
    Canvas(#[from] CanvasError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The manifest thumbnail slot: `{}` until pages exist to derive one from.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ManifestThumbnail {
    /// Serializes as `{}` — the empty-pages placeholder.
    Empty {},
    Reference(Thumbnail),
}

/// A constrained-size image reference with a level-1 service block.
#[derive(Debug, Clone, Serialize)]
pub struct Thumbnail {
    #[serde(rename = "@id")]
    pub id: String,
    pub service: ImageService,
}

/// The single `sc:Sequence` emitted for non-empty items.
#[derive(Debug, Clone, Serialize)]
pub struct Sequence {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub label: &'static str,
    #[serde(rename = "startCanvas")]
    pub start_canvas: String,
    pub canvases: Vec<Canvas>,
}

/// The institutional logo reference.
#[derive(Debug, Clone, Serialize)]
pub struct Logo {
    #[serde(rename = "@id")]
    pub id: String,
}

/// A IIIF Presentation API 2.0 manifest document.
///
/// Field declaration order is emission order (`preserve_order`), matching
/// the Presentation API's canonical examples.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub label: String,
    pub metadata: Vec<MetadataEntry>,
    #[serde(rename = "navDate")]
    pub nav_date: Option<String>,
    pub license: Option<String>,
    pub attribution: Option<String>,
    pub sequences: Vec<Sequence>,
    pub thumbnail: ManifestThumbnail,
    pub logo: Logo,
}

/// Assemble the manifest for `item`.
pub fn build_manifest(item: &dyn Item, config: &GeneratorConfig) -> Result<Manifest, ManifestError> {
    let base = item.base_uri();
    let (sequences, thumbnail) = match item.pages() {
        [] => (Vec::new(), ManifestThumbnail::Empty {}),
        [first, ..] => {
            let canvases = canvas::canvases(item, &config.image_base_uri)?;
            let first_image = &first.image;
            let thumbnail = Thumbnail {
                id: uri::image_uri(
                    &config.image_base_uri,
                    &first_image.id,
                    &ImageParams::sized(config.thumbnail_size.clone()),
                ),
                service: ImageService {
                    context: IMAGE_CONTEXT,
                    id: uri::image_uri(&config.image_base_uri, &first_image.id, &ImageParams::none()),
                    profile: LEVEL1_PROFILE,
                },
            };
            let sequence = Sequence {
                id: sequence_uri(base, "normal"),
                kind: "sc:Sequence",
                label: "Current Page Order",
                start_canvas: canvas_uri(base, &first.id),
                canvases,
            };
            (vec![sequence], ManifestThumbnail::Reference(thumbnail))
        }
    };

    Ok(Manifest {
        context: PRESENTATION_CONTEXT,
        id: manifest_uri(base),
        kind: "sc:Manifest",
        label: item.label().to_string(),
        metadata: item.metadata().to_vec(),
        nav_date: item.date().map(str::to_string),
        license: item.license().map(str::to_string),
        attribution: item.attribution().map(str::to_string),
        sequences,
        thumbnail,
        logo: Logo {
            id: config.logo_uri.clone(),
        },
    })
}

/// Generate the manifest document for a fully resolved issue URI.
///
/// This is the one operation the routing caller consumes: it builds an
/// [`IssueItem`] from the descriptor (attaching the active query, if any),
/// assembles the manifest, and hands back the serialized JSON value for the
/// response body. Identifier resolution, redirects, and not-found handling
/// stay on the caller's side of the boundary.
pub fn generate_manifest(
    issue_uri: &str,
    descriptor: ItemDescriptor,
    query: Option<&str>,
    config: &GeneratorConfig,
) -> Result<serde_json::Value, ManifestError> {
    let mut item = IssueItem::new(issue_uri, descriptor);
    if let Some(query) = query {
        item = item.with_query(query);
    }
    let manifest = build_manifest(&item, config)?;
    Ok(serde_json::to_value(&manifest)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{item_with, page};
    use serde_json::json;

    fn config() -> GeneratorConfig {
        GeneratorConfig {
            image_base_uri: "https://example.org/iiifsrv/".into(),
            logo_uri: "https://www.lib.umd.edu/images/wrapper/liblogo.png".into(),
            thumbnail_size: "80,100".into(),
        }
    }

    #[test]
    fn empty_item_keeps_placeholders() {
        let item = item_with(vec![]);
        let manifest = build_manifest(&item, &config()).unwrap();
        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value["sequences"], json!([]));
        assert_eq!(value["thumbnail"], json!({}));
        // Base fields are still all present.
        assert_eq!(value["@id"], "https://example.org/x/manifest");
        assert_eq!(value["@type"], "sc:Manifest");
        assert_eq!(value["navDate"], json!(null));
    }

    #[test]
    fn single_sequence_starts_at_first_canvas() {
        let item = item_with(vec![page("p1", "img1"), page("p2", "img2")]);
        let manifest = build_manifest(&item, &config()).unwrap();
        assert_eq!(manifest.sequences.len(), 1);
        let sequence = &manifest.sequences[0];
        assert_eq!(sequence.id, "https://example.org/x/sequence/normal");
        assert_eq!(sequence.label, "Current Page Order");
        assert_eq!(sequence.start_canvas, "https://example.org/x/canvas/p1");
        assert_eq!(sequence.canvases.len(), 2);
    }

    #[test]
    fn sequence_canvases_equal_canvas_builder_output() {
        let item = item_with(vec![page("p1", "img1"), page("p2", "img2")]);
        let manifest = build_manifest(&item, &config()).unwrap();
        let direct = canvas::canvases(&item, "https://example.org/iiifsrv/").unwrap();
        assert_eq!(
            serde_json::to_value(&manifest.sequences[0].canvases).unwrap(),
            serde_json::to_value(&direct).unwrap()
        );
    }

    #[test]
    fn thumbnail_comes_from_first_page() {
        let item = item_with(vec![page("p2", "img2"), page("p1", "img1")]);
        let manifest = build_manifest(&item, &config()).unwrap();
        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(
            value["thumbnail"],
            json!({
                "@id": "https://example.org/iiifsrv/img2/full/80,100/0/default.jpg",
                "service": {
                    "@context": "http://iiif.io/api/image/2/context.json",
                    "@id": "https://example.org/iiifsrv/img2",
                    "profile": "http://iiif.io/api/image/2/level1.json"
                }
            })
        );
    }

    #[test]
    fn zero_geometry_propagates_as_manifest_error() {
        let mut bad = page("p1", "img1");
        bad.image.height = 0;
        let item = item_with(vec![bad]);
        let err = build_manifest(&item, &config()).unwrap_err();
        assert!(matches!(err, ManifestError::Canvas(_)));
    }

    #[test]
    fn generation_is_byte_identical_across_calls() {
        let item = item_with(vec![page("p1", "img1")]);
        let first = serde_json::to_string(&build_manifest(&item, &config()).unwrap()).unwrap();
        let second = serde_json::to_string(&build_manifest(&item, &config()).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
