//! Canvas construction: one `sc:Canvas` per page, each with its embedded
//! painting annotation and optional auxiliary annotation-list references.
//!
//! The builder is a pure function of the item's pages and the configured
//! image-service base; canvas order always matches page order. Malformed
//! page data — zero image dimensions, empty identifiers — fails fast with a
//! [`CanvasError`] naming the offending page. Geometry is never silently
//! defaulted.

use serde::Serialize;
use thiserror::Error;

use crate::item::Item;
use crate::types::Page;
use crate::uri::{
    self, IMAGE_CONTEXT, ImageParams, LEVEL2_PROFILE, annotation_uri, canvas_uri, list_uri,
};

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("page at index {0} has an empty id")]
    EmptyPageId(usize),
    #[error("page '{0}' has an image with an empty id")]
    EmptyImageId(String),
    #[error("page '{page_id}': image '{image_id}' has non-positive geometry {width}x{height}")]
    ZeroGeometry {
        page_id: String,
        image_id: String,
        width: u32,
        height: u32,
    },
}

/// An Image API service block (`@context` + endpoint `@id` + profile).
#[derive(Debug, Clone, Serialize)]
pub struct ImageService {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub profile: &'static str,
}

/// The `resource` of a painting annotation: the full-size image reference.
#[derive(Debug, Clone, Serialize)]
pub struct ImageResource {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub format: &'static str,
    pub service: ImageService,
    pub height: u32,
    pub width: u32,
}

/// The single `sc:painting` annotation embedded in each canvas.
#[derive(Debug, Clone, Serialize)]
pub struct PaintingAnnotation {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub motivation: &'static str,
    pub resource: ImageResource,
    pub on: String,
}

/// A bare reference to an externally-served annotation list.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotationListRef {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
}

/// One page's visual surface.
#[derive(Debug, Clone, Serialize)]
pub struct Canvas {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub label: String,
    pub height: u32,
    pub width: u32,
    pub images: Vec<PaintingAnnotation>,
    #[serde(rename = "otherContent")]
    pub other_content: Vec<AnnotationListRef>,
}

/// Build every canvas for the item, in page order.
pub fn canvases(item: &dyn Item, image_base_uri: &str) -> Result<Vec<Canvas>, CanvasError> {
    item.pages()
        .iter()
        .enumerate()
        .map(|(index, page)| build_canvas(item, page, index, image_base_uri))
        .collect()
}

fn validate_page(page: &Page, index: usize) -> Result<(), CanvasError> {
    if page.id.is_empty() {
        return Err(CanvasError::EmptyPageId(index));
    }
    if page.image.id.is_empty() {
        return Err(CanvasError::EmptyImageId(page.id.clone()));
    }
    if page.image.width == 0 || page.image.height == 0 {
        return Err(CanvasError::ZeroGeometry {
            page_id: page.id.clone(),
            image_id: page.image.id.clone(),
            width: page.image.width,
            height: page.image.height,
        });
    }
    Ok(())
}

fn build_canvas(
    item: &dyn Item,
    page: &Page,
    index: usize,
    image_base_uri: &str,
) -> Result<Canvas, CanvasError> {
    validate_page(page, index)?;
    let base = item.base_uri();
    let image = &page.image;
    let service_root = uri::image_uri(image_base_uri, &image.id, &ImageParams::none());

    Ok(Canvas {
        id: canvas_uri(base, &page.id),
        kind: "sc:Canvas",
        label: page.label.clone(),
        height: image.height,
        width: image.width,
        images: vec![PaintingAnnotation {
            id: annotation_uri(base, &image.id),
            kind: "oa:Annotation",
            motivation: "sc:painting",
            resource: ImageResource {
                id: service_root.clone(),
                kind: "dctypes:Image",
                format: "image/jpeg",
                service: ImageService {
                    context: IMAGE_CONTEXT,
                    id: service_root,
                    profile: LEVEL2_PROFILE,
                },
                height: image.height,
                width: image.width,
            },
            on: canvas_uri(base, &page.id),
        }],
        other_content: other_content(item, page),
    })
}

/// Auxiliary annotation-list references for one page, order-sensitive:
/// textblock list first, then the search-hit list.
///
/// Each entry is gated by the item's [capabilities] alone — the lists'
/// contents are never consulted. The search-hit entry additionally requires
/// a non-empty active query, which is embedded percent-encoded.
///
/// [capabilities]: crate::item::Capabilities
pub fn other_content(item: &dyn Item, page: &Page) -> Vec<AnnotationListRef> {
    let capabilities = item.capabilities();
    let mut refs = Vec::new();
    if capabilities.textblock_lists {
        refs.push(AnnotationListRef {
            id: list_uri(item.base_uri(), &page.id),
            kind: "sc:AnnotationList",
        });
    }
    if capabilities.search_hit_lists
        && let Some(query) = item.query()
        && !query.is_empty()
    {
        refs.push(AnnotationListRef {
            id: format!(
                "{}?q={}",
                list_uri(item.base_uri(), &page.id),
                uri::encode_query(query)
            ),
            kind: "sc:AnnotationList",
        });
    }
    refs
}
