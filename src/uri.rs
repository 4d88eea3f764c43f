//! URI derivation for every `@id` emitted in the generated documents.
//!
//! All derived URIs are pure functions of a caller-supplied base URI plus a
//! path segment and an identifier. The base URI is expected to be
//! trailing-slash-terminated; these helpers concatenate and nothing more.
//!
//! ## Identifiers containing `/`
//!
//! The helpers do NOT escape identifiers. An identifier containing a path
//! separator passes through verbatim, which is what the document core wants
//! (the image server resolves the full path). Routing layers that need to
//! embed such an identifier in a single path segment — e.g. when issuing a
//! see-other redirect to a canonical manifest path — must escape it first
//! with [`escape_identifier`].
//!
//! ## IIIF image requests
//!
//! [`image_uri`] implements the Image API request form
//! `{base}{id}/{region}/{size}/{rotation}/{quality}.{format}`. With no
//! parameters it returns the bare service root `{base}{id}`, suitable for a
//! `service` block `@id`. Parameter values are not validated against the
//! Image API grammar; garbage in, garbage out — callers requesting crops or
//! scales are responsible for well-formed values.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// JSON-LD context for IIIF Presentation API 2.0 documents.
pub const PRESENTATION_CONTEXT: &str = "http://iiif.io/api/presentation/2/context.json";
/// JSON-LD context for IIIF Image API 2.0 service blocks.
pub const IMAGE_CONTEXT: &str = "http://iiif.io/api/image/2/context.json";
/// Image API compliance profile for full canvas image services.
pub const LEVEL2_PROFILE: &str = "http://iiif.io/api/image/2/profiles/level2.json";
/// Image API compliance profile for the manifest thumbnail service.
pub const LEVEL1_PROFILE: &str = "http://iiif.io/api/image/2/level1.json";

/// Everything outside the RFC 3986 unreserved set (`A-Za-z0-9 - _ . ~`).
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// IIIF image-request parameters, each independently defaultable.
///
/// A value of all-`None` (the `Default`) means "no parameters": the builder
/// returns the bare service root. Setting any field forces the full
/// five-segment request form, with unset fields taking the Image API
/// defaults `full/full/0/default.jpg`.
///
/// `rotation` is a string rather than a number: the Image API admits
/// mirrored (`!90`) and fractional rotations, which the builder passes
/// through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageParams {
    pub region: Option<String>,
    pub size: Option<String>,
    pub rotation: Option<String>,
    pub quality: Option<String>,
    pub format: Option<String>,
}

impl ImageParams {
    /// No parameters — yields the bare image-service root.
    pub fn none() -> Self {
        Self::default()
    }

    /// Only a size constraint, e.g. `"80,100"` for the manifest thumbnail.
    pub fn sized(size: impl Into<String>) -> Self {
        Self {
            size: Some(size.into()),
            ..Self::default()
        }
    }

    /// True when no field is set, i.e. the service-root form applies.
    pub fn is_empty(&self) -> bool {
        self.region.is_none()
            && self.size.is_none()
            && self.rotation.is_none()
            && self.quality.is_none()
            && self.format.is_none()
    }
}

/// Build an image-service URI for `image_id` under `image_base_uri`.
///
/// Empty params → `{base}{id}`. Any param set → all five request segments,
/// each falling back to its Image API default independently.
pub fn image_uri(image_base_uri: &str, image_id: &str, params: &ImageParams) -> String {
    let root = format!("{image_base_uri}{image_id}");
    if params.is_empty() {
        return root;
    }
    let region = params.region.as_deref().unwrap_or("full");
    let size = params.size.as_deref().unwrap_or("full");
    let rotation = params.rotation.as_deref().unwrap_or("0");
    let quality = params.quality.as_deref().unwrap_or("default");
    let format = params.format.as_deref().unwrap_or("jpg");
    format!("{root}/{region}/{size}/{rotation}/{quality}.{format}")
}

/// `{base}manifest`
pub fn manifest_uri(base_uri: &str) -> String {
    format!("{base_uri}manifest")
}

/// `{base}canvas/{page_id}`
pub fn canvas_uri(base_uri: &str, page_id: &str) -> String {
    format!("{base_uri}canvas/{page_id}")
}

/// `{base}annotation/{doc_id}`
pub fn annotation_uri(base_uri: &str, doc_id: &str) -> String {
    format!("{base_uri}annotation/{doc_id}")
}

/// `{base}list/{page_id}`
pub fn list_uri(base_uri: &str, page_id: &str) -> String {
    format!("{base_uri}list/{page_id}")
}

/// `{base}sequence/{label}`
pub fn sequence_uri(base_uri: &str, label: &str) -> String {
    format!("{base_uri}sequence/{label}")
}

/// Percent-encode a search query for embedding in a `?q=` parameter.
///
/// Encodes everything outside the unreserved set, space included (`%20`,
/// not `+`), matching how the auxiliary search-hit list endpoints expect
/// their query parameter.
pub fn encode_query(query: &str) -> String {
    utf8_percent_encode(query, URI_COMPONENT).to_string()
}

/// Percent-encode an identifier so it fits in a single URI path segment.
///
/// For the routing boundary only: identifiers containing `/` must be
/// escaped before they appear in a canonical manifest path (e.g. in a
/// see-other redirect). The document core never applies this to the ids it
/// concatenates — see the module docs.
pub fn escape_identifier(id: &str) -> String {
    utf8_percent_encode(id, URI_COMPONENT).to_string()
}
