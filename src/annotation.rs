//! Generic Open Annotation constructors.
//!
//! Building blocks for the standalone annotation lists a canvas links to
//! via `otherContent`: OCR text overlays and search-hit lists. The document
//! core itself only emits references to those lists; the collaborator that
//! serves them composes these constructors into full documents.
//!
//! These are thin, validation-free builders. [`annotation_list`] accepts
//! whatever sequence of annotation objects it is given, and [`annotation`]
//! omits the `resource` field entirely (not `null`) when no body is
//! supplied.

use serde::Serialize;
use serde_json::Value;

use crate::uri::PRESENTATION_CONTEXT;

/// A standalone `sc:AnnotationList` document.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotationList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub resources: Vec<Value>,
}

/// An `oa:Annotation` with a secondary type (e.g. `umd:searchResult`).
#[derive(Debug, Clone, Serialize)]
pub struct Annotation {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: [String; 2],
    pub on: Value,
    pub motivation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Value>,
}

/// Inputs to [`annotation`].
#[derive(Debug, Clone)]
pub struct AnnotationParams {
    /// Becomes the annotation `@id`.
    pub id: String,
    /// Secondary `@type` alongside `oa:Annotation`.
    pub kind: String,
    /// The `on` target: a canvas URI string or a specific resource.
    pub target: Value,
    pub motivation: String,
    /// Optional `resource` body; the field is omitted when `None`.
    pub body: Option<Value>,
}

/// An `oa:FragmentSelector`, e.g. `xywh=0,0,100,100`.
#[derive(Debug, Clone, Serialize)]
pub struct FragmentSelector {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub value: String,
}

/// An `oa:SpecificResource`: a selector applied to a full resource.
#[derive(Debug, Clone, Serialize)]
pub struct SpecificResource {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub selector: Value,
    pub full: String,
}

/// A `cnt:ContentAsText` body carrying inline text.
#[derive(Debug, Clone, Serialize)]
pub struct TextBody {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub format: String,
    pub chars: String,
}

/// Wrap a sequence of annotation objects into an `sc:AnnotationList`.
pub fn annotation_list(uri: impl Into<String>, resources: Vec<Value>) -> AnnotationList {
    AnnotationList {
        context: PRESENTATION_CONTEXT,
        id: uri.into(),
        kind: "sc:AnnotationList",
        resources,
    }
}

/// Build an annotation from its parts.
pub fn annotation(params: AnnotationParams) -> Annotation {
    Annotation {
        id: params.id,
        kind: ["oa:Annotation".to_string(), params.kind],
        on: params.target,
        motivation: params.motivation,
        resource: params.body,
    }
}

pub fn fragment_selector(value: impl Into<String>) -> FragmentSelector {
    FragmentSelector {
        kind: "oa:FragmentSelector",
        value: value.into(),
    }
}

pub fn specific_resource(selector: Value, full: impl Into<String>) -> SpecificResource {
    SpecificResource {
        kind: "oa:SpecificResource",
        selector,
        full: full.into(),
    }
}

/// Inline text body; `format` defaults to `text/plain`.
pub fn text_body(text: impl Into<String>, format: Option<String>) -> TextBody {
    TextBody {
        kind: "cnt:ContentAsText",
        format: format.unwrap_or_else(|| "text/plain".to_string()),
        chars: text.into(),
    }
}
