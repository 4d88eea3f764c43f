//! # iiif-folio
//!
//! A IIIF Presentation API v2 manifest generator for paginated, imaged
//! objects — digitized newspaper issues, books, anything with an ordered
//! run of scanned pages. Given already-resolved page and image metadata
//! plus a handful of descriptive fields, it deterministically assembles the
//! nested JSON-LD graph the Presentation API requires: manifest, sequence,
//! canvases, painting annotations, image services, and references to
//! per-page annotation lists.
//!
//! # Architecture: Pure Document Assembly
//!
//! The whole crate is a pure, synchronous computation over in-memory data.
//! There is no I/O inside the builders, no caching, and no shared state:
//! each call takes an [`item::Item`] plus a [`config::GeneratorConfig`] and
//! returns an independent document. Identifier resolution, image serving,
//! and HTTP routing live in external collaborators; the boundary operation
//! they consume is [`manifest::generate_manifest`].
//!
//! ```text
//! manifest()  →  sequence  →  canvases()  →  image_uri()
//!                                         ↘  other_content()  (list links)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `Page`/`Image` value objects and manifest metadata entries |
//! | [`item`] | The `Item` capability contract and the concrete `IssueItem` |
//! | [`uri`] | Image-request URI builder and the `@id` derivation helpers |
//! | [`canvas`] | Canvas + painting-annotation construction, `otherContent` |
//! | [`manifest`] | Top-level manifest assembly and `generate_manifest` |
//! | [`annotation`] | Generic Open Annotation constructors for overlay lists |
//! | [`config`] | `config.toml` loading, validation, stock config |
//! | [`output`] | CLI output formatting — summary display of built manifests |
//!
//! # Design Decisions
//!
//! ## Typed Documents Over JSON Trees
//!
//! Documents are plain structs with `Serialize` derives rather than
//! `serde_json::Value` trees. Field declaration order is emission order
//! (serde_json's `preserve_order`), so output matches the Presentation API
//! examples key for key and regenerating a manifest is byte-identical —
//! there is no incidental map reordering between runs.
//!
//! ## Capabilities Are Flags, Not Providers
//!
//! Whether a canvas links OCR textblock or search-hit annotation lists is
//! signalled by the typed [`item::Capabilities`] descriptor. The lists
//! themselves are produced and served elsewhere; this crate only derives
//! their URIs. Declaring a capability without serving the list produces
//! dangling references, which is the caller's contract to uphold.
//!
//! ## Fail Fast On Malformed Geometry
//!
//! A page whose image reports zero width or height would produce a canvas
//! no viewer can lay out. The canvas builder rejects it with a typed error
//! naming the page instead of substituting defaults.
//!
//! ## URI Derivation Is Concatenation
//!
//! Every `@id` is the item's trailing-slash base URI plus a fixed path
//! segment plus an identifier. Identifiers are not escaped here — see
//! [`uri`] for the boundary where escaping belongs.

pub mod annotation;
pub mod canvas;
pub mod config;
pub mod item;
pub mod manifest;
pub mod output;
pub mod types;
pub mod uri;

#[cfg(test)]
pub(crate) mod test_helpers;
