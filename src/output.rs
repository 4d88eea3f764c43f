//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is information-centric, not URI-centric. The primary display for
//! every entity (manifest, canvas) is its semantic identity — label and
//! positional index — with derived URIs shown as secondary context via
//! indented lines. This makes the summary readable as a document inventory
//! while still letting users trace every entity back to its `@id`.
//!
//! # Output Format
//!
//! ```text
//! Manifest: The Daily Courier, 1903-05-01
//!     Id: https://example.org/issue/manifest
//!     Canvases: 2
//!     001 Page 1
//!         Canvas: https://example.org/issue/canvas/p1
//!         Image: 1000x1500 (img1)
//!         Lists: 2
//!     002 Page 2
//!         Canvas: https://example.org/issue/canvas/p2
//!         Image: 1000x1500 (img2)
//! ```
//!
//! An empty item prints the manifest header with `Canvases: 0`.

use crate::manifest::Manifest;

/// Format the post-generation summary as display lines.
pub fn format_manifest_summary(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Manifest: {}", manifest.label));
    lines.push(format!("    Id: {}", manifest.id));

    let canvases = manifest
        .sequences
        .first()
        .map(|sequence| sequence.canvases.as_slice())
        .unwrap_or_default();
    lines.push(format!("    Canvases: {}", canvases.len()));

    for (index, canvas) in canvases.iter().enumerate() {
        lines.push(format!("    {:03} {}", index + 1, canvas.label));
        lines.push(format!("        Canvas: {}", canvas.id));
        if let Some(painting) = canvas.images.first() {
            lines.push(format!(
                "        Image: {}x{} ({})",
                canvas.width,
                canvas.height,
                trailing_segment(&painting.resource.id)
            ));
        }
        if !canvas.other_content.is_empty() {
            lines.push(format!("        Lists: {}", canvas.other_content.len()));
        }
    }
    lines
}

/// Print the summary to stdout.
pub fn print_manifest_summary(manifest: &Manifest) {
    for line in format_manifest_summary(manifest) {
        println!("{line}");
    }
}

/// Last path segment of a URI, for compact image identification.
fn trailing_segment(uri: &str) -> &str {
    uri.rsplit('/').next().unwrap_or(uri)
}
