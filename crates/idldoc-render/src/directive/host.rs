//! Host pipeline trait.

use std::path::Path;

use crate::buffer::LineBuffer;

/// The document pipeline hosting the directives.
///
/// The host owns markup parsing and output assembly; the engine hands
/// over provenance-tagged lines and dependency notes and gets markup
/// nodes back. One host serves one document being rendered.
pub trait DocHost {
    /// Markup node type produced by the host's parser.
    type Node;

    /// Record that the current document depends on `path`, so the host
    /// re-renders it when that file changes.
    fn note_dependency(&mut self, path: &Path);

    /// Parse emitted lines with the host's nested-parse facility.
    ///
    /// Lines carry (source file, zero-based line) so the host's
    /// diagnostics point at the original schema comments.
    fn nested_parse(&mut self, lines: &LineBuffer) -> Vec<Self::Node>;
}
