//! Documentation units and their typed sections.
//!
//! A schema file yields an ordered sequence of [`DocUnit`]s: module
//! markers, free-form prose blocks, and entity-bound documentation.
//! Entity docs carry typed [`Section`]s in the order they were authored.

use crate::SourceInfo;

/// The kind of a documentation section.
///
/// Closed set: adding a kind is a compile-time obligation for every
/// consumer that matches on it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionKind {
    /// Plain prose paragraph.
    Paragraph,
    /// "Errors:" list describing failure responses.
    Errors,
    /// "Returns:" description of a command's result.
    Returns,
    /// Description of one argument or field, keyed by member name.
    Member(String),
}

/// One typed sub-block of a documentation comment.
///
/// `text` is the raw author-written body, unmodified. `info` anchors the
/// first line of the body; provenance for later lines is derived from it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    /// Section kind.
    pub kind: SectionKind,
    /// Raw comment body.
    pub text: String,
    /// Location of the first body line.
    pub info: SourceInfo,
}

impl Section {
    /// Create a section.
    #[must_use]
    pub fn new(kind: SectionKind, text: impl Into<String>, info: SourceInfo) -> Self {
        Self {
            kind,
            text: text.into(),
            info,
        }
    }
}

/// A "Since:" tag with its own location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SinceTag {
    /// Version text, e.g. `"7.0"`.
    pub text: String,
    /// Location of the tag line.
    pub info: SourceInfo,
}

/// One documentation comment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Doc {
    /// Location of the comment's first line.
    pub info: SourceInfo,
    /// "Since:" tag, if the comment declares one.
    pub since: Option<SinceTag>,
    /// Typed sections in authored order.
    pub sections: Vec<Section>,
}

impl Doc {
    /// Create an empty documentation comment anchored at `info`.
    #[must_use]
    pub fn new(info: SourceInfo) -> Self {
        Self {
            info,
            since: None,
            sections: Vec::new(),
        }
    }

    /// Attach a "Since:" tag.
    #[must_use]
    pub fn with_since(mut self, text: impl Into<String>, info: SourceInfo) -> Self {
        self.since = Some(SinceTag {
            text: text.into(),
            info,
        });
        self
    }

    /// Append a section.
    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }
}

/// One documented item in a schema file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DocUnit {
    /// Module marker: a bare file-path label.
    Module {
        /// Module file path, relative to the schema's directory.
        path: String,
    },
    /// Free-form prose block (at most one text section).
    Freeform(Doc),
    /// Documentation bound to a schema entity.
    Entity {
        /// Entity identifier, resolved through the schema's lookup.
        symbol: String,
        /// The attached documentation comment.
        doc: Doc,
    },
}
