//! Transmogrifies IDL schema documentation into a markup line stream.
//!
//! This crate reads the documentation tree produced by the upstream
//! schema parser ([`idldoc_schema`]) and emits an ordered, indented
//! sequence of markup lines, each tagged with the file and line of the
//! originating comment.
//!
//! # Architecture
//!
//! - [`LineBuffer`]: append-only (text, source, line) triples with a
//!   scoped indentation cursor.
//! - [`format_type`]: pure rendering of a member's declared type.
//! - [`transmogrify`]: the walker driving one render pass over a
//!   schema's documentation units.
//! - [`directive`]: the host boundary — the [`DocHost`] trait, the
//!   schema documentation directive, and the example-block directive.
//! - [`note_dependencies`]: tells the host which schema files the
//!   output depends on.
//! - [`DocConfig`]: the process-wide source tree root, established once
//!   before any pass.
//!
//! A pass is single-threaded and synchronous; all state is pass-local,
//! and either a complete node sequence is returned or a single
//! [`ExtensionError`] is reported.

mod buffer;
pub mod config;
mod deps;
pub mod directive;
mod error;
mod transmogrifier;
mod typefmt;

pub use buffer::{EmittedLine, IndentGuard, LineBuffer};
pub use config::{ConfigError, DocConfig};
pub use deps::note_dependencies;
pub use directive::{
    DocDirective, DocDirectiveOptions, DocHost, ExampleOptions, LegacyRender, render_example,
};
pub use error::{ExtensionError, TransmogrifyError};
pub use transmogrifier::transmogrify;
pub use typefmt::format_type;
