//! Documentation model for IDL schema files.
//!
//! This crate defines the tree the upstream schema parser produces and
//! the narrow read-only surface the documentation renderer consumes:
//!
//! - [`DocUnit`] / [`Doc`] / [`Section`]: the documentation comments of a
//!   schema file in declaration order.
//! - [`Schema`] / [`SchemaEntity`] / [`SchemaMember`]: handles into the
//!   schema tree (declared types, optionality, conditions, features).
//! - [`SchemaParser`]: the parser boundary, returning a well-formed
//!   [`Schema`] or a [`SchemaError`].
//!
//! Trees are assembled through [`SchemaBuilder`] and immutable once
//! built; one tree is owned by one render pass.

mod doc;
mod schema;
mod source;

pub use doc::{Doc, DocUnit, Section, SectionKind, SinceTag};
pub use schema::{
    Condition, EntityKind, Feature, Schema, SchemaBuilder, SchemaEntity, SchemaError, SchemaMember,
    SchemaParser, TypeRef,
};
pub use source::SourceInfo;
