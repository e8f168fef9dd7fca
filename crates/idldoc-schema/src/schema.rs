//! Schema tree handles exposed to the documentation renderer.
//!
//! The renderer never inspects schema semantics; it reads the narrow
//! surface defined here: declared types, optionality, conditional
//! inclusion, and feature flags. Trees are assembled by the upstream
//! parser through [`SchemaBuilder`] and are immutable afterwards.

use std::collections::HashMap;
use std::path::Path;

use crate::{Doc, DocUnit, SourceInfo};

/// A member's declared type, reduced to what documentation needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeRef {
    /// A named type, by its canonical documentation name.
    Name(String),
    /// An array whose element type has the given canonical name.
    Array(String),
}

/// One member of a schema entity: an argument, field, or enum value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaMember {
    name: String,
    ty: Option<TypeRef>,
    optional: bool,
    info: SourceInfo,
}

impl SchemaMember {
    /// Create a member with no type concept (e.g. an enum value).
    #[must_use]
    pub fn new(name: impl Into<String>, info: SourceInfo) -> Self {
        Self {
            name: name.into(),
            ty: None,
            optional: false,
            info,
        }
    }

    /// Set the declared type.
    #[must_use]
    pub fn with_type(mut self, ty: TypeRef) -> Self {
        self.ty = Some(ty);
        self
    }

    /// Mark the member optional.
    #[must_use]
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Member name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type, `None` for members without one.
    #[must_use]
    pub fn type_ref(&self) -> Option<&TypeRef> {
        self.ty.as_ref()
    }

    /// Whether the member is declared optional.
    #[must_use]
    pub fn optional(&self) -> bool {
        self.optional
    }

    /// Where the member is declared.
    #[must_use]
    pub fn info(&self) -> &SourceInfo {
        &self.info
    }
}

/// A feature flag attached to an entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
    name: String,
    special: bool,
    info: SourceInfo,
}

impl Feature {
    /// Create an ordinary feature flag.
    #[must_use]
    pub fn new(name: impl Into<String>, info: SourceInfo) -> Self {
        Self {
            name: name.into(),
            special: false,
            info,
        }
    }

    /// Mark the flag special, hoisting it into the entity's option block.
    #[must_use]
    pub fn with_special(mut self, special: bool) -> Self {
        self.special = special;
        self
    }

    /// Flag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the flag is hoisted into the option block.
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.special
    }

    /// Where the flag is declared.
    #[must_use]
    pub fn info(&self) -> &SourceInfo {
        &self.info
    }
}

/// Conditional-inclusion expression attached to an entity.
///
/// `Always` is the trivial condition; it is never rendered. The other
/// variants form a boolean expression over build-configuration names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    /// Unconditionally included; not rendered.
    Always,
    /// Included when the named configuration option is set.
    Define(String),
    /// Negation.
    Not(Box<Condition>),
    /// Conjunction.
    All(Vec<Condition>),
    /// Disjunction.
    Any(Vec<Condition>),
}

impl Condition {
    /// Whether the entity carries a non-trivial condition.
    #[must_use]
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Always)
    }

    /// Render the condition as documentation text.
    ///
    /// # Example
    ///
    /// ```
    /// use idldoc_schema::Condition;
    ///
    /// let cond = Condition::All(vec![
    ///     Condition::Define("CONFIG_NET".to_owned()),
    ///     Condition::Not(Box::new(Condition::Define("CONFIG_WIN32".to_owned()))),
    /// ]);
    /// assert_eq!(cond.doc_gen(), "CONFIG_NET and not CONFIG_WIN32");
    /// ```
    #[must_use]
    pub fn doc_gen(&self) -> String {
        match self {
            Self::Always => String::new(),
            Self::Define(name) => name.clone(),
            Self::Not(inner) => format!("not {}", inner.operand()),
            Self::All(conds) => Self::join(conds, " and "),
            Self::Any(conds) => Self::join(conds, " or "),
        }
    }

    /// Render as an operand, parenthesizing composite expressions.
    fn operand(&self) -> String {
        match self {
            Self::All(_) | Self::Any(_) => format!("({})", self.doc_gen()),
            _ => self.doc_gen(),
        }
    }

    fn join(conds: &[Self], sep: &str) -> String {
        conds
            .iter()
            .map(Self::operand)
            .collect::<Vec<_>>()
            .join(sep)
    }
}

/// The kind of a schema entity, determining its markup directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// A callable command.
    Command,
    /// An asynchronous event.
    Event,
    /// An enumeration type.
    Enum,
    /// A struct or union type.
    Object,
    /// An alternate (one-of) type.
    Alternate,
}

impl EntityKind {
    /// Directive name used when emitting the entity header.
    #[must_use]
    pub fn directive(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Event => "event",
            Self::Enum => "enum",
            Self::Object => "object",
            Self::Alternate => "alternate",
        }
    }
}

/// A named definition in the schema: command, event, or type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaEntity {
    name: String,
    kind: EntityKind,
    info: SourceInfo,
    cond: Condition,
    features: Vec<Feature>,
    members: Vec<SchemaMember>,
}

impl SchemaEntity {
    /// Create an entity with no condition, features, or members.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: EntityKind, info: SourceInfo) -> Self {
        Self {
            name: name.into(),
            kind,
            info,
            cond: Condition::Always,
            features: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Set the conditional-inclusion expression.
    #[must_use]
    pub fn with_cond(mut self, cond: Condition) -> Self {
        self.cond = cond;
        self
    }

    /// Append a feature flag (declaration order is preserved).
    #[must_use]
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// Append a member (declaration order is preserved).
    #[must_use]
    pub fn with_member(mut self, member: SchemaMember) -> Self {
        self.members.push(member);
        self
    }

    /// Entity identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entity kind.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Where the entity is defined.
    #[must_use]
    pub fn info(&self) -> &SourceInfo {
        &self.info
    }

    /// Conditional-inclusion expression.
    #[must_use]
    pub fn cond(&self) -> &Condition {
        &self.cond
    }

    /// Feature flags in declaration order.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Members in declaration order.
    #[must_use]
    pub fn members(&self) -> &[SchemaMember] {
        &self.members
    }

    /// Look up a member by name.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&SchemaMember> {
        self.members.iter().find(|m| m.name() == name)
    }
}

/// A parsed schema: documentation units plus entity and module lookups.
#[derive(Debug, Default)]
pub struct Schema {
    units: Vec<DocUnit>,
    entities: HashMap<String, SchemaEntity>,
    modules: Vec<String>,
}

impl Schema {
    /// Start building a schema tree.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Documentation units in declaration order.
    #[must_use]
    pub fn units(&self) -> &[DocUnit] {
        &self.units
    }

    /// Look up an entity by identifier.
    #[must_use]
    pub fn entity(&self, symbol: &str) -> Option<&SchemaEntity> {
        self.entities.get(symbol)
    }

    /// Module names spanned by the schema, each listed once.
    #[must_use]
    pub fn modules(&self) -> &[String] {
        &self.modules
    }
}

/// Builder used by the upstream parser to assemble a [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    units: Vec<DocUnit>,
    entities: HashMap<String, SchemaEntity>,
    modules: Vec<String>,
}

impl SchemaBuilder {
    /// Record a module and emit its marker unit.
    #[must_use]
    pub fn module(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        if !self.modules.contains(&path) {
            self.modules.push(path.clone());
        }
        self.units.push(DocUnit::Module { path });
        self
    }

    /// Append a free-form documentation block.
    #[must_use]
    pub fn freeform(mut self, doc: Doc) -> Self {
        self.units.push(DocUnit::Freeform(doc));
        self
    }

    /// Register an entity together with its documentation.
    #[must_use]
    pub fn entity(mut self, entity: SchemaEntity, doc: Doc) -> Self {
        let symbol = entity.name().to_owned();
        self.entities.insert(symbol.clone(), entity);
        self.units.push(DocUnit::Entity { symbol, doc });
        self
    }

    /// Finish the tree.
    #[must_use]
    pub fn build(self) -> Schema {
        Schema {
            units: self.units,
            entities: self.entities,
            modules: self.modules,
        }
    }
}

/// Error reported by the upstream schema parser.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Malformed schema detected while parsing.
    #[error("{info}: {msg}")]
    Parse {
        /// Human-readable description.
        msg: String,
        /// Where the problem was found.
        info: SourceInfo,
    },

    /// Schema file could not be read.
    #[error("can't read schema file {path}: {source}")]
    Read {
        /// Path handed to the parser.
        path: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

/// The upstream parser boundary.
///
/// Implementations own the schema language; the renderer only relies on
/// the returned tree being well-formed.
pub trait SchemaParser {
    /// Parse the schema file at `path` into a documentation tree.
    fn parse(&self, path: &Path) -> Result<Schema, SchemaError>;
}
