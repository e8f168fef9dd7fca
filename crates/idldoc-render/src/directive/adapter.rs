//! Directive adapter: host invocation to markup nodes.

use std::path::{Path, PathBuf};

use idldoc_schema::{Schema, SchemaParser};

use crate::config::DocConfig;
use crate::deps::note_dependencies;
use crate::error::ExtensionError;
use crate::transmogrifier::transmogrify;

use super::DocHost;

/// Options recognized by the schema documentation directive.
#[derive(Clone, Debug)]
pub struct DocDirectiveOptions {
    /// Schema file argument, relative to the configured source tree.
    pub schema: String,
    /// Explicit schema file override, used verbatim when set.
    pub schema_file: Option<PathBuf>,
    /// Select the transmogrifier over the legacy renderer.
    pub transmogrify: bool,
}

impl DocDirectiveOptions {
    /// Options for rendering `schema` with the defaults: no override,
    /// legacy path selected.
    #[must_use]
    pub fn new(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            schema_file: None,
            transmogrify: false,
        }
    }

    /// Set an explicit schema file, bypassing source tree resolution.
    #[must_use]
    pub fn with_schema_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.schema_file = Some(path.into());
        self
    }

    /// Toggle the transmogrifier engine.
    #[must_use]
    pub fn with_transmogrify(mut self, transmogrify: bool) -> Self {
        self.transmogrify = transmogrify;
        self
    }
}

/// The legacy rendering path, kept outside this engine.
///
/// Hosts that still need it register an implementation on the
/// directive; it receives the parsed schema and produces nodes on its
/// own.
pub trait LegacyRender<H: DocHost> {
    /// Render the schema's documentation without the transmogrifier.
    fn render(&mut self, schema: &Schema, host: &mut H) -> Vec<H::Node>;
}

/// The schema documentation directive.
///
/// Receives the host invocation, runs the upstream parser, notifies the
/// host of source dependencies, drives the transmogrifier (or the
/// legacy path), and returns the parsed node sequence. All failures
/// surface here as a single [`ExtensionError`]; internal error types
/// never cross the host boundary.
pub struct DocDirective<P, H: DocHost> {
    parser: P,
    config: DocConfig,
    legacy: Option<Box<dyn LegacyRender<H>>>,
}

impl<P: SchemaParser, H: DocHost> DocDirective<P, H> {
    /// Create the directive with its parser and configuration.
    #[must_use]
    pub fn new(parser: P, config: DocConfig) -> Self {
        Self {
            parser,
            config,
            legacy: None,
        }
    }

    /// Register the legacy rendering path.
    #[must_use]
    pub fn with_legacy(mut self, legacy: impl LegacyRender<H> + 'static) -> Self {
        self.legacy = Some(Box::new(legacy));
        self
    }

    /// Run one render pass and return the document nodes.
    pub fn run(
        &mut self,
        host: &mut H,
        options: &DocDirectiveOptions,
    ) -> Result<Vec<H::Node>, ExtensionError> {
        let schema_file = options
            .schema_file
            .clone()
            .unwrap_or_else(|| self.config.resolve(&options.schema));
        let schema_dir = schema_file
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        tracing::debug!("rendering schema docs for {}", schema_file.display());

        // Parse failures are laundered into extension errors so they
        // are displayed to the user instead of leaking parser types.
        let schema = self.parser.parse(&schema_file)?;

        // Tell the host about every schema file the output depends on,
        // the named file included.
        note_dependencies(host, &schema, &schema_dir);

        if options.transmogrify {
            let lines = transmogrify(&schema)?;
            Ok(host.nested_parse(&lines))
        } else if let Some(legacy) = self.legacy.as_mut() {
            Ok(legacy.render(&schema, host))
        } else {
            Err(ExtensionError::new(
                "legacy renderer is not registered for this host",
            ))
        }
    }
}
