//! Source-dependency reporting for host cache invalidation.

use std::path::Path;

use idldoc_schema::Schema;

use crate::directive::DocHost;

/// Pseudo-module holding built-in definitions; it has no backing file.
const BUILTIN_MODULE: &str = "./builtin";

/// Report every schema file the rendered output depends on.
///
/// Each module of the tree is reported exactly once, as an absolute
/// path resolved against `schema_dir`, through
/// [`DocHost::note_dependency`]. The built-in pseudo-module is skipped.
pub fn note_dependencies<H: DocHost>(host: &mut H, schema: &Schema, schema_dir: &Path) {
    for module in schema.modules() {
        if module == BUILTIN_MODULE {
            continue;
        }
        let joined = schema_dir.join(module);
        let path = std::path::absolute(&joined).unwrap_or(joined);
        tracing::debug!("noting dependency on {}", path.display());
        host.note_dependency(&path);
    }
}
