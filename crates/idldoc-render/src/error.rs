//! Error types for the render boundary.

use idldoc_schema::SchemaError;

/// Fatal contract violation in the documentation tree.
///
/// The upstream parser guarantees a well-formed tree; hitting one of
/// these means that contract was broken. The current pass is aborted and
/// nothing is handed to the host.
#[derive(Debug, thiserror::Error)]
pub enum TransmogrifyError {
    /// The tree violated an invariant the renderer relies on.
    #[error("invalid documentation tree: {0}")]
    Invariant(String),
}

/// User-facing error reported at the host boundary.
///
/// Carries message text only. Schema and invariant failures are
/// laundered into this type at the directive adapter so no internal
/// error type crosses into the host.
#[derive(Debug, thiserror::Error)]
#[error("{msg}")]
pub struct ExtensionError {
    msg: String,
}

impl ExtensionError {
    /// Create an extension error from message text.
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }

    /// The message shown to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl From<SchemaError> for ExtensionError {
    fn from(err: SchemaError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<TransmogrifyError> for ExtensionError {
    fn from(err: TransmogrifyError) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idldoc_schema::SourceInfo;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_schema_error_is_laundered_to_text() {
        let err = SchemaError::Parse {
            msg: "expected ':' after member name".to_owned(),
            info: SourceInfo::new("net.idl", 14),
        };
        let ext = ExtensionError::from(err);
        assert_eq!(ext.message(), "net.idl:14: expected ':' after member name");
    }

    #[test]
    fn test_invariant_error_message() {
        let err = TransmogrifyError::Invariant("free-form block with two sections".to_owned());
        assert_eq!(
            ExtensionError::from(err).to_string(),
            "invalid documentation tree: free-form block with two sections"
        );
    }
}
