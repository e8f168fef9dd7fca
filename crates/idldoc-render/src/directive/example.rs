//! Fenced example blocks wrapped in a titled callout.
//!
//! A leaf utility sharing the host boundary with the schema directive:
//! it renders one protocol exchange example inside an "Example:"
//! admonition, either as a bare literal block or, when annotated, as
//! markup prose with embedded `::` literal blocks lexed by the domain
//! lexer.

use idldoc_schema::SourceInfo;

use crate::buffer::LineBuffer;

/// Lexer applied to example literal blocks.
const EXAMPLE_LANGUAGE: &str = "idl";

/// Options recognized by the example directive.
#[derive(Clone, Debug, Default)]
pub struct ExampleOptions {
    /// Extra title text appended to the "Example:" caption.
    pub title: Option<String>,
    /// Parse the body as markup with embedded literal blocks instead of
    /// one standalone literal block.
    pub annotated: bool,
}

impl ExampleOptions {
    /// Defaults: no extra title, not annotated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append title text to the caption.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Treat the body as annotated markup.
    #[must_use]
    pub fn with_annotated(mut self, annotated: bool) -> Self {
        self.annotated = annotated;
        self
    }
}

/// Render one example block into markup lines.
///
/// `info` anchors the directive's content; the host nested-parses the
/// result like any other emitted lines. When annotated, `::` literal
/// blocks inside the body are switched to the domain lexer and the
/// host's default highlighting is restored afterwards.
#[must_use]
pub fn render_example(content: &str, info: &SourceInfo, options: &ExampleOptions) -> LineBuffer {
    let mut buf = LineBuffer::new();

    let title = match &options.title {
        Some(extra) => format!("Example: {extra}"),
        None => "Example:".to_owned(),
    };
    buf.append(&format!(".. admonition:: {title}"), info);

    let mut scope = buf.indented();
    scope.append(":class: example", info);
    scope.ensure_blank_line();

    if options.annotated {
        scope.append(&format!(".. highlight:: {EXAMPLE_LANGUAGE}"), info);
        scope.ensure_blank_line();
        scope.append_text(content, info);
        scope.ensure_blank_line();
        scope.append(".. highlight:: default", info);
    } else {
        scope.append(&format!(".. code-block:: {EXAMPLE_LANGUAGE}"), info);
        scope.ensure_blank_line();
        let mut literal = scope.indented();
        literal.append_text(content, info);
    }
    drop(scope);

    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(buf: &LineBuffer) -> Vec<&str> {
        buf.lines().iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_plain_example_is_a_literal_block() {
        let info = SourceInfo::new("net.idl", 20);
        let buf = render_example(
            "-> { \"execute\": \"query-net\" }\n<- { \"return\": [] }",
            &info,
            &ExampleOptions::new(),
        );

        assert_eq!(
            texts(&buf),
            [
                ".. admonition:: Example:",
                "   :class: example",
                "",
                "   .. code-block:: idl",
                "",
                "      -> { \"execute\": \"query-net\" }",
                "      <- { \"return\": [] }",
            ]
        );
    }

    #[test]
    fn test_title_option_extends_caption() {
        let info = SourceInfo::new("net.idl", 20);
        let buf = render_example(
            "-> {}",
            &info,
            &ExampleOptions::new().with_title("probing the device"),
        );
        assert_eq!(
            buf.lines()[0].text,
            ".. admonition:: Example: probing the device"
        );
    }

    #[test]
    fn test_annotated_example_scopes_the_lexer() {
        let info = SourceInfo::new("net.idl", 20);
        let buf = render_example(
            "First we ask for the state::\n\n   -> {}",
            &info,
            &ExampleOptions::new().with_annotated(true),
        );

        assert_eq!(
            texts(&buf),
            [
                ".. admonition:: Example:",
                "   :class: example",
                "",
                "   .. highlight:: idl",
                "",
                "   First we ask for the state::",
                "",
                "      -> {}",
                "",
                "   .. highlight:: default",
            ]
        );
    }

    #[test]
    fn test_example_lines_carry_content_provenance() {
        let info = SourceInfo::new("net.idl", 20);
        let buf = render_example("-> {}", &info, &ExampleOptions::new());
        assert!(buf.lines().iter().all(|l| l.source == "net.idl"));
        assert_eq!(buf.depth(), 0);
    }
}
