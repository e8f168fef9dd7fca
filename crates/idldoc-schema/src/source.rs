//! Source locations for documentation comments.

use std::fmt;

/// Location of a piece of documentation in a schema file.
///
/// Line numbers are one-based, matching what the schema parser reports.
/// The render boundary converts to the host's zero-based numbering when
/// lines are handed over.
///
/// # Example
///
/// ```
/// use idldoc_schema::SourceInfo;
///
/// let info = SourceInfo::new("net.idl", 12);
/// assert_eq!(info.to_string(), "net.idl:12");
/// assert_eq!(info.next_line(2).line(), 14);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceInfo {
    fname: String,
    line: usize,
}

impl SourceInfo {
    /// Create a source location (one-based line).
    #[must_use]
    pub fn new(fname: impl Into<String>, line: usize) -> Self {
        Self {
            fname: fname.into(),
            line,
        }
    }

    /// File the documentation was read from.
    #[must_use]
    pub fn fname(&self) -> &str {
        &self.fname
    }

    /// One-based line number.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// A location `count` lines further down in the same file.
    #[must_use]
    pub fn next_line(&self, count: usize) -> Self {
        Self {
            fname: self.fname.clone(),
            line: self.line + count,
        }
    }
}

impl fmt::Display for SourceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.fname, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        let info = SourceInfo::new("block.idl", 7);
        assert_eq!(info.to_string(), "block.idl:7");
    }

    #[test]
    fn test_next_line() {
        let info = SourceInfo::new("block.idl", 7);
        let advanced = info.next_line(3);
        assert_eq!(advanced.fname(), "block.idl");
        assert_eq!(advanced.line(), 10);
        // Original is untouched.
        assert_eq!(info.line(), 7);
    }

    #[test]
    fn test_next_line_zero() {
        let info = SourceInfo::new("block.idl", 7);
        assert_eq!(info.next_line(0), info);
    }
}
