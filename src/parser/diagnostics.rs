//! Diagnostic records accumulated during a parse.
//!
//! Parse problems never abort the parse; they are collected here in source
//! order and reported together at the end. Used by both the library API
//! and the `check --json` output.

use std::fmt;

use serde::Serialize;

/// What went wrong at a particular point in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// The input contained no lines at all.
    EmptyInput,
    /// The header line did not start with `solid `.
    HeaderSyntax,
    /// Expected one keyword, found something else.
    UnexpectedToken,
    /// A token expected to be a coordinate failed to parse as a float.
    InvalidNumber,
    /// The underlying line source reported an I/O failure.
    SourceRead,
}

impl DiagnosticKind {
    /// Machine-readable code, used in `check` output.
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::EmptyInput => "empty-input",
            DiagnosticKind::HeaderSyntax => "header-syntax",
            DiagnosticKind::UnexpectedToken => "unexpected-token",
            DiagnosticKind::InvalidNumber => "invalid-number",
            DiagnosticKind::SourceRead => "source-read",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single parse diagnostic, tagged with the line it was detected on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based line number; 0 means before any line was read.
    pub line: u32,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: u32, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            line,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Line 0 means the problem predates the first line (empty input,
        // a failed first read); no line prefix in that case.
        if self.line == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "line {}: {}", self.line, self.message)
        }
    }
}

/// Ordered collection of diagnostics from one parse.
///
/// Never cleared while a parse is running; `Display` joins all records
/// with newlines, which is the "error text" the CLI prints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.records.push(diagnostic);
    }

    /// Record a diagnostic from its parts.
    pub fn record(&mut self, line: u32, kind: DiagnosticKind, message: impl Into<String>) {
        self.push(Diagnostic::new(line, kind, message));
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.records
    }

    /// Whether any record has the given kind.
    pub fn has_kind(&self, kind: DiagnosticKind) -> bool {
        self.records.iter().any(|d| d.kind == kind)
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_diagnostics() {
        let diags = Diagnostics::new();

        assert!(diags.is_empty());
        assert_eq!(diags.to_string(), "");
    }

    #[test]
    fn test_push_preserves_order() {
        let mut diags = Diagnostics::new();
        diags.record(3, DiagnosticKind::UnexpectedToken, "expected \"facet\"");
        diags.record(7, DiagnosticKind::InvalidNumber, "invalid number \"a\"");

        let lines: Vec<u32> = diags.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![3, 7]);
    }

    #[test]
    fn test_display_joins_with_newlines() {
        let mut diags = Diagnostics::new();
        diags.record(1, DiagnosticKind::HeaderSyntax, "expected \"solid \" header");
        diags.record(4, DiagnosticKind::InvalidNumber, "invalid number \"x\"");

        assert_eq!(
            diags.to_string(),
            "line 1: expected \"solid \" header\nline 4: invalid number \"x\""
        );
    }

    #[test]
    fn test_line_zero_renders_without_prefix() {
        let d = Diagnostic::new(0, DiagnosticKind::EmptyInput, "input is empty");
        assert_eq!(d.to_string(), "input is empty");
    }

    #[test]
    fn test_has_kind() {
        let mut diags = Diagnostics::new();
        diags.record(2, DiagnosticKind::InvalidNumber, "invalid number \"q\"");

        assert!(diags.has_kind(DiagnosticKind::InvalidNumber));
        assert!(!diags.has_kind(DiagnosticKind::HeaderSyntax));
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_value(DiagnosticKind::InvalidNumber).unwrap();
        assert_eq!(json, "invalid-number");
    }
}
