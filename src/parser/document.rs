//! Document parser: drives the cursor through the STL grammar.
//!
//! The parser is a single forward pass. Problems are recorded as
//! diagnostics and recovered from by skipping to the next facet, so one
//! bad facet never hides the rest of the file. Success is decided at the
//! end: a clean header, no skipped facets, and a proper `endsolid`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Result, StlError};
use crate::types::{Solid, Triangle};

use super::cursor::Cursor;
use super::diagnostics::{DiagnosticKind, Diagnostics};
use super::keyword::{self, Keyword, FACET_OR_ENDSOLID};
use super::source::{LineSource, ReaderLines};

const HEADER_PREFIX: &str = "solid ";

/// Outcome of parsing one document.
///
/// The triangle list can be non-empty even when the parse failed; callers
/// must check `is_success()` rather than the count.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseReport {
    /// The declared name and the cleanly parsed triangles.
    pub solid: Solid,
    /// Everything that went wrong, in source order.
    pub diagnostics: Diagnostics,
    header_error: bool,
    facets_skipped: bool,
    terminated: bool,
}

impl ParseReport {
    /// Whether the whole document parsed cleanly: header present, no
    /// facet skipped, terminating `endsolid` found.
    pub fn is_success(&self) -> bool {
        !self.header_error && !self.facets_skipped && self.terminated
    }

    /// Whether the `solid ` header was missing or the input was empty.
    pub fn header_error(&self) -> bool {
        self.header_error
    }

    /// Whether at least one malformed facet was skipped.
    pub fn facets_skipped(&self) -> bool {
        self.facets_skipped
    }

    /// Whether the terminating `endsolid` was found and consumed.
    pub fn terminated(&self) -> bool {
        self.terminated
    }
}

/// Parse one STL document from a line source.
pub fn parse_solid(source: impl LineSource) -> ParseReport {
    let mut diagnostics = Diagnostics::new();
    let cursor = Cursor::new(source, &mut diagnostics);
    Parser {
        cursor,
        diagnostics,
        header_error: false,
        facets_skipped: false,
        solid: Solid::default(),
    }
    .parse()
}

/// Parse one STL document from a string.
pub fn parse_str(input: &str) -> ParseReport {
    parse_solid(ReaderLines::new(input.as_bytes()))
}

/// Open and parse an STL file.
///
/// A file that cannot be opened is an error (no parse is attempted);
/// anything wrong inside the file lands in the report's diagnostics.
pub fn parse_file(path: &Path) -> Result<ParseReport> {
    let file = File::open(path).map_err(|e| StlError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(parse_solid(ReaderLines::new(BufReader::new(file))))
}

/// Signal that a grammar step failed. The diagnostic has already been
/// recorded; the driver owns recovery.
struct Halt;

struct Parser<S> {
    cursor: Cursor<S>,
    diagnostics: Diagnostics,
    header_error: bool,
    facets_skipped: bool,
    solid: Solid,
}

impl<S: LineSource> Parser<S> {
    fn parse(mut self) -> ParseReport {
        if self.cursor.at_end() {
            self.header_error = true;
            self.diagnostics.record(
                self.cursor.line(),
                DiagnosticKind::EmptyInput,
                "input is empty",
            );
        } else {
            self.parse_header();
            loop {
                if self.cursor.at_end() || self.current_is(Keyword::Endsolid) {
                    break;
                }
                if !self.current_is(Keyword::Facet) {
                    self.diagnostics.record(
                        self.cursor.line(),
                        DiagnosticKind::UnexpectedToken,
                        "expected \"facet\" or \"endsolid\"",
                    );
                    match self.skip_to(FACET_OR_ENDSOLID) {
                        Some(Keyword::Facet) => {}
                        _ => break,
                    }
                }
                match self.parse_facet() {
                    Ok(triangle) => self.solid.triangles.push(triangle),
                    Err(Halt) => {
                        self.facets_skipped = true;
                        self.skip_to(FACET_OR_ENDSOLID);
                    }
                }
            }
        }

        // Trailing text after endsolid (a name, usually) is ignored.
        let terminated = self.consume(Keyword::Endsolid).is_ok();

        ParseReport {
            solid: self.solid,
            diagnostics: self.diagnostics,
            header_error: self.header_error,
            facets_skipped: self.facets_skipped,
            terminated,
        }
    }

    /// Header line: `solid <name>`. The name is whatever follows the
    /// prefix, truncated at the first NUL or high byte. The rest of the
    /// line is discarded either way so a bad header cannot poison the
    /// facet loop.
    fn parse_header(&mut self) {
        let line = self.cursor.current_line().unwrap_or_default();
        match line.strip_prefix(HEADER_PREFIX) {
            Some(rest) => self.solid.name = printable_prefix(rest.as_bytes()),
            None => {
                self.diagnostics.record(
                    self.cursor.line(),
                    DiagnosticKind::HeaderSyntax,
                    "expected header starting with \"solid \"",
                );
                self.header_error = true;
            }
        }
        self.cursor.advance_line(&mut self.diagnostics);
    }

    /// One facet block. Short-circuits on the first failed step; every
    /// successful step consumes its token, a failed step consumes
    /// nothing.
    fn parse_facet(&mut self) -> std::result::Result<Triangle, Halt> {
        self.consume(Keyword::Facet)?;
        self.consume(Keyword::Normal)?;
        let normal = self.parse_point()?;
        self.consume(Keyword::Outer)?;
        self.consume(Keyword::Loop)?;
        let mut vertices = [[0.0_f32; 3]; 3];
        for vertex in &mut vertices {
            self.consume(Keyword::Vertex)?;
            *vertex = self.parse_point()?;
        }
        self.consume(Keyword::Endloop)?;
        self.consume(Keyword::Endfacet)?;
        Ok(Triangle::new(normal, vertices))
    }

    fn parse_point(&mut self) -> std::result::Result<[f32; 3], Halt> {
        Ok([
            self.parse_float()?,
            self.parse_float()?,
            self.parse_float()?,
        ])
    }

    fn parse_float(&mut self) -> std::result::Result<f32, Halt> {
        let word = match self.cursor.current() {
            Some(w) => w.to_owned(),
            // No token at all: the missing terminator fails the parse,
            // nothing useful to record here.
            None => return Err(Halt),
        };
        match word.parse::<f32>() {
            Ok(value) => {
                self.cursor.advance(&mut self.diagnostics);
                Ok(value)
            }
            Err(_) => {
                self.diagnostics.record(
                    self.cursor.line(),
                    DiagnosticKind::InvalidNumber,
                    format!("invalid number \"{}\"", word),
                );
                Err(Halt)
            }
        }
    }

    /// Consume the current token if it is exactly `kw`, otherwise record
    /// what was expected and leave the cursor in place.
    fn consume(&mut self, kw: Keyword) -> std::result::Result<(), Halt> {
        if self.current_is(kw) {
            self.cursor.advance(&mut self.diagnostics);
            Ok(())
        } else {
            self.diagnostics.record(
                self.cursor.line(),
                DiagnosticKind::UnexpectedToken,
                format!("expected \"{}\"", kw),
            );
            Err(Halt)
        }
    }

    fn current_is(&self, kw: Keyword) -> bool {
        self.cursor
            .current()
            .map_or(false, |w| keyword::classify(w, &[kw]).is_some())
    }

    /// Skip forward word-by-word until the current token is in `set`,
    /// reporting which member was found, or `None` at end-of-stream. The
    /// single recovery primitive.
    fn skip_to(&mut self, set: &[Keyword]) -> Option<Keyword> {
        loop {
            if let Some(found) = self
                .cursor
                .current()
                .and_then(|w| keyword::classify(w, set))
            {
                return Some(found);
            }
            if !self.cursor.advance(&mut self.diagnostics) {
                return None;
            }
        }
    }
}

/// Printable 7-bit prefix of the header tail: the name stops at the first
/// NUL or byte >= 128. Slightly malformed headers keep a usable name.
fn printable_prefix(bytes: &[u8]) -> String {
    let end = bytes
        .iter()
        .position(|&b| b == 0 || b >= 128)
        .unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
