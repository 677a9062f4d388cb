//! Parser for the ASCII STL format.
//!
//! The format is line-oriented text: a `solid <name>` header, zero or
//! more facet blocks (`facet normal` / `outer loop` / three `vertex`
//! lines / `endloop` / `endfacet`), and an `endsolid` terminator.
//! Whitespace between tokens, including newlines, is insignificant.
//!
//! Parsing is a single forward pass that keeps going after errors:
//! malformed facets are skipped to the next `facet`/`endsolid` and every
//! problem is recorded as a line-tagged [`Diagnostic`]. The result is a
//! [`ParseReport`] carrying the solid, the diagnostics, and an overall
//! success verdict.
//!
//! # Usage
//!
//! ```ignore
//! use tricount::parser::parse_file;
//!
//! let report = parse_file(Path::new("cube.stl"))?;
//! println!("{} has {} triangles", report.solid.name, report.solid.triangle_count());
//! ```

mod cursor;
mod document;
pub mod diagnostics;
pub mod keyword;
pub mod source;

// Re-export main entry points
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use document::{parse_file, parse_solid, parse_str, ParseReport};
pub use keyword::Keyword;
pub use source::{LineSource, ReaderLines};
