//! Word-level cursor over a line source.
//!
//! The parser never deals with lines directly: the cursor hands it one
//! whitespace-delimited word at a time, loading lines as needed and
//! skipping blank ones, so "empty line" and "end of line" never leak into
//! the grammar. Movement is strictly forward; once end-of-stream is set
//! it never clears.

use std::collections::VecDeque;

use super::diagnostics::{DiagnosticKind, Diagnostics};
use super::source::LineSource;

pub struct Cursor<S> {
    source: S,
    /// 1-based number of the line the current word came from; 0 before
    /// any line has been read.
    line: u32,
    /// Raw text of that line, kept for header parsing.
    raw_line: Option<String>,
    /// Words remaining on the current line.
    words: VecDeque<String>,
    current: Option<String>,
    eof: bool,
}

impl<S: LineSource> Cursor<S> {
    /// Create a cursor primed on the first word of the input.
    ///
    /// A read failure while priming is recorded into `diags`, same as
    /// during any later advance.
    pub fn new(source: S, diags: &mut Diagnostics) -> Self {
        let mut cursor = Self {
            source,
            line: 0,
            raw_line: None,
            words: VecDeque::new(),
            current: None,
            eof: false,
        };
        cursor.advance(diags);
        cursor
    }

    /// The current word, or `None` at end-of-stream.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Raw text of the line the current word came from.
    pub fn current_line(&self) -> Option<&str> {
        self.raw_line.as_deref()
    }

    /// Line number of the current word (1-based); 0 before the first read.
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn at_end(&self) -> bool {
        self.eof
    }

    /// Move to the next word, crossing line boundaries as needed.
    ///
    /// Returns `false` once the stream is exhausted: the current word is
    /// cleared and the end-of-stream flag is set for good. A line-read
    /// failure is recorded into `diags` and also ends the stream.
    pub fn advance(&mut self, diags: &mut Diagnostics) -> bool {
        if self.eof {
            return false;
        }
        loop {
            if let Some(word) = self.words.pop_front() {
                self.current = Some(word);
                return true;
            }
            if !self.load_line(diags) {
                self.current = None;
                return false;
            }
        }
    }

    /// Discard the rest of the current line and move to the first word of
    /// the next non-blank line. Used after the header line, whose tail is
    /// the solid name rather than tokens.
    pub fn advance_line(&mut self, diags: &mut Diagnostics) -> bool {
        self.words.clear();
        self.advance(diags)
    }

    fn load_line(&mut self, diags: &mut Diagnostics) -> bool {
        match self.source.next_line() {
            Some(Ok(text)) => {
                self.line += 1;
                self.words = text.split_whitespace().map(str::to_owned).collect();
                self.raw_line = Some(text);
                true
            }
            Some(Err(e)) => {
                diags.record(
                    self.line,
                    DiagnosticKind::SourceRead,
                    format!("failed to read input: {}", e),
                );
                self.raw_line = None;
                self.eof = true;
                false
            }
            None => {
                self.raw_line = None;
                self.eof = true;
                false
            }
        }
    }
}
