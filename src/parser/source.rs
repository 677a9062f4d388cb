//! Line sources feeding the parser.
//!
//! The parser consumes an ordered sequence of raw text lines and never
//! touches the underlying reader directly. `ReaderLines` adapts any
//! buffered reader; tests (and `parse_str`) use the blanket impl for
//! iterators of lines.

use std::io::{self, BufRead};

/// A sequential source of text lines.
///
/// `None` marks ordinary end-of-stream. `Some(Err(_))` marks a read
/// failure, which the parser records as a diagnostic and treats as
/// terminal. Lines are yielded without their trailing newline.
pub trait LineSource {
    fn next_line(&mut self) -> Option<io::Result<String>>;
}

/// Any iterator of line results is a line source.
impl<I> LineSource for I
where
    I: Iterator<Item = io::Result<String>>,
{
    fn next_line(&mut self) -> Option<io::Result<String>> {
        self.next()
    }
}

/// Line source over a buffered reader.
///
/// Reads raw bytes one line at a time (the input is never loaded
/// wholesale) and converts each line lossily, so stray non-UTF-8 bytes
/// become replacement characters instead of failing the read. Tokens
/// containing them simply fail keyword and number parsing, and header
/// names truncate at the first high byte either way.
pub struct ReaderLines<R> {
    reader: R,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> Option<io::Result<String>> {
        if self.done {
            return None;
        }
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(mut source: impl LineSource) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(line) = source.next_line() {
            lines.push(line.unwrap());
        }
        lines
    }

    #[test]
    fn test_reader_lines_strips_newlines() {
        let lines = collect(ReaderLines::new("a\nb\r\nc".as_bytes()));
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reader_lines_keeps_blank_lines() {
        let lines = collect(ReaderLines::new("a\n\nb\n".as_bytes()));
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_reader_lines_empty_input() {
        let lines = collect(ReaderLines::new("".as_bytes()));
        assert!(lines.is_empty());
    }

    #[test]
    fn test_reader_lines_lossy_on_bad_utf8() {
        let lines = collect(ReaderLines::new(&b"solid a\xffb\n"[..]));
        assert_eq!(lines, vec!["solid a\u{fffd}b"]);
    }

    #[test]
    fn test_iterator_is_a_line_source() {
        let source = vec![Ok("solid x".to_string())].into_iter();
        assert_eq!(collect(source), vec!["solid x"]);
    }
}
