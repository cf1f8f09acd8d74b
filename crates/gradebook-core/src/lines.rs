//! Line splitting for scores files.
//!
//! A line ends at `\n`, `\r\n`, a lone `\r`, or one of the Unicode line
//! breaks U+0085, U+2028 and U+2029. Bytes are decoded lossily, so invalid
//! UTF-8 only affects the line it appears on.

use std::collections::VecDeque;
use std::io::{self, BufRead};

fn is_unicode_line_break(c: char) -> bool {
    matches!(c, '\u{0085}' | '\u{2028}' | '\u{2029}')
}

/// Iterator over the lines of a scores file, without terminators.
pub struct RecordLines<R> {
    inner: R,
    /// The last byte line ended with `\r`; a leading `\n` belongs to it.
    skip_lf: bool,
    pending: VecDeque<String>,
}

impl<R: BufRead> RecordLines<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            skip_lf: false,
            pending: VecDeque::new(),
        }
    }

    /// Read up to the next `\n`, `\r\n` or `\r`.
    ///
    /// Returns the bytes before the terminator and whether a terminator was
    /// found, or `None` at end of input.
    fn read_byte_line(&mut self) -> io::Result<Option<(Vec<u8>, bool)>> {
        let mut line = Vec::new();
        loop {
            let available = match self.inner.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if available.is_empty() {
                return Ok((!line.is_empty()).then_some((line, false)));
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.inner.consume(1);
                    continue;
                }
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    line.extend_from_slice(&available[..end]);
                    self.skip_lf = available[end] == b'\r';
                    self.inner.consume(end + 1);
                    return Ok(Some((line, true)));
                }
                None => {
                    let len = available.len();
                    line.extend_from_slice(available);
                    self.inner.consume(len);
                }
            }
        }
    }

    fn queue(&mut self, bytes: &[u8], terminated: bool) {
        let text = String::from_utf8_lossy(bytes);
        let mut segments: Vec<&str> = text.split(is_unicode_line_break).collect();
        // A Unicode break right before end of input does not open another line
        if !terminated && segments.len() > 1 && segments.last() == Some(&"") {
            segments.pop();
        }
        self.pending.extend(segments.into_iter().map(str::to_string));
    }
}

impl<R: BufRead> Iterator for RecordLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            match self.read_byte_line() {
                Ok(Some((bytes, terminated))) => self.queue(&bytes, terminated),
                Ok(None) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
