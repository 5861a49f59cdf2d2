//! Stdin feed — line-at-a-time and whole-blob readers.
//!
//! Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
//! aborting the read.

use crate::ReadError;
use std::io::{self, BufRead, Read};

/// Iterator over the lines of a buffered reader, lossily decoded.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`, and the terminator is stripped.
/// A final line with no terminator is still yielded; an empty source yields
/// nothing.
pub struct LineFeed<R> {
    reader: R,
    buf: Vec<u8>,
    /// The previous line ended in `\r`; a `\n` right after it belongs to it.
    after_cr: bool,
}

impl<R: BufRead> LineFeed<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            after_cr: false,
        }
    }
}

impl<R: BufRead> Iterator for LineFeed<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        let mut terminated = false;
        while !terminated {
            let available = match self.reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e)),
            };
            if available.is_empty() {
                break;
            }
            let skip = usize::from(std::mem::take(&mut self.after_cr) && available[0] == b'\n');
            let rest = &available[skip..];
            let used = match rest.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.buf.extend_from_slice(&rest[..end]);
                    self.after_cr = rest[end] == b'\r';
                    terminated = true;
                    end + 1
                }
                None => {
                    self.buf.extend_from_slice(rest);
                    rest.len()
                }
            };
            self.reader.consume(skip + used);
        }
        if !terminated && self.buf.is_empty() {
            return None;
        }
        Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

/// Read `reader` to completion as one text blob.
pub fn read_blob<R: Read>(mut reader: R) -> Result<String, ReadError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(ReadError::Stdin)?;
    tracing::debug!(bytes = bytes.len(), "read input blob");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read all of standard input as one text blob.
pub fn blob() -> Result<String, ReadError> {
    read_blob(std::io::stdin().lock())
}
