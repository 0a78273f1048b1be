//! Text sources consumed by tokenizers.
//!
//! A [`TextSource`] is any boxed [`Read`] implementation. Entry stages drain the
//! source when it is bound, so a source only has to live for the duration of
//! the binding call.

use std::io::{self, Read};

/// Input handed to an entry stage.
pub type TextSource<'a> = Box<dyn Read + 'a>;

/// A string-backed reader that can be rebound to new text without
/// reallocating once its buffer has grown large enough.
///
/// Rebinding is observably identical to constructing a fresh reader.
///
/// # Examples
///
/// ```
/// use std::io::Read;
/// use sarissa_analysis::analysis::reader::ReusableStringReader;
///
/// let mut reader = ReusableStringReader::new();
/// reader.set_value("alpha beta");
///
/// let mut text = String::new();
/// reader.read_to_string(&mut text).unwrap();
/// assert_eq!(text, "alpha beta");
///
/// reader.set_value("gamma");
/// text.clear();
/// reader.read_to_string(&mut text).unwrap();
/// assert_eq!(text, "gamma");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReusableStringReader {
    text: String,
    pos: usize,
}

impl ReusableStringReader {
    /// Create an empty reader.
    pub fn new() -> Self {
        ReusableStringReader::default()
    }

    /// Replace the content in place and rewind.
    pub fn set_value(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.pos = 0;
    }

    /// The full bound text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Bytes not yet read.
    pub fn remaining(&self) -> usize {
        self.text.len() - self.pos
    }

    /// Capacity of the internal buffer.
    pub fn capacity(&self) -> usize {
        self.text.capacity()
    }

    /// Drop the content but keep the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.pos = 0;
    }
}

impl Read for ReusableStringReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let rest = &self.text.as_bytes()[self.pos..];
        let n = rest.len().min(buf.len());
        buf[..n].copy_from_slice(&rest[..n]);
        self.pos += n;
        Ok(n)
    }
}
