//! a cursor over whitespace-separated tokens of a memory-mapped file

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use memmap2::Mmap;

use crate::data_handling::InputError;
use crate::graph::IndexT;

/// An input file mapped into memory for the duration of the run.
pub struct InputFile {
    mmap: Mmap,
}

impl InputFile {
    pub fn open(path: &Path) -> Result<InputFile, InputError> {
        let file = File::open(path)?;
        // the file is only read, and only while this process holds the map
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(InputFile { mmap })
    }

    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(&self.mmap)
    }
}

/// Yields whitespace-separated tokens and parses them on demand.
pub struct Tokens<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(bytes: &'a [u8]) -> Tokens<'a> {
        Tokens { bytes, pos: 0 }
    }

    fn next_raw(&mut self) -> Option<&'a [u8]> {
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if self.pos == self.bytes.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < self.bytes.len() && !self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        Some(&self.bytes[start..self.pos])
    }

    /// parses the next token as `T`; `expected` names the value in errors
    pub fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, InputError> {
        let raw = self
            .next_raw()
            .ok_or(InputError::UnexpectedEof { expected })?;
        std::str::from_utf8(raw)
            .ok()
            .and_then(|s| s.parse::<T>().ok())
            .ok_or_else(|| InputError::InvalidToken {
                token: String::from_utf8_lossy(raw).into_owned(),
                expected,
            })
    }

    /// parses a 1-based node id in `1..=n` and returns it 0-based
    pub fn node(&mut self, n: usize) -> Result<IndexT, InputError> {
        let node: i64 = self.next("node id")?;
        if node < 1 || node as u64 > n as u64 {
            return Err(InputError::NodeOutOfRange { node, n });
        }
        Ok((node - 1) as IndexT)
    }

    /// parses a count that is later used to size allocations
    pub fn count(&mut self, expected: &'static str) -> Result<usize, InputError> {
        self.next::<usize>(expected)
    }

    /// true once only whitespace remains
    pub fn is_exhausted(&mut self) -> bool {
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        self.pos == self.bytes.len()
    }
}
