//! Chunked line reader over a raw byte stream

use crate::error::Result;
use encoding_rs::Encoding;
use std::io::{ErrorKind, Read};

/// Default number of bytes requested from the stream per read
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Splits a byte stream into trimmed text lines.
///
/// Bytes are pulled in fixed-size chunks; a line may span any number of
/// chunks. A trailing `\r` is stripped, so CRLF and LF files read the same.
/// The last line does not need a terminator.
pub struct LineSource<R: Read> {
    reader: R,
    buffer: Vec<u8>,
    /// Start of the unread part of `buffer`
    consumed: usize,
    /// Bytes of `buffer` before this index hold no unread `\n`
    scanned: usize,
    chunk_size: usize,
    exhausted: bool,
    line_number: usize,
    /// Non-UTF8 fallback encoding. `None` means Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
}

impl<R: Read> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, DEFAULT_CHUNK_SIZE)
    }

    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            consumed: 0,
            scanned: 0,
            chunk_size: chunk_size.max(1),
            exhausted: false,
            line_number: 0,
            encoding: None,
        }
    }

    /// Set the encoding used for lines that are not valid UTF-8
    pub fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }

    /// Number of lines returned so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line, `None` once the stream is exhausted
    pub fn read_line(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(offset) = self.buffer[self.scanned..].iter().position(|&b| b == b'\n') {
                let end = self.scanned + offset;
                let line = self.take_line(end);
                self.consumed = end + 1;
                self.scanned = self.consumed;
                return Ok(Some(line));
            }
            self.scanned = self.buffer.len();

            if self.exhausted {
                if self.consumed == self.buffer.len() {
                    return Ok(None);
                }
                let line = self.take_line(self.buffer.len());
                self.consumed = self.buffer.len();
                return Ok(Some(line));
            }

            self.fill()?;
        }
    }

    /// Drop consumed bytes, then append one chunk from the stream
    fn fill(&mut self) -> Result<()> {
        if self.consumed > 0 {
            self.buffer.drain(..self.consumed);
            self.scanned -= self.consumed;
            self.consumed = 0;
        }

        let start = self.buffer.len();
        self.buffer.resize(start + self.chunk_size, 0);
        loop {
            match self.reader.read(&mut self.buffer[start..]) {
                Ok(0) => {
                    self.exhausted = true;
                    self.buffer.truncate(start);
                    return Ok(());
                }
                Ok(n) => {
                    self.buffer.truncate(start + n);
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.buffer.truncate(start);
                    return Err(e.into());
                }
            }
        }
    }

    /// Decode `buffer[consumed..end]` as the next line
    fn take_line(&mut self, end: usize) -> String {
        self.line_number += 1;
        let mut bytes = &self.buffer[self.consumed..end];
        if let Some((&b'\r', rest)) = bytes.split_last() {
            bytes = rest;
        }

        let line = match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(_) => match self.encoding {
                Some(enc) => enc.decode_without_bom_handling(bytes).0.into_owned(),
                None => bytes.iter().map(|&b| b as char).collect(),
            },
        };

        let line = match self.line_number {
            1 => line.strip_prefix('\u{feff}').unwrap_or(line.as_str()),
            _ => line.as_str(),
        };
        line.trim().to_string()
    }
}
