//! Token stream with multi-level pushback

use super::line_source::LineSource;
use crate::error::{DxfError, Result};
use encoding_rs::Encoding;
use std::io::Read;
use std::str::FromStr;

/// Line tokens with LIFO pushback.
///
/// Every line of the file is one token, group codes and values alike. The
/// grammar decides which is which. Tokens pushed back are returned before
/// any new line is read, most recent first.
pub struct TokenStream<R: Read> {
    source: LineSource<R>,
    pushback: Vec<String>,
}

impl<R: Read> TokenStream<R> {
    pub fn new(source: LineSource<R>) -> Self {
        Self {
            source,
            pushback: Vec::new(),
        }
    }

    /// Wrap a reader with the default chunk size
    pub fn from_reader(reader: R) -> Self {
        Self::new(LineSource::new(reader))
    }

    /// Last physical line read from the source
    pub fn line_number(&self) -> usize {
        self.source.line_number()
    }

    pub fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.source.set_encoding(encoding);
    }

    /// Number of tokens currently pushed back
    pub fn pushback_depth(&self) -> usize {
        self.pushback.len()
    }

    fn pull(&mut self) -> Result<Option<String>> {
        match self.pushback.pop() {
            Some(token) => Ok(Some(token)),
            None => self.source.read_line(),
        }
    }

    fn end_of_input(&self, context: &str) -> DxfError {
        DxfError::UnexpectedEndOfInput {
            context: format!("{} after line {}", context, self.line_number()),
        }
    }

    /// Next token
    pub fn next(&mut self) -> Result<String> {
        self.next_in("token")
    }

    /// Next token, naming the construct being read if the input ends
    pub fn next_in(&mut self, context: &str) -> Result<String> {
        match self.pull()? {
            Some(token) => Ok(token),
            None => Err(self.end_of_input(context)),
        }
    }

    /// Return a token to the front of the stream
    pub fn push_back(&mut self, token: impl Into<String>) {
        self.pushback.push(token.into());
    }

    /// Consume the next token, failing unless it equals `literal`
    pub fn expect(&mut self, literal: &str) -> Result<&mut Self> {
        match self.pull()? {
            Some(found) if found == literal => Ok(self),
            Some(found) => Err(DxfError::unexpected(literal, found, self.line_number())),
            None => Err(self.end_of_input(&format!("'{}'", literal))),
        }
    }

    /// Next token parsed as a number
    pub fn next_parsed<T: FromStr>(&mut self, context: &str) -> Result<T> {
        let token = self.next_in(context)?;
        token.parse::<T>().map_err(|_| DxfError::MalformedNumber {
            value: token,
            context: context.to_string(),
            line: self.line_number(),
        })
    }

    pub fn next_int(&mut self, context: &str) -> Result<i32> {
        self.next_parsed(context)
    }

    pub fn next_float(&mut self, context: &str) -> Result<f64> {
        self.next_parsed(context)
    }

    /// Whether only blank lines remain. Blank lines are consumed.
    pub fn is_at_end(&mut self) -> Result<bool> {
        loop {
            match self.pull()? {
                None => return Ok(true),
                Some(token) if token.is_empty() => continue,
                Some(token) => {
                    self.pushback.push(token);
                    return Ok(false);
                }
            }
        }
    }
}
