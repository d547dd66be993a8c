//! Fallible token stream construction.
//!
//! Every push reserves space up front, so running out of memory while
//! encoding surfaces as [`CodecError::AllocationFailure`] instead of an
//! abort. Dropping the writer releases whatever was built so far.

use super::{Token, TokenStream, MAX_WORDS};
use crate::error::{CodecError, Result};
use compact_str::CompactString;

/// Appends tokens to a stream under construction.
#[derive(Debug, Default)]
pub struct StreamWriter {
    tokens: Vec<Token>,
}

impl StreamWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with room for `capacity` tokens.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut writer = Self::new();
        writer.reserve(capacity)?;
        Ok(writer)
    }

    fn reserve(&mut self, additional: usize) -> Result<()> {
        self.tokens
            .try_reserve(additional)
            .map_err(|_| CodecError::AllocationFailure)
    }

    /// Append a dictionary word reference.
    ///
    /// Ordinals at or above [`MAX_WORDS`] overlap the reserved values and
    /// fail with [`CodecError::UnknownOrdinal`].
    pub fn word(&mut self, ordinal: u16) -> Result<()> {
        if ordinal as usize >= MAX_WORDS {
            return Err(CodecError::UnknownOrdinal(ordinal));
        }
        self.reserve(1)?;
        self.tokens.push(Token::Word(ordinal));
        Ok(())
    }

    /// Append a literal word.
    ///
    /// Fails with [`CodecError::InteriorNul`] if `text` holds a NUL byte,
    /// since the literal could not be terminated unambiguously.
    pub fn literal(&mut self, text: &str) -> Result<()> {
        if let Some(position) = text.bytes().position(|b| b == 0) {
            return Err(CodecError::InteriorNul { position });
        }

        let text = CompactString::try_new(text).map_err(|_| CodecError::AllocationFailure)?;
        self.reserve(1)?;
        self.tokens.push(Token::Literal(text));
        Ok(())
    }

    /// Number of tokens written so far.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Terminate the stream with [`Token::EndOfStream`].
    pub fn finish(mut self) -> Result<TokenStream> {
        self.reserve(1)?;
        self.tokens.push(Token::EndOfStream);
        Ok(TokenStream {
            tokens: self.tokens,
        })
    }
}
