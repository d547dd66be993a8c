//! Byte layout of an encoded sentence.
//!
//! Values are 16-bit little-endian units, read left to right:
//!
//! - below [`MAX_WORDS`](super::MAX_WORDS): dictionary ordinal
//! - [`BEGIN_LITERAL`]: raw word bytes follow, then a NUL terminator,
//!   then one zero pad byte if needed to get back onto a unit boundary
//! - [`PERIOD`], [`COMMA`]: reserved, rejected on read
//! - [`END_OF_STREAM`]: last unit of the stream

use super::{Token, TokenStream, BEGIN_LITERAL, COMMA, END_OF_STREAM, PERIOD};
use crate::error::{CodecError, Result};
use compact_str::CompactString;

impl TokenStream {
    /// Serialize to the wire layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());

        for token in &self.tokens {
            match token {
                Token::Word(ordinal) => out.extend_from_slice(&ordinal.to_le_bytes()),
                Token::Literal(text) => {
                    out.extend_from_slice(&BEGIN_LITERAL.to_le_bytes());
                    out.extend_from_slice(text.as_bytes());
                    out.push(0);
                    if out.len() % 2 != 0 {
                        out.push(0);
                    }
                }
                Token::EndOfStream => out.extend_from_slice(&END_OF_STREAM.to_le_bytes()),
            }
        }

        out
    }

    /// The serialized stream viewed as 16-bit units.
    pub fn units(&self) -> Vec<u16> {
        self.to_bytes()
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect()
    }

    /// Parse a serialized stream.
    ///
    /// Ordinals are not checked against any dictionary here; that happens
    /// when the stream is decoded to text.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 2 != 0 {
            return Err(CodecError::malformed(bytes.len(), "odd stream length"));
        }

        let mut tokens = Vec::new();
        let mut pos = 0usize;

        loop {
            if pos + 2 > bytes.len() {
                return Err(CodecError::malformed(pos, "missing end-of-stream marker"));
            }
            let value = u16::from_le_bytes([bytes[pos], bytes[pos + 1]]);
            pos += 2;

            match value {
                BEGIN_LITERAL => {
                    let rest = &bytes[pos..];
                    let len = rest
                        .iter()
                        .position(|&b| b == 0)
                        .ok_or_else(|| CodecError::malformed(pos, "unterminated literal"))?;
                    let text = std::str::from_utf8(&rest[..len])
                        .map_err(|e| CodecError::malformed(pos, format!("literal: {}", e)))?;
                    tokens.push(Token::Literal(CompactString::new(text)));

                    pos += len + 1;
                    if pos % 2 != 0 {
                        // Even total length puts the pad byte in bounds.
                        if bytes[pos] != 0 {
                            return Err(CodecError::malformed(pos, "non-zero pad byte"));
                        }
                        pos += 1;
                    }
                }
                PERIOD | COMMA => {
                    return Err(CodecError::malformed(
                        pos - 2,
                        format!("reserved punctuation value 0x{:04x}", value),
                    ));
                }
                END_OF_STREAM => {
                    tokens.push(Token::EndOfStream);
                    if pos != bytes.len() {
                        return Err(CodecError::malformed(
                            pos,
                            "trailing data after end-of-stream",
                        ));
                    }
                    return Ok(Self { tokens });
                }
                ordinal => tokens.push(Token::Word(ordinal)),
            }
        }
    }
}
