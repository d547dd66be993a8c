//! Encoded sentence representation.
//!
//! A sentence is held as a sequence of [`Token`]s and only turned into the
//! mixed 16-bit / raw-byte layout at the boundary (see [`wire`]).

pub mod wire;
pub mod writer;

pub use writer::StreamWriter;

use compact_str::CompactString;

/// Marks the start of a literal, null-terminated word.
pub const BEGIN_LITERAL: u16 = 0xFFFF;
/// Reserved for a period token. Not produced by the encoder.
pub const PERIOD: u16 = 0xFFFE;
/// Reserved for a comma token. Not produced by the encoder.
pub const COMMA: u16 = 0xFFFD;
/// Terminates every encoded sentence.
pub const END_OF_STREAM: u16 = 0xFFFC;

/// Largest number of words a table may hold. Ordinals stay below every
/// reserved value.
pub const MAX_WORDS: usize = END_OF_STREAM as usize;

/// One element of an encoded sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Dictionary word, by ordinal
    Word(u16),
    /// Word missing from the dictionary, carried verbatim
    Literal(CompactString),
    /// End of the sentence
    EndOfStream,
}

impl Token {
    /// Size of this token on the wire, in bytes.
    pub fn encoded_len(&self) -> usize {
        match self {
            Token::Word(_) | Token::EndOfStream => 2,
            // marker + bytes + terminator, rounded up to a whole unit
            Token::Literal(text) => 2 + (text.len() + 1).next_multiple_of(2),
        }
    }
}

/// A complete encoded sentence, always ending with [`Token::EndOfStream`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// The tokens, end-of-stream marker included.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Number of tokens, end-of-stream marker included.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the stream holds nothing but the end-of-stream marker.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.len() <= 1
    }

    /// Number of dictionary word references.
    pub fn word_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, Token::Word(_)))
            .count()
    }

    /// Number of literal-escaped words.
    pub fn literal_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, Token::Literal(_)))
            .count()
    }

    /// Size of the serialized stream in bytes.
    pub fn encoded_len(&self) -> usize {
        self.tokens.iter().map(Token::encoded_len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_values_are_distinct() {
        let reserved = [BEGIN_LITERAL, PERIOD, COMMA, END_OF_STREAM];
        for (i, a) in reserved.iter().enumerate() {
            for b in &reserved[i + 1..] {
                assert_ne!(a, b);
            }
            assert!(*a as usize >= MAX_WORDS);
        }
    }

    #[test]
    fn test_token_encoded_len() {
        assert_eq!(Token::Word(7).encoded_len(), 2);
        assert_eq!(Token::EndOfStream.encoded_len(), 2);
        // "zzz\0" is already even
        assert_eq!(Token::Literal("zzz".into()).encoded_len(), 6);
        // "zz\0" needs one pad byte
        assert_eq!(Token::Literal("zz".into()).encoded_len(), 6);
        assert_eq!(Token::Literal("".into()).encoded_len(), 4);
    }
}
