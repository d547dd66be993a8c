//! Sentence splitting.
//!
//! Sentences are split on the space character; the delimiter itself never
//! ends up in a token. What happens to the empty tokens produced by
//! leading, trailing or repeated spaces is decided by [`EmptyTokenPolicy`].

/// Delimiter between tokens.
pub const DELIMITER: char = ' ';

/// Treatment of empty tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyTokenPolicy {
    /// Drop empty tokens: `" a  b "` splits into `["a", "b"]`
    #[default]
    Skip,
    /// Keep empty tokens: `" a  b "` splits into `["", "a", "", "b", ""]`.
    /// They are encoded as empty literals so spacing survives decoding.
    Preserve,
}

/// Sentence splitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Splitter {
    empty_tokens: EmptyTokenPolicy,
}

impl Splitter {
    /// Create a new splitter.
    pub fn new(empty_tokens: EmptyTokenPolicy) -> Self {
        Self { empty_tokens }
    }

    /// Split a sentence into tokens.
    pub fn split<'a>(&self, sentence: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let keep_empty = self.empty_tokens == EmptyTokenPolicy::Preserve;
        sentence
            .split(DELIMITER)
            .filter(move |token| keep_empty || !token.is_empty())
    }

    /// Number of tokens `sentence` splits into.
    pub fn token_count(&self, sentence: &str) -> usize {
        match self.empty_tokens {
            EmptyTokenPolicy::Preserve => {
                sentence.bytes().filter(|&b| b == DELIMITER as u8).count() + 1
            }
            EmptyTokenPolicy::Skip => self.split(sentence).count(),
        }
    }

    pub fn policy(&self) -> EmptyTokenPolicy {
        self.empty_tokens
    }
}
