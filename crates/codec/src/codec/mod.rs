//! Main codec implementation.
//!
//! This module provides the high-level `Codec` struct that ties the
//! dictionary, the sentence splitter and the token stream together.

use crate::io::{TableLoader, TableSaver};
use crate::pre_tokenizer::{EmptyTokenPolicy, Splitter, DELIMITER};
use cobalt_core::{CodecError, Dictionary, Result, StreamWriter, Token, TokenStream};
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::trace;

/// Compiled-in word list, sorted, one word per line.
const BUILTIN_WORDS: &str = include_str!("../../data/words.txt");

/// Configuration for building a codec.
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// What to do with empty tokens between spaces
    pub empty_tokens: EmptyTokenPolicy,
    /// Longest sentence accepted, in bytes; unlimited when `None`
    pub max_sentence_len: Option<usize>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            empty_tokens: EmptyTokenPolicy::Skip,
            max_sentence_len: None,
        }
    }
}

/// Builder for creating a codec.
#[derive(Clone, Default)]
pub struct CodecBuilder {
    config: CodecConfig,
    dictionary: Option<Arc<Dictionary>>,
}

impl CodecBuilder {
    /// Create a new codec builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `dictionary` instead of the compiled-in one.
    pub fn dictionary(self, dictionary: Dictionary) -> Self {
        self.shared_dictionary(Arc::new(dictionary))
    }

    /// Use an already shared dictionary.
    pub fn shared_dictionary(mut self, dictionary: Arc<Dictionary>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Set the empty token policy.
    pub fn empty_tokens(mut self, policy: EmptyTokenPolicy) -> Self {
        self.config.empty_tokens = policy;
        self
    }

    /// Set the longest accepted sentence, in bytes.
    pub fn max_sentence_len(mut self, len: usize) -> Self {
        self.config.max_sentence_len = Some(len);
        self
    }

    /// Build the codec.
    pub fn build(self) -> Codec {
        let dictionary = self.dictionary.unwrap_or_else(builtin_dictionary);
        Codec::new(dictionary, self.config)
    }
}

/// The compiled-in dictionary, built on first use.
///
/// # Panics
///
/// Panics only if the bundled word list is corrupt: unsorted, duplicated
/// or not printable ASCII.
pub fn builtin_dictionary() -> Arc<Dictionary> {
    static BUILTIN: OnceLock<Arc<Dictionary>> = OnceLock::new();
    BUILTIN
        .get_or_init(|| {
            Arc::new(
                Dictionary::from_words(BUILTIN_WORDS.lines())
                    .expect("compiled-in word list is sorted and unique"),
            )
        })
        .clone()
}

/// Sentence codec.
///
/// Cloning is cheap: clones share the same read-only dictionary.
#[derive(Debug, Clone)]
pub struct Codec {
    dictionary: Arc<Dictionary>,
    config: CodecConfig,
    splitter: Splitter,
}

impl Codec {
    /// Create a codec over a shared dictionary.
    pub fn new(dictionary: Arc<Dictionary>, config: CodecConfig) -> Self {
        let splitter = Splitter::new(config.empty_tokens);
        Self {
            dictionary,
            config,
            splitter,
        }
    }

    /// Create a codec builder.
    pub fn builder() -> CodecBuilder {
        CodecBuilder::new()
    }

    /// Codec over the compiled-in dictionary with default configuration.
    pub fn builtin() -> &'static Codec {
        static CODEC: OnceLock<Codec> = OnceLock::new();
        CODEC.get_or_init(|| CodecBuilder::new().build())
    }

    /// Load a codec from a table directory.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::builder().dictionary(TableLoader::load(path)?).build())
    }

    /// Save the codec's dictionary as a table directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        TableSaver::new(&self.dictionary).save(path)
    }

    /// Encode a sentence that may be absent.
    ///
    /// `None` fails with [`CodecError::NullInput`]; anything else is
    /// handed to [`encode`](Self::encode).
    pub fn encode_sentence(&self, sentence: Option<&str>) -> Result<TokenStream> {
        let sentence = sentence.ok_or(CodecError::NullInput)?;
        self.encode(sentence)
    }

    /// Encode a sentence.
    ///
    /// Each space-separated token found in the dictionary becomes its
    /// ordinal; any other token is carried as a literal. The stream always
    /// ends with [`Token::EndOfStream`], so an empty sentence encodes to
    /// that marker alone.
    pub fn encode(&self, sentence: &str) -> Result<TokenStream> {
        if let Some(max) = self.config.max_sentence_len {
            if sentence.len() > max {
                return Err(CodecError::SentenceTooLong {
                    len: sentence.len(),
                    max,
                });
            }
        }
        if sentence.is_empty() {
            return StreamWriter::new().finish();
        }

        let mut writer = StreamWriter::with_capacity(self.splitter.token_count(sentence) + 1)?;

        for token in self.splitter.split(sentence) {
            match self.dictionary.lookup(token) {
                Some(ordinal) => {
                    trace!(token, ordinal, "dictionary word");
                    writer.word(ordinal)?;
                }
                None => {
                    trace!(token, "literal word");
                    writer.literal(token)?;
                }
            }
        }

        writer.finish()
    }

    /// Encode a batch of sentences (parallelized).
    pub fn encode_batch<S>(&self, sentences: &[S]) -> Result<Vec<TokenStream>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        sentences
            .par_iter()
            .map(|sentence| self.encode(sentence.as_ref()))
            .collect()
    }

    /// Encode a sentence straight to the wire layout.
    pub fn encode_to_bytes(&self, sentence: &str) -> Result<Vec<u8>> {
        Ok(self.encode(sentence)?.to_bytes())
    }

    /// Rebuild the sentence a stream was encoded from.
    ///
    /// Tokens are joined with single spaces. With
    /// [`EmptyTokenPolicy::Preserve`] this reproduces the input exactly;
    /// with [`EmptyTokenPolicy::Skip`] runs of spaces come back as one.
    pub fn decode(&self, stream: &TokenStream) -> Result<String> {
        let mut out = String::new();

        for (i, token) in stream.tokens().iter().enumerate() {
            let text = match token {
                Token::Word(ordinal) => self
                    .dictionary
                    .get(*ordinal)
                    .ok_or(CodecError::UnknownOrdinal(*ordinal))?,
                Token::Literal(text) => text.as_str(),
                Token::EndOfStream => break,
            };
            if i > 0 {
                out.push(DELIMITER);
            }
            out.push_str(text);
        }

        Ok(out)
    }

    /// Parse and decode a serialized stream.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<String> {
        self.decode(&TokenStream::from_bytes(bytes)?)
    }

    /// Ordinal of `word` in this codec's dictionary.
    pub fn find_word(&self, word: &str) -> Result<u16> {
        self.dictionary.find_word(word)
    }

    /// Get a reference to the dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Get the configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}
