//! Cobalt-core - word tables and token streams
//!
//! This crate holds the read-only tables behind the cobalt codec and the
//! lookup that runs over them:
//!
//! - [`WordTable`]: sorted words packed into one null-delimited buffer
//! - [`WordMap`]: ordinal to byte offset
//! - [`GuideTable`]: two-byte prefix to first matching ordinal
//! - [`Dictionary::find_word`]: guide-table lookup plus a short scan
//! - [`TokenStream`]: an encoded sentence and its wire layout
//!
//! # Example
//!
//! ```rust
//! use cobalt_core::Dictionary;
//!
//! let dict = Dictionary::from_words(["cat", "dog", "fish"])?;
//! assert_eq!(dict.find_word("dog")?, 1);
//! assert_eq!(dict.word_at(2), "fish");
//! # Ok::<(), cobalt_core::CodecError>(())
//! ```

pub mod error;
pub use error::{CodecError, Result};

// Static tables
pub mod table;
pub use table::{GuideTable, PrefixKey, WordMap, WordTable, GUIDE_ENTRIES};

pub mod dictionary;
pub use dictionary::Dictionary;

pub mod search;
pub use search::streq;

// Encoded output
pub mod stream;
pub use stream::{
    StreamWriter, Token, TokenStream, BEGIN_LITERAL, COMMA, END_OF_STREAM, MAX_WORDS, PERIOD,
};
