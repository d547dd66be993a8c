//! Cobalt-codec - sentence compression by word table lookup
//!
//! This crate encodes English sentences into compact streams of 16-bit
//! values by replacing each word with its position in a sorted word
//! table. Words missing from the table are embedded literally.
//!
//! # Features
//!
//! - Builder pattern for codec configuration
//! - Compiled-in common-English word table, or custom tables
//! - Explicit policy for empty tokens between spaces
//! - Parallel batch encoding
//! - Loading and saving precompiled tables, importing word lists
//!
//! # Example
//!
//! ```rust
//! use cobalt_codec::{Codec, Dictionary};
//!
//! let codec = Codec::builder()
//!     .dictionary(Dictionary::from_words(["cat", "dog", "fish"])?)
//!     .build();
//!
//! let stream = codec.encode("cat zzz")?;
//! assert_eq!(
//!     stream.to_bytes(),
//!     [0, 0, 0xFF, 0xFF, b'z', b'z', b'z', 0, 0xFC, 0xFF]
//! );
//! assert_eq!(codec.decode(&stream)?, "cat zzz");
//! # Ok::<(), cobalt_codec::CodecError>(())
//! ```

// Re-export core types
pub use cobalt_core::{
    streq, CodecError, Dictionary, Result, Token, TokenStream, BEGIN_LITERAL, COMMA,
    END_OF_STREAM, MAX_WORDS, PERIOD,
};

// Codec API
pub mod codec;
pub use codec::{builtin_dictionary, Codec, CodecBuilder, CodecConfig};

// Table I/O
pub mod io;
pub use io::{Manifest, TableLoader, TableSaver, WordListOptions};

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::{EmptyTokenPolicy, Splitter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
