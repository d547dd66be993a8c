//! Static lookup tables.
//!
//! The dictionary is made of three read-only tables:
//!
//! - [`WordTable`]: every word packed into one null-separated,
//!   null-terminated buffer
//! - [`WordMap`]: ordinal -> byte offset of the word inside the table
//! - [`GuideTable`]: two-byte prefix -> ordinal of the first word with
//!   that prefix

pub mod guide;
pub mod word_map;
pub mod word_table;

pub use guide::{GuideTable, PrefixKey, GUIDE_ENTRIES};
pub use word_map::WordMap;
pub use word_table::WordTable;
