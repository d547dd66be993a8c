//! Pre-tokenization.
//!
//! Turns a sentence into the tokens that are looked up in the dictionary.

pub mod split;

pub use split::{EmptyTokenPolicy, Splitter, DELIMITER};
