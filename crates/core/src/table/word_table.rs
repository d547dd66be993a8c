//! Packed word storage.
//!
//! Words are stored back to back in a single buffer, each followed by a
//! NUL byte. The buffer as a whole therefore ends with a NUL as well.

use super::guide::PrefixKey;
use crate::error::{CodecError, Result};
use crate::stream::MAX_WORDS;
use ahash::AHashSet;

/// Separator and terminator byte.
pub const NUL: u8 = 0;

/// Immutable, sorted, null-delimited word buffer.
///
/// Words are ASCII-graphic (no spaces, no control bytes), unique, and
/// sorted ascending by their two-byte [`PrefixKey`], so every prefix
/// occupies one contiguous run of ordinals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTable {
    /// Packed words; ASCII only, so valid UTF-8 throughout
    text: Box<str>,
    /// Number of words
    count: usize,
}

impl WordTable {
    /// Build a table from words already in prefix order.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        let mut count = 0usize;

        for word in words {
            let word = word.as_ref();
            if word.as_bytes().contains(&NUL) {
                return Err(CodecError::InvalidTable(format!(
                    "word {} contains a NUL byte",
                    count
                )));
            }
            text.push_str(word);
            text.push(NUL as char);
            count += 1;
        }

        Self::validated(text, count)
    }

    /// Adopt an already packed buffer, e.g. one read from `wordtable.bin`.
    pub fn from_packed(bytes: Vec<u8>) -> Result<Self> {
        if let Some(position) = bytes.iter().position(|&b| !b.is_ascii()) {
            return Err(CodecError::InvalidTable(format!(
                "non-ASCII byte at offset {}",
                position
            )));
        }

        let count = bytes.iter().filter(|&&b| b == NUL).count();
        let text = String::from_utf8(bytes)
            .map_err(|e| CodecError::InvalidTable(format!("invalid word bytes: {}", e)))?;

        Self::validated(text, count)
    }

    fn validated(text: String, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(CodecError::InvalidTable(
                "word table must contain at least one word".to_string(),
            ));
        }
        if count > MAX_WORDS {
            return Err(CodecError::TableOverflow {
                max: MAX_WORDS,
                tried: count,
            });
        }
        check_packed_len(text.len())?;
        if !text.ends_with(NUL as char) {
            return Err(CodecError::InvalidTable(
                "word table is not null-terminated".to_string(),
            ));
        }

        let table = Self {
            text: text.into_boxed_str(),
            count,
        };
        table.check_words()?;

        Ok(table)
    }

    /// Check every word and the prefix ordering between neighbours.
    fn check_words(&self) -> Result<()> {
        let mut seen = AHashSet::with_capacity(self.count);
        let mut previous: Option<(usize, PrefixKey)> = None;

        for (ordinal, word) in self.iter().enumerate() {
            if word.is_empty() {
                return Err(CodecError::InvalidTable(format!(
                    "word {} is empty",
                    ordinal
                )));
            }
            if let Some(bad) = word.bytes().find(|b| !b.is_ascii_graphic()) {
                return Err(CodecError::InvalidTable(format!(
                    "word {} ({:?}) contains byte 0x{:02x}",
                    ordinal, word, bad
                )));
            }
            if !seen.insert(word) {
                return Err(CodecError::InvalidTable(format!(
                    "duplicate word {:?} at ordinal {}",
                    word, ordinal
                )));
            }

            let key = PrefixKey::of(word.as_bytes());
            if let Some((prev_ordinal, prev_key)) = previous {
                if key < prev_key {
                    return Err(CodecError::InvalidTable(format!(
                        "word {} ({:?}) sorts before word {}",
                        ordinal, word, prev_ordinal
                    )));
                }
            }
            previous = Some((ordinal, key));
        }

        Ok(())
    }

    /// Number of words in the table.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.count
    }

    /// Length of the packed buffer, excluding the final NUL.
    #[inline]
    pub fn packed_len(&self) -> usize {
        self.text.len() - 1
    }

    /// The packed buffer, final NUL included.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Slice of the packed buffer between two byte offsets.
    ///
    /// Offsets come from the [`WordMap`](super::WordMap) and always sit
    /// on word boundaries.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &str {
        &self.text[start..end]
    }

    /// Iterate over the words in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        // Without the final terminator, so no empty piece trails the last word.
        self.text[..self.packed_len()].split(NUL as char)
    }
}

/// Word offsets are stored as `u32`, so the packed table must fit that range.
fn check_packed_len(len: usize) -> Result<()> {
    if len > u32::MAX as usize {
        return Err(CodecError::InvalidTable(format!(
            "word table is {} bytes, offsets address at most {}",
            len,
            u32::MAX
        )));
    }
    Ok(())
}
