//! Ordinal to byte-offset mapping.

use super::word_table::{WordTable, NUL};
use crate::error::{CodecError, Result};

/// Byte offset of every word inside a [`WordTable`].
///
/// `offsets[n]` is where word `n` starts; the word runs up to the next
/// NUL byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMap {
    offsets: Box<[u32]>,
}

impl WordMap {
    /// Derive the map by scanning the packed table once.
    pub fn build(table: &WordTable) -> Self {
        let bytes = table.as_bytes();
        let mut offsets = Vec::with_capacity(table.word_count());
        let mut start = 0u32;

        for (i, &b) in bytes.iter().enumerate() {
            if b == NUL {
                offsets.push(start);
                start = i as u32 + 1;
            }
        }

        Self {
            offsets: offsets.into_boxed_slice(),
        }
    }

    /// Adopt precompiled offsets, checking them against the table they index.
    pub fn from_offsets(offsets: Vec<u32>, table: &WordTable) -> Result<Self> {
        let expected = Self::build(table);

        if offsets.len() != expected.len() {
            return Err(CodecError::InvalidTable(format!(
                "word map has {} entries, word table has {} words",
                offsets.len(),
                expected.len()
            )));
        }
        if let Some(ordinal) = offsets
            .iter()
            .zip(expected.offsets.iter())
            .position(|(got, want)| got != want)
        {
            return Err(CodecError::InvalidTable(format!(
                "word map entry {} is {}, expected {}",
                ordinal, offsets[ordinal], expected.offsets[ordinal]
            )));
        }

        Ok(expected)
    }

    /// Start offset of word `ordinal`.
    ///
    /// # Panics
    ///
    /// Panics if `ordinal` is not below [`len`](Self::len).
    #[inline]
    pub fn offset(&self, ordinal: usize) -> usize {
        self.offsets[ordinal] as usize
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.offsets
    }
}
