//! The word table, word map and guide table bundled together.

use crate::error::Result;
use crate::table::{GuideTable, PrefixKey, WordMap, WordTable};
use tracing::debug;

/// Read-only dictionary shared by every encode and decode.
///
/// Once built, nothing in a `Dictionary` changes, so it can be wrapped in
/// an `Arc` and read from any number of threads.
#[derive(Debug, Clone)]
pub struct Dictionary {
    table: WordTable,
    map: WordMap,
    guide: GuideTable,
}

impl Dictionary {
    /// Build a dictionary from words already sorted by their first two bytes.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::from_table(WordTable::from_words(words)?))
    }

    /// Build a dictionary from words in any order, dropping duplicates.
    pub fn from_unsorted<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words.into_iter().map(|w| w.as_ref().to_string()).collect();
        words.sort_unstable_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
        words.dedup();
        Self::from_words(words)
    }

    /// Derive the map and guide table for a word table.
    pub fn from_table(table: WordTable) -> Self {
        let map = WordMap::build(&table);
        let guide = GuideTable::build(&table, &map);

        debug!(
            words = table.word_count(),
            bytes = table.packed_len(),
            "built dictionary"
        );

        Self { table, map, guide }
    }

    /// Assemble a dictionary from precompiled tables.
    ///
    /// The word map and guide table are checked against the word table.
    pub fn from_parts(table: WordTable, offsets: Vec<u32>, guide: Vec<u16>) -> Result<Self> {
        let map = WordMap::from_offsets(offsets, &table)?;
        let guide = GuideTable::from_entries(guide, &table, &map)?;

        debug!(
            words = table.word_count(),
            bytes = table.packed_len(),
            "loaded precompiled dictionary"
        );

        Ok(Self { table, map, guide })
    }

    /// Number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.word_count()
    }

    /// Always false; a dictionary holds at least one word.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Word stored at `ordinal`.
    ///
    /// # Panics
    ///
    /// Panics if `ordinal` is out of range. Ordinals returned by
    /// [`find_word`](Self::find_word) are always in range; use
    /// [`get`](Self::get) for ordinals from untrusted input.
    #[inline]
    pub fn word_at(&self, ordinal: u16) -> &str {
        self.word(ordinal as usize)
    }

    /// Word stored at `ordinal`, if there is one.
    #[inline]
    pub fn get(&self, ordinal: u16) -> Option<&str> {
        ((ordinal as usize) < self.len()).then(|| self.word(ordinal as usize))
    }

    #[inline]
    pub(crate) fn word(&self, index: usize) -> &str {
        let start = self.map.offset(index);
        let end = if index + 1 < self.len() {
            // next word start, minus the separator
            self.map.offset(index + 1) - 1
        } else {
            self.table.packed_len()
        };
        self.table.slice(start, end)
    }

    /// Guide table entry for a prefix.
    #[inline]
    pub fn guide_lookup(&self, key: PrefixKey) -> u16 {
        self.guide.lookup(key)
    }

    /// Iterate over the words in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.table.iter()
    }

    pub fn table(&self) -> &WordTable {
        &self.table
    }

    pub fn map(&self) -> &WordMap {
        &self.map
    }

    pub fn guide(&self) -> &GuideTable {
        &self.guide
    }
}
