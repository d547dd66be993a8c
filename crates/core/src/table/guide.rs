//! Two-byte prefix index over the word table.
//!
//! Every possible two-byte prefix has one slot holding the ordinal of the
//! first word that starts with it. Prefixes no word starts with hold the
//! ordinal of the last word instead; a search recognizes that case because
//! the word found there does not share the query's prefix.

use super::word_map::WordMap;
use super::word_table::WordTable;
use crate::error::{CodecError, Result};

/// Number of guide table slots, one per two-byte prefix.
pub const GUIDE_ENTRIES: usize = 1 << 16;

/// First two bytes of a word packed into a `u16`.
///
/// A one-byte word uses its NUL terminator as the second byte. The bytes
/// are packed big-endian so that key order is byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrefixKey(u16);

impl PrefixKey {
    /// Key of a word. An empty word gets the all-zero key.
    #[inline]
    pub fn of(word: &[u8]) -> Self {
        let first = word.first().copied().unwrap_or(0);
        let second = word.get(1).copied().unwrap_or(0);
        Self(u16::from_be_bytes([first, second]))
    }

    #[inline]
    pub fn as_u16(self) -> u16 {
        self.0
    }

    #[inline]
    fn slot(self) -> usize {
        self.0 as usize
    }
}

/// Prefix -> first ordinal lookup table with [`GUIDE_ENTRIES`] slots.
#[derive(Clone, PartialEq, Eq)]
pub struct GuideTable {
    entries: Box<[u16]>,
}

impl GuideTable {
    /// Derive the guide table from a word table and its map.
    pub fn build(table: &WordTable, map: &WordMap) -> Self {
        let count = table.word_count();
        // WordTable guarantees at least one word.
        let last = (count - 1) as u16;
        let mut entries = vec![last; GUIDE_ENTRIES].into_boxed_slice();

        // Walking backwards leaves the lowest ordinal in each slot.
        for ordinal in (0..count).rev() {
            let start = map.offset(ordinal);
            let key = PrefixKey::of(&table.as_bytes()[start..]);
            entries[key.slot()] = ordinal as u16;
        }

        Self { entries }
    }

    /// Adopt a precompiled guide table, checking it against the word table.
    pub fn from_entries(entries: Vec<u16>, table: &WordTable, map: &WordMap) -> Result<Self> {
        if entries.len() != GUIDE_ENTRIES {
            return Err(CodecError::InvalidTable(format!(
                "guide table has {} entries, expected {}",
                entries.len(),
                GUIDE_ENTRIES
            )));
        }

        let expected = Self::build(table, map);
        if let Some(slot) = entries
            .iter()
            .zip(expected.entries.iter())
            .position(|(got, want)| got != want)
        {
            return Err(CodecError::InvalidTable(format!(
                "guide table slot 0x{:04x} is {}, expected {}",
                slot, entries[slot], expected.entries[slot]
            )));
        }

        Ok(expected)
    }

    /// Ordinal stored for `key`. Never fails.
    #[inline]
    pub fn lookup(&self, key: PrefixKey) -> u16 {
        self.entries[key.slot()]
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.entries
    }
}

impl std::fmt::Debug for GuideTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuideTable")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guide_for(words: &[&str]) -> GuideTable {
        let table = WordTable::from_words(words).unwrap();
        let map = WordMap::build(&table);
        GuideTable::build(&table, &map)
    }

    #[test]
    fn test_prefix_key() {
        assert_eq!(PrefixKey::of(b"dog").as_u16(), 0x646f);
        assert_eq!(PrefixKey::of(b"do").as_u16(), 0x646f);
        assert_eq!(PrefixKey::of(b"a").as_u16(), 0x6100);
        assert_eq!(PrefixKey::of(b"").as_u16(), 0);
        assert!(PrefixKey::of(b"a") < PrefixKey::of(b"an"));
    }

    #[test]
    fn test_first_ordinal_per_prefix() {
        let guide = guide_for(&["a", "an", "and", "cat", "dog", "door"]);

        assert_eq!(guide.lookup(PrefixKey::of(b"a")), 0);
        assert_eq!(guide.lookup(PrefixKey::of(b"any")), 1);
        assert_eq!(guide.lookup(PrefixKey::of(b"cab")), 3);
        assert_eq!(guide.lookup(PrefixKey::of(b"do")), 4);
    }

    #[test]
    fn test_absent_prefix_holds_last_ordinal() {
        let guide = guide_for(&["cat", "dog", "fish"]);

        assert_eq!(guide.lookup(PrefixKey::of(b"zzz")), 2);
        assert_eq!(guide.lookup(PrefixKey::of(b"")), 2);
        assert_eq!(
            guide.as_slice().iter().filter(|&&o| o != 2).count(),
            2,
            "only 'ca' and 'do' point elsewhere"
        );
    }

    #[test]
    fn test_from_entries() {
        let table = WordTable::from_words(["cat", "dog"]).unwrap();
        let map = WordMap::build(&table);
        let good = GuideTable::build(&table, &map).as_slice().to_vec();

        assert!(GuideTable::from_entries(good.clone(), &table, &map).is_ok());
        assert!(GuideTable::from_entries(vec![0; 16], &table, &map).is_err());

        let mut bad = good;
        bad[PrefixKey::of(b"do").slot()] = 0;
        assert!(GuideTable::from_entries(bad, &table, &map).is_err());
    }
}
