//! Word lookup.

use crate::dictionary::Dictionary;
use crate::error::{CodecError, Result};
use crate::table::PrefixKey;

/// True only if `a` and `b` are the same string.
///
/// Unlike a three-way comparison this computes no ordering and stops at
/// the first byte that differs.
#[inline]
pub fn streq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| x == y)
}

impl Dictionary {
    /// Ordinal of `word`.
    ///
    /// Fails with [`CodecError::EmptyWord`] for an empty word and
    /// [`CodecError::WordNotFound`] when the word is not in the table.
    pub fn find_word(&self, word: &str) -> Result<u16> {
        if word.is_empty() {
            return Err(CodecError::EmptyWord);
        }
        self.lookup(word).ok_or_else(|| CodecError::WordNotFound(word.to_string()))
    }

    /// Ordinal of `word`, or `None` if it is empty or not in the table.
    ///
    /// The guide table gives the first ordinal sharing the word's two-byte
    /// prefix; the run of words with that prefix is then scanned for an
    /// exact match. The scan never leaves the run, so its length depends on
    /// how many words share the prefix rather than on the table size.
    pub fn lookup(&self, word: &str) -> Option<u16> {
        if word.is_empty() {
            return None;
        }

        let key = PrefixKey::of(word.as_bytes());
        let mut index = self.guide_lookup(key) as usize;

        // An absent prefix lands on the last word, which fails the prefix
        // check right away.
        while index < self.len() {
            let candidate = self.word(index);
            if PrefixKey::of(candidate.as_bytes()) != key {
                break;
            }
            if streq(candidate, word) {
                return Some(index as u16);
            }
            index += 1;
        }

        None
    }

    /// Whether `word` is in the dictionary.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animals() -> Dictionary {
        Dictionary::from_words(["cat", "dog", "fish"]).unwrap()
    }

    #[test]
    fn test_streq() {
        assert!(streq("dog", "dog"));
        assert!(streq("", ""));
        assert!(!streq("dog", "dot"));
        assert!(!streq("do", "dog"));
        assert!(!streq("dog", "do"));
    }

    #[test]
    fn test_find_word() {
        let dict = animals();

        assert_eq!(dict.find_word("cat").unwrap(), 0);
        assert_eq!(dict.find_word("dog").unwrap(), 1);
        assert_eq!(dict.find_word("fish").unwrap(), 2);
    }

    #[test]
    fn test_empty_word() {
        assert!(matches!(animals().find_word(""), Err(CodecError::EmptyWord)));
    }

    #[test]
    fn test_absent_prefix() {
        let dict = animals();

        assert!(matches!(
            dict.find_word("zzz"),
            Err(CodecError::WordNotFound(w)) if w == "zzz"
        ));
        // Shares nothing with the sentinel word "fish" either.
        assert!(dict.find_word("a").is_err());
    }

    #[test]
    fn test_shared_prefix_run() {
        let dict = Dictionary::from_words(["a", "an", "and", "ant", "any", "be"]).unwrap();

        assert_eq!(dict.find_word("a").unwrap(), 0);
        assert_eq!(dict.find_word("an").unwrap(), 1);
        assert_eq!(dict.find_word("ant").unwrap(), 3);
        assert_eq!(dict.find_word("any").unwrap(), 4);
        assert!(dict.find_word("anthem").is_err());
        assert!(dict.find_word("am").is_err());
        assert!(dict.contains("be"));
    }

    #[test]
    fn test_prefix_of_last_word() {
        // The sentinel slot and a genuine run both point at the last word.
        let dict = animals();

        assert!(dict.find_word("fi").is_err());
        assert!(dict.find_word("fishy").is_err());
        assert_eq!(dict.find_word("fish").unwrap(), 2);
    }

    #[test]
    fn test_lookup() {
        let dict = animals();

        assert_eq!(dict.lookup("fish"), Some(2));
        assert_eq!(dict.lookup("bird"), None);
        assert_eq!(dict.lookup(""), None);
    }

    #[test]
    fn test_case_sensitive() {
        assert!(animals().find_word("Cat").is_err());
    }

    #[test]
    fn test_round_trip_every_ordinal() {
        let dict =
            Dictionary::from_unsorted(["the", "then", "they", "a", "I", "in", "it", "is"]).unwrap();

        for ordinal in 0..dict.len() as u16 {
            assert_eq!(dict.find_word(dict.word_at(ordinal)).unwrap(), ordinal);
        }
    }
}
