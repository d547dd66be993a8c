//! On-disk layout of a table directory.
//!
//! A table directory holds the three precompiled tables plus a manifest:
//!
//! | file             | contents                                     |
//! |------------------|----------------------------------------------|
//! | `wordtable.bin`  | null-separated, null-terminated word bytes   |
//! | `wordmap.bin`    | one little-endian `u32` offset per word      |
//! | `guidetable.bin` | 65536 little-endian `u16` ordinals           |
//! | `cobalt.json`    | [`Manifest`]                                 |

use serde::{Deserialize, Serialize};

pub const MANIFEST_FILE: &str = "cobalt.json";
pub const WORDTABLE_FILE: &str = "wordtable.bin";
pub const WORDMAP_FILE: &str = "wordmap.bin";
pub const GUIDETABLE_FILE: &str = "guidetable.bin";

/// Sizes recorded alongside the tables so a load can be checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Crate version that wrote the tables
    pub version: String,
    /// Number of words
    pub word_count: usize,
    /// Length of `wordtable.bin`, excluding its final NUL
    pub wordtable_len: usize,
}

/// Decode little-endian `u32`s.
pub(crate) fn u32s_from_le(bytes: &[u8]) -> Option<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        return None;
    }
    Some(
        bytes
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect(),
    )
}

/// Decode little-endian `u16`s.
pub(crate) fn u16s_from_le(bytes: &[u8]) -> Option<Vec<u16>> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    Some(
        bytes
            .chunks_exact(2)
            .map(|c| u16::from_le_bytes([c[0], c[1]]))
            .collect(),
    )
}
