//! Load functionality for dictionaries.

use super::format::{
    u16s_from_le, u32s_from_le, Manifest, GUIDETABLE_FILE, MANIFEST_FILE, WORDMAP_FILE,
    WORDTABLE_FILE,
};
use cobalt_core::{CodecError, Dictionary, Result, WordTable};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// How a newline-separated word list is turned into a table.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordListOptions {
    /// Take at most this many words from the top of the list
    pub limit: Option<usize>,
    /// Sort and deduplicate instead of requiring a pre-sorted list
    pub sort: bool,
}

/// Table loader - reads dictionaries from disk.
pub struct TableLoader;

impl TableLoader {
    /// Load a table directory written by
    /// [`TableSaver::save`](super::TableSaver::save).
    ///
    /// All three tables are checked against each other and against the
    /// manifest before the dictionary is handed out.
    pub fn load(path: &Path) -> Result<Dictionary> {
        let manifest_path = path.join(MANIFEST_FILE);
        let file = File::open(&manifest_path).map_err(|e| {
            CodecError::Load(format!(
                "Failed to open file {}: {}",
                manifest_path.display(),
                e
            ))
        })?;
        let manifest: Manifest = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| CodecError::Load(format!("Failed to deserialize manifest: {}", e)))?;

        debug!(version = %manifest.version, words = manifest.word_count, "read manifest");

        let table = WordTable::from_packed(read_file(&path.join(WORDTABLE_FILE))?)?;
        if table.word_count() != manifest.word_count
            || table.packed_len() != manifest.wordtable_len
        {
            return Err(CodecError::Load(format!(
                "{} does not match manifest: {} words / {} bytes, expected {} / {}",
                WORDTABLE_FILE,
                table.word_count(),
                table.packed_len(),
                manifest.word_count,
                manifest.wordtable_len
            )));
        }

        let offsets = u32s_from_le(&read_file(&path.join(WORDMAP_FILE))?).ok_or_else(|| {
            CodecError::Load(format!("{} length is not a multiple of 4", WORDMAP_FILE))
        })?;
        let guide = u16s_from_le(&read_file(&path.join(GUIDETABLE_FILE))?).ok_or_else(|| {
            CodecError::Load(format!("{} length is not a multiple of 2", GUIDETABLE_FILE))
        })?;

        let dictionary = Dictionary::from_parts(table, offsets, guide)?;
        info!(path = %path.display(), words = dictionary.len(), "loaded word tables");

        Ok(dictionary)
    }

    /// Build a dictionary from a newline-separated word list.
    ///
    /// Each non-blank line is one word; surrounding whitespace is ignored.
    pub fn load_word_list(path: &Path, options: WordListOptions) -> Result<Dictionary> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CodecError::Load(format!("Failed to read {}: {}", path.display(), e)))?;

        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(options.limit.unwrap_or(usize::MAX));

        let dictionary = if options.sort {
            Dictionary::from_unsorted(words)?
        } else {
            Dictionary::from_words(words)?
        };
        info!(path = %path.display(), words = dictionary.len(), "imported word list");

        Ok(dictionary)
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|err| CodecError::Io {
        path: path.to_path_buf(),
        err,
    })
}
