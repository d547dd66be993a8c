//! Save functionality for dictionaries.

use super::format::{Manifest, GUIDETABLE_FILE, MANIFEST_FILE, WORDMAP_FILE, WORDTABLE_FILE};
use cobalt_core::{CodecError, Dictionary, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Table saver - writes a dictionary out as a table directory.
pub struct TableSaver<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> TableSaver<'a> {
    /// Create a new table saver.
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Save the three tables and the manifest into `path`.
    ///
    /// The directory is created if it does not exist.
    pub fn save(&self, path: &Path) -> Result<()> {
        create_dir(path)?;

        write_file(&path.join(WORDTABLE_FILE), self.dictionary.table().as_bytes())?;

        let offsets: Vec<u8> = self
            .dictionary
            .map()
            .as_slice()
            .iter()
            .flat_map(|o| o.to_le_bytes())
            .collect();
        write_file(&path.join(WORDMAP_FILE), &offsets)?;

        let guide: Vec<u8> = self
            .dictionary
            .guide()
            .as_slice()
            .iter()
            .flat_map(|o| o.to_le_bytes())
            .collect();
        write_file(&path.join(GUIDETABLE_FILE), &guide)?;

        let manifest_path = path.join(MANIFEST_FILE);
        let file = File::create(&manifest_path).map_err(|err| CodecError::Io {
            path: manifest_path.clone(),
            err,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.manifest())
            .map_err(|e| CodecError::Save(format!("Failed to serialize manifest: {}", e)))?;
        writer.flush().map_err(|err| CodecError::Io {
            path: manifest_path,
            err,
        })?;

        info!(
            path = %path.display(),
            words = self.dictionary.len(),
            "saved word tables"
        );

        Ok(())
    }

    /// Save the words as a newline-separated list, one word per line.
    ///
    /// The result can be fed back through
    /// [`TableLoader::load_word_list`](super::TableLoader::load_word_list).
    pub fn save_word_list(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir(parent)?;
        }

        let file = File::create(path).map_err(|err| CodecError::Io {
            path: path.to_path_buf(),
            err,
        })?;
        let mut writer = BufWriter::new(file);

        for word in self.dictionary.iter() {
            writeln!(writer, "{}", word)
                .map_err(|e| CodecError::Save(format!("Failed to write word list: {}", e)))?;
        }
        writer
            .flush()
            .map_err(|e| CodecError::Save(format!("Failed to write word list: {}", e)))?;

        Ok(())
    }

    fn manifest(&self) -> Manifest {
        Manifest {
            version: env!("CARGO_PKG_VERSION").to_string(),
            word_count: self.dictionary.len(),
            wordtable_len: self.dictionary.table().packed_len(),
        }
    }
}

fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| {
        CodecError::Save(format!(
            "Failed to create directory {}: {}",
            path.display(),
            e
        ))
    })
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|err| CodecError::Io {
        path: path.to_path_buf(),
        err,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest() {
        let dict = Dictionary::from_words(["cat", "dog", "fish"]).unwrap();
        let manifest = TableSaver::new(&dict).manifest();

        assert_eq!(manifest.word_count, 3);
        assert_eq!(manifest.wordtable_len, 12);
        assert_eq!(manifest.version, env!("CARGO_PKG_VERSION"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_manifest_write_failure_is_reported() {
        let full = Path::new("/dev/full");
        if !full.exists() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(full, dir.path().join(MANIFEST_FILE)).unwrap();

        let dict = Dictionary::from_words(["cat", "dog"]).unwrap();
        let err = TableSaver::new(&dict).save(dir.path()).unwrap_err();

        match err {
            CodecError::Io { path, .. } => assert_eq!(path, dir.path().join(MANIFEST_FILE)),
            other => panic!("expected I/O error, got {other:?}"),
        }
    }

    #[test]
    fn test_saved_manifest_is_complete() {
        let dir = tempfile::tempdir().unwrap();
        let dict = Dictionary::from_words(["cat", "dog", "fish"]).unwrap();
        TableSaver::new(&dict).save(dir.path()).unwrap();

        let json = std::fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        let manifest: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(manifest.word_count, 3);
        assert_eq!(manifest.wordtable_len, 12);
    }

    #[test]
    fn test_save_writes_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let dict = Dictionary::from_words(["cat", "dog"]).unwrap();
        TableSaver::new(&dict).save(dir.path()).unwrap();

        let table = std::fs::read(dir.path().join(WORDTABLE_FILE)).unwrap();
        let map = std::fs::read(dir.path().join(WORDMAP_FILE)).unwrap();
        let guide = std::fs::read(dir.path().join(GUIDETABLE_FILE)).unwrap();

        assert_eq!(table, b"cat\0dog\0");
        assert_eq!(map, vec![0, 0, 0, 0, 4, 0, 0, 0]);
        assert_eq!(guide.len(), 2 * cobalt_core::GUIDE_ENTRIES);
        assert!(dir.path().join(MANIFEST_FILE).exists());
    }

    #[test]
    fn test_save_word_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("words.txt");
        let dict = Dictionary::from_words(["a", "an", "the"]).unwrap();
        TableSaver::new(&dict).save_word_list(&path).unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "a\nan\nthe\n");
    }
}
