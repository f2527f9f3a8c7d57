//! On-disk persistence for the address book.
//!
//! The whole index is one JSON document with two top-level keys,
//! `name_index` and `phone_index`, each holding the structural dump of its
//! trie. The dump repeats contact data at every node on a key's path, so
//! file size grows with total indexed characters rather than contact count;
//! in exchange a reload rebuilds the index without re-inserting anything.

use crate::index::book::AddressBook;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "rolo";
const INDEX_FILE: &str = "contacts.json";

impl AddressBook {
    /// Write both tries to `path` as a single JSON document.
    ///
    /// Parent directories are created as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create index file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)
            .with_context(|| format!("Failed to write index to {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to write index to {}", path.display()))?;
        Ok(())
    }

    /// Replace this book with the index stored at `path`.
    ///
    /// The document is parsed in full before anything is replaced, so a
    /// read or parse failure returns an error and leaves the book exactly
    /// as it was.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read index file {}", path.display()))?;
        let book: AddressBook = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse index file {}", path.display()))?;
        *self = book;
        Ok(())
    }
}

/// Default index location under the platform data directory.
pub fn default_index_path() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine app data directory")?;
    Ok(base.join(APP_NAME).join(INDEX_FILE))
}
