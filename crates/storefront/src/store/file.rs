//! File-backed store.
//!
//! One `<key>.json` document per collection under a data directory. Writes
//! go through a temp file and a rename so a crash mid-write never leaves a
//! torn document behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{Collection, Store, StoreError};

/// A store persisting each collection as a JSON text file.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a file store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// The directory holding the collection documents.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn document_path(&self, collection: Collection) -> PathBuf {
        self.dir.join(format!("{}.json", collection.key()))
    }
}

impl Store for FileStore {
    fn read(&self, collection: Collection) -> Result<Option<String>, StoreError> {
        let path = self.document_path(collection);
        match fs::read_to_string(&path) {
            Ok(document) => Ok(Some(document)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn write(&self, collection: Collection, document: &str) -> Result<(), StoreError> {
        let path = self.document_path(collection);
        let tmp = path.with_extension("json.tmp");

        write_and_sync(&tmp, document).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io { path, source })?;

        tracing::debug!(collection = %collection, "wrote store document");
        Ok(())
    }
}

/// Write `document` to `path` and flush it to disk before returning.
fn write_and_sync(path: &Path, document: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(document.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
