// File: src/persistence.rs
use crate::core::defaults::default_document;
use crate::core::vocabulary::VocabularyDocument;
use crate::document;
use crate::error::StorageError;
use crate::favorites::FavoritesStore;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const RECORD_VERSION: u32 = 1;

/// The key-value blob store holding the document and favorites records.
pub trait BlobStore {
    /// `Ok(None)` when nothing has been stored under `key` yet.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

/// On-disk form of one record. Each record carries its own version so the
/// document and favorites can evolve independently.
#[derive(serde::Serialize, serde::Deserialize)]
struct Envelope {
    version: u32,
    payload: Vec<u8>,
}

/// One file per key under a directory, replaced atomically on every save.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.bin"))
    }
}

impl BlobStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let file = match File::open(self.path_for(key)) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let envelope: Envelope = bincode::deserialize_from(BufReader::new(file))?;
        if envelope.version != RECORD_VERSION {
            return Err(StorageError::Version {
                found: envelope.version,
                expected: RECORD_VERSION,
            });
        }
        Ok(Some(envelope.payload))
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;

        let envelope = Envelope {
            version: RECORD_VERSION,
            payload: bytes.to_vec(),
        };

        let temp_file = NamedTempFile::new_in(&self.dir)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            bincode::serialize_into(&mut writer, &envelope)?;
            writer.flush()?;
        }
        temp_file.persist(self.path_for(key))?;
        Ok(())
    }
}

/// Keeps records in memory, for tests and embedders with their own storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.records.get(key).cloned())
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.records.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// The stored document, or the built-in one when absent or unreadable.
pub fn load_document(store: &dyn BlobStore, key: &str) -> VocabularyDocument {
    match store.load(key) {
        Ok(Some(bytes)) => match document::parse(&bytes) {
            Ok(doc) => {
                tracing::info!(starters = doc.starters.len(), "loaded stored vocabulary");
                doc
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored vocabulary unreadable, using built-in");
                default_document()
            }
        },
        Ok(None) => default_document(),
        Err(e) => {
            tracing::warn!(error = %e, "could not read vocabulary record, using built-in");
            default_document()
        }
    }
}

/// The stored favorites, or an empty set when absent or unreadable.
pub fn load_favorites(store: &dyn BlobStore, key: &str) -> FavoritesStore {
    match store.load(key) {
        Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stored favorites unreadable, starting empty");
            FavoritesStore::new()
        }),
        Ok(None) => FavoritesStore::new(),
        Err(e) => {
            tracing::warn!(error = %e, "could not read favorites record, starting empty");
            FavoritesStore::new()
        }
    }
}

/// Fire-and-forget write of the document record.
pub fn save_document(store: &mut dyn BlobStore, key: &str, doc: &VocabularyDocument) {
    if let Err(e) = store.save(key, &document::serialize(doc)) {
        tracing::warn!(error = %e, "failed to save vocabulary");
    }
}

/// Fire-and-forget write of the favorites record.
pub fn save_favorites(store: &mut dyn BlobStore, key: &str, favorites: &FavoritesStore) {
    let bytes = match serde_json::to_vec(favorites) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "failed to encode favorites");
            return;
        }
    };
    if let Err(e) = store.save(key, &bytes) {
        tracing::warn!(error = %e, "failed to save favorites");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));
        assert!(store.load("k").unwrap().is_none());
        store.save("k", b"first").unwrap();
        store.save("k", b"second").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some(&b"second"[..]));
    }

    #[test]
    fn wrong_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let bytes = bincode::serialize(&Envelope {
            version: 99,
            payload: vec![1, 2, 3],
        })
        .unwrap();
        fs::write(dir.path().join("k.bin"), bytes).unwrap();
        assert!(matches!(
            store.load("k"),
            Err(StorageError::Version { found: 99, .. })
        ));
    }

    #[test]
    fn corrupt_records_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.save("doc", b"{{{").unwrap();
        store.save("favs", b"nope").unwrap();
        assert_eq!(load_document(&store, "doc"), default_document());
        assert!(load_favorites(&store, "favs").is_empty());
    }

    #[test]
    fn saved_records_load_back() {
        let mut store = MemoryStore::new();
        let mut doc = default_document();
        doc.add_specific("to_eat", "samosa");
        let mut favs = FavoritesStore::new();
        favs.save("I feel happy");

        save_document(&mut store, "doc", &doc);
        save_favorites(&mut store, "favs", &favs);

        assert_eq!(load_document(&store, "doc"), doc);
        assert_eq!(load_favorites(&store, "favs"), favs);
    }
}
