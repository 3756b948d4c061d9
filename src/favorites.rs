// File: src/favorites.rs
use crate::core::sentence::normalize;
use serde::{Deserialize, Serialize};

/// Saved sentences: an ordered set keyed by the normalized text.
///
/// Serializes as a plain JSON string array, which is also the persisted form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FavoritesStore {
    entries: Vec<String>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves the normalized sentence. Returns false for blanks and duplicates.
    pub fn save(&mut self, sentence: &str) -> bool {
        let sentence = normalize(sentence);
        if sentence.is_empty() || self.contains(&sentence) {
            return false;
        }
        self.entries.push(sentence);
        true
    }

    /// Removes an exact match. Returns whether anything was removed.
    pub fn remove(&mut self, sentence: &str) -> bool {
        match self.entries.iter().position(|e| e == sentence) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, sentence: &str) -> bool {
        self.entries.iter().any(|e| e == sentence)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.clone()
    }
}

// Stored lists may predate normalization, so loading goes through `save`.
impl From<Vec<String>> for FavoritesStore {
    fn from(list: Vec<String>) -> Self {
        let mut store = Self::new();
        for sentence in &list {
            store.save(sentence);
        }
        store
    }
}

impl From<FavoritesStore> for Vec<String> {
    fn from(store: FavoritesStore) -> Self {
        store.entries
    }
}
