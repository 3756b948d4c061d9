// src/core/vocabulary.rs
use crate::core::types::{BucketAlias, Routine, Tile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The editable symbol vocabulary: Tier 1 starters, Tier 2 contexts per
/// starter, Tier 3 option buckets and the routines.
///
/// Every field defaults to empty so a structurally valid but sparse document
/// still loads; missing pieces degrade to empty menus at use time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyDocument {
    pub starters: Vec<Tile>,
    /// starter key -> context tiles
    pub contexts: BTreeMap<String, Vec<Tile>>,
    /// bucket key -> Tier 3 options
    pub specifics: BTreeMap<String, Vec<String>>,
    pub routines: Vec<Routine>,
    /// Extra irregular bucket mappings on top of the built-in table.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bucket_aliases: Vec<BucketAlias>,
}

impl VocabularyDocument {
    /// Context tiles for a starter, empty when the starter is unknown.
    pub fn contexts(&self, starter_key: &str) -> &[Tile] {
        self.contexts
            .get(starter_key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Tier 3 options of a bucket, empty when the bucket does not exist.
    pub fn specifics(&self, bucket: &str) -> &[String] {
        self.specifics
            .get(bucket)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_bucket(&self, bucket: &str) -> bool {
        self.specifics.contains_key(bucket)
    }

    pub fn starter(&self, key: &str) -> Option<&Tile> {
        self.starters.iter().find(|s| s.key == key)
    }

    pub fn routine(&self, key: &str) -> Option<&Routine> {
        self.routines.iter().find(|r| r.key == key)
    }

    /// Appends an option to a bucket, creating the bucket if needed.
    /// Returns false for blank values and values already in the bucket.
    pub fn add_specific(&mut self, bucket: &str, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        let options = self.specifics.entry(bucket.to_string()).or_default();
        if options.iter().any(|o| o == value) {
            return false;
        }
        options.push(value.to_string());
        true
    }

    /// Removes every occurrence of `value` from a bucket.
    /// Returns whether anything was removed.
    pub fn remove_specific(&mut self, bucket: &str, value: &str) -> bool {
        match self.specifics.get_mut(bucket) {
            Some(options) => {
                let before = options.len();
                options.retain(|o| o != value);
                options.len() != before
            }
            None => false,
        }
    }
}
