// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Name of a Tier 3 options list inside the document's `specifics` map.
pub type BucketKey = String;

/// A literal token list injected wholesale into the sentence by a routine.
pub type Phrase = Vec<String>;

/// A symbolic tile shown in Tier 1 (starters) or Tier 2 (contexts).
///
/// `icon` is an opaque symbolic name. The core never interprets it; the
/// renderer decides whether it has a glyph for it. A missing icon reads as
/// empty and draws the fallback glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
}

impl Tile {
    pub fn new(key: &str, label: &str, icon: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// A named shortcut holding pre-authored phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub phrases: Vec<Phrase>,
}

/// One entry of the irregular bucket table: selecting `context` under
/// `starter` reads Tier 3 options from `bucket` instead of `context`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketAlias {
    pub starter: String,
    pub context: String,
    pub bucket: BucketKey,
}
