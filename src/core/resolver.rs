// src/core/resolver.rs
use crate::core::types::BucketKey;
use crate::core::vocabulary::VocabularyDocument;
use std::collections::BTreeMap;

/// Label meaning "no visible token, just route to a bucket".
pub const PLACEHOLDER_LABEL: &str = "—";

/// Maps a selected context to the bucket holding its Tier 3 options.
///
/// The bucket is the context's own key unless the `(starter, context)` pair
/// has an entry in the alias table. Keying by the pair keeps starters that
/// share a context key (e.g. "go" under "Can I" and under "Let’s") apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResolver {
    aliases: BTreeMap<(String, String), BucketKey>,
    placeholder: String,
}

impl Default for KeyResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KeyResolver {
    /// An empty alias table.
    pub fn new(placeholder: &str) -> Self {
        Self {
            aliases: BTreeMap::new(),
            placeholder: placeholder.to_string(),
        }
    }

    /// The table shipped with the built-in vocabulary.
    pub fn builtin() -> Self {
        let mut resolver = Self::new(PLACEHOLDER_LABEL);
        resolver.insert_alias("lets", "go", "go2");
        resolver
    }

    /// Built-in aliases extended (and overridden) by those the document carries.
    pub fn for_document(doc: &VocabularyDocument, placeholder: &str) -> Self {
        let mut resolver = Self::builtin();
        resolver.placeholder = placeholder.to_string();
        for alias in &doc.bucket_aliases {
            resolver.insert_alias(&alias.starter, &alias.context, &alias.bucket);
        }
        resolver
    }

    pub fn insert_alias(&mut self, starter: &str, context: &str, bucket: &str) {
        self.aliases.insert(
            (starter.to_string(), context.to_string()),
            bucket.to_string(),
        );
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_placeholder(&self, label: &str) -> bool {
        label.trim() == self.placeholder
    }

    /// Bucket key for `context` selected under `starter`.
    pub fn bucket_key<'a>(&'a self, starter: Option<&str>, context: &'a str) -> &'a str {
        starter
            .and_then(|s| self.aliases.get(&(s.to_string(), context.to_string())))
            .map(String::as_str)
            .unwrap_or(context)
    }

    /// Tier 3 options for a selection. Unknown buckets give an empty slice.
    pub fn options<'d>(
        &self,
        doc: &'d VocabularyDocument,
        starter: Option<&str>,
        context: &str,
    ) -> &'d [String] {
        doc.specifics(self.bucket_key(starter, context))
    }
}
