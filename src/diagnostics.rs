// File: src/diagnostics.rs
//! Self-tests over a vocabulary document.
//!
//! Results are informational. A failing check never blocks loading or import;
//! the engine logs failures and the self-test binary prints them.

use crate::config::VocabularyConfig;
use crate::core::resolver::KeyResolver;
use crate::core::vocabulary::VocabularyDocument;
use crate::glyphs::GlyphCatalog;
use serde::Serialize;

const CORE_ICONS: &[&str] = &[
    "Hand",
    "HelpCircle",
    "MessageSquare",
    "Heart",
    "ThumbsDown",
    "ThumbsUp",
    "DoorOpen",
    "Users",
    "Activity",
    "Home",
];

const ROUTINE_ICONS: &[&str] = &["CloudSun", "BedDouble", "School", "Bike", "Utensils"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    pub name: String,
    pub passed: bool,
    /// What failed, when it is worth listing.
    pub detail: Option<String>,
}

impl Check {
    fn new(name: &str, passed: bool) -> Self {
        Self {
            name: name.to_string(),
            passed,
            detail: None,
        }
    }

    fn listing(name: &str, offenders: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: offenders.is_empty(),
            detail: (!offenders.is_empty()).then(|| offenders.join(", ")),
        }
    }
}

pub fn run_checks(
    doc: &VocabularyDocument,
    vocab: &VocabularyConfig,
    glyphs: &dyn GlyphCatalog,
) -> Vec<Check> {
    let resolver = KeyResolver::for_document(doc, &vocab.placeholder_label);

    let missing = |names: &[&str]| -> Vec<String> {
        names
            .iter()
            .filter(|n| !glyphs.has_glyph(n))
            .map(|n| n.to_string())
            .collect()
    };

    let lets_go = resolver.bucket_key(Some("lets"), "go");

    let mut unrouted = Vec::new();
    for (starter, tiles) in &doc.contexts {
        for tile in tiles {
            let bucket = resolver.bucket_key(Some(starter.as_str()), &tile.key);
            if !doc.has_bucket(bucket) && !resolver.is_placeholder(&tile.label) {
                unrouted.push(format!("{starter}/{}", tile.key));
            }
        }
    }

    let bare_starters = doc
        .starters
        .iter()
        .filter(|s| doc.contexts(&s.key).is_empty())
        .map(|s| s.key.clone())
        .collect();

    let tile_icons = doc
        .starters
        .iter()
        .chain(doc.contexts.values().flatten())
        .map(|t| t.icon.as_str())
        .chain(doc.routines.iter().map(|r| r.icon.as_str()))
        .filter(|icon| !glyphs.has_glyph(icon))
        .map(str::to_string)
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();

    vec![
        Check::listing("Icon availability (core)", missing(CORE_ICONS)),
        Check::listing("Icon availability (routines)", missing(ROUTINE_ICONS)),
        Check::new("Model starters defined", doc.starters.len() > 5),
        Check::new("Model contexts defined", doc.contexts.len() >= 5),
        Check::new(
            "Let’s → go has its own options",
            lets_go != "go" && !doc.specifics(lets_go).is_empty(),
        ),
        Check::new(
            "Suggested choice options exist",
            !doc.specifics(&vocab.choice_context_key).is_empty(),
        ),
        Check::new(
            "Routines have phrases",
            doc.routines.iter().all(|r| !r.phrases.is_empty()),
        ),
        Check::listing("Starters have contexts", bare_starters),
        Check::listing("Contexts route to options", unrouted),
        Check::listing("Tile icons have glyphs", tile_icons),
    ]
}
