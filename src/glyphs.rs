// File: src/glyphs.rs
//! Icon names are opaque to the core. A renderer answers whether it can draw
//! a name; anything it cannot draw is shown as [`FALLBACK_GLYPH`].

/// Shown in place of an icon the renderer has no glyph for.
pub const FALLBACK_GLYPH: &str = "🔷";

pub trait GlyphCatalog {
    fn glyph(&self, name: &str) -> Option<&str>;

    fn has_glyph(&self, name: &str) -> bool {
        self.glyph(name).is_some()
    }
}

/// The glyph to draw for `name`, or the fallback.
pub fn glyph_for<'a>(catalog: &'a dyn GlyphCatalog, name: &str) -> &'a str {
    match catalog.glyph(name) {
        Some(glyph) => glyph,
        None => {
            tracing::debug!(icon = name, "no glyph for icon, using fallback");
            FALLBACK_GLYPH
        }
    }
}

const BUILTIN: &[(&str, &str)] = &[
    ("Home", "🏠"),
    ("Hand", "✋"),
    ("ThumbsUp", "👍"),
    ("ThumbsDown", "👎"),
    ("MessageSquare", "💬"),
    ("HelpCircle", "❓"),
    ("Brain", "🧠"),
    ("Timer", "⏲"),
    ("Volume2", "🔊"),
    ("VolumeX", "🔇"),
    ("RotateCcw", "🔄"),
    ("Star", "⭐"),
    ("StarOff", "☆"),
    ("Settings", "⚙"),
    ("Download", "⬇"),
    ("Upload", "⬆"),
    ("Plus", "➕"),
    ("Trash2", "🗑"),
    ("Pencil", "✏"),
    ("Utensils", "🍴"),
    ("Sandwich", "🥪"),
    ("CupSoda", "🥤"),
    ("Bike", "🚲"),
    ("Music", "🎵"),
    ("CalendarIcon", "📅"),
    ("BedDouble", "🛏"),
    ("School", "🏫"),
    ("Activity", "📈"),
    ("Heart", "❤"),
    ("Users", "👥"),
    ("DoorOpen", "🚪"),
    ("MapPin", "📍"),
    ("BookOpen", "📖"),
    ("Tv", "📺"),
    ("Lightbulb", "💡"),
    ("EyeOff", "🙈"),
    ("CloudSun", "⛅"),
    ("ThermometerSun", "🌡"),
    ("ThermometerSnowflake", "❄"),
];

/// The icon set the bundled renderers ship, drawn as emoji.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinGlyphs;

impl GlyphCatalog for BuiltinGlyphs {
    fn glyph(&self, name: &str) -> Option<&str> {
        BUILTIN
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, glyph)| glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_icon_resolves() {
        assert!(BuiltinGlyphs.has_glyph("Heart"));
        assert_eq!(glyph_for(&BuiltinGlyphs, "Star"), "⭐");
    }

    #[test]
    fn unknown_icon_falls_back() {
        assert!(!BuiltinGlyphs.has_glyph("Horse"));
        assert_eq!(glyph_for(&BuiltinGlyphs, "Horse"), FALLBACK_GLYPH);
    }
}
