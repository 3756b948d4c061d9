// File: src/document.rs
//! Parse and serialize the vocabulary document for storage and file exchange.
//!
//! Parsing only checks that the bytes are a well-formed document. Semantic
//! gaps (a context with no bucket, a starter with no contexts) are accepted
//! and degrade to empty menus at use time; see [`crate::diagnostics`] for the
//! checks that report them.

use crate::core::vocabulary::VocabularyDocument;
use crate::error::{DocumentError, Result};
use std::path::Path;

/// File name offered when exporting the vocabulary.
pub const EXPORT_FILE_NAME: &str = "aahil_aac_model.json";

/// A serialized document ready to hand to the download transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Encodes a document as pretty-printed JSON.
pub fn serialize(doc: &VocabularyDocument) -> Vec<u8> {
    // Plain data with string map keys never fails to encode.
    serde_json::to_vec_pretty(doc).unwrap_or_default()
}

pub fn parse(bytes: &[u8]) -> std::result::Result<VocabularyDocument, DocumentError> {
    let text = std::str::from_utf8(bytes)?;
    // Exported files may carry a byte-order mark from other editors.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    Ok(serde_json::from_str(text)?)
}

/// Reads and parses a document file.
pub fn read_file(path: &Path) -> Result<VocabularyDocument> {
    let bytes = std::fs::read(path)?;
    Ok(parse(&bytes)?)
}

pub fn export(doc: &VocabularyDocument, file_name: &str) -> ExportedDocument {
    ExportedDocument {
        file_name: file_name.to_string(),
        bytes: serialize(doc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::defaults::default_document;
    use crate::core::types::BucketAlias;
    use crate::error::AacError;

    #[test]
    fn default_document_round_trips() {
        let doc = default_document();
        let restored = parse(&serialize(&doc)).unwrap();
        assert_eq!(restored, doc);
    }

    #[test]
    fn aliases_survive_round_trip() {
        let mut doc = default_document();
        doc.bucket_aliases.push(BucketAlias {
            starter: "i_like".to_string(),
            context: "to".to_string(),
            bucket: "things".to_string(),
        });
        assert_eq!(parse(&serialize(&doc)).unwrap(), doc);
    }

    #[test]
    fn malformed_bytes_fail() {
        assert!(matches!(
            parse(b"{ not json"),
            Err(DocumentError::Malformed(_))
        ));
        assert!(matches!(
            parse(&[0xff, 0xfe, 0x00]),
            Err(DocumentError::Encoding(_))
        ));
    }

    #[test]
    fn wrong_shapes_fail() {
        assert!(parse(br#"{"starters": 5}"#).is_err());
        assert!(parse(b"[]").is_err());
    }

    #[test]
    fn sparse_documents_are_accepted() {
        let doc = parse(b"{}").unwrap();
        assert!(doc.starters.is_empty());
        let doc = parse(br#"{"starters":[{"key":"a","label":"A","icon":"Nope"}]}"#).unwrap();
        assert_eq!(doc.starters.len(), 1);
        assert!(doc.contexts("a").is_empty());
    }

    #[test]
    fn missing_icons_default_to_empty() {
        let doc = parse(
            br#"{"starters":[{"key":"i_want","label":"I want"}],
                 "routines":[{"key":"nap","label":"Nap"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.starters[0].icon, "");
        assert_eq!(doc.routines[0].icon, "");
        assert_eq!(
            crate::glyphs::glyph_for(&crate::glyphs::BuiltinGlyphs, &doc.starters[0].icon),
            crate::glyphs::FALLBACK_GLYPH
        );
    }

    #[test]
    fn accepts_bom_prefixed_text() {
        let mut bytes = "\u{feff}".as_bytes().to_vec();
        bytes.extend_from_slice(br#"{"routines":[]}"#);
        assert!(parse(&bytes).is_ok());
    }

    #[test]
    fn read_file_reports_missing_and_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        assert!(matches!(read_file(&path), Err(AacError::Io(_))));

        std::fs::write(&path, b"{ nope").unwrap();
        assert!(matches!(read_file(&path), Err(AacError::Document(_))));

        std::fs::write(&path, serialize(&default_document())).unwrap();
        assert_eq!(read_file(&path).unwrap(), default_document());
    }

    #[test]
    fn export_uses_given_file_name() {
        let out = export(&default_document(), EXPORT_FILE_NAME);
        assert_eq!(out.file_name, "aahil_aac_model.json");
        assert_eq!(parse(&out.bytes).unwrap(), default_document());
    }
}
