//! Error types for the AAC core.

/// User-facing text shown when an imported document cannot be read.
pub const INVALID_DOCUMENT_MESSAGE: &str = "Invalid document file.";

/// A vocabulary document that is not well-formed structured text.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Bytes are not valid UTF-8.
    #[error("document is not UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Text is not a well-formed document.
    #[error("document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl DocumentError {
    /// The short message the renderer shows to the user.
    pub fn user_message(&self) -> &'static str {
        INVALID_DOCUMENT_MESSAGE
    }
}

/// Failure in the persistence store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The atomic rename of the temporary file failed.
    #[error("persist error: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// The record envelope could not be encoded or decoded.
    #[error("envelope error: {0}")]
    Envelope(#[from] bincode::Error),

    /// The record was written by an incompatible envelope version.
    #[error("unsupported record version {found} (expected {expected})")]
    Version { found: u32, expected: u32 },
}

/// Failure reported by a speech sink. Always swallowed by the dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech engine unavailable")]
    Unavailable,

    #[error("speech engine failed: {0}")]
    Engine(String),
}

/// Configuration file could not be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot encode config: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Failure loading a document from disk.
#[derive(Debug, thiserror::Error)]
pub enum AacError {
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AacError>;
