// src/core/engine.rs
use crate::config::AacConfig;
use crate::core::selection::{Effect, Intent, SelectionStateMachine, Snapshot};
use crate::diagnostics;
use crate::document::{self, ExportedDocument};
use crate::error::DocumentError;
use crate::glyphs::BuiltinGlyphs;
use crate::persistence::{self, BlobStore, FileStore};
use crate::speech::{self, SpeechSink};

/// The AAC engine: the selection state machine wired to its collaborators.
///
/// Intents go in, effects are carried out immediately (speech requests,
/// record writes) and a fresh snapshot comes back for the renderer.
pub struct AacEngine {
    machine: SelectionStateMachine,
    store: Box<dyn BlobStore>,
    speech: Box<dyn SpeechSink>,
    config: AacConfig,
}

impl AacEngine {
    /// Loads both records from `store`, falling back to the built-in
    /// vocabulary and empty favorites.
    pub fn new(config: AacConfig, store: Box<dyn BlobStore>, speech: Box<dyn SpeechSink>) -> Self {
        let document = persistence::load_document(store.as_ref(), &config.storage.document_key);
        let favorites = persistence::load_favorites(store.as_ref(), &config.storage.favorites_key);
        tracing::info!(
            starters = document.starters.len(),
            routines = document.routines.len(),
            favorites = favorites.len(),
            "engine ready"
        );
        let machine = SelectionStateMachine::new(document, favorites, config.vocabulary.clone());
        Self {
            machine,
            store,
            speech,
            config,
        }
    }

    /// Engine backed by files in the configured data directory.
    pub fn from_config(config: AacConfig, speech: Box<dyn SpeechSink>) -> Self {
        let store = FileStore::new(config.data_dir());
        Self::new(config, Box::new(store), speech)
    }

    pub fn dispatch(&mut self, intent: Intent) -> Snapshot {
        let effects = self.machine.apply(intent);
        self.run(effects);
        self.machine.snapshot()
    }

    /// Replaces the whole document with an imported file. On failure the
    /// current document stays and the snapshot carries the error message.
    pub fn import(&mut self, bytes: &[u8]) -> Result<(), DocumentError> {
        match document::parse(bytes) {
            Ok(doc) => {
                for check in diagnostics::run_checks(&doc, &self.config.vocabulary, &BuiltinGlyphs)
                    .iter()
                    .filter(|c| !c.passed)
                {
                    tracing::warn!(check = %check.name, "imported vocabulary fails self-test");
                }
                tracing::info!(starters = doc.starters.len(), "vocabulary imported");
                let effects = self.machine.replace_document(doc);
                self.run(effects);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected vocabulary import");
                self.machine.set_import_error(e.user_message());
                Err(e)
            }
        }
    }

    pub fn export(&self) -> ExportedDocument {
        document::export(self.machine.document(), &self.config.storage.export_file_name)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.machine.snapshot()
    }

    pub fn machine(&self) -> &SelectionStateMachine {
        &self.machine
    }

    pub fn config(&self) -> &AacConfig {
        &self.config
    }

    fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Speak(text) => {
                    speech::dispatch(self.speech.as_mut(), &self.config.speech, &text)
                }
                Effect::SaveDocument => persistence::save_document(
                    self.store.as_mut(),
                    &self.config.storage.document_key,
                    self.machine.document(),
                ),
                Effect::SaveFavorites => persistence::save_favorites(
                    self.store.as_mut(),
                    &self.config.storage.favorites_key,
                    self.machine.favorites(),
                ),
            }
        }
    }
}
