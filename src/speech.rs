// File: src/speech.rs
use crate::config::SpeechConfig;
use crate::error::SpeechError;
use std::cell::RefCell;
use std::rc::Rc;

/// A finished string plus the voice settings to say it with.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
}

/// The speech engine collaborator.
///
/// A new request supersedes anything still being spoken: implementations
/// cancel the in-flight utterance instead of queueing.
pub trait SpeechSink {
    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError>;
}

/// Sends `text` to the sink unless it is blank or speech is disabled.
/// Engine failures are logged and dropped.
pub fn dispatch(sink: &mut dyn SpeechSink, settings: &SpeechConfig, text: &str) {
    let text = text.trim();
    if text.is_empty() || !settings.enabled {
        return;
    }
    let utterance = Utterance {
        text: text.to_string(),
        rate: settings.rate,
        pitch: settings.pitch,
    };
    if let Err(e) = sink.speak(&utterance) {
        tracing::debug!(error = %e, "speech request dropped");
    }
}

/// A sink with no engine behind it.
#[derive(Debug, Default)]
pub struct SilentSpeech;

impl SpeechSink for SilentSpeech {
    fn speak(&mut self, _utterance: &Utterance) -> Result<(), SpeechError> {
        Err(SpeechError::Unavailable)
    }
}

/// Keeps every request; the last one is what a real engine would be saying.
///
/// Clones share one log, so a test can keep a handle after boxing the sink.
#[derive(Debug, Clone, Default)]
pub struct RecordingSpeech {
    spoken: Rc<RefCell<Vec<String>>>,
}

impl RecordingSpeech {
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.spoken.borrow().last().cloned()
    }
}

impl SpeechSink for RecordingSpeech {
    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        self.spoken.borrow_mut().push(utterance.text.clone());
        Ok(())
    }
}

/// Holds the latest request until a host collects it. An uncollected request
/// is overwritten by the next one, matching an engine that cancels on speak.
#[derive(Debug, Clone, Default)]
pub struct PendingSpeech(Rc<RefCell<Option<String>>>);

impl PendingSpeech {
    pub fn take(&self) -> Option<String> {
        self.0.borrow_mut().take()
    }
}

impl SpeechSink for PendingSpeech {
    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        *self.0.borrow_mut() = Some(utterance.text.clone());
        Ok(())
    }
}
