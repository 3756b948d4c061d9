// src/core/selection.rs
use crate::config::VocabularyConfig;
use crate::core::resolver::KeyResolver;
use crate::core::sentence::SentenceBuilder;
use crate::core::types::{Phrase, Routine, Tile};
use crate::core::vocabulary::VocabularyDocument;
use crate::favorites::FavoritesStore;
use serde::{Deserialize, Serialize};

/// Where the user is in the starter → context → specific flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    StarterChosen,
    ContextChosen,
    /// The suggested-choice picker is open.
    ChoicePending,
}

/// A discrete user action forwarded by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    SelectStarter { tile: Tile },
    SelectContext { tile: Tile },
    SelectSpecific { value: String },
    OpenRoutine { key: String },
    CloseRoutine,
    ChooseRoutinePhrase { phrase: Phrase },
    ResolveChoice { item: String },
    CloseChoice,
    EditAdd { value: String },
    EditRemove { value: String },
    ToggleEditMode,
    SaveFavorite,
    RemoveFavorite { sentence: String },
    SpeakSentence,
    SpeakFavorite { sentence: String },
    ResetFlow,
}

/// Side effects requested by a transition, carried out by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Speak(String),
    SaveDocument,
    SaveFavorites,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    Suggestion,
    Favorite,
}

/// One entry of the suggested-choice picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceCandidate {
    pub value: String,
    pub source: CandidateSource,
}

/// Read-only view handed to the renderer after every intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub sentence: String,
    pub tokens: Vec<String>,
    pub starters: Vec<Tile>,
    pub selected_starter: Option<String>,
    pub contexts: Vec<Tile>,
    pub selected_context: Option<Tile>,
    pub options: Vec<String>,
    pub routines: Vec<Routine>,
    pub open_routine: Option<Routine>,
    pub choice: Option<Vec<ChoiceCandidate>>,
    pub favorites: Vec<String>,
    pub edit_mode: bool,
    pub import_error: Option<String>,
}

/// Drops a leading `head` (compared case-insensitively) and the whitespace
/// after it.
fn strip_head<'a>(sentence: &'a str, head: &str) -> &'a str {
    if head.is_empty() {
        return sentence;
    }
    let mut chars = sentence.chars();
    let mut end = 0;
    for h in head.chars() {
        match chars.next() {
            Some(c) if c.to_lowercase().eq(h.to_lowercase()) => end += c.len_utf8(),
            _ => return sentence,
        }
    }
    sentence[end..].trim_start()
}

fn speak(text: &str) -> Vec<Effect> {
    if text.trim().is_empty() {
        Vec::new()
    } else {
        vec![Effect::Speak(text.to_string())]
    }
}

/// Orchestrates tiered selection, routine injection and the suggested-choice
/// sub-flow over a vocabulary document and the favorites set.
///
/// Every operation is total: unknown keys and missing buckets leave the state
/// untouched or yield empty option lists.
#[derive(Debug, Clone)]
pub struct SelectionStateMachine {
    document: VocabularyDocument,
    resolver: KeyResolver,
    favorites: FavoritesStore,
    sentence: SentenceBuilder,
    starter: Option<String>,
    context: Option<Tile>,
    phase: Phase,
    open_routine: Option<String>,
    edit_mode: bool,
    import_error: Option<String>,
    vocab: VocabularyConfig,
}

impl SelectionStateMachine {
    pub fn new(
        document: VocabularyDocument,
        favorites: FavoritesStore,
        vocab: VocabularyConfig,
    ) -> Self {
        let resolver = KeyResolver::for_document(&document, &vocab.placeholder_label);
        Self {
            document,
            resolver,
            favorites,
            sentence: SentenceBuilder::new(),
            starter: None,
            context: None,
            phase: Phase::Idle,
            open_routine: None,
            edit_mode: false,
            import_error: None,
            vocab,
        }
    }

    pub fn apply(&mut self, intent: Intent) -> Vec<Effect> {
        tracing::debug!(?intent, phase = ?self.phase, "applying intent");
        match intent {
            Intent::SelectStarter { tile } => self.select_starter(&tile),
            Intent::SelectContext { tile } => self.select_context(&tile),
            Intent::SelectSpecific { value } => self.select_specific(&value),
            Intent::OpenRoutine { key } => {
                self.open_routine(&key);
                Vec::new()
            }
            Intent::CloseRoutine => {
                self.open_routine = None;
                Vec::new()
            }
            Intent::ChooseRoutinePhrase { phrase } => self.choose_routine_phrase(&phrase),
            Intent::ResolveChoice { item } => self.resolve_choice(&item),
            Intent::CloseChoice => {
                self.close_choice();
                Vec::new()
            }
            Intent::EditAdd { .. } | Intent::EditRemove { .. } if !self.edit_mode => {
                tracing::debug!("edit mode is off, ignoring option edit");
                Vec::new()
            }
            Intent::EditAdd { value } => self.add_specific_option(&value),
            Intent::EditRemove { value } => self.remove_specific_option(&value),
            Intent::ToggleEditMode => {
                self.edit_mode = !self.edit_mode;
                Vec::new()
            }
            Intent::SaveFavorite => self.save_favorite(),
            Intent::RemoveFavorite { sentence } => self.remove_favorite(&sentence),
            Intent::SpeakSentence => speak(&self.sentence.render()),
            Intent::SpeakFavorite { sentence } => speak(&sentence),
            Intent::ResetFlow => {
                self.reset_flow();
                Vec::new()
            }
        }
    }

    pub fn select_starter(&mut self, tile: &Tile) -> Vec<Effect> {
        self.starter = Some(tile.key.clone());
        self.context = None;
        self.sentence.replace_all([tile.label.as_str()]);
        self.phase = Phase::StarterChosen;
        speak(&tile.label)
    }

    pub fn select_context(&mut self, tile: &Tile) -> Vec<Effect> {
        self.context = Some(tile.clone());
        if tile.key == self.vocab.choice_context_key {
            self.phase = Phase::ChoicePending;
            return Vec::new();
        }
        self.phase = Phase::ContextChosen;
        if self.resolver.is_placeholder(&tile.label) {
            return Vec::new();
        }
        self.sentence.append(&tile.label);
        speak(&tile.label)
    }

    /// Appends a Tier 3 option. Repeatable: several specifics may follow one
    /// context.
    pub fn select_specific(&mut self, value: &str) -> Vec<Effect> {
        self.sentence.append(value);
        speak(value)
    }

    pub fn open_routine(&mut self, key: &str) {
        if self.document.routine(key).is_some() {
            self.open_routine = Some(key.to_string());
        } else {
            tracing::debug!(key, "ignoring unknown routine");
        }
    }

    /// Replaces the sentence with a routine phrase, tokens taken literally.
    /// The starter and context selection are left as they were.
    pub fn choose_routine_phrase(&mut self, phrase: &[String]) -> Vec<Effect> {
        self.sentence.replace_all(phrase.iter().map(String::as_str));
        self.open_routine = None;
        speak(&phrase.join(" "))
    }

    /// Candidates for the suggested-choice picker: the choice bucket, then
    /// every favorite with the current sentence head stripped off.
    pub fn choice_candidates(&self) -> Vec<ChoiceCandidate> {
        let choice_key = self.vocab.choice_context_key.as_str();
        let suggestions = self
            .resolver
            .options(&self.document, self.starter.as_deref(), choice_key)
            .iter()
            .map(|value| ChoiceCandidate {
                value: value.clone(),
                source: CandidateSource::Suggestion,
            });

        let head = self.head();
        let favorites = self
            .favorites
            .iter()
            .map(|f| strip_head(f, head))
            .filter(|v| !v.is_empty())
            .map(|value| ChoiceCandidate {
                value: value.to_string(),
                source: CandidateSource::Favorite,
            });

        suggestions.chain(favorites).collect()
    }

    pub fn resolve_choice(&mut self, item: &str) -> Vec<Effect> {
        let head = self.head().to_string();
        self.sentence.replace_all([head.as_str(), item]);
        self.close_choice();
        speak(&[head.as_str(), item].join(" "))
    }

    pub fn close_choice(&mut self) {
        if self.phase == Phase::ChoicePending {
            self.phase = self.settled_phase();
        }
    }

    pub fn reset_flow(&mut self) {
        self.starter = None;
        self.context = None;
        self.sentence.reset();
        self.phase = Phase::Idle;
    }

    /// Adds an option to the active bucket. The `EditAdd` intent only reaches
    /// here while edit mode is on.
    pub fn add_specific_option(&mut self, value: &str) -> Vec<Effect> {
        let Some(bucket) = self.active_bucket() else {
            tracing::debug!("no context selected, ignoring option add");
            return Vec::new();
        };
        if self.document.add_specific(&bucket, value) {
            tracing::info!(bucket = %bucket, value, "added option");
            vec![Effect::SaveDocument]
        } else {
            Vec::new()
        }
    }

    pub fn remove_specific_option(&mut self, value: &str) -> Vec<Effect> {
        let Some(bucket) = self.active_bucket() else {
            tracing::debug!("no context selected, ignoring option removal");
            return Vec::new();
        };
        if self.document.remove_specific(&bucket, value) {
            tracing::info!(bucket = %bucket, value, "removed option");
            vec![Effect::SaveDocument]
        } else {
            Vec::new()
        }
    }

    pub fn save_favorite(&mut self) -> Vec<Effect> {
        if self.favorites.save(&self.sentence.render()) {
            vec![Effect::SaveFavorites]
        } else {
            Vec::new()
        }
    }

    pub fn remove_favorite(&mut self, sentence: &str) -> Vec<Effect> {
        if self.favorites.remove(sentence) {
            vec![Effect::SaveFavorites]
        } else {
            Vec::new()
        }
    }

    /// Swaps in a whole new document. Session selection and favorites stay;
    /// selections the new document lacks simply show empty menus.
    pub fn replace_document(&mut self, document: VocabularyDocument) -> Vec<Effect> {
        self.resolver = KeyResolver::for_document(&document, &self.vocab.placeholder_label);
        self.document = document;
        self.import_error = None;
        if let Some(key) = &self.open_routine {
            if self.document.routine(key).is_none() {
                self.open_routine = None;
            }
        }
        vec![Effect::SaveDocument]
    }

    pub fn set_import_error(&mut self, message: &str) {
        self.import_error = Some(message.to_string());
    }

    pub fn document(&self) -> &VocabularyDocument {
        &self.document
    }

    pub fn resolver(&self) -> &KeyResolver {
        &self.resolver
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn tokens(&self) -> &[String] {
        self.sentence.tokens()
    }

    pub fn render(&self) -> String {
        self.sentence.render()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected_starter(&self) -> Option<&str> {
        self.starter.as_deref()
    }

    pub fn selected_context(&self) -> Option<&Tile> {
        self.context.as_ref()
    }

    pub fn import_error(&self) -> Option<&str> {
        self.import_error.as_deref()
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Tier 2 tiles for the selected starter.
    pub fn contexts(&self) -> &[Tile] {
        self.starter
            .as_deref()
            .map(|s| self.document.contexts(s))
            .unwrap_or(&[])
    }

    /// Tier 3 options for the selected context.
    pub fn options(&self) -> &[String] {
        match &self.context {
            Some(ctx) => self
                .resolver
                .options(&self.document, self.starter.as_deref(), &ctx.key),
            None => &[],
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            sentence: self.sentence.render(),
            tokens: self.sentence.tokens().to_vec(),
            starters: self.document.starters.clone(),
            selected_starter: self.starter.clone(),
            contexts: self.contexts().to_vec(),
            selected_context: self.context.clone(),
            options: self.options().to_vec(),
            routines: self.document.routines.clone(),
            open_routine: self
                .open_routine
                .as_deref()
                .and_then(|k| self.document.routine(k))
                .cloned(),
            choice: (self.phase == Phase::ChoicePending).then(|| self.choice_candidates()),
            favorites: self.favorites.to_vec(),
            edit_mode: self.edit_mode,
            import_error: self.import_error.clone(),
        }
    }

    fn head(&self) -> &str {
        self.sentence
            .first()
            .unwrap_or(self.vocab.default_head.as_str())
    }

    fn active_bucket(&self) -> Option<String> {
        let ctx = self.context.as_ref()?;
        Some(
            self.resolver
                .bucket_key(self.starter.as_deref(), &ctx.key)
                .to_string(),
        )
    }

    fn settled_phase(&self) -> Phase {
        match (&self.starter, &self.context) {
            (_, Some(_)) => Phase::ContextChosen,
            (Some(_), None) => Phase::StarterChosen,
            (None, None) => Phase::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::defaults::default_document;

    fn machine() -> SelectionStateMachine {
        SelectionStateMachine::new(
            default_document(),
            FavoritesStore::new(),
            VocabularyConfig::default(),
        )
    }

    fn starter(m: &SelectionStateMachine, key: &str) -> Tile {
        m.document().starter(key).cloned().unwrap()
    }

    fn context(m: &SelectionStateMachine, starter: &str, key: &str) -> Tile {
        m.document()
            .contexts(starter)
            .iter()
            .find(|t| t.key == key)
            .cloned()
            .unwrap()
    }

    #[test]
    fn starter_replaces_sentence_and_speaks() {
        let mut m = machine();
        m.select_specific("leftover");
        let tile = starter(&m, "i_want");
        let effects = m.select_starter(&tile);
        assert_eq!(m.tokens(), ["I want"]);
        assert_eq!(m.phase(), Phase::StarterChosen);
        assert_eq!(effects, vec![Effect::Speak("I want".to_string())]);
    }

    #[test]
    fn want_eat_biryani() {
        let mut m = machine();
        m.select_starter(&starter(&m, "i_want"));
        let ctx = context(&m, "i_want", "to_eat");
        assert_eq!(m.select_context(&ctx), vec![Effect::Speak("to eat".to_string())]);
        assert_eq!(m.phase(), Phase::ContextChosen);
        assert!(m.options().iter().any(|o| o == "biryani"));
        m.select_specific("biryani");
        assert_eq!(m.render(), "I want to eat biryani");
    }

    #[test]
    fn placeholder_context_adds_no_token_and_no_speech() {
        let mut m = machine();
        m.select_starter(&starter(&m, "i_feel"));
        let ctx = context(&m, "i_feel", "feel_list");
        let before = m.render();
        assert!(m.select_context(&ctx).is_empty());
        assert_eq!(m.render(), before);
        assert_eq!(m.phase(), Phase::ContextChosen);
        m.select_specific("happy");
        assert_eq!(m.render(), "I feel happy");
    }

    #[test]
    fn specifics_are_repeatable() {
        let mut m = machine();
        m.select_starter(&starter(&m, "i_want"));
        m.select_context(&context(&m, "i_want", "to_eat"));
        m.select_specific("fries");
        m.select_specific("nuggets");
        assert_eq!(m.render(), "I want to eat fries nuggets");
        assert_eq!(m.phase(), Phase::ContextChosen);
    }

    #[test]
    fn lets_go_reads_its_own_bucket() {
        let mut m = machine();
        m.select_starter(&starter(&m, "lets"));
        m.select_context(&context(&m, "lets", "go"));
        assert!(m.options().iter().any(|o| o == "sleep"));

        m.select_starter(&starter(&m, "can_i"));
        m.select_context(&context(&m, "can_i", "go"));
        assert!(m.options().iter().any(|o| o == "to see mom"));
        assert!(!m.options().iter().any(|o| o == "sleep"));
    }

    #[test]
    fn routine_phrase_replaces_sentence_but_keeps_selection() {
        let mut m = machine();
        m.select_starter(&starter(&m, "i_want"));
        m.select_context(&context(&m, "i_want", "to_eat"));
        m.open_routine("bedtime");
        let phrase = m.document().routine("bedtime").unwrap().phrases[0].clone();
        let effects = m.choose_routine_phrase(&phrase);
        assert_eq!(m.tokens(), ["I’m", "—", "sleepy"]);
        assert_eq!(effects, vec![Effect::Speak("I’m — sleepy".to_string())]);
        assert_eq!(m.selected_starter(), Some("i_want"));
        assert_eq!(m.selected_context().map(|t| t.key.as_str()), Some("to_eat"));
        assert!(m.snapshot().open_routine.is_none());
    }

    #[test]
    fn unknown_routine_does_not_open() {
        let mut m = machine();
        m.open_routine("nap_time");
        assert!(m.snapshot().open_routine.is_none());
        m.open_routine("lunch");
        assert_eq!(m.snapshot().open_routine.map(|r| r.label), Some("Lunch".to_string()));
    }

    #[test]
    fn choice_context_opens_picker_without_touching_sentence() {
        let mut m = machine();
        m.select_starter(&starter(&m, "i_want"));
        let effects = m.select_context(&context(&m, "i_want", "aahils_choice"));
        assert!(effects.is_empty());
        assert_eq!(m.phase(), Phase::ChoicePending);
        assert_eq!(m.tokens(), ["I want"]);

        let effects = m.resolve_choice("hiking");
        assert_eq!(m.tokens(), ["I want", "hiking"]);
        assert_eq!(effects, vec![Effect::Speak("I want hiking".to_string())]);
        assert_eq!(m.phase(), Phase::ContextChosen);
    }

    #[test]
    fn choice_on_empty_sentence_uses_default_head() {
        let mut m = machine();
        m.resolve_choice("new game");
        assert_eq!(m.tokens(), ["I want", "new game"]);
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn choice_candidates_strip_current_head_from_favorites() {
        let mut favorites = FavoritesStore::new();
        favorites.save("i want to go outside");
        favorites.save("I feel happy");
        favorites.save("I want");
        let mut m = SelectionStateMachine::new(
            default_document(),
            favorites,
            VocabularyConfig::default(),
        );
        m.select_starter(&starter(&m, "i_want"));
        m.select_context(&context(&m, "i_want", "aahils_choice"));

        let snapshot = m.snapshot();
        let choice = snapshot.choice.unwrap();
        let suggestions: Vec<&str> = choice
            .iter()
            .filter(|c| c.source == CandidateSource::Suggestion)
            .map(|c| c.value.as_str())
            .collect();
        let favorites: Vec<&str> = choice
            .iter()
            .filter(|c| c.source == CandidateSource::Favorite)
            .map(|c| c.value.as_str())
            .collect();
        assert_eq!(suggestions[0], "hiking");
        assert_eq!(favorites, ["to go outside", "I feel happy"]);
    }

    #[test]
    fn strip_head_only_touches_the_start() {
        assert_eq!(strip_head("I want I want cake", "I want"), "I want cake");
        assert_eq!(strip_head("Let’s go", "let’s"), "go");
        assert_eq!(strip_head("Please stop", "I want"), "Please stop");
        assert_eq!(strip_head("I", "I want"), "I");
    }

    #[test]
    fn strip_head_folds_non_ascii_case() {
        assert_eq!(strip_head("él quiere agua", "Él quiere"), "agua");
        assert_eq!(strip_head("ÉL QUIERE pan", "él quiere"), "pan");
        assert_eq!(strip_head("Ella quiere", "Él quiere"), "Ella quiere");
    }

    #[test]
    fn close_choice_restores_context_phase() {
        let mut m = machine();
        m.select_starter(&starter(&m, "i_want"));
        m.select_context(&context(&m, "i_want", "aahils_choice"));
        m.close_choice();
        assert_eq!(m.phase(), Phase::ContextChosen);
        assert_eq!(m.tokens(), ["I want"]);
        assert!(m.snapshot().choice.is_none());
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut m = machine();
        m.select_starter(&starter(&m, "please"));
        m.select_context(&context(&m, "please", "actions"));
        m.select_specific("stop");
        m.reset_flow();
        assert_eq!(m.phase(), Phase::Idle);
        assert!(m.tokens().is_empty());
        assert!(m.contexts().is_empty());
        assert!(m.options().is_empty());
    }

    #[test]
    fn edits_need_a_context_and_target_the_resolved_bucket() {
        let mut m = machine();
        assert!(m.add_specific_option("scooter").is_empty());

        m.select_starter(&starter(&m, "lets"));
        m.select_context(&context(&m, "lets", "go"));
        assert!(m.add_specific_option("   ").is_empty());
        assert_eq!(m.add_specific_option("scooter"), vec![Effect::SaveDocument]);
        assert!(m.document().specifics("go2").iter().any(|o| o == "scooter"));
        assert!(!m.document().specifics("go").iter().any(|o| o == "scooter"));

        assert_eq!(m.remove_specific_option("scooter"), vec![Effect::SaveDocument]);
        assert!(m.remove_specific_option("scooter").is_empty());
    }

    #[test]
    fn edit_intents_require_edit_mode() {
        let mut m = machine();
        m.select_starter(&starter(&m, "i_want"));
        m.select_context(&context(&m, "i_want", "to_drink"));
        let add = Intent::EditAdd { value: "lassi".to_string() };
        assert!(m.apply(add.clone()).is_empty());
        assert!(!m.options().iter().any(|o| o == "lassi"));

        m.apply(Intent::ToggleEditMode);
        assert_eq!(m.apply(add), vec![Effect::SaveDocument]);
        assert!(m.options().iter().any(|o| o == "lassi"));

        m.apply(Intent::ToggleEditMode);
        let remove = Intent::EditRemove { value: "lassi".to_string() };
        assert!(m.apply(remove.clone()).is_empty());
        m.apply(Intent::ToggleEditMode);
        assert_eq!(m.apply(remove), vec![Effect::SaveDocument]);
    }

    #[test]
    fn routine_speech_uses_literal_tokens() {
        let mut m = machine();
        let phrase = vec!["I need".to_string(), "  ".to_string(), "a hug".to_string()];
        let effects = m.choose_routine_phrase(&phrase);
        assert_eq!(effects, vec![Effect::Speak("I need    a hug".to_string())]);
        assert_eq!(m.render(), "I need a hug");

        let effects = m.resolve_choice("new  song");
        assert_eq!(effects, vec![Effect::Speak("I need new  song".to_string())]);
    }

    #[test]
    fn favorites_from_sentence() {
        let mut m = machine();
        assert!(m.save_favorite().is_empty());
        m.select_starter(&starter(&m, "i_want"));
        m.select_context(&context(&m, "i_want", "to_drink"));
        m.select_specific("juice");
        assert_eq!(m.save_favorite(), vec![Effect::SaveFavorites]);
        assert!(m.save_favorite().is_empty());
        assert_eq!(m.favorites().len(), 1);
        assert_eq!(m.remove_favorite("I want to drink juice"), vec![Effect::SaveFavorites]);
    }

    #[test]
    fn replace_document_keeps_favorites_and_clears_error() {
        let mut m = machine();
        m.apply(Intent::SelectStarter {
            tile: Tile::new("i_want", "I want", "Hand"),
        });
        m.apply(Intent::SaveFavorite);
        m.set_import_error("Invalid document file.");
        m.open_routine("lunch");

        let effects = m.replace_document(VocabularyDocument::default());
        assert_eq!(effects, vec![Effect::SaveDocument]);
        assert!(m.import_error().is_none());
        assert_eq!(m.favorites().len(), 1);
        assert!(m.contexts().is_empty());
        assert!(m.snapshot().open_routine.is_none());
    }

    #[test]
    fn intents_deserialize_from_tagged_json() {
        let intent: Intent =
            serde_json::from_str(r#"{"intent":"select_specific","value":"juice"}"#).unwrap();
        assert_eq!(intent, Intent::SelectSpecific { value: "juice".to_string() });
        let intent: Intent = serde_json::from_str(r#"{"intent":"reset_flow"}"#).unwrap();
        assert_eq!(intent, Intent::ResetFlow);
    }

    #[test]
    fn speak_intents() {
        let mut m = machine();
        assert!(m.apply(Intent::SpeakSentence).is_empty());
        m.select_starter(&starter(&m, "all_done"));
        assert_eq!(
            m.apply(Intent::SpeakSentence),
            vec![Effect::Speak("All done".to_string())]
        );
        assert_eq!(
            m.apply(Intent::SpeakFavorite { sentence: "Good night".to_string() }),
            vec![Effect::Speak("Good night".to_string())]
        );
        m.apply(Intent::ToggleEditMode);
        assert!(m.edit_mode());
    }
}
