// src/core/sentence.rs
use serde::{Deserialize, Serialize};

/// Joins tokens with single spaces, collapsing whitespace runs and trimming.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The in-progress utterance as an ordered token list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentenceBuilder {
    tokens: Vec<String>,
}

impl SentenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.tokens.clear();
    }

    pub fn append(&mut self, token: &str) {
        self.tokens.push(token.to_string());
    }

    pub fn replace_all<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tokens = tokens.into_iter().map(Into::into).collect();
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn first(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn render(&self) -> String {
        normalize(&self.tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_collapses_and_trims() {
        let mut s = SentenceBuilder::new();
        s.replace_all(["  I want", "to   eat ", "", "biryani\t"]);
        assert_eq!(s.render(), "I want to eat biryani");
        assert_eq!(s.render(), s.render());
    }

    #[test]
    fn append_keeps_tokens_verbatim() {
        let mut s = SentenceBuilder::new();
        s.append("I feel");
        s.append("happy");
        assert_eq!(s.tokens(), ["I feel", "happy"]);
        assert_eq!(s.first(), Some("I feel"));
    }

    #[test]
    fn reset_empties() {
        let mut s = SentenceBuilder::new();
        s.append("Please");
        s.reset();
        assert!(s.is_empty());
        assert_eq!(s.render(), "");
    }
}
