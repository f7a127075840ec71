//! Translation state: the two texts, the language pair and the loading flag.

use crate::core::config::TranslatorConfig;

/// Which half of the widget an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Source side (`"from"`).
    From,
    /// Target side (`"to"`).
    To,
}

impl Side {
    /// Parse the identifier carried by the per-side controls.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "from" => Some(Self::From),
            "to" => Some(Self::To),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::From => "from",
            Self::To => "to",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationState {
    source_text: String,
    target_text: String,
    source_language: String,
    target_language: String,
    is_loading: bool,
}

impl TranslationState {
    pub fn new(source_language: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            source_text: String::new(),
            target_text: String::new(),
            source_language: source_language.into(),
            target_language: target_language.into(),
            is_loading: false,
        }
    }

    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self::new(config.default_source.clone(), config.default_target.clone())
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn text(&self, side: Side) -> &str {
        match side {
            Side::From => &self.source_text,
            Side::To => &self.target_text,
        }
    }

    pub fn language(&self, side: Side) -> &str {
        match side {
            Side::From => &self.source_language,
            Side::To => &self.target_language,
        }
    }

    /// Copy and speak only act once both halves hold text.
    pub fn has_both_texts(&self) -> bool {
        !self.source_text.is_empty() && !self.target_text.is_empty()
    }

    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
    }

    pub fn set_source_language(&mut self, code: impl Into<String>) {
        self.source_language = code.into();
    }

    pub fn set_target_language(&mut self, code: impl Into<String>) {
        self.target_language = code.into();
    }

    /// Swap texts and languages in one step.
    pub fn exchange(&mut self) {
        std::mem::swap(&mut self.source_text, &mut self.target_text);
        std::mem::swap(&mut self.source_language, &mut self.target_language);
    }

    pub(crate) fn set_target_text(&mut self, text: String) {
        self.target_text = text;
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }
}

impl Default for TranslationState {
    fn default() -> Self {
        Self::from_config(&TranslatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TranslationState {
        let mut state = TranslationState::new("en-GB", "hi-IN");
        state.set_source_text("hello");
        state.set_target_text("नमस्ते".to_string());
        state
    }

    #[test]
    fn starts_with_default_pair_and_empty_texts() {
        let state = TranslationState::default();
        assert_eq!(state.source_language(), "en-GB");
        assert_eq!(state.target_language(), "hi-IN");
        assert!(state.source_text().is_empty());
        assert!(state.target_text().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn exchange_swaps_both_pairs() {
        let mut state = filled();
        state.exchange();
        assert_eq!(state.source_text(), "नमस्ते");
        assert_eq!(state.target_text(), "hello");
        assert_eq!(state.source_language(), "hi-IN");
        assert_eq!(state.target_language(), "en-GB");
    }

    #[test]
    fn exchange_twice_is_identity() {
        let inputs = [
            ("", "", "en-GB", "hi-IN"),
            ("hello", "", "en-GB", "en-GB"),
            ("", "bonjour", "fr-FR", "de-DE"),
            ("a", "b", "", "x"),
        ];
        for (src, dst, src_lang, dst_lang) in inputs {
            let mut state = TranslationState::new(src_lang, dst_lang);
            state.set_source_text(src);
            state.set_target_text(dst.to_string());
            let before = state.clone();
            state.exchange();
            state.exchange();
            assert_eq!(state, before);
        }
    }

    #[test]
    fn exchange_with_empty_texts_only_swaps_languages() {
        let mut state = TranslationState::new("en-GB", "hi-IN");
        state.exchange();
        assert!(state.source_text().is_empty());
        assert!(state.target_text().is_empty());
        assert_eq!(state.source_language(), "hi-IN");
        assert_eq!(state.target_language(), "en-GB");
    }

    #[test]
    fn side_lookup_follows_identifiers() {
        let state = filled();
        assert_eq!(Side::from_id("from"), Some(Side::From));
        assert_eq!(Side::from_id("to"), Some(Side::To));
        assert_eq!(Side::from_id("sideways"), None);
        assert_eq!(state.text(Side::To), "नमस्ते");
        assert_eq!(state.language(Side::From), "en-GB");
        assert_eq!(Side::To.id(), "to");
    }
}
