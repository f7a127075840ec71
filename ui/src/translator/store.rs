//! State store for one translator widget instance.
//!
//! Requests are stamped with a sequence number at dispatch. Only the newest
//! request may change state when it completes; anything older is dropped.
//! The newest request always clears the loading flag, whether it succeeded
//! or failed.

use dioxus::logger::tracing::{debug, info, warn};

use crate::core::catalog::{CatalogError, LanguageCatalog};
use crate::core::config::TranslatorConfig;
use crate::core::platform::{Clipboard, Speech};

use super::actions::{self, IconKind};
use super::client::{TranslateResult, TranslationRequest, Translator};
use super::state::{Side, TranslationState};

/// A dispatched request. Hand it back to [`TranslatorStore::finish_translation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTranslation {
    pub seq: u64,
    pub request: TranslationRequest,
}

/// What happened to a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Failed(String),
    /// A newer request was dispatched; the result was ignored.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranslatorStore {
    state: TranslationState,
    catalog: LanguageCatalog,
    catalog_loaded: bool,
    latest_seq: u64,
    last_error: Option<String>,
}

impl TranslatorStore {
    pub fn new(config: &TranslatorConfig) -> Self {
        Self {
            state: TranslationState::from_config(config),
            catalog: LanguageCatalog::empty(),
            catalog_loaded: false,
            latest_seq: 0,
            last_error: None,
        }
    }

    pub fn state(&self) -> &TranslationState {
        &self.state
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_translate_disabled(&self) -> bool {
        self.state.is_loading()
    }

    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.state.set_source_text(text);
    }

    pub fn set_source_language(&mut self, code: impl Into<String>) {
        self.state.set_source_language(code);
    }

    pub fn set_target_language(&mut self, code: impl Into<String>) {
        self.state.set_target_language(code);
    }

    pub fn exchange(&mut self) {
        self.state.exchange();
    }

    /// Populate the catalog. The loader runs at most once per store; a failed
    /// load leaves the catalog empty. Returns whether the loader ran.
    pub fn load_catalog_once<F>(&mut self, load: F) -> bool
    where
        F: FnOnce() -> Result<LanguageCatalog, CatalogError>,
    {
        if self.catalog_loaded {
            return false;
        }
        self.catalog_loaded = true;

        match load() {
            Ok(catalog) => {
                let source = self.state.source_language();
                let target = self.state.target_language();
                info!(
                    languages = catalog.len(),
                    source = catalog.name_of(source).unwrap_or(source),
                    target = catalog.name_of(target).unwrap_or(target),
                    "language catalog loaded"
                );
                for code in [source, target] {
                    if !catalog.contains(code) {
                        warn!(language = code, "selected language is not in the catalog");
                    }
                }
                self.catalog = catalog;
            }
            Err(err) => {
                warn!(%err, "language catalog unavailable; selectors stay empty");
            }
        }
        true
    }

    /// Snapshot the current text and pair, mark loading and issue a new
    /// sequence number.
    pub fn begin_translation(&mut self) -> PendingTranslation {
        self.latest_seq += 1;
        self.state.set_loading(true);
        self.last_error = None;

        let request = TranslationRequest::new(
            self.state.source_text(),
            self.state.source_language(),
            self.state.target_language(),
        );
        info!(
            seq = self.latest_seq,
            langpair = %request.langpair(),
            chars = request.text.chars().count(),
            "translation dispatched"
        );

        PendingTranslation {
            seq: self.latest_seq,
            request,
        }
    }

    pub fn finish_translation(
        &mut self,
        pending: PendingTranslation,
        outcome: TranslateResult<String>,
    ) -> Completion {
        if pending.seq != self.latest_seq {
            debug!(
                seq = pending.seq,
                latest = self.latest_seq,
                "discarding stale translation"
            );
            return Completion::Stale;
        }

        self.state.set_loading(false);
        match outcome {
            Ok(text) => {
                debug!(seq = pending.seq, "translation applied");
                self.state.set_target_text(text);
                Completion::Applied
            }
            Err(err) => {
                warn!(seq = pending.seq, %err, "translation failed");
                let message = err.to_string();
                self.last_error = Some(message.clone());
                Completion::Failed(message)
            }
        }
    }

    /// Icon click entry point: `classes` is the clicked icon's class list and
    /// `side_id` its side identifier. Returns whether a capability was used.
    pub fn handle_icon_click(
        &self,
        classes: &str,
        side_id: &str,
        clipboard: &dyn Clipboard,
        speech: &dyn Speech,
    ) -> bool {
        let Some(side) = Side::from_id(side_id) else {
            return false;
        };
        actions::dispatch(
            &self.state,
            IconKind::from_class_list(classes),
            side,
            clipboard,
            speech,
        )
    }
}

impl Default for TranslatorStore {
    fn default() -> Self {
        Self::new(&TranslatorConfig::default())
    }
}

/// Await `pending` on `translator`. Errors come back as values so the caller
/// always reaches [`TranslatorStore::finish_translation`].
pub async fn run_translation<T>(
    translator: &T,
    pending: &PendingTranslation,
) -> TranslateResult<String>
where
    T: Translator + ?Sized,
{
    translator.translate(&pending.request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::client::TranslateError;

    fn store_with_text(text: &str) -> TranslatorStore {
        let mut store = TranslatorStore::default();
        store.set_source_text(text);
        store
    }

    #[test]
    fn begin_marks_loading_and_snapshots_request() {
        let mut store = store_with_text("hello");
        let pending = store.begin_translation();
        assert!(store.state().is_loading());
        assert!(store.is_translate_disabled());
        assert_eq!(pending.seq, 1);
        assert_eq!(
            pending.request,
            TranslationRequest::new("hello", "en-GB", "hi-IN")
        );
    }

    #[test]
    fn success_applies_text_and_clears_loading() {
        let mut store = store_with_text("hello");
        let pending = store.begin_translation();
        let done = store.finish_translation(pending, Ok("नमस्ते".to_string()));
        assert_eq!(done, Completion::Applied);
        assert_eq!(store.state().target_text(), "नमस्ते");
        assert!(!store.state().is_loading());
    }

    #[test]
    fn failure_clears_loading_and_keeps_previous_text() {
        let mut store = store_with_text("hello");
        let first = store.begin_translation();
        store.finish_translation(first, Ok("नमस्ते".to_string()));

        let second = store.begin_translation();
        let done = store.finish_translation(second, Err(TranslateError::Status(503)));
        assert!(matches!(done, Completion::Failed(ref msg) if msg.contains("503")));
        assert!(!store.state().is_loading());
        assert_eq!(store.state().target_text(), "नमस्ते");
        assert!(store.last_error().is_some());
    }

    #[test]
    fn new_dispatch_clears_previous_error() {
        let mut store = store_with_text("hello");
        let failed = store.begin_translation();
        store.finish_translation(failed, Err(TranslateError::Network("offline".into())));
        assert!(store.last_error().is_some());

        let _retry = store.begin_translation();
        assert!(store.last_error().is_none());
    }

    #[test]
    fn stale_response_is_discarded_either_order() {
        // Older resolves last.
        let mut store = store_with_text("one");
        let older = store.begin_translation();
        store.set_source_text("two");
        let newer = store.begin_translation();

        assert_eq!(
            store.finish_translation(newer, Ok("deux".into())),
            Completion::Applied
        );
        assert!(!store.state().is_loading());
        assert_eq!(
            store.finish_translation(older, Ok("un".into())),
            Completion::Stale
        );
        assert_eq!(store.state().target_text(), "deux");

        // Older resolves first: loading stays owned by the newer request.
        let mut store = store_with_text("one");
        let older = store.begin_translation();
        store.set_source_text("two");
        let newer = store.begin_translation();

        assert_eq!(
            store.finish_translation(older, Ok("un".into())),
            Completion::Stale
        );
        assert!(store.state().is_loading());
        assert!(store.state().target_text().is_empty());
        store.finish_translation(newer, Ok("deux".into()));
        assert_eq!(store.state().target_text(), "deux");
        assert!(!store.state().is_loading());
    }

    #[test]
    fn stale_failure_does_not_touch_error_or_loading() {
        let mut store = store_with_text("one");
        let older = store.begin_translation();
        let _newer = store.begin_translation();
        let done = store.finish_translation(older, Err(TranslateError::Status(500)));
        assert_eq!(done, Completion::Stale);
        assert!(store.last_error().is_none());
        assert!(store.state().is_loading());
    }

    #[test]
    fn catalog_loader_runs_once() {
        let mut store = TranslatorStore::default();
        let mut calls = 0;
        assert!(store.load_catalog_once(|| {
            calls += 1;
            Ok(LanguageCatalog::from_pairs([("en-GB", "English")]))
        }));
        assert!(!store.load_catalog_once(|| {
            calls += 1;
            Ok(LanguageCatalog::empty())
        }));
        assert_eq!(calls, 1);
        assert_eq!(store.catalog().len(), 1);
    }

    #[test]
    fn failed_catalog_load_leaves_empty_catalog() {
        let mut store = TranslatorStore::default();
        store.load_catalog_once(|| LanguageCatalog::from_json("not json"));
        assert!(store.catalog().is_empty());
        assert!(!store.load_catalog_once(LanguageCatalog::bundled));
        assert!(store.catalog().is_empty());
    }
}
