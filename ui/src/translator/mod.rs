//! The translator widget: state, endpoint client, icon actions and view.

pub mod actions;
pub mod client;
pub mod state;
pub mod store;

mod view;
pub use view::TranslatorView;

pub use client::{MyMemoryTranslator, TranslateError, TranslationRequest, Translator};
pub use state::{Side, TranslationState};
pub use store::{run_translation, Completion, PendingTranslation, TranslatorStore};
