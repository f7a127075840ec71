//! Copy and speak actions behind the per-side icons.

use crate::core::platform::{Clipboard, Speech};

use super::state::{Side, TranslationState};

pub const COPY_ICON_CLASS: &str = "fa-copy";

/// Full class lists rendered on the icons; clicks hand them back to
/// [`IconKind::from_class_list`].
pub const COPY_ICON: &str = "fa-solid fa-copy translator__icon";
pub const SPEAK_ICON: &str = "fa-solid fa-volume-high translator__icon";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Copy,
    Speak,
}

impl IconKind {
    /// Any icon carrying `fa-copy` copies; every other icon speaks.
    pub fn from_class_list(classes: &str) -> Self {
        if classes.split_whitespace().any(|class| class == COPY_ICON_CLASS) {
            Self::Copy
        } else {
            Self::Speak
        }
    }
}

/// Run `kind` against `side`. Nothing happens unless both texts are present.
/// Returns whether a capability was called.
pub fn dispatch(
    state: &TranslationState,
    kind: IconKind,
    side: Side,
    clipboard: &dyn Clipboard,
    speech: &dyn Speech,
) -> bool {
    if !state.has_both_texts() {
        return false;
    }

    match kind {
        IconKind::Copy => clipboard.write_text(state.text(side)),
        IconKind::Speak => speech.speak(state.text(side), state.language(side)),
    }
    true
}
