//! Platform detection and the two platform capabilities the translator uses:
//! writing text to the clipboard and speaking text aloud.
//!
//! Both capabilities are fire-and-forget. Failures are logged and otherwise
//! swallowed; callers never see them.

use dioxus::logger::tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

/// Narrow clipboard interface.
pub trait Clipboard {
    fn write_text(&self, text: &str);
}

/// Narrow speech-synthesis interface.
pub trait Speech {
    fn speak(&self, text: &str, language: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) {
        if let Err(err) = copy_to_clipboard(text) {
            warn!(%err, "clipboard write failed");
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpeech;

impl Speech for SystemSpeech {
    fn speak(&self, text: &str, language: &str) {
        if let Err(err) = speak_text(text, language) {
            warn!(%err, language, "speech synthesis failed");
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn copy_to_clipboard(payload: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or("window unavailable")?;
    let document = window.document().ok_or("document unavailable")?;
    let body = document.body().ok_or("missing body")?;

    let textarea = document
        .create_element("textarea")
        .map_err(|_| "Unable to create textarea")?
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .map_err(|_| "Textarea cast failed")?;
    textarea.set_value(payload);
    let style = textarea.style();
    style.set_property("position", "fixed").ok();
    style.set_property("top", "0").ok();
    style.set_property("left", "0").ok();
    style.set_property("opacity", "0").ok();

    body.append_child(&textarea).ok();
    textarea.select();
    let copied = document.exec_command("copy").unwrap_or(false);
    textarea.remove();
    if copied {
        Ok(())
    } else {
        Err("Clipboard copy blocked".into())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn copy_to_clipboard(payload: &str) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|err| err.to_string())?;
    clipboard.set_text(payload).map_err(|err| err.to_string())
}

#[cfg(target_arch = "wasm32")]
fn speak_text(text: &str, language: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("window unavailable")?;
    let synth = window
        .speech_synthesis()
        .map_err(|_| "speech synthesis unavailable")?;
    let utterance = web_sys::SpeechSynthesisUtterance::new_with_text(text)
        .map_err(|_| "Unable to create utterance")?;
    utterance.set_lang(language);
    synth.speak(&utterance);
    Ok(())
}

/// Script run in the desktop webview. It reports back whether the webview
/// offers `speechSynthesis` at all.
#[cfg(not(target_arch = "wasm32"))]
fn speech_script(text: &str, language: &str) -> Result<String, serde_json::Error> {
    let text = serde_json::to_string(text)?;
    let language = serde_json::to_string(language)?;
    Ok(format!(
        "if (window.speechSynthesis) {{ \
            const u = new SpeechSynthesisUtterance({text}); \
            u.lang = {language}; \
            window.speechSynthesis.speak(u); \
            dioxus.send(true); \
        }} else {{ \
            dioxus.send(false); \
        }}"
    ))
}

/// The desktop shell renders inside a webview, so its `speechSynthesis` is
/// reachable through a script evaluation. The webview's answer arrives
/// asynchronously and is logged from a spawned task.
#[cfg(not(target_arch = "wasm32"))]
fn speak_text(text: &str, language: &str) -> Result<(), String> {
    let script = speech_script(text, language).map_err(|err| err.to_string())?;
    let mut eval = dioxus::document::eval(&script);
    let language = language.to_string();
    dioxus::prelude::spawn(async move {
        match eval.recv::<bool>().await {
            Ok(true) => {}
            Ok(false) => warn!(language, "webview has no speech synthesis"),
            Err(err) => warn!(?err, language, "speech script failed"),
        }
    });
    Ok(())
}
