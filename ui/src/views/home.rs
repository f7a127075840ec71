use dioxus::prelude::*;

use crate::translator::TranslatorView;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    dioxus::logger::tracing::trace!(lang_marker = lang, "home render");
}

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    #[cfg(debug_assertions)]
    {
        log_home_render(&lang_marker);
    }

    rsx! {
        // Hidden marker node ensures reactive dependency on language signal.
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-home",
            p { class: "page-home__intro", {crate::t!("home-intro")} }
            TranslatorView {}
        }
    }
}
