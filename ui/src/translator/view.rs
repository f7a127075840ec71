//! The translator widget component: text areas, selectors, icons and the translate button.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::catalog::{Language, LanguageCatalog};
use crate::core::config::TranslatorConfig;
use crate::core::platform::{SystemClipboard, SystemSpeech};
use crate::t;

use super::actions::{COPY_ICON, SPEAK_ICON};
use super::client::{MyMemoryTranslator, Translator};
use super::state::Side;
use super::store::{run_translation, TranslatorStore};

const EXCHANGE_ICON: &str = "fa-solid fa-arrow-right-arrow-left";

#[component]
pub fn TranslatorView() -> Element {
    // Shells may provide a config through context; otherwise use the build defaults.
    let config = try_use_context::<TranslatorConfig>().unwrap_or_else(TranslatorConfig::load);

    let mut store = use_signal(|| {
        let mut store = TranslatorStore::new(&config);
        store.load_catalog_once(LanguageCatalog::bundled);
        store
    });
    let translator: Rc<dyn Translator> =
        use_hook(|| Rc::new(MyMemoryTranslator::new(&config)) as Rc<dyn Translator>);

    let on_translate = move |_: MouseEvent| {
        let pending = store.write().begin_translation();
        let translator = translator.clone();
        spawn(async move {
            let outcome = run_translation(translator.as_ref(), &pending).await;
            store.write().finish_translation(pending, outcome);
        });
    };

    let on_icon = move |classes: &'static str, side: Side| {
        store
            .read()
            .handle_icon_click(classes, side.id(), &SystemClipboard, &SystemSpeech);
    };

    // Re-render with fresh strings when the shell's language code changes.
    let lang_marker = try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_default();

    let current = store();
    let state = current.state();
    let busy = current.is_translate_disabled();
    let languages: Vec<Language> = current.catalog().iter().cloned().collect();

    let source_text = state.source_text().to_string();
    let target_text = state.target_text().to_string();
    let source_language = state.source_language().to_string();
    let target_language = state.target_language().to_string();

    let source_placeholder = t!("source-placeholder");
    let target_placeholder = t!("target-placeholder");
    let copy_label = t!("copy-label");
    let speak_label = t!("speak-label");
    let button_label = if busy {
        t!("translate-busy")
    } else {
        t!("translate-button")
    };
    let error_line = current
        .last_error()
        .map(|reason| t!("translate-error", reason = reason));

    rsx! {
        article { class: "translator", lang: "{lang_marker}",
            h2 { class: "translator__title", {t!("app-title")} }

            div { class: "translator__card",
                div { class: "translator__texts",
                    textarea {
                        id: "from",
                        name: "from",
                        class: "translator__text",
                        placeholder: "{source_placeholder}",
                        value: "{source_text}",
                        oninput: move |evt: FormEvent| store.write().set_source_text(evt.value()),
                    }
                    textarea {
                        id: "to",
                        name: "to",
                        class: "translator__text translator__text--output",
                        placeholder: "{target_placeholder}",
                        value: "{target_text}",
                        readonly: true,
                    }
                }

                ul { class: "translator__controls",
                    li { class: "translator__row translator__row--from",
                        div { class: "translator__icons",
                            i {
                                class: SPEAK_ICON,
                                title: "{speak_label}",
                                onclick: move |_| on_icon(SPEAK_ICON, Side::From),
                            }
                            i {
                                class: COPY_ICON,
                                title: "{copy_label}",
                                onclick: move |_| on_icon(COPY_ICON, Side::From),
                            }
                        }
                        select {
                            class: "translator__select",
                            aria_label: t!("source-language-label"),
                            value: "{source_language}",
                            onchange: move |evt: FormEvent| store.write().set_source_language(evt.value()),
                            {language_options(&languages, &source_language)}
                        }
                    }
                    li {
                        class: "translator__exchange",
                        title: t!("exchange-label"),
                        onclick: move |_| store.write().exchange(),
                        i { class: EXCHANGE_ICON }
                    }
                    li { class: "translator__row translator__row--to",
                        select {
                            class: "translator__select",
                            aria_label: t!("target-language-label"),
                            value: "{target_language}",
                            onchange: move |evt: FormEvent| store.write().set_target_language(evt.value()),
                            {language_options(&languages, &target_language)}
                        }
                        div { class: "translator__icons",
                            i {
                                class: COPY_ICON,
                                title: "{copy_label}",
                                onclick: move |_| on_icon(COPY_ICON, Side::To),
                            }
                            i {
                                class: SPEAK_ICON,
                                title: "{speak_label}",
                                onclick: move |_| on_icon(SPEAK_ICON, Side::To),
                            }
                        }
                    }
                }

                if languages.is_empty() {
                    p { class: "translator__hint", {t!("catalog-empty")} }
                }
            }

            button {
                r#type: "button",
                class: "button button--primary translator__submit",
                disabled: busy,
                onclick: on_translate,
                "{button_label}"
            }

            if let Some(message) = error_line {
                p { class: "translator__error", "⚠️ {message}" }
            }
        }
    }
}

fn language_options(languages: &[Language], selected: &str) -> Element {
    rsx! {
        for language in languages.iter() {
            option {
                key: "{language.code}",
                value: "{language.code}",
                selected: language.code == selected,
                "{language.name}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_options(json: &str, selected: &str) -> Vec<String> {
        let catalog = LanguageCatalog::from_json(json).unwrap();
        let languages: Vec<Language> = catalog.iter().cloned().collect();
        let html = dioxus_ssr::render_element(language_options(&languages, selected));
        html.split("<option").skip(1).map(str::to_string).collect()
    }

    #[test]
    fn selector_offers_catalog_entries_in_order() {
        let options = rendered_options(r#"{ "en-GB": "English", "hi-IN": "Hindi" }"#, "hi-IN");
        assert_eq!(options.len(), 2);
        assert!(options[0].contains(r#"value="en-GB""#), "{}", options[0]);
        assert!(options[0].contains(">English</option>"), "{}", options[0]);
        assert!(options[1].contains(r#"value="hi-IN""#), "{}", options[1]);
        assert!(options[1].contains(">Hindi</option>"), "{}", options[1]);
    }

    #[test]
    fn only_the_current_language_is_selected() {
        let options = rendered_options(r#"{ "en-GB": "English", "hi-IN": "Hindi" }"#, "hi-IN");
        let is_selected = |chunk: &str| chunk.contains("selected") && !chunk.contains("false");
        assert!(!is_selected(&options[0]), "{}", options[0]);
        assert!(is_selected(&options[1]), "{}", options[1]);
    }

    #[test]
    fn empty_catalog_renders_no_options() {
        assert!(rendered_options("{}", "en-GB").is_empty());
    }
}
