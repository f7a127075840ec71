#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::config::{TranslatorConfig, CONFIG_FILE_ENV};
use ui::core::platform::Platform;
use ui::views::Home;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.
const ICONS_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Polyglot – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(1024.0, 720.0)),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    eprintln!("polyglot-desktop was built without the `desktop` feature");
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; AppNavbar updates it and views subscribe to it.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(translator_config);

    use_hook(|| info!(platform = Platform::current().label(), "polyglot starting"));

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }
        document::Link { rel: "stylesheet", href: ICONS_CSS }

        AppNavbar {}
        Home {}
    }
}

/// Compiled-in settings, overlaid with the JSON file named by `POLYGLOT_CONFIG`.
fn translator_config() -> TranslatorConfig {
    let config = TranslatorConfig::load();
    let Some(path) = std::env::var_os(CONFIG_FILE_ENV) else {
        return config;
    };
    match config.clone().merge_file(std::path::Path::new(&path)) {
        Ok(merged) => {
            info!(path = ?path, "translator config file applied");
            merged
        }
        Err(err) => {
            warn!(%err, "ignoring translator config file");
            config
        }
    }
}
