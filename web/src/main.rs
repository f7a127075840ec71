use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::config::TranslatorConfig;
use ui::core::platform::Platform;
use ui::views::Home;

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));
const ICONS_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; AppNavbar updates it and views subscribe to it.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(TranslatorConfig::load);

    use_hook(|| info!(platform = Platform::current().label(), "polyglot starting"));

    rsx! {
        document::Style { "{THEME_CSS}" }
        document::Link { rel: "stylesheet", href: ICONS_CSS }

        AppNavbar {}
        Home {}
    }
}
