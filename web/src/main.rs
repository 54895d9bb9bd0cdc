use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use api::AnalysisClient;
use ui::components::AppNavbar;
use ui::views::Studio;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Studio {},
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppNavbar updates it on selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    use_context_provider(|| {
        let client = AnalysisClient::from_env();
        tracing::info!(target: "facelab.config", model = %client.config().model, "analysis client ready");
        client
    });

    rsx! {
        document::Title { "Pro Aesthetic Lab" }
        document::Style { "{ui::THEME_CSS}" }

        div { style: "display:none", "lang={lang_code()}" }
        Router::<Route> {}
    }
}

/// A web-specific Router around the shared navbar so it can use the web
/// `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
