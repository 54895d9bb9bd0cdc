#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use api::AnalysisClient;
use ui::components::AppNavbar;
use ui::views::Studio;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Studio {},
}

#[cfg(feature = "desktop")]
fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }

    // A local `.env` may carry GEMINI_API_KEY during development.
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(target: "facelab.config", path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(target: "facelab.config", error = %err, "ignoring unreadable .env"),
    }

    // Maximize window on launch (dioxus-desktop 0.6.x: pass a WindowBuilder value)
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Pro Aesthetic Lab – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    eprintln!("facelab-desktop was built without the `desktop` renderer feature");
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppNavbar updates it on selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    use_context_provider(|| {
        let client = AnalysisClient::from_env();
        tracing::info!(
            target: "facelab.config",
            model = %client.config().model,
            credential = client.config().has_credential(),
            "analysis client ready"
        );
        client
    });

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline the shared theme (no external file dependency for desktop builds)
        document::Style { "{ui::THEME_CSS}" }

        // Views subscribe to the language signal themselves; the routed subtree
        // is not keyed by language so an in-progress session survives a switch.
        div { style: "display:none", "lang={lang_code()}" }
        Router::<Route> {}
    }
}

/// A desktop-specific Router around the shared navbar so it can use the
/// desktop `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
