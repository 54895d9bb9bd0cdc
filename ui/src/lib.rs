//! Shared UI crate for Pro Aesthetic Lab. Session state, the upload studio,
//! the report renderer and localization live here; the launcher crates only
//! provide a renderer and context.

pub mod core;
pub mod i18n;
pub mod report;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

/// Shared stylesheet, inlined by each launcher.
pub const THEME_CSS: &str = include_str!("../assets/theme/main.css");
