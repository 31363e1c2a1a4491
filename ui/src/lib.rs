//! Shared UI crate for the Hospital Santa Clara satisfaction survey. Views,
//! survey state and dashboard logic live here; the `web` and `desktop`
//! crates only provide routing and launch configuration.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod survey;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

/// Shared theme, inlined by launchers that ship without an asset directory.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
