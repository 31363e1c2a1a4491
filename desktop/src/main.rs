#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::timing::Timings;
use ui::views::{Dashboard, Survey};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Survey {},
    #[route("/dashboard")]
    Dashboard {},
}

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!(
                        "Hospital Santa Clara – v{}",
                        env!("CARGO_PKG_VERSION")
                    ))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");
    LaunchBuilder::server().launch(App);
}

fn nav_survey(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Survey {}, "{label}" })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(Timings::default);

    register_nav(NavBuilder {
        survey: nav_survey,
        dashboard: nav_dashboard,
    });

    #[cfg(feature = "desktop")]
    {
        // Some window managers ignore the initial maximize request.
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline the theme; desktop builds ship without an asset directory.
        document::Style { "{ui::THEME_CSS}" }

        Router::<Route> { }
    }
}

#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
