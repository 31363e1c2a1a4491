use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::timing::Timings;
use ui::views::{Dashboard, Survey};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Survey {},
    #[route("/dashboard")]
    Dashboard {},
}

fn nav_survey(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Survey {},
        "{label}"
    })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}

fn main() {
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar writes the selected language here; localized views subscribe to it.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(Timings::default);

    register_nav(NavBuilder {
        survey: nav_survey,
        dashboard: nav_dashboard,
    });

    let title = ui::t!("brand-name");

    rsx! {
        document::Title { "{title}" }
        document::Style { "{ui::THEME_CSS}" }

        Router::<Route> {}
    }
}

#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
