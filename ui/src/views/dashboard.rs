use dioxus::prelude::*;

use crate::dashboard::{
    DashboardExportPanel, DashboardMetrics, DashboardState, RecentResponsesTable, SectionsChart,
    TrendsChart,
};
use crate::{i18n, t};

#[component]
pub fn Dashboard() -> Element {
    let _lang = i18n::use_locale();
    let state = DashboardState::load();

    rsx! {
        section { class: "page page-dashboard",
            h1 { {t!("page-dashboard-title")} }
            p { class: "page__intro", {t!("page-dashboard-intro")} }

            DashboardMetrics { seed: state.seed.clone() }

            div { class: "dashboard__charts",
                SectionsChart { scores: state.seed.section_scores.clone() }
                TrendsChart { values: state.seed.monthly_trends.clone() }
            }

            RecentResponsesTable { rows: state.rows.clone() }
            DashboardExportPanel { records: state.seed.recent_responses.clone() }
        }
    }
}
