use std::sync::Arc;

use dioxus::prelude::*;

use crate::core::format;
use crate::core::seed::DashboardSeed;
use crate::core::status::classify;
use crate::{i18n, t};

#[component]
pub fn DashboardMetrics(seed: Arc<DashboardSeed>) -> Element {
    let _lang = i18n::use_locale();
    let average_class = format!(
        "metric-card__value {}",
        classify(seed.average_satisfaction).css_class()
    );
    let growth_class = if seed.monthly_growth >= 0.0 {
        "metric-card__trend metric-card__trend--up"
    } else {
        "metric-card__trend metric-card__trend--down"
    };

    rsx! {
        section { class: "dashboard-metrics",
            div { class: "metric-card",
                span { class: "metric-card__label", {t!("metric-total-responses")} }
                strong { class: "metric-card__value", "{seed.total_responses}" }
            }
            div { class: "metric-card",
                span { class: "metric-card__label", {t!("metric-average-satisfaction")} }
                strong { class: "{average_class}", "{format::format_average(seed.average_satisfaction)}" }
            }
            div { class: "metric-card",
                span { class: "metric-card__label", {t!("metric-response-rate")} }
                strong { class: "metric-card__value", "{format::format_percent(seed.response_rate)}" }
            }
            div { class: "metric-card",
                span { class: "metric-card__label", {t!("metric-monthly-growth")} }
                strong { class: "{growth_class}", "{format::format_growth(seed.monthly_growth)}" }
            }
        }
    }
}
