//! Formatting helpers for presenting dashboard figures.

use time::{macros::format_description, Date};

/// `2024-12-23` → `23/12/2024`. Unparseable input is returned unchanged.
pub fn format_date_br(iso: &str) -> String {
    Date::parse(iso.trim(), &format_description!("[year]-[month]-[day]"))
        .ok()
        .and_then(|date| {
            date.format(&format_description!("[day]/[month]/[year]"))
                .ok()
        })
        .unwrap_or_else(|| iso.to_string())
}

pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{value:.decimals$}")
    } else {
        "—".to_string()
    }
}

/// `87.3` → `87.3%`.
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}%")
    } else {
        "—".to_string()
    }
}

/// Growth with an explicit sign: `12.5` → `+12.5%`.
pub fn format_growth(value: f64) -> String {
    if !value.is_finite() {
        "—".to_string()
    } else if value > 0.0 {
        format!("+{value:.1}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Average on the 1–5 scale: `4.2` → `4.2/5`.
pub fn format_average(value: f64) -> String {
    format!("{}/5", format_number(value, 1))
}

/// Whole-number score: `5` → `5/5`.
pub fn format_score(score: u8) -> String {
    format!("{score}/5")
}
