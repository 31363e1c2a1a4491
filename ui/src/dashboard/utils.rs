use crate::core::format::{format_date_br, format_score};
use crate::core::seed::DashboardSeed;
use crate::core::status::{classify, StatusBadge};
use crate::t;

/// One row of the recent responses table, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseRow {
    pub id: u32,
    pub patient: String,
    pub date: String,
    pub section: String,
    pub score: String,
    pub badge: StatusBadge,
}

pub fn recent_rows(seed: &DashboardSeed) -> Vec<ResponseRow> {
    seed.recent_responses
        .iter()
        .map(|record| ResponseRow {
            id: record.id,
            patient: record.patient.clone(),
            date: format_date_br(&record.date),
            section: record.section.clone(),
            score: format_score(record.score),
            badge: classify(f64::from(record.score)).badge(),
        })
        .collect()
}

/// Localized short month names, January first.
pub fn month_labels() -> Vec<String> {
    t!("chart-months")
        .split(',')
        .map(|month| month.trim().to_string())
        .collect()
}
