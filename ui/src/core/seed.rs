//! Static dashboard figures embedded from `data/dashboard.json`.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::error::SchemaError;

/// January through December.
pub const TREND_MONTHS: usize = 12;

const BUILTIN_DASHBOARD: &str = include_str!("../../data/dashboard.json");

static BUILTIN: Lazy<Arc<DashboardSeed>> = Lazy::new(|| {
    Arc::new(DashboardSeed::from_json(BUILTIN_DASHBOARD).expect("embedded dashboard seed is valid"))
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScore {
    pub section: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub id: u32,
    pub patient: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub score: u8,
    pub section: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSeed {
    pub total_responses: u32,
    pub average_satisfaction: f64,
    /// Percent.
    pub response_rate: f64,
    /// Percent, may be negative.
    pub monthly_growth: f64,
    pub section_scores: Vec<SectionScore>,
    /// One average per month, January first.
    pub monthly_trends: Vec<f64>,
    pub recent_responses: Vec<ResponseRecord>,
}

impl DashboardSeed {
    pub fn builtin() -> Arc<DashboardSeed> {
        BUILTIN.clone()
    }

    pub fn from_json(raw: &str) -> Result<Self, SchemaError> {
        let seed: DashboardSeed = serde_json::from_str(raw)?;
        seed.validate()?;
        Ok(seed)
    }

    fn validate(&self) -> Result<(), SchemaError> {
        let in_range = |value: f64| (1.0..=5.0).contains(&value);

        for entry in &self.section_scores {
            if !in_range(entry.score) {
                return Err(SchemaError::ScoreOutOfRange {
                    context: entry.section.clone(),
                    value: entry.score,
                });
            }
        }
        if self.monthly_trends.len() != TREND_MONTHS {
            return Err(SchemaError::TrendLength {
                expected: TREND_MONTHS,
                found: self.monthly_trends.len(),
            });
        }
        for (month, value) in self.monthly_trends.iter().enumerate() {
            if !in_range(*value) {
                return Err(SchemaError::ScoreOutOfRange {
                    context: format!("trend month {}", month + 1),
                    value: *value,
                });
            }
        }
        for record in &self.recent_responses {
            if !in_range(f64::from(record.score)) {
                return Err(SchemaError::ScoreOutOfRange {
                    context: format!("response #{}", record.id),
                    value: f64::from(record.score),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_seed_matches_published_figures() {
        let seed = DashboardSeed::builtin();
        assert_eq!(seed.total_responses, 1247);
        assert_eq!(seed.average_satisfaction, 4.2);
        assert_eq!(seed.section_scores.len(), 5);
        assert_eq!(seed.section_scores[0].section, "Atendimento");
        assert_eq!(seed.monthly_trends.len(), 12);
        assert_eq!(seed.recent_responses.len(), 6);
        assert_eq!(seed.recent_responses[5].score, 2);
    }

    #[test]
    fn rejects_out_of_range_scores() {
        let raw = r#"{
            "total_responses": 1,
            "average_satisfaction": 4.0,
            "response_rate": 50.0,
            "monthly_growth": 0.0,
            "section_scores": [],
            "monthly_trends": [4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0],
            "recent_responses": [
                { "id": 9, "patient": "X", "date": "2024-01-01", "score": 7, "section": "Atendimento" }
            ]
        }"#;
        let err = DashboardSeed::from_json(raw).unwrap_err();
        assert!(matches!(err, SchemaError::ScoreOutOfRange { value, .. } if value == 7.0));
    }

    fn seed_with_trends(trends: &str) -> String {
        format!(
            r#"{{
            "total_responses": 1,
            "average_satisfaction": 4.0,
            "response_rate": 50.0,
            "monthly_growth": 0.0,
            "section_scores": [],
            "monthly_trends": {trends},
            "recent_responses": []
        }}"#
        )
    }

    #[test]
    fn rejects_short_trend_series() {
        let raw = seed_with_trends("[4.0, 4.1, 4.2]");
        let err = DashboardSeed::from_json(&raw).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::TrendLength {
                expected: 12,
                found: 3
            }
        ));
    }

    #[test]
    fn rejects_out_of_range_trend_value() {
        let raw = seed_with_trends("[4.0, 4.0, 4.0, 4.0, 4.0, 0.5, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0]");
        let err = DashboardSeed::from_json(&raw).unwrap_err();
        match err {
            SchemaError::ScoreOutOfRange { context, value } => {
                assert_eq!(context, "trend month 6");
                assert_eq!(value, 0.5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
