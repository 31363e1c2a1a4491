//! Satisfaction status derived from a 1–5 score.
//!
//! Table badges and the CSV status column both go through [`classify`], so
//! the two never disagree about where a score lands.

pub const SATISFIED_FROM: f64 = 4.0;
pub const NEUTRAL_FROM: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Satisfaction {
    Satisfied,
    Neutral,
    Dissatisfied,
}

/// Label and CSS modifier for a status badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub class: &'static str,
}

pub fn classify(score: f64) -> Satisfaction {
    if score >= SATISFIED_FROM {
        Satisfaction::Satisfied
    } else if score >= NEUTRAL_FROM {
        Satisfaction::Neutral
    } else {
        Satisfaction::Dissatisfied
    }
}

impl Satisfaction {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Satisfied => "status--success",
            Self::Neutral => "status--warning",
            Self::Dissatisfied => "status--error",
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Satisfied => crate::t!("status-satisfied"),
            Self::Neutral => crate::t!("status-neutral"),
            Self::Dissatisfied => crate::t!("status-dissatisfied"),
        }
    }

    pub fn badge(&self) -> StatusBadge {
        StatusBadge {
            label: self.label(),
            class: self.css_class(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_scores() {
        assert_eq!(classify(5.0), Satisfaction::Satisfied);
        assert_eq!(classify(5.0).css_class(), "status--success");
        assert_eq!(classify(3.0), Satisfaction::Neutral);
        assert_eq!(classify(3.0).css_class(), "status--warning");
        assert_eq!(classify(1.0), Satisfaction::Dissatisfied);
        assert_eq!(classify(1.0).css_class(), "status--error");
    }

    #[test]
    fn breakpoints_are_inclusive_lower_bounds() {
        assert_eq!(classify(4.0), Satisfaction::Satisfied);
        assert_eq!(classify(3.99), Satisfaction::Neutral);
        assert_eq!(classify(2.99), Satisfaction::Dissatisfied);
    }

    #[test]
    fn nan_is_dissatisfied() {
        assert_eq!(classify(f64::NAN), Satisfaction::Dissatisfied);
    }

    #[test]
    fn badge_pairs_label_with_class() {
        crate::i18n::init();
        let badge = Satisfaction::Neutral.badge();
        assert_eq!(badge.class, "status--warning");
        assert_eq!(badge.label, Satisfaction::Neutral.label());
        assert!(!badge.label.is_empty());
    }
}
