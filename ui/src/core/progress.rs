//! Completion progress and the encouragement message bands.

/// Lower bound (inclusive) of the "halfway" band, in percent.
pub const HALFWAY_FROM_PCT: f64 = 31.0;
/// Lower bound (inclusive) of the "almost there" band, in percent.
pub const ALMOST_FROM_PCT: f64 = 71.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    pub percentage: f64,
}

impl Progress {
    pub fn new(answered: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            answered as f64 * 100.0 / total as f64
        };
        Self {
            answered,
            total,
            percentage,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered == self.total
    }

    pub fn band(&self) -> ProgressBand {
        if self.is_complete() {
            ProgressBand::Complete
        } else if self.percentage >= ALMOST_FROM_PCT {
            ProgressBand::AlmostThere
        } else if self.percentage >= HALFWAY_FROM_PCT {
            ProgressBand::Halfway
        } else {
            ProgressBand::Beginning
        }
    }

    /// Rounded percentage for the progress bar width and labels.
    pub fn rounded_pct(&self) -> u32 {
        self.percentage.round().clamp(0.0, 100.0) as u32
    }

    pub fn count_label(&self) -> String {
        crate::t!(
            "progress-count",
            answered = self.answered,
            total = self.total
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBand {
    /// Below 31%.
    Beginning,
    /// 31% to 70%.
    Halfway,
    /// 71% to 99%.
    AlmostThere,
    /// Every question answered.
    Complete,
}

impl ProgressBand {
    pub fn message(&self) -> String {
        match self {
            Self::Beginning => crate::t!("progress-beginning"),
            Self::Halfway => crate::t!("progress-halfway"),
            Self::AlmostThere => crate::t!("progress-almost"),
            Self::Complete => crate::t!("progress-complete"),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Beginning => "progress__message--beginning",
            Self::Halfway => "progress__message--halfway",
            Self::AlmostThere => "progress__message--almost",
            Self::Complete => "progress__message--complete",
        }
    }
}
