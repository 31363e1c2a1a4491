mod table;
pub use table::RecentResponsesTable;

mod metrics;
pub use metrics::DashboardMetrics;

pub mod charts;
pub use charts::{SectionsChart, TrendsChart};

pub mod export;
pub use export::DashboardExportPanel;

mod utils;
pub use utils::{month_labels, recent_rows, ResponseRow};

use std::sync::Arc;

use crate::core::seed::DashboardSeed;

/// Everything the dashboard page renders, derived once from the static seed.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub seed: Arc<DashboardSeed>,
    pub rows: Vec<ResponseRow>,
}

impl DashboardState {
    pub fn load() -> Self {
        Self::from_seed(DashboardSeed::builtin())
    }

    pub fn from_seed(seed: Arc<DashboardSeed>) -> Self {
        let rows = recent_rows(&seed);
        Self { seed, rows }
    }
}
