use tracing::info;
use uuid::Uuid;

use crate::pipeline::types::AnalysisReport;

/// Per-user state: only the most recent analysis is kept.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    last_report: Option<AnalysisReport>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            last_report: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Replaces whatever the previous analysis produced.
    pub fn record(&mut self, report: AnalysisReport) {
        info!(
            "Session {}: stored analysis {} of {}",
            self.id, report.id, report.source
        );
        self.last_report = Some(report);
    }

    pub fn last_report(&self) -> Option<&AnalysisReport> {
        self.last_report.as_ref()
    }

    /// True once an analysis produced at least one ingredient.
    pub fn has_ingredients(&self) -> bool {
        self.last_report
            .as_ref()
            .is_some_and(|r| !r.ingredients.is_empty())
    }

    pub fn clear(&mut self) {
        self.last_report = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
