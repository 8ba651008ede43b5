use serde::Serialize;

/// What happened to one product in a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "camelCase")]
pub enum ItemOutcome {
    /// Analysis written; `degraded` when it was the fallback record
    Analyzed { degraded: bool },
    /// Nothing to analyze
    Skipped(String),
    /// Reading or writing the product failed
    Failed(String),
}

/// Totals for a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub run_id: i32,
    pub total: usize,
    pub analyzed: usize,
    pub degraded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn new(run_id: i32, total: usize) -> Self {
        Self {
            run_id,
            total,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: &ItemOutcome) {
        match outcome {
            ItemOutcome::Analyzed { degraded } => {
                self.analyzed += 1;
                if *degraded {
                    self.degraded += 1;
                }
            }
            ItemOutcome::Skipped(_) => self.skipped += 1,
            ItemOutcome::Failed(_) => self.failed += 1,
        }
    }

    /// Every product id accounted for
    pub fn processed(&self) -> usize {
        self.analyzed + self.skipped + self.failed
    }
}
