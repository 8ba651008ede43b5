//! Sequential batch work-process pipeline
//!
//! A run walks its product id list in order: record the cursor, analyze the
//! latest product row, write the result, advance the counter, pause. Per-item
//! failures are absorbed so every run reaches `finished = true`.

mod orchestrator;
mod runner;
mod types;


pub use orchestrator::BatchOrchestrator;
pub use runner::{BatchRunner, StartedRun};
pub use types::{ItemOutcome, RunSummary};
