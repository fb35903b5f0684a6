//! In-memory adapters.
//!
//! Implement every port over `tokio::sync::RwLock`-guarded collections.
//! Useful for tests and local development.

mod catalog;
mod judgments;
mod run_recorder;

pub use catalog::InMemoryCatalog;
pub use judgments::InMemoryJudgmentStore;
pub use run_recorder::InMemoryRunRecorder;
