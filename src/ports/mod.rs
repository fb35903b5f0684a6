//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the AHP engine and the storage behind it. Adapters implement these ports.
//!
//! ## Catalog Ports
//!
//! - `CriteriaStore` - Ordered decision criteria
//! - `AlternativeStore` - Ordered candidates being ranked
//!
//! ## Judgment Ports
//!
//! - `CriteriaJudgmentStore` - Per-user pairwise judgments between criteria
//! - `AlternativeJudgmentStore` - Per-user, per-criterion judgments between alternatives
//! - `DirectRatingStore` - Per-user raw ratings of alternatives
//!
//! ## Output Port
//!
//! - `RunRecorder` - Append-only store of recommendation runs

mod alternative_store;
mod criteria_store;
mod direct_rating_store;
mod judgment_store;
mod run_recorder;

pub use alternative_store::AlternativeStore;
pub use criteria_store::CriteriaStore;
pub use direct_rating_store::DirectRatingStore;
pub use judgment_store::{AlternativeJudgmentStore, CriteriaJudgmentStore};
pub use run_recorder::RunRecorder;
