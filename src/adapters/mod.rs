//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the engine to storage:
//! - `memory` - In-memory implementations (tests, development)
//! - `postgres` - PostgreSQL implementations via sqlx

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryCatalog, InMemoryJudgmentStore, InMemoryRunRecorder};
pub use postgres::{PostgresCatalog, PostgresJudgmentStore, PostgresRunRecorder};
