//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, errors)
//! - `ahp` - Analytic Hierarchy Process engine and its result types

pub mod ahp;
pub mod foundation;
