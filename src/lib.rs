//! AHP Recommender - Analytic Hierarchy Process decision engine
//!
//! This crate turns a user's pairwise judgments between criteria, and either
//! pairwise judgments between alternatives or direct ratings, into criteria
//! weights, consistency metrics and a ranked recommendation. Every
//! calculation is recorded as an immutable run.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
