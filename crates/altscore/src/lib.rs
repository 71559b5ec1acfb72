//! Alternative credit scoring for applicants without a traditional credit file.
//!
//! The heart of the crate is [`scoring::compute_score`], a pure function from a self-reported
//! profile to a 300–850 score with a per-category breakdown. The remaining modules derive
//! views from that score and expose them over HTTP.

pub mod advisor;
pub mod config;
pub mod error;
pub mod health;
pub mod import;
pub mod router;
pub mod scoring;
pub mod service;
pub mod simulation;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use router::scoring_router;
pub use scoring::{compute_score, RawProfile, ScoreResult};
pub use service::ScoringService;
