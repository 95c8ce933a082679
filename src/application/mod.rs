//! Application layer: Use cases orchestrating domain, features, and ports.
//!
//! `RiskEngine` is the public entry point; the per-disease modules hold the
//! pure rule classifiers and the artifact-backed staging branches.

mod aki;
mod ckd;
mod engine;
mod esrd;
mod recommendations;
mod stone;

pub use engine::RiskEngine;
pub use recommendations::generic_recommendations;
