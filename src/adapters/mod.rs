//! Adapters layer: Concrete implementations behind the ports.
//!
//! - `model`: safe invocation of an optional classifier artifact, with
//!   fallback semantics on absence or failure
//! - `linear`: an embeddable standardized logistic model, the export shape
//!   of the original training pipeline

mod linear;
mod model;

pub use linear::LinearModel;
pub use model::{ClassificationOutcome, ModelAdapter};
