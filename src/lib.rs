//! # Renalyze
//!
//! Clinical risk classification engine for four kidney-related conditions:
//! chronic kidney disease (CKD), kidney stone risk, acute kidney injury
//! (AKI), and end-stage renal disease (ESRD).
//!
//! The engine turns a partial, loosely typed set of laboratory measurements
//! into a disease stage, a severity band, an optional risk score, and a list
//! of clinical recommendations. When a pretrained classifier artifact is
//! supplied by the host it drives the staging; when it is absent or fails,
//! the engine degrades to deterministic threshold rules.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (LabRecord, ReferenceDefaults, PredictionResult)
//! - `features`: Feature schemas and the record-to-vector builder
//! - `ports`: Trait boundary to externally trained classifier artifacts
//! - `adapters`: Safe artifact invocation and an embeddable linear model
//! - `application`: The risk engine, per-disease rules, and the batch runner
//!
//! ## Quick start
//!
//! ```
//! use renalyze::{Disease, LabRecord, RiskEngine};
//!
//! let engine = RiskEngine::new();
//! let record = LabRecord::default().with_number("serum_creatinine", 4.5);
//! let result = engine.classify(&record, Disease::Aki)?;
//! assert_eq!(result.stage, "Stage 3 (Severe)");
//! # Ok::<(), renalyze::RenalyzeError>(())
//! ```

pub mod adapters;
pub mod application;
pub mod domain;
pub mod features;
pub mod ports;

pub use adapters::{ClassificationOutcome, LinearModel, ModelAdapter};
pub use application::RiskEngine;
pub use domain::{Disease, LabRecord, LabValue, PredictionResult, ReferenceDefaults, Severity};
pub use features::{DerivedThresholds, FeatureSchema};
pub use ports::{ClassifierModel, ModelError};

/// Result type for Renalyze operations.
pub type Result<T> = std::result::Result<T, RenalyzeError>;

/// Main error type for Renalyze.
///
/// Only configuration and contract violations surface here. Missing or
/// malformed lab values are absorbed through the reference defaults, and
/// artifact invocation failures collapse into the rule-based fallback.
#[derive(Debug, thiserror::Error)]
pub enum RenalyzeError {
    /// The caller asked for a disease outside the supported set.
    #[error("unknown disease selector: {0:?}")]
    UnknownDisease(String),

    /// No feature schema exists for this disease (kidney stone risk is
    /// always rule-based and has no vector contract).
    #[error("no feature schema defined for {0}")]
    UnsupportedSchema(Disease),

    /// A declared schema and an attached model disagree on vector length.
    #[error("schema '{schema}' has {expected} columns but model expects {actual}")]
    SchemaMismatch {
        schema: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A model artifact was misconfigured at construction time.
    #[error("model configuration error: {0}")]
    Model(#[from] ports::ModelError),

    /// A lab record could not be read as an object of scalar values.
    #[error("invalid lab record: {0}")]
    InvalidRecord(#[from] serde_json::Error),
}
