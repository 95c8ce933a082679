//! Domain layer: Core business types.
//!
//! This module contains pure types with no external collaborators: the
//! loosely typed lab record, the reference defaults table, and the
//! prediction output types. All types are serializable.

mod defaults;
mod prediction;
mod record;

pub use defaults::ReferenceDefaults;
pub use prediction::{Disease, PredictionResult, Severity};
pub use record::{LabRecord, LabValue};
