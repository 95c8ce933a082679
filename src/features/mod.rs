//! Feature layer: versioned vector schemas and the record-to-vector builder.
//!
//! The pretrained classifier artifacts are not self-describing; the column
//! order and derived-feature formulas they were trained on are captured here
//! as versioned data so they can be validated against an artifact at load
//! time instead of discovered by trial and error.

mod builder;
mod schema;

pub use builder::{build_vector, DerivedThresholds};
pub use schema::{FeatureSchema, BASE_COLUMNS, DERIVED_COLUMNS, RENAL_V20, RENAL_V25};
