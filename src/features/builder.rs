//! Feature vector construction.
//!
//! Deterministically maps a [`LabRecord`] into an ordered numeric vector
//! matching a [`FeatureSchema`]. The builder never fails on record content:
//! absent or malformed fields resolve through the reference defaults, so an
//! empty record yields the all-defaults vector.

use crate::domain::{LabRecord, ReferenceDefaults};
use crate::features::schema::{FeatureSchema, BASE_COLUMNS};

/// Cutoffs for the two binary derived columns.
///
/// The artifacts' true training thresholds are not recoverable from the
/// artifacts themselves; these defaults are documented assumptions (1.5
/// mg/dL creatinine, 126 mg/dL fasting glucose per the diabetes diagnostic
/// cutoff) and hosts that know better values can override them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedThresholds {
    /// `high_creatinine` fires above this serum creatinine (mg/dL).
    pub high_creatinine: f64,
    /// `high_glucose` fires above this blood glucose (mg/dL).
    pub high_glucose: f64,
}

impl Default for DerivedThresholds {
    fn default() -> Self {
        Self {
            high_creatinine: 1.5,
            high_glucose: 126.0,
        }
    }
}

/// Build the ordered feature vector for one record under one schema.
///
/// The gender column is female-coded (1.0 for female, 0.0 otherwise); every
/// other base column is the coerced record value or the reference default.
/// When the schema carries derived columns they are computed from the
/// already-resolved base values, with blood glucose resolved from the
/// record independently of the base columns.
#[must_use]
pub fn build_vector(
    record: &LabRecord,
    schema: &FeatureSchema,
    defaults: &ReferenceDefaults,
    thresholds: &DerivedThresholds,
) -> Vec<f64> {
    let mut vector = Vec::with_capacity(schema.len());

    for &column in &BASE_COLUMNS {
        let value = if column == "gender" {
            match record.get("gender") {
                Some(v) if v.is_female_coded() => 1.0,
                Some(_) => 0.0,
                None => defaults.value("gender"),
            }
        } else {
            defaults.resolve(record, column)
        };
        vector.push(value);
    }

    if schema.with_derived {
        let age = vector[0];
        let creatinine = vector[8];
        let cholesterol = vector[9];
        let hdl = vector[11];

        // cholesterol_ratio: total / HDL, 0 when HDL is 0
        vector.push(if hdl > 0.0 { cholesterol / hdl } else { 0.0 });
        // creatinine_log: ln(creatinine), 0 when creatinine <= 0
        vector.push(if creatinine > 0.0 { creatinine.ln() } else { 0.0 });
        // age_creatinine_interaction
        vector.push(age * creatinine);
        // high_creatinine
        vector.push(if creatinine > thresholds.high_creatinine { 1.0 } else { 0.0 });
        // high_glucose, resolved with its own default
        let glucose = defaults.resolve(record, "blood_glucose");
        vector.push(if glucose > thresholds.high_glucose { 1.0 } else { 0.0 });
    }

    tracing::debug!(
        schema = schema.name,
        columns = vector.len(),
        "built feature vector"
    );
    vector
}
