//! Reference defaults: clinically normal fallback values.
//!
//! Whenever an input record omits a measurement, or carries one that cannot
//! be coerced to a number, the engine substitutes the value from this table
//! instead of failing. The table is read-only, process-wide configuration
//! data, injected into the classifiers rather than referenced ambiently.

use crate::domain::{LabRecord, LabValue};

/// Per-measurement fallback values, in adult reference-range territory.
const DEFAULTS: &[(&str, f64)] = &[
    ("age", 45.0),
    ("gender", 0.0),
    ("smoking", 0.0),
    ("alcohol", 0.0),
    ("hypertension", 0.0),
    ("coronary_artery_disease", 0.0),
    ("cancer", 0.0),
    ("chronic_liver_disease", 0.0),
    ("serum_creatinine", 1.0),
    ("cholesterol", 200.0),
    ("ldl", 100.0),
    ("hdl", 50.0),
    ("uric_acid", 5.0),
    ("calcium", 9.0),
    ("phosphate", 3.5),
    ("phosphorus", 3.5),
    ("hemoglobin", 12.0),
    ("statin", 0.0),
    ("metformin", 0.0),
    ("insulin", 0.0),
    ("dpp4_inhibitor", 0.0),
    ("blood_glucose", 100.0),
    ("egfr", 60.0),
    ("potassium", 4.0),
    ("sodium", 140.0),
    ("urine_protein", 0.0),
];

/// The reference defaults table.
///
/// A unit struct today; kept as an injected value so hosts with different
/// reference ranges can grow it into real configuration without touching
/// the classifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceDefaults;

impl ReferenceDefaults {
    /// Fallback value for a measurement name. Unknown names default to 0.0,
    /// matching the binary-flag convention.
    #[must_use]
    pub fn value(&self, key: &str) -> f64 {
        DEFAULTS
            .iter()
            .find(|(name, _)| *name == key)
            .map_or(0.0, |(_, v)| *v)
    }

    /// Resolve a measurement from a record, falling back to the table.
    ///
    /// This is the single coercion point for the whole engine: present and
    /// coercible values pass through, absent or malformed ones resolve to
    /// the reference default. Never fails.
    #[must_use]
    pub fn resolve(&self, record: &LabRecord, key: &str) -> f64 {
        record
            .get(key)
            .and_then(LabValue::as_f64)
            .unwrap_or_else(|| self.value(key))
    }
}
