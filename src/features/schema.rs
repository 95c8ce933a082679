//! Feature schema descriptors.

use crate::domain::Disease;

/// The 20 base columns shared by all vector-consuming artifacts, in the
/// exact order the models were trained with.
pub const BASE_COLUMNS: [&str; 20] = [
    "age",
    "gender",
    "smoking",
    "alcohol",
    "hypertension",
    "coronary_artery_disease",
    "cancer",
    "chronic_liver_disease",
    "serum_creatinine",
    "cholesterol",
    "ldl",
    "hdl",
    "uric_acid",
    "calcium",
    "phosphate",
    "hemoglobin",
    "statin",
    "metformin",
    "insulin",
    "dpp4_inhibitor",
];

/// The derived columns appended by the 25-column schema, computed from the
/// resolved base columns (plus blood glucose, resolved separately).
pub const DERIVED_COLUMNS: [&str; 5] = [
    "cholesterol_ratio",
    "creatinine_log",
    "age_creatinine_interaction",
    "high_creatinine",
    "high_glucose",
];

/// A versioned feature-vector contract.
///
/// An artifact trained against one of these schemas expects exactly
/// [`len()`](Self::len) columns in [`columns`](Self::columns) order.
/// Length or order drift is a configuration error, caught when the schema
/// is validated against the artifact, never at classification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSchema {
    /// Schema version identifier.
    pub name: &'static str,
    /// Whether the five derived columns are appended to the base 20.
    pub with_derived: bool,
}

/// 25-column schema used by the CKD and ESRD artifacts.
pub const RENAL_V25: FeatureSchema = FeatureSchema {
    name: "renal-v25",
    with_derived: true,
};

/// 20-column schema used by the AKI artifact (base columns only).
pub const RENAL_V20: FeatureSchema = FeatureSchema {
    name: "renal-v20",
    with_derived: false,
};

impl FeatureSchema {
    /// The schema a given disease's artifact was trained against.
    ///
    /// # Errors
    /// Returns `RenalyzeError::UnsupportedSchema` for `KidneyStone`, which
    /// is always rule-based and has no vector contract.
    pub fn for_disease(disease: Disease) -> crate::Result<&'static FeatureSchema> {
        match disease {
            Disease::Ckd | Disease::Esrd => Ok(&RENAL_V25),
            Disease::Aki => Ok(&RENAL_V20),
            Disease::KidneyStone => Err(crate::RenalyzeError::UnsupportedSchema(disease)),
        }
    }

    /// Number of columns in this schema.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.with_derived {
            BASE_COLUMNS.len() + DERIVED_COLUMNS.len()
        } else {
            BASE_COLUMNS.len()
        }
    }

    /// True if the schema has no columns. Always false; present for the
    /// conventional `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column names, in vector order.
    #[must_use]
    pub fn columns(&self) -> Vec<&'static str> {
        let mut cols: Vec<&'static str> = BASE_COLUMNS.to_vec();
        if self.with_derived {
            cols.extend_from_slice(&DERIVED_COLUMNS);
        }
        cols
    }
}
