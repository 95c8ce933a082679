//! Chronic kidney disease classification.
//!
//! Model-backed when the CKD artifact is present: the positive-class
//! probability becomes a 0-100 risk percentage driving stage and severity.
//! Otherwise stages by eGFR thresholds (KDIGO G1-G5 bands).

use crate::adapters::ModelAdapter;
use crate::application::recommendations;
use crate::domain::{Disease, LabRecord, PredictionResult, ReferenceDefaults, Severity};
use crate::features::{build_vector, DerivedThresholds};

pub(crate) fn classify(
    record: &LabRecord,
    defaults: &ReferenceDefaults,
    thresholds: &DerivedThresholds,
    model: &ModelAdapter,
) -> PredictionResult {
    if model.available() {
        let vector = build_vector(record, model.schema(), defaults, thresholds);
        if let Some(outcome) = model.classify(&vector) {
            return from_risk_percentage(outcome.probability * 100.0, record);
        }
    }
    from_egfr(defaults.resolve(record, "egfr"), record)
}

/// Model path: stage and severity from the risk percentage.
fn from_risk_percentage(risk_percentage: f64, record: &LabRecord) -> PredictionResult {
    let (stage, severity) = if risk_percentage >= 80.0 {
        ("Stage 4-5", Severity::High)
    } else if risk_percentage >= 50.0 {
        ("Stage 3", Severity::Moderate)
    } else {
        ("Stage 1-2", Severity::Low)
    };

    let mut result = PredictionResult::new(Disease::Ckd, stage, severity, record);
    result.risk_score = Some(risk_percentage);
    result.recommendations = recommendations::ckd(severity);
    result
}

/// Fallback path: stage directly from eGFR.
fn from_egfr(egfr: f64, record: &LabRecord) -> PredictionResult {
    let (stage, severity) = if egfr >= 90.0 {
        ("Stage 1", Severity::Low)
    } else if egfr >= 60.0 {
        ("Stage 2", Severity::Low)
    } else if egfr >= 45.0 {
        ("Stage 3a", Severity::Moderate)
    } else if egfr >= 30.0 {
        ("Stage 3b", Severity::Moderate)
    } else if egfr >= 15.0 {
        ("Stage 4", Severity::High)
    } else {
        ("Stage 5", Severity::Critical)
    };

    let mut result = PredictionResult::new(Disease::Ckd, stage, severity, record);
    result.recommendations = recommendations::ckd(severity);
    result
}
