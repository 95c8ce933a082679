//! Kidney stone risk scoring.
//!
//! Always rule-based: an additive score over calcium, uric acid, and urine
//! protein. Each triggered condition is reported as a risk factor with its
//! measured value.

use crate::application::recommendations;
use crate::domain::{Disease, LabRecord, PredictionResult, ReferenceDefaults, Severity};

pub(crate) fn classify(record: &LabRecord, defaults: &ReferenceDefaults) -> PredictionResult {
    let mut score = 0u32;
    let mut risk_factors = Vec::new();

    let calcium = defaults.resolve(record, "calcium");
    if calcium > 10.5 {
        score += 3;
        risk_factors.push(format!("High calcium ({calcium} mg/dL)"));
    } else if calcium > 10.0 {
        score += 1;
        risk_factors.push(format!("Elevated calcium ({calcium} mg/dL)"));
    }

    let uric_acid = defaults.resolve(record, "uric_acid");
    if uric_acid > 7.0 {
        score += 3;
        risk_factors.push(format!("High uric acid ({uric_acid} mg/dL)"));
    } else if uric_acid > 6.0 {
        score += 1;
        risk_factors.push(format!("Elevated uric acid ({uric_acid} mg/dL)"));
    }

    let urine_protein = defaults.resolve(record, "urine_protein");
    if urine_protein > 150.0 {
        score += 2;
        risk_factors.push(format!("Proteinuria ({urine_protein} mg/dL)"));
    }

    let (stage, severity) = if score >= 5 {
        ("High Risk", Severity::High)
    } else if score >= 3 {
        ("Moderate Risk", Severity::Moderate)
    } else {
        ("Low Risk", Severity::Low)
    };

    if risk_factors.is_empty() {
        risk_factors.push("No significant risk factors detected".to_string());
    }

    let mut result = PredictionResult::new(Disease::KidneyStone, stage, severity, record);
    result.risk_score = Some(f64::from(score));
    result.risk_factors = risk_factors;
    result.recommendations = recommendations::kidney_stone(severity);
    result
}
