//! End-stage renal disease classification.
//!
//! Model-backed when the 25-column ESRD artifact is present; otherwise
//! staged by eGFR with a dialysis indication at stage 5. A complication
//! scan (anemia, mineral-bone markers, hyperkalemia) runs on every path,
//! independent of stage.

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
    let staged = if model.available() {
        let vector = build_vector(record, model.schema(), defaults, thresholds);
        model.classify(&vector).map(|outcome| {
            let p = outcome.probability;
            if p > 0.8 {
                ("ESRD (Stage 5)", Severity::Critical, true, Some(p * 100.0))
            } else if p > 0.5 {
                ("Severe CKD (Stage 4)", Severity::High, false, Some(p * 100.0))
            } else {
                ("Early CKD or Normal", Severity::Low, false, Some(p * 100.0))
            }
        })
    } else {
        None
    };

    let (stage, severity, dialysis_needed, risk_score) =
        staged.unwrap_or_else(|| stage_by_egfr(defaults.resolve(record, "egfr")));

    let mut result = PredictionResult::new(Disease::Esrd, stage, severity, record);
    result.risk_score = risk_score;
    result.dialysis_needed = Some(dialysis_needed);
    result.complications = complication_scan(record, defaults);
    result.recommendations = recommendations::esrd(severity, dialysis_needed);
    result
}

fn stage_by_egfr(egfr: f64) -> (&'static str, Severity, bool, Option<f64>) {
    if egfr < 15.0 {
        ("ESRD (Stage 5)", Severity::Critical, true, None)
    } else if egfr < 30.0 {
        ("Severe CKD (Stage 4)", Severity::High, false, None)
    } else if egfr < 60.0 {
        ("Moderate CKD (Stage 3)", Severity::Moderate, false, None)
    } else {
        ("Early CKD or Normal", Severity::Low, false, None)
    }
}

/// Complication scan, independent of stage.
fn complication_scan(record: &LabRecord, defaults: &ReferenceDefaults) -> Vec<String> {
    let mut complications = Vec::new();

    let hemoglobin = defaults.resolve(record, "hemoglobin");
    if hemoglobin < 10.0 {
        complications.push(format!("Anemia (Hb: {hemoglobin} g/dL)"));
    }

    let calcium = defaults.resolve(record, "calcium");
    if calcium < 8.5 {
        complications.push(format!("Hypocalcemia ({calcium} mg/dL)"));
    }

    let phosphorus = defaults.resolve(record, "phosphorus");
    if phosphorus > 5.5 {
        complications.push(format!("Hyperphosphatemia ({phosphorus} mg/dL)"));
    }

    let potassium = defaults.resolve(record, "potassium");
    if potassium > 5.5 {
        complications.push(format!("Hyperkalemia ({potassium} mEq/L)"));
    }

    if complications.is_empty() {
        complications.push("No major complications detected".to_string());
    }
    complications
}
