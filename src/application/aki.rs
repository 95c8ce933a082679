//! Acute kidney injury classification.
//!
//! Model-backed when the 20-column AKI artifact is present; otherwise
//! KDIGO-style staging on serum creatinine. Electrolyte risk factors
//! (hyperkalemia, hyponatremia) are flagged on every path, independent of
//! stage.

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
            if p > 0.7 {
                ("Stage 3 (Severe)", Severity::High, Some(p * 100.0))
            } else if p > 0.4 {
                ("Stage 2 (Moderate)", Severity::Moderate, Some(p * 100.0))
            } else {
                ("No AKI", Severity::Low, Some(p * 100.0))
            }
        })
    } else {
        None
    };

    let (stage, severity, risk_score) =
        staged.unwrap_or_else(|| stage_by_creatinine(defaults.resolve(record, "serum_creatinine")));

    let mut result = PredictionResult::new(Disease::Aki, stage, severity, record);
    result.risk_score = risk_score;
    result.risk_factors = electrolyte_factors(record, defaults);
    result.recommendations = recommendations::aki(severity);
    result
}

fn stage_by_creatinine(creatinine: f64) -> (&'static str, Severity, Option<f64>) {
    if creatinine >= 4.0 {
        ("Stage 3 (Severe)", Severity::High, None)
    } else if creatinine >= 2.0 {
        ("Stage 2 (Moderate)", Severity::Moderate, None)
    } else if creatinine >= 1.5 {
        ("Stage 1 (Mild)", Severity::Moderate, None)
    } else {
        ("No AKI", Severity::Low, None)
    }
}

/// Electrolyte flags, independent of stage.
fn electrolyte_factors(record: &LabRecord, defaults: &ReferenceDefaults) -> Vec<String> {
    let mut factors = Vec::new();

    let potassium = defaults.resolve(record, "potassium");
    if potassium > 5.5 {
        factors.push(format!("Hyperkalemia ({potassium} mEq/L)"));
    }

    let sodium = defaults.resolve(record, "sodium");
    if sodium < 135.0 {
        factors.push(format!("Hyponatremia ({sodium} mEq/L)"));
    }

    if factors.is_empty() {
        factors.push("Monitor kidney function closely".to_string());
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::RENAL_V20;

    fn rule_classify(record: &LabRecord) -> PredictionResult {
        classify(
            record,
            &ReferenceDefaults,
            &DerivedThresholds::default(),
            &ModelAdapter::absent(&RENAL_V20),
        )
    }

    #[test]
    fn test_creatinine_staging() {
        let cases = [
            (4.5, "Stage 3 (Severe)", Severity::High),
            (4.0, "Stage 3 (Severe)", Severity::High),
            (2.5, "Stage 2 (Moderate)", Severity::Moderate),
            (1.7, "Stage 1 (Mild)", Severity::Moderate),
            (1.0, "No AKI", Severity::Low),
        ];
        for (creatinine, stage, severity) in cases {
            let record = LabRecord::new().with_number("serum_creatinine", creatinine);
            let result = rule_classify(&record);
            assert_eq!(result.stage, stage, "creatinine {creatinine}");
            assert_eq!(result.severity, severity, "creatinine {creatinine}");
        }
    }

    #[test]
    fn test_electrolyte_flags_regardless_of_stage() {
        let record = LabRecord::new()
            .with_number("serum_creatinine", 1.0)
            .with_number("potassium", 6.1)
            .with_number("sodium", 128.0);
        let result = rule_classify(&record);
        assert_eq!(result.stage, "No AKI");
        assert_eq!(result.risk_factors.len(), 2);
        assert!(result.risk_factors[0].starts_with("Hyperkalemia"));
        assert!(result.risk_factors[1].starts_with("Hyponatremia"));
    }

    #[test]
    fn test_normal_electrolytes_placeholder() {
        let result = rule_classify(&LabRecord::new());
        assert_eq!(
            result.risk_factors,
            vec!["Monitor kidney function closely".to_string()]
        );
    }
}
