//! End-to-end tests for the risk engine: the rule-based paths, the
//! model-backed paths, fallback behavior, and batch isolation.

use std::sync::Arc;

use renalyze::{
    ClassifierModel, Disease, LabRecord, LinearModel, ModelError, RiskEngine, Severity,
};

/// A model whose every invocation fails, for exercising the fallback path.
struct BrokenModel {
    n: usize,
}

impl ClassifierModel for BrokenModel {
    fn n_features(&self) -> usize {
        self.n
    }

    fn predict(&self, _features: &[f64]) -> Result<i64, ModelError> {
        Err(ModelError::Invocation("deliberately broken".into()))
    }
}

/// Constant-probability model: zero coefficients make the intercept the
/// whole decision, so the output probability is sigmoid(intercept).
fn constant_model(n: usize, intercept: f64) -> Arc<dyn ClassifierModel> {
    Arc::new(LinearModel::unscaled(vec![0.0; n], intercept).expect("valid model"))
}

#[test]
fn aki_without_artifact_stages_by_creatinine() {
    let engine = RiskEngine::new();
    let record = LabRecord::new().with_number("serum_creatinine", 4.5);
    let result = engine.classify(&record, Disease::Aki).unwrap();

    assert_eq!(result.stage, "Stage 3 (Severe)");
    assert_eq!(result.severity, Severity::High);
    assert!(!result.recommendations.is_empty());
}

#[test]
fn kidney_stone_accumulates_full_score() {
    let engine = RiskEngine::new();
    let record = LabRecord::new()
        .with_number("calcium", 11.0)
        .with_number("uric_acid", 7.5)
        .with_number("urine_protein", 200.0);
    let result = engine.classify(&record, Disease::KidneyStone).unwrap();

    assert_eq!(result.risk_score, Some(8.0));
    assert_eq!(result.severity, Severity::High);
    assert_eq!(result.stage, "High Risk");
    assert_eq!(result.risk_factors.len(), 3);
}

#[test]
fn ckd_without_artifact_stages_by_egfr() {
    let engine = RiskEngine::new();
    let record = LabRecord::new().with_number("egfr", 50.0);
    let result = engine.classify(&record, Disease::Ckd).unwrap();

    assert_eq!(result.stage, "Stage 3a");
    assert_eq!(result.severity, Severity::Moderate);
}

#[test]
fn esrd_critical_with_complications() {
    let engine = RiskEngine::new();
    let record = LabRecord::new()
        .with_number("egfr", 10.0)
        .with_number("hemoglobin", 8.0)
        .with_number("calcium", 8.0);
    let result = engine.classify(&record, Disease::Esrd).unwrap();

    assert_eq!(result.stage, "ESRD (Stage 5)");
    assert_eq!(result.severity, Severity::Critical);
    assert_eq!(result.dialysis_needed, Some(true));
    assert!(result.complications.iter().any(|c| c.starts_with("Anemia")));
    assert!(result
        .complications
        .iter()
        .any(|c| c.starts_with("Hypocalcemia")));
}

#[test]
fn ckd_artifact_probability_drives_staging() {
    // sigmoid(2.0) ~ 0.881 -> 88.1% -> Stage 4-5 / High.
    let engine = RiskEngine::new()
        .with_ckd_model(constant_model(25, 2.0))
        .unwrap();
    let result = engine.classify(&LabRecord::new(), Disease::Ckd).unwrap();

    assert_eq!(result.stage, "Stage 4-5");
    assert_eq!(result.severity, Severity::High);
    let score = result.risk_score.expect("model path carries a score");
    assert!(score > 80.0 && score < 90.0);
}

#[test]
fn aki_artifact_middle_band_reuses_stage_labels() {
    // sigmoid(0.0) = 0.5 -> middle band -> Stage 2 (Moderate).
    let engine = RiskEngine::new()
        .with_aki_model(constant_model(20, 0.0))
        .unwrap();
    let result = engine.classify(&LabRecord::new(), Disease::Aki).unwrap();

    assert_eq!(result.stage, "Stage 2 (Moderate)");
    assert_eq!(result.severity, Severity::Moderate);
}

#[test]
fn esrd_artifact_high_probability_flags_dialysis() {
    // sigmoid(3.0) ~ 0.953 > 0.8 -> highest band.
    let engine = RiskEngine::new()
        .with_esrd_model(constant_model(25, 3.0))
        .unwrap();
    let result = engine.classify(&LabRecord::new(), Disease::Esrd).unwrap();

    assert_eq!(result.stage, "ESRD (Stage 5)");
    assert_eq!(result.severity, Severity::Critical);
    assert_eq!(result.dialysis_needed, Some(true));
}

#[test]
fn broken_artifact_falls_back_to_rules() {
    let engine = RiskEngine::new()
        .with_aki_model(Arc::new(BrokenModel { n: 20 }))
        .unwrap();
    let record = LabRecord::new().with_number("serum_creatinine", 4.5);
    let result = engine.classify(&record, Disease::Aki).unwrap();

    // Same answer the rule path gives; the failure never escapes.
    assert_eq!(result.stage, "Stage 3 (Severe)");
    assert_eq!(result.severity, Severity::High);
}

#[test]
fn incompatible_artifact_is_rejected_at_attach_time() {
    let err = RiskEngine::new()
        .with_ckd_model(constant_model(20, 0.0))
        .unwrap_err();
    assert!(matches!(
        err,
        renalyze::RenalyzeError::SchemaMismatch {
            expected: 25,
            actual: 20,
            ..
        }
    ));
}

#[test]
fn batch_isolates_the_malformed_record() {
    let engine = RiskEngine::new();
    let values: Vec<serde_json::Value> = vec![
        serde_json::json!({"egfr": 95.0}),
        serde_json::json!({"egfr": 50.0}),
        serde_json::json!(["egfr", 50.0]),
        serde_json::json!({"egfr": 10.0}),
    ];
    let results = engine.classify_json_batch(&values, Disease::Ckd);

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].stage, "Stage 1");
    assert_eq!(results[1].stage, "Stage 3a");
    assert_eq!(results[2].stage, "Unknown");
    assert_eq!(results[2].severity, Severity::Unknown);
    assert_eq!(results[3].stage, "Stage 5");
}

#[test]
fn classify_many_preserves_input_order() {
    let engine = RiskEngine::new();
    let records: Vec<LabRecord> = [4.5, 1.0, 2.5]
        .iter()
        .map(|&c| LabRecord::new().with_number("serum_creatinine", c))
        .collect();
    let results = engine.classify_many(&records, Disease::Aki);

    let stages: Vec<&str> = results.iter().map(|r| r.stage.as_str()).collect();
    assert_eq!(
        stages,
        vec!["Stage 3 (Severe)", "No AKI", "Stage 2 (Moderate)"]
    );
}

#[test]
fn every_disease_yields_nonempty_recommendations_on_empty_input() {
    let engine = RiskEngine::new();
    for disease in Disease::ALL {
        let result = engine.classify(&LabRecord::new(), disease).unwrap();
        assert!(
            !result.recommendations.is_empty(),
            "{disease} produced no recommendations"
        );
        assert!(result.recommendations.iter().all(|r| !r.is_empty()));
    }
}

#[test]
fn results_serialize_to_flat_json() {
    let engine = RiskEngine::new();
    let record = LabRecord::new()
        .with_number("egfr", 10.0)
        .with_number("hemoglobin", 8.0);
    let result = engine.classify(&record, Disease::Esrd).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["disease"], "End-Stage Renal Disease (ESRD)");
    assert_eq!(json["severity"], "Critical");
    assert_eq!(json["dialysis_needed"], true);
    assert!(json["complications"].as_array().unwrap().len() >= 1);
    assert_eq!(json["lab_values"]["egfr"], 10.0);
}
