//! Risk engine: Orchestrates per-disease classification.
//!
//! Holds the read-only configuration (reference defaults, derived-feature
//! thresholds) and up to three model adapters, and dispatches each call to
//! the matching disease classifier. All methods take `&self`; calls are
//! synchronous, stateless, and safe under unlimited concurrent readers.

use std::sync::Arc;

use crate::adapters::ModelAdapter;
use crate::application::{aki, ckd, esrd, stone};
use crate::domain::{Disease, LabRecord, PredictionResult, ReferenceDefaults};
use crate::features::{DerivedThresholds, RENAL_V20, RENAL_V25};
use crate::ports::ClassifierModel;

/// The clinical risk classification engine.
///
/// Construct once at startup, attach whichever pretrained artifacts the
/// host managed to load, and share freely; every classification call is
/// independent.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    defaults: ReferenceDefaults,
    thresholds: DerivedThresholds,
    ckd_model: ModelAdapter,
    aki_model: ModelAdapter,
    esrd_model: ModelAdapter,
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskEngine {
    /// Engine with no artifacts attached; every disease uses its
    /// rule-based path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            defaults: ReferenceDefaults,
            thresholds: DerivedThresholds::default(),
            ckd_model: ModelAdapter::absent(&RENAL_V25),
            aki_model: ModelAdapter::absent(&RENAL_V20),
            esrd_model: ModelAdapter::absent(&RENAL_V25),
        }
    }

    /// Override the derived-feature cutoffs.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: DerivedThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Attach a CKD artifact (25-column schema).
    ///
    /// # Errors
    /// Returns `RenalyzeError::SchemaMismatch` if the artifact expects a
    /// different vector length.
    pub fn with_ckd_model(mut self, model: Arc<dyn ClassifierModel>) -> crate::Result<Self> {
        self.ckd_model = ModelAdapter::new(model, &RENAL_V25)?;
        tracing::info!(schema = RENAL_V25.name, "attached CKD classifier artifact");
        Ok(self)
    }

    /// Attach an AKI artifact (20-column schema).
    ///
    /// # Errors
    /// Returns `RenalyzeError::SchemaMismatch` if the artifact expects a
    /// different vector length.
    pub fn with_aki_model(mut self, model: Arc<dyn ClassifierModel>) -> crate::Result<Self> {
        self.aki_model = ModelAdapter::new(model, &RENAL_V20)?;
        tracing::info!(schema = RENAL_V20.name, "attached AKI classifier artifact");
        Ok(self)
    }

    /// Attach an ESRD artifact (25-column schema).
    ///
    /// # Errors
    /// Returns `RenalyzeError::SchemaMismatch` if the artifact expects a
    /// different vector length.
    pub fn with_esrd_model(mut self, model: Arc<dyn ClassifierModel>) -> crate::Result<Self> {
        self.esrd_model = ModelAdapter::new(model, &RENAL_V25)?;
        tracing::info!(schema = RENAL_V25.name, "attached ESRD classifier artifact");
        Ok(self)
    }

    /// Classify one record for one disease.
    ///
    /// Missing and malformed measurements resolve through the reference
    /// defaults; artifact failures fall back to the rule-based path. The
    /// call only fails on contract violations, none of which arise from
    /// record content.
    ///
    /// # Errors
    /// Reserved for configuration/contract violations.
    pub fn classify(&self, record: &LabRecord, disease: Disease) -> crate::Result<PredictionResult> {
        let result = match disease {
            Disease::Ckd => ckd::classify(record, &self.defaults, &self.thresholds, &self.ckd_model),
            Disease::KidneyStone => stone::classify(record, &self.defaults),
            Disease::Aki => aki::classify(record, &self.defaults, &self.thresholds, &self.aki_model),
            Disease::Esrd => {
                esrd::classify(record, &self.defaults, &self.thresholds, &self.esrd_model)
            }
        };
        tracing::debug!(
            disease = %disease,
            stage = %result.stage,
            severity = %result.severity,
            "classified record"
        );
        Ok(result)
    }

    /// Classify one record, parsing the disease selector first.
    ///
    /// # Errors
    /// Returns `RenalyzeError::UnknownDisease` for a selector outside
    /// `ckd` / `kidney_stone` / `aki` / `esrd`.
    pub fn classify_selector(
        &self,
        record: &LabRecord,
        selector: &str,
    ) -> crate::Result<PredictionResult> {
        self.classify(record, selector.parse()?)
    }

    /// Classify a batch of records, independently, preserving input order.
    ///
    /// A failing record yields the error-shaped placeholder (stage
    /// "Unknown", severity `Unknown`) instead of aborting the batch.
    #[must_use]
    pub fn classify_many(&self, records: &[LabRecord], disease: Disease) -> Vec<PredictionResult> {
        records
            .iter()
            .map(|record| {
                self.classify(record, disease).unwrap_or_else(|e| {
                    tracing::warn!(disease = %disease, error = %e, "record failed in batch");
                    PredictionResult::unavailable(disease, record)
                })
            })
            .collect()
    }

    /// Classify a batch of loose JSON values, preserving input order.
    ///
    /// An element that is not an object of scalar measurements yields the
    /// error-shaped placeholder at its position.
    #[must_use]
    pub fn classify_json_batch(
        &self,
        values: &[serde_json::Value],
        disease: Disease,
    ) -> Vec<PredictionResult> {
        values
            .iter()
            .map(|value| match LabRecord::from_json(value) {
                Ok(record) => self
                    .classify(&record, disease)
                    .unwrap_or_else(|_| PredictionResult::unavailable(disease, &record)),
                Err(e) => {
                    tracing::warn!(disease = %disease, error = %e, "malformed record in batch");
                    PredictionResult::unavailable(disease, &LabRecord::new())
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Severity;

    #[test]
    fn test_unknown_selector_propagates() {
        let engine = RiskEngine::new();
        let err = engine
            .classify_selector(&LabRecord::new(), "gallstone")
            .unwrap_err();
        assert!(matches!(err, crate::RenalyzeError::UnknownDisease(_)));
    }

    #[test]
    fn test_selector_dispatch() {
        let engine = RiskEngine::new();
        let record = LabRecord::new().with_number("egfr", 50.0);
        let result = engine.classify_selector(&record, "ckd").unwrap();
        assert_eq!(result.stage, "Stage 3a");
    }

    #[test]
    fn test_batch_preserves_order_and_isolates_failures() {
        let engine = RiskEngine::new();
        let values = vec![
            serde_json::json!({"serum_creatinine": 4.5}),
            serde_json::json!("not a record"),
            serde_json::json!({"serum_creatinine": 1.0}),
        ];
        let results = engine.classify_json_batch(&values, Disease::Aki);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].stage, "Stage 3 (Severe)");
        assert_eq!(results[1].stage, "Unknown");
        assert_eq!(results[1].severity, Severity::Unknown);
        assert!(!results[1].recommendations.is_empty());
        assert_eq!(results[2].stage, "No AKI");
    }
}
