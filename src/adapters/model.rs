//! Safe classifier artifact invocation.
//!
//! Wraps an optional [`ClassifierModel`] behind availability semantics: a
//! missing artifact, an incompatible artifact, or an invocation failure all
//! collapse into "no outcome" so the caller can fall back to the rule-based
//! staging path instead of crashing.

use std::sync::Arc;

use crate::features::FeatureSchema;
use crate::ports::ClassifierModel;

/// One successful artifact invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationOutcome {
    /// Predicted class label (0 = negative, 1 = positive).
    pub label: i64,
    /// Probability of the positive class. When the model cannot produce
    /// one, the label itself stands in as 0.0 or 1.0.
    pub probability: f64,
}

/// Adapter around an optional, host-owned classifier artifact.
///
/// Construction validates the artifact against the declared feature schema;
/// a length mismatch is a configuration error and surfaces immediately
/// rather than at classification time.
#[derive(Clone)]
pub struct ModelAdapter {
    model: Option<Arc<dyn ClassifierModel>>,
    schema: &'static FeatureSchema,
}

impl std::fmt::Debug for ModelAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelAdapter")
            .field("schema", &self.schema.name)
            .field("available", &self.available())
            .finish()
    }
}

impl ModelAdapter {
    /// Adapter with no artifact attached; `classify` always yields `None`.
    #[must_use]
    pub fn absent(schema: &'static FeatureSchema) -> Self {
        Self { model: None, schema }
    }

    /// Adapter wrapping a host-loaded artifact.
    ///
    /// # Errors
    /// Returns `RenalyzeError::SchemaMismatch` if the artifact expects a
    /// different number of columns than the schema declares.
    pub fn new(model: Arc<dyn ClassifierModel>, schema: &'static FeatureSchema) -> crate::Result<Self> {
        if model.n_features() != schema.len() {
            return Err(crate::RenalyzeError::SchemaMismatch {
                schema: schema.name,
                expected: schema.len(),
                actual: model.n_features(),
            });
        }
        Ok(Self {
            model: Some(model),
            schema,
        })
    }

    /// The schema this adapter was validated against.
    #[must_use]
    pub fn schema(&self) -> &'static FeatureSchema {
        self.schema
    }

    /// True iff an artifact is attached.
    #[must_use]
    pub fn available(&self) -> bool {
        self.model.is_some()
    }

    /// Invoke the artifact on a feature vector.
    ///
    /// Returns `None` when no artifact is attached or when the invocation
    /// fails for any reason; failures are logged, never propagated, so the
    /// caller falls straight back to the rule-based path.
    #[must_use]
    pub fn classify(&self, features: &[f64]) -> Option<ClassificationOutcome> {
        let model = self.model.as_ref()?;

        let label = match model.predict(features) {
            Ok(label) => label,
            Err(e) => {
                tracing::warn!(
                    schema = self.schema.name,
                    error = %e,
                    "classifier artifact failed, falling back to rules"
                );
                return None;
            }
        };

        let probability = match model.predict_proba(features) {
            Ok(Some(p)) => p,
            Ok(None) => {
                // No probability support: the label is the probability.
                if label > 0 {
                    1.0
                } else {
                    0.0
                }
            }
            Err(e) => {
                tracing::warn!(
                    schema = self.schema.name,
                    error = %e,
                    "probability extraction failed, falling back to rules"
                );
                return None;
            }
        };

        Some(ClassificationOutcome { label, probability })
    }
}
