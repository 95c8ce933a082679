//! Embeddable standardized logistic model.
//!
//! The original artifacts were standardize-then-logistic pipelines; hosts
//! that export the fitted means, scales, coefficients, and intercept can
//! embed them directly with this adapter instead of shipping an opaque
//! binary blob. Inference is `sigmoid(intercept + dot(coef, zscore(x)))`.

use crate::ports::{ClassifierModel, ModelError};

/// A logistic regression over z-scored features.
#[derive(Debug, Clone)]
pub struct LinearModel {
    coefficients: Vec<f64>,
    intercept: f64,
    scaler_mean: Vec<f64>,
    scaler_scale: Vec<f64>,
}

impl LinearModel {
    /// Build a model from exported pipeline parameters.
    ///
    /// # Errors
    /// Returns `ModelError::Invocation` if the parameter vectors disagree
    /// in length or any scale factor is not strictly positive.
    pub fn new(
        coefficients: Vec<f64>,
        intercept: f64,
        scaler_mean: Vec<f64>,
        scaler_scale: Vec<f64>,
    ) -> Result<Self, ModelError> {
        let n = coefficients.len();
        if scaler_mean.len() != n || scaler_scale.len() != n {
            return Err(ModelError::Invocation(format!(
                "parameter length mismatch: {} coefficients, {} means, {} scales",
                n,
                scaler_mean.len(),
                scaler_scale.len()
            )));
        }
        if scaler_scale.iter().any(|&s| s <= 0.0) {
            return Err(ModelError::Invocation(
                "scaler scales must be strictly positive".to_string(),
            ));
        }
        Ok(Self {
            coefficients,
            intercept,
            scaler_mean,
            scaler_scale,
        })
    }

    /// Unscaled model over raw features (identity standardization).
    ///
    /// # Errors
    /// Never fails for a non-empty coefficient vector; kept fallible for
    /// symmetry with [`new`](Self::new).
    pub fn unscaled(coefficients: Vec<f64>, intercept: f64) -> Result<Self, ModelError> {
        let n = coefficients.len();
        Self::new(coefficients, intercept, vec![0.0; n], vec![1.0; n])
    }

    fn decision(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::FeatureMismatch {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }
        let mut z = self.intercept;
        for i in 0..features.len() {
            let scaled = (features[i] - self.scaler_mean[i]) / self.scaler_scale[i];
            z += self.coefficients[i] * scaled;
        }
        Ok(z)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl ClassifierModel for LinearModel {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, features: &[f64]) -> Result<i64, ModelError> {
        Ok(i64::from(self.decision(features)? >= 0.0))
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Option<f64>, ModelError> {
        Ok(Some(sigmoid(self.decision(features)?)))
    }
}
