//! Classifier model port: Trait for pretrained binary classifiers.
//!
//! The artifacts are loaded once by the host process (file formats and
//! blob resolution are the host's concern) and handed to the engine as
//! opaque capabilities. The engine only borrows them; it never loads or
//! releases one.

/// Errors an artifact implementation may raise during invocation.
///
/// These never propagate out of a classification call: the adapter logs
/// them and falls back to the rule-based path.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The supplied vector does not match what the model was trained on.
    #[error("model received {actual} features, expected {expected}")]
    FeatureMismatch {
        /// Columns the model was trained on.
        expected: usize,
        /// Columns actually supplied.
        actual: usize,
    },

    /// The underlying model failed internally.
    #[error("model invocation failed: {0}")]
    Invocation(String),
}

/// Trait for externally trained binary classifiers.
///
/// Implementations wrap whatever the host loaded: an embedded linear model,
/// an FFI handle, an inference-runtime session. All methods must be
/// non-blocking pure computation.
pub trait ClassifierModel: Send + Sync {
    /// Number of feature columns the model was trained on.
    fn n_features(&self) -> usize;

    /// Predict the class label (0 = negative, 1 = positive) for a vector.
    ///
    /// # Errors
    /// Returns `ModelError` if the vector shape is wrong or the model
    /// fails internally.
    fn predict(&self, features: &[f64]) -> Result<i64, ModelError>;

    /// Probability of the positive class, if the model can produce one.
    ///
    /// The default implementation reports no probability support; callers
    /// then treat the predicted label itself as a degenerate probability.
    ///
    /// # Errors
    /// Returns `ModelError` if the vector shape is wrong or the model
    /// fails internally.
    fn predict_proba(&self, features: &[f64]) -> Result<Option<f64>, ModelError> {
        let _ = features;
        Ok(None)
    }
}
