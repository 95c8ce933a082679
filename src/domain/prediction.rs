//! Prediction output types.
//!
//! The engine's only output contract: a stage label, a severity band, an
//! optional risk score, risk-factor/complication summaries, and canned
//! recommendations, serializable to plain JSON scalars and string lists.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::LabRecord;

/// The four supported kidney conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    /// Chronic kidney disease.
    Ckd,
    /// Kidney stone risk.
    KidneyStone,
    /// Acute kidney injury.
    Aki,
    /// End-stage renal disease.
    Esrd,
}

impl Disease {
    /// All supported diseases, in selector order.
    pub const ALL: [Disease; 4] = [Self::Ckd, Self::KidneyStone, Self::Aki, Self::Esrd];

    /// The wire selector for this disease.
    #[must_use]
    pub fn selector(&self) -> &'static str {
        match self {
            Self::Ckd => "ckd",
            Self::KidneyStone => "kidney_stone",
            Self::Aki => "aki",
            Self::Esrd => "esrd",
        }
    }

    /// Human-readable disease name, as reported in results.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ckd => "Chronic Kidney Disease (CKD)",
            Self::KidneyStone => "Kidney Stone",
            Self::Aki => "Acute Kidney Injury (AKI)",
            Self::Esrd => "End-Stage Renal Disease (ESRD)",
        }
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for Disease {
    type Err = crate::RenalyzeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ckd" => Ok(Self::Ckd),
            "kidney_stone" => Ok(Self::KidneyStone),
            "aki" => Ok(Self::Aki),
            "esrd" => Ok(Self::Esrd),
            other => Err(crate::RenalyzeError::UnknownDisease(other.to_string())),
        }
    }
}

/// Clinical urgency band.
///
/// Ordered from least to most urgent; `Unknown` sorts last and is used only
/// for the error-shaped placeholder results of the batch runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// No significant indicators.
    Low,
    /// Follow-up recommended.
    Moderate,
    /// Intervention recommended.
    High,
    /// Immediate intervention required.
    Critical,
    /// Classification failed for this record.
    Unknown,
}

impl Severity {
    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - routine monitoring",
            Self::Moderate => "Moderate risk - follow-up recommended",
            Self::High => "High risk - intervention recommended",
            Self::Critical => "Critical - immediate intervention required",
            Self::Unknown => "Classification unavailable",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Result of classifying one lab record for one disease.
///
/// Created fresh per call and never persisted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Human-readable disease name.
    pub disease: String,

    /// Categorical stage label, e.g. "Stage 3a" or "ESRD (Stage 5)".
    pub stage: String,

    /// Clinical urgency band.
    pub severity: Severity,

    /// Numeric risk score. Model-backed CKD reports a 0-100 percentage;
    /// kidney stone reports its accumulated rule score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,

    /// Triggered risk factors with measured values, or a single placeholder.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub risk_factors: Vec<String>,

    /// Detected complications with measured values, or a single placeholder.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub complications: Vec<String>,

    /// Whether dialysis is indicated (ESRD only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialysis_needed: Option<bool>,

    /// Ordered, severity-specific clinical recommendations.
    pub recommendations: Vec<String>,

    /// Echo of the input measurements.
    pub lab_values: LabRecord,

    /// When this result was produced.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl PredictionResult {
    /// Base result with empty summaries; the per-disease classifiers fill
    /// in the rest.
    #[must_use]
    pub fn new(
        disease: Disease,
        stage: impl Into<String>,
        severity: Severity,
        record: &LabRecord,
    ) -> Self {
        Self {
            disease: disease.display_name().to_string(),
            stage: stage.into(),
            severity,
            risk_score: None,
            risk_factors: Vec::new(),
            complications: Vec::new(),
            dialysis_needed: None,
            recommendations: Vec::new(),
            lab_values: record.clone(),
            created_at: chrono::Utc::now(),
        }
    }

    /// Error-shaped placeholder used when a single record in a batch fails.
    #[must_use]
    pub fn unavailable(disease: Disease, record: &LabRecord) -> Self {
        let mut result = Self::new(disease, "Unknown", Severity::Unknown, record);
        result.recommendations = crate::application::generic_recommendations();
        result
    }
}
