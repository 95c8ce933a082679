//! Lab record input types.
//!
//! A `LabRecord` is the raw, partial set of laboratory measurements a caller
//! hands to the engine: keys are measurement names, values may arrive as
//! numbers, booleans, or free-text tokens depending on how the surrounding
//! application extracted them (manual entry, CSV upload, report parsing).
//! The engine only ever reads a record; it never mutates one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single measurement value as it arrives from the outside world.
///
/// Deserializes untagged, so a JSON object like
/// `{"age": 61, "hypertension": "Yes", "gender": "Female"}` maps directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabValue {
    /// A numeric measurement.
    Number(f64),
    /// A boolean flag.
    Bool(bool),
    /// A free-text value ("Yes", "Female", "120", ...).
    Text(String),
}

impl LabValue {
    /// Coerce this value to a float, if possible.
    ///
    /// Numbers pass through (non-finite values are rejected as malformed),
    /// booleans map to 1.0/0.0, and text either parses as a float or as a
    /// yes/no token. Returns `None` for anything else; the caller is
    /// expected to substitute a reference default.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Number(_) => None,
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Text(s) => {
                let s = s.trim();
                if let Ok(n) = s.parse::<f64>() {
                    return n.is_finite().then_some(n);
                }
                match s.to_ascii_lowercase().as_str() {
                    "yes" | "true" | "y" => Some(1.0),
                    "no" | "false" | "n" => Some(0.0),
                    _ => None,
                }
            }
        }
    }

    /// True if this value encodes a female gender marker.
    ///
    /// Matches the encoding the classifier artifacts were trained with:
    /// female-coded inputs become 1.0, everything else 0.0.
    #[must_use]
    pub fn is_female_coded(&self) -> bool {
        match self {
            Self::Number(n) => *n == 1.0,
            Self::Bool(b) => *b,
            Self::Text(s) => {
                matches!(s.trim().to_ascii_lowercase().as_str(), "female" | "f" | "1")
            }
        }
    }
}

impl From<f64> for LabValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for LabValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for LabValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// An immutable mapping from measurement name to value.
///
/// Every key is optional; absent or malformed entries are resolved through
/// the [`ReferenceDefaults`](crate::ReferenceDefaults) table at the moment
/// of use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabRecord {
    values: HashMap<String, LabValue>,
}

impl LabRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a record from a loose JSON value.
    ///
    /// Accepts only a JSON object whose values are scalars (numbers,
    /// booleans, strings); anything else is a malformed record.
    ///
    /// # Errors
    /// Returns `RenalyzeError::InvalidRecord` if the value is not such an
    /// object.
    pub fn from_json(value: &serde_json::Value) -> crate::Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Look up a raw value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&LabValue> {
        self.values.get(key)
    }

    /// True if the record carries a value for `key`, even a malformed one.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of entries in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the record has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builder-style insertion of a numeric measurement.
    #[must_use]
    pub fn with_number(mut self, key: &str, value: f64) -> Self {
        self.values.insert(key.to_string(), LabValue::Number(value));
        self
    }

    /// Builder-style insertion of an arbitrary value.
    #[must_use]
    pub fn with_value(mut self, key: &str, value: impl Into<LabValue>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }
}

impl FromIterator<(String, LabValue)> for LabRecord {
    fn from_iter<I: IntoIterator<Item = (String, LabValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(LabValue::Number(4.5).as_f64(), Some(4.5));
        assert_eq!(LabValue::Bool(true).as_f64(), Some(1.0));
        assert_eq!(LabValue::Text("120".into()).as_f64(), Some(120.0));
        assert_eq!(LabValue::Text(" 7.1 ".into()).as_f64(), Some(7.1));
        assert_eq!(LabValue::Text("Yes".into()).as_f64(), Some(1.0));
        assert_eq!(LabValue::Text("no".into()).as_f64(), Some(0.0));
    }

    #[test]
    fn test_malformed_values_rejected() {
        assert_eq!(LabValue::Text("elevated".into()).as_f64(), None);
        assert_eq!(LabValue::Number(f64::NAN).as_f64(), None);
        assert_eq!(LabValue::Number(f64::INFINITY).as_f64(), None);
    }

    #[test]
    fn test_gender_coding() {
        assert!(LabValue::Text("Female".into()).is_female_coded());
        assert!(LabValue::Text("f".into()).is_female_coded());
        assert!(LabValue::Number(1.0).is_female_coded());
        assert!(!LabValue::Text("Male".into()).is_female_coded());
        assert!(!LabValue::Number(0.0).is_female_coded());
    }

    #[test]
    fn test_from_json_object() {
        let value = serde_json::json!({
            "age": 61,
            "gender": "Female",
            "hypertension": "Yes",
            "serum_creatinine": 2.3
        });
        let record = LabRecord::from_json(&value).expect("valid record");
        assert_eq!(record.len(), 4);
        assert_eq!(record.get("age").and_then(LabValue::as_f64), Some(61.0));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(LabRecord::from_json(&serde_json::json!([1, 2, 3])).is_err());
        assert!(LabRecord::from_json(&serde_json::json!("egfr=50")).is_err());
        // Nested structures are not scalar measurements.
        assert!(LabRecord::from_json(&serde_json::json!({"egfr": [50]})).is_err());
    }
}
