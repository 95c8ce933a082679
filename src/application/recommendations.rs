//! Canned clinical recommendation tables.
//!
//! Pure data keyed by severity band (ESRD additionally by the dialysis
//! flag). Reordering or rewording a list never touches classification
//! logic. Every band maps to a non-empty ordered list of short imperative
//! strings.

use crate::domain::Severity;

const GENERIC: &[&str] = &["Please consult with your healthcare provider for detailed analysis."];

const CKD_HIGH: &[&str] = &[
    "Consult a nephrologist immediately",
    "Follow strict low-sodium, low-potassium diet",
    "Monitor blood pressure daily",
    "Limit protein intake as advised",
    "Regular kidney function monitoring",
];

const CKD_MODERATE: &[&str] = &[
    "Schedule regular nephrology check-ups",
    "Maintain CKD-friendly diet",
    "Control blood pressure and blood sugar",
    "Stay hydrated (as per doctor's advice)",
    "Avoid nephrotoxic medications",
];

const CKD_LOW: &[&str] = &[
    "Maintain healthy lifestyle",
    "Regular health check-ups",
    "Stay hydrated",
    "Balanced diet and exercise",
];

const STONE_HIGH: &[&str] = &[
    "Consult urologist immediately",
    "Increase water intake (2-3 liters/day)",
    "Reduce sodium intake",
    "Limit foods high in oxalate",
    "Consider medication for stone prevention",
];

const STONE_MODERATE: &[&str] = &[
    "Increase fluid intake",
    "Reduce salt and animal protein",
    "Monitor calcium intake",
    "Regular urine tests",
    "Consult doctor about prevention",
];

const STONE_LOW: &[&str] = &[
    "Maintain adequate hydration",
    "Balanced diet",
    "Regular check-ups",
];

const AKI_HIGH: &[&str] = &[
    "URGENT: Seek immediate medical attention",
    "May require hospitalization",
    "Possible dialysis needed",
    "Identify and treat underlying cause",
    "Monitor fluid and electrolyte balance",
];

const AKI_MODERATE: &[&str] = &[
    "Consult nephrologist promptly",
    "Monitor kidney function closely",
    "Identify underlying cause",
    "Adjust medications as needed",
    "Maintain proper hydration",
];

const AKI_LOW: &[&str] = &[
    "Continue monitoring kidney function",
    "Maintain healthy lifestyle",
    "Stay hydrated",
];

const ESRD_DIALYSIS: &[&str] = &[
    "CRITICAL: Immediate nephrology consultation required",
    "Dialysis preparation or initiation needed",
    "Consider kidney transplant evaluation",
    "Strict dietary restrictions",
    "Close monitoring of all lab values",
    "Manage complications (anemia, bone disease)",
];

const ESRD_HIGH: &[&str] = &[
    "Regular nephrology follow-up essential",
    "Prepare for possible dialysis",
    "Strict CKD diet adherence",
    "Manage blood pressure and diabetes",
    "Monitor for complications",
    "Discuss treatment options with nephrologist",
];

const ESRD_LOW: &[&str] = &[
    "Regular nephrology monitoring",
    "CKD-friendly lifestyle",
    "Control underlying conditions",
    "Medication adherence",
];

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

/// Fallback list for unknown or unset severity.
#[must_use]
pub fn generic_recommendations() -> Vec<String> {
    owned(GENERIC)
}

/// CKD recommendations by severity band.
#[must_use]
pub fn ckd(severity: Severity) -> Vec<String> {
    match severity {
        Severity::High | Severity::Critical => owned(CKD_HIGH),
        Severity::Moderate => owned(CKD_MODERATE),
        Severity::Low => owned(CKD_LOW),
        Severity::Unknown => owned(GENERIC),
    }
}

/// Kidney stone recommendations by severity band.
#[must_use]
pub fn kidney_stone(severity: Severity) -> Vec<String> {
    match severity {
        Severity::High | Severity::Critical => owned(STONE_HIGH),
        Severity::Moderate => owned(STONE_MODERATE),
        Severity::Low => owned(STONE_LOW),
        Severity::Unknown => owned(GENERIC),
    }
}

/// AKI recommendations by severity band.
#[must_use]
pub fn aki(severity: Severity) -> Vec<String> {
    match severity {
        Severity::High | Severity::Critical => owned(AKI_HIGH),
        Severity::Moderate => owned(AKI_MODERATE),
        Severity::Low => owned(AKI_LOW),
        Severity::Unknown => owned(GENERIC),
    }
}

/// ESRD recommendations by severity band and dialysis indication.
#[must_use]
pub fn esrd(severity: Severity, dialysis_needed: bool) -> Vec<String> {
    if dialysis_needed {
        return owned(ESRD_DIALYSIS);
    }
    match severity {
        Severity::High | Severity::Critical => owned(ESRD_HIGH),
        Severity::Low | Severity::Moderate => owned(ESRD_LOW),
        Severity::Unknown => owned(GENERIC),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Disease;

    const BANDS: [Severity; 4] = [
        Severity::Low,
        Severity::Moderate,
        Severity::High,
        Severity::Critical,
    ];

    #[test]
    fn test_every_band_has_nonempty_recommendations() {
        for disease in Disease::ALL {
            for severity in BANDS {
                let recs = match disease {
                    Disease::Ckd => ckd(severity),
                    Disease::KidneyStone => kidney_stone(severity),
                    Disease::Aki => aki(severity),
                    Disease::Esrd => esrd(severity, severity == Severity::Critical),
                };
                assert!(!recs.is_empty(), "{disease} {severity} has no recommendations");
                assert!(
                    recs.iter().all(|r| !r.trim().is_empty()),
                    "{disease} {severity} has a blank recommendation"
                );
            }
        }
    }

    #[test]
    fn test_unknown_severity_maps_to_generic() {
        assert_eq!(ckd(Severity::Unknown), generic_recommendations());
        assert_eq!(aki(Severity::Unknown), generic_recommendations());
    }

    #[test]
    fn test_dialysis_overrides_band() {
        let recs = esrd(Severity::Critical, true);
        assert!(recs[0].starts_with("CRITICAL"));
    }
}
