//! Deterministic risk classification: `phenotype + drug -> label + severity`.

use crate::models::risk::RiskAssessment;
use crate::tables::{UNKNOWN_PHENOTYPE_RISK, phenotype_risk};

/// Confidence used when the caller does not supply one.
pub const DEFAULT_CONFIDENCE: f64 = 0.8;

/// Resolve a caller-supplied confidence.
///
/// Any falsy value (absent, `0.0`, NaN) is replaced with
/// [`DEFAULT_CONFIDENCE`], so an explicit `0.0` cannot be expressed. This
/// mirrors the deployed service's contract and is a candidate defect; see
/// DESIGN.md before changing it.
pub fn resolve_confidence(confidence: Option<f64>) -> f64 {
    match confidence {
        Some(value) if value != 0.0 && !value.is_nan() => value,
        _ => DEFAULT_CONFIDENCE,
    }
}

/// Classify the risk of prescribing `drug` to a patient with `phenotype`.
///
/// Total over all inputs: unknown phenotype codes fall through to severity
/// `none` and label `Unknown`. Drug-specific overrides only ever change the
/// label, never the severity.
pub fn classify(drug: &str, phenotype: &str, confidence: f64) -> RiskAssessment {
    let phenotype = normalize_phenotype(phenotype);
    let drug = drug.trim().to_uppercase();

    let entry = phenotype_risk(&phenotype).unwrap_or(UNKNOWN_PHENOTYPE_RISK);

    let risk_label = match (drug.as_str(), phenotype.as_str()) {
        ("CLOPIDOGREL", "PM") => "Ineffective",
        ("AZATHIOPRINE" | "FLUOROURACIL", "PM") => "Toxic",
        (_, "PM" | "IM") => "Adjust Dosage",
        (_, "NM") => "Safe",
        _ => entry.default_label,
    };

    RiskAssessment {
        risk_label: risk_label.to_string(),
        confidence_score: resolve_confidence(Some(confidence)),
        severity: entry.severity,
    }
}

/// Upper-case and trim a phenotype code; empty input becomes `UNKNOWN`.
pub fn normalize_phenotype(phenotype: &str) -> String {
    let trimmed = phenotype.trim();
    if trimmed.is_empty() {
        "UNKNOWN".to_string()
    } else {
        trimmed.to_uppercase()
    }
}
