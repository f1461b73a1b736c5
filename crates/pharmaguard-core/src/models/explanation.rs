use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which path produced an explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ExplanationProvider {
    /// Generated by the external text-generation service.
    Openai,
    /// Deterministic template, used whenever generation fails or is unavailable.
    Fallback,
    /// Placeholder returned when the caller opted out of generation.
    Deferred,
}

impl ExplanationProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            ExplanationProvider::Openai => "openai",
            ExplanationProvider::Fallback => "fallback",
            ExplanationProvider::Deferred => "deferred",
        }
    }
}

/// A structured clinical explanation for one drug/gene/phenotype combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Explanation {
    pub summary: String,
    pub detailed_explanation: String,
    pub biological_mechanism: String,
    pub variant_explanation: String,
    pub clinical_recommendation: String,
    pub dosage_recommendation: String,
    pub warnings: Vec<String>,
    pub provider: ExplanationProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Why the fallback template was used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
