//! Request bodies accepted by the HTTP surface.
//!
//! Defaults are applied once, at deserialization. Normalization (casing,
//! trimming) and validation against the supported sets happen in the
//! handlers before any other computation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

fn unknown() -> String {
    "Unknown".to_string()
}

fn yes() -> bool {
    true
}

/// A detected variant as sent by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VariantInput {
    pub rsid: String,
    /// Defaults to the request's primary gene when absent.
    #[serde(default)]
    pub gene: Option<String>,
    #[serde(default)]
    pub variant_info: Option<String>,
}

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalyzeRequest {
    pub drug: String,
    pub primary_gene: String,
    #[serde(default = "unknown")]
    pub diplotype: String,
    #[serde(default = "unknown")]
    pub phenotype: String,
    #[serde(default)]
    pub detected_variants: Vec<VariantInput>,
    /// CPIC confidence computed by the caller.
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default = "yes")]
    pub include_explanation: bool,
    /// Sent by the web client; accepted but not used for classification.
    #[serde(default)]
    pub cpic_evidence: Option<String>,
    #[serde(default)]
    pub risk_level: Option<String>,
}

/// Body of `POST /variant-summary`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VariantSummaryRequest {
    pub drug: String,
    pub primary_gene: String,
    #[serde(default = "unknown")]
    pub phenotype: String,
    #[serde(default = "unknown")]
    pub diplotype: String,
    pub variant_rsid: String,
    #[serde(default)]
    pub variant_gene: Option<String>,
    #[serde(default)]
    pub variant_info: Option<String>,
    /// Accepted for symmetry with `/analyze`; this endpoint always uses the
    /// default confidence.
    #[serde(default)]
    pub confidence: Option<f64>,
}
