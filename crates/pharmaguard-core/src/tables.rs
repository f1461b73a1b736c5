//! Static pharmacogenomic lookup tables.
//!
//! Severity and default labels approximate CPIC guideline conventions. The
//! tables are compile-time constants and never change at runtime.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Genes the service accepts as a primary or variant gene.
pub const SUPPORTED_GENES: &[&str] = &["CYP2D6", "CYP2C19", "CYP2C9", "SLCO1B1", "TPMT", "DPYD"];

/// Drugs the service can classify.
pub const SUPPORTED_DRUGS: &[&str] = &[
    "CODEINE",
    "WARFARIN",
    "CLOPIDOGREL",
    "SIMVASTATIN",
    "AZATHIOPRINE",
    "FLUOROURACIL",
];

/// Clinical severity attached to a phenotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    High,
    Moderate,
    Low,
    None,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Moderate => "moderate",
            Severity::Low => "low",
            Severity::None => "none",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity and fallback label for one metabolizer phenotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhenotypeRiskEntry {
    pub severity: Severity,
    pub default_label: &'static str,
}

/// Entry used for any phenotype code absent from the table.
pub const UNKNOWN_PHENOTYPE_RISK: PhenotypeRiskEntry = PhenotypeRiskEntry {
    severity: Severity::None,
    default_label: "Unknown",
};

/// Look up a phenotype code (PM, IM, NM, RM, URM). Expects an upper-case code.
pub fn phenotype_risk(code: &str) -> Option<PhenotypeRiskEntry> {
    let (severity, default_label) = match code {
        "PM" => (Severity::High, "Toxic"),
        "IM" => (Severity::Moderate, "Adjust Dosage"),
        "NM" => (Severity::Low, "Safe"),
        "RM" => (Severity::Moderate, "Monitor"),
        "URM" => (Severity::Moderate, "Adjust Dosage"),
        _ => return None,
    };
    Some(PhenotypeRiskEntry {
        severity,
        default_label,
    })
}

pub fn is_supported_gene(gene: &str) -> bool {
    SUPPORTED_GENES.contains(&gene)
}

pub fn is_supported_drug(drug: &str) -> bool {
    SUPPORTED_DRUGS.contains(&drug)
}

/// Supported genes, sorted, joined with `", "`.
pub fn supported_genes_list() -> String {
    sorted_join(SUPPORTED_GENES)
}

/// Supported drugs, sorted, joined with `", "`.
pub fn supported_drugs_list() -> String {
    sorted_join(SUPPORTED_DRUGS)
}

fn sorted_join(items: &[&str]) -> String {
    let mut sorted = items.to_vec();
    sorted.sort_unstable();
    sorted.join(", ")
}
