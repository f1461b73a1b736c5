//! Boundary normalization and validation for incoming requests.
//!
//! Drug and gene codes are upper-cased and must belong to the supported
//! sets; violations are rejected, never corrected.

use crate::error::CoreError;
use crate::models::request::VariantInput;
use crate::models::response::Variant;
use crate::tables::{
    is_supported_drug, is_supported_gene, supported_drugs_list, supported_genes_list,
};

/// Separator between the diplotype and free text in a variant's info string.
pub const VARIANT_INFO_SEPARATOR: &str = " · ";

/// Trim and upper-case a drug code, rejecting anything unsupported.
pub fn require_drug(raw: &str) -> Result<String, CoreError> {
    let drug = raw.trim().to_uppercase();
    if is_supported_drug(&drug) {
        Ok(drug)
    } else {
        Err(CoreError::UnsupportedDrug {
            drug,
            supported: supported_drugs_list(),
        })
    }
}

/// Trim and upper-case a gene code, rejecting anything unsupported.
///
/// `field` names the request field in the error message.
pub fn require_gene(field: &'static str, raw: &str) -> Result<String, CoreError> {
    let gene = raw.trim().to_uppercase();
    if is_supported_gene(&gene) {
        Ok(gene)
    } else {
        Err(CoreError::UnsupportedGene {
            field,
            gene,
            supported: supported_genes_list(),
        })
    }
}

/// Upper-cased, trimmed phenotype; blank input becomes `Unknown`.
pub fn phenotype_field(raw: &str) -> String {
    match raw.trim() {
        "" => "Unknown".to_string(),
        s => s.to_uppercase(),
    }
}

/// Trimmed diplotype; blank input becomes `Unknown`. Casing is preserved.
pub fn diplotype_field(raw: &str) -> String {
    match raw.trim() {
        "" => "Unknown".to_string(),
        s => s.to_string(),
    }
}

/// Resolve a variant's gene: its own gene if set and non-blank, otherwise
/// the primary gene. Always upper-cased.
pub fn variant_gene(gene: Option<&str>, primary_gene: &str) -> String {
    gene.filter(|g| !g.trim().is_empty())
        .unwrap_or(primary_gene)
        .trim()
        .to_uppercase()
}

/// Normalize detected variants, preserving order.
pub fn normalize_variants(variants: &[VariantInput], primary_gene: &str) -> Vec<Variant> {
    variants
        .iter()
        .map(|v| Variant {
            rsid: v.rsid.clone(),
            gene: variant_gene(v.gene.as_deref(), primary_gene),
            variant_info: v.variant_info.clone(),
        })
        .collect()
}

/// Diplotype shown for a single variant.
///
/// Takes the text before the first `" · "` in `variant_info`, falling back
/// to the request diplotype when there is no info or no separator.
pub fn display_diplotype(variant_info: Option<&str>, diplotype: &str) -> String {
    variant_info
        .and_then(|info| info.split_once(VARIANT_INFO_SEPARATOR))
        .map(|(head, _)| head.to_string())
        .unwrap_or_else(|| diplotype.to_string())
}

/// Phenotype shown for a single variant.
///
/// When the variant sits on a different gene than the one the phenotype was
/// called for, the phenotype is annotated with its source gene, e.g.
/// `PM (CYP2D6)`. Unknown phenotypes are never annotated.
pub fn display_phenotype(phenotype: &str, variant_gene: &str, primary_gene: &str) -> String {
    let known = !phenotype.eq_ignore_ascii_case("unknown");
    if known && variant_gene != primary_gene {
        format!("{phenotype} ({primary_gene})")
    } else {
        phenotype.to_string()
    }
}
