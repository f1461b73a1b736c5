//! Deterministic explanation templates.

use pharmaguard_core::models::explanation::{Explanation, ExplanationProvider};

use crate::prompt::ExplanationContext;

pub const DEFERRED_SUMMARY: &str = "Select a variant to generate an AI summary.";

/// Fixed warnings attached to every fallback explanation.
pub const FALLBACK_WARNINGS: [&str; 2] = [
    "This explanation was generated from a template, not reviewed by a clinician.",
    "Confirm against current CPIC guidelines before changing therapy.",
];

/// Template explanation used whenever the external service cannot be used.
pub fn fallback_explanation(ctx: &ExplanationContext, reason: impl Into<String>) -> Explanation {
    let ExplanationContext {
        gene,
        phenotype,
        drug,
        ..
    } = ctx;

    let variant_explanation = match &ctx.variant {
        Some(v) => match &v.info {
            Some(info) => format!(
                "Variant {} in {gene} ({info}) contributes to the {phenotype} phenotype.",
                v.rsid
            ),
            None => format!(
                "Variant {} in {gene} contributes to the {phenotype} phenotype.",
                v.rsid
            ),
        },
        None => format!(
            "Detected {gene} variants are consistent with the {phenotype} phenotype."
        ),
    };

    Explanation {
        summary: format!(
            "{gene} {phenotype} phenotype may affect response to {drug}. \
             Dose adjustment or alternative therapy may be needed."
        ),
        detailed_explanation: format!(
            "Patients with the {gene} {phenotype} phenotype can process {drug} differently \
             from normal metabolizers, which may change drug exposure and clinical effect."
        ),
        biological_mechanism: format!(
            "{gene} encodes an enzyme or transporter involved in {drug} disposition; \
             altered {gene} activity can raise or lower active drug levels."
        ),
        variant_explanation,
        clinical_recommendation: format!(
            "Review CPIC guidance for {gene} and {drug} before prescribing."
        ),
        dosage_recommendation: format!(
            "Consider dose adjustment or an alternative to {drug} per CPIC recommendations \
             for the {phenotype} phenotype."
        ),
        warnings: FALLBACK_WARNINGS.iter().map(|w| w.to_string()).collect(),
        provider: ExplanationProvider::Fallback,
        model: None,
        reason: Some(reason.into()),
    }
}

/// Placeholder returned when the caller opts out of explanation generation.
pub fn deferred_explanation() -> Explanation {
    Explanation {
        summary: DEFERRED_SUMMARY.to_string(),
        detailed_explanation: "Detailed explanation is generated per variant on request."
            .to_string(),
        biological_mechanism: "Biological mechanism is generated per variant on request."
            .to_string(),
        variant_explanation: "Variant explanation is generated per variant on request."
            .to_string(),
        clinical_recommendation: "Refer to CPIC guidelines before prescribing.".to_string(),
        dosage_recommendation: "Select a variant to generate dosage guidance.".to_string(),
        warnings: Vec::new(),
        provider: ExplanationProvider::Deferred,
        model: None,
        reason: None,
    }
}
