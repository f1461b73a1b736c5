use axum::{Extension, Json};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::info;

use pharmaguard_core::models::explanation::ExplanationProvider;
use pharmaguard_core::models::request::VariantSummaryRequest;
use pharmaguard_core::models::response::{
    ClinicalRecommendation, NarrativeExplanation, ProfileSummary, VariantDetail,
    VariantSummaryResponse,
};
use pharmaguard_core::normalize::{
    diplotype_field, display_diplotype, display_phenotype, phenotype_field, require_drug,
    require_gene, variant_gene,
};
use pharmaguard_core::risk::{DEFAULT_CONFIDENCE, classify};
use pharmaguard_explain::prompt::{ExplanationContext, VariantFocus};

use crate::error::ApiError;
use crate::state::AppState;

/// Explain a single detected variant.
///
/// Caller-supplied confidence is ignored; risk is always scored at the
/// default confidence.
///
/// The returned `pharmacogenomic_profile.primary_gene` is the resolved
/// variant gene, not the request's `primary_gene`. When the two differ the
/// profile phenotype names the gene it was called for, e.g. `IM (CYP2D6)`.
pub async fn variant_summary(
    State(state): State<AppState>,
    payload: Result<Json<VariantSummaryRequest>, JsonRejection>,
) -> Result<(Extension<ExplanationProvider>, Json<VariantSummaryResponse>), ApiError> {
    let Json(req) = payload?;

    let drug = require_drug(&req.drug)?;
    let primary_gene = req.primary_gene.trim().to_uppercase();
    let gene = require_gene(
        "variant_gene",
        &variant_gene(req.variant_gene.as_deref(), &primary_gene),
    )?;
    let phenotype = phenotype_field(&req.phenotype);
    let diplotype = diplotype_field(&req.diplotype);

    let risk = classify(&drug, &phenotype, DEFAULT_CONFIDENCE);

    let shown_diplotype = display_diplotype(req.variant_info.as_deref(), &diplotype);
    let shown_phenotype = display_phenotype(&phenotype, &gene, &primary_gene);

    let explanation = state
        .explain(ExplanationContext {
            gene: gene.clone(),
            phenotype: shown_phenotype.clone(),
            drug: drug.clone(),
            risk_label: risk.risk_label.clone(),
            diplotype: shown_diplotype.clone(),
            variant: Some(VariantFocus {
                rsid: req.variant_rsid.clone(),
                info: req.variant_info.clone(),
            }),
        })
        .await?;

    info!(
        drug = %drug,
        gene = %gene,
        rsid = %req.variant_rsid,
        provider = explanation.provider.as_str(),
        "variant summary complete"
    );

    Ok((
        Extension(explanation.provider),
        Json(VariantSummaryResponse {
            variant: VariantDetail {
                rsid: req.variant_rsid,
                gene: gene.clone(),
                variant_info: req.variant_info,
            },
            risk_assessment: risk,
            pharmacogenomic_profile: ProfileSummary {
                primary_gene: gene,
                diplotype: shown_diplotype,
                phenotype: shown_phenotype,
            },
            clinical_recommendation: ClinicalRecommendation::from(&explanation),
            llm_generated_explanation: NarrativeExplanation::from(&explanation),
            provider: explanation.provider,
        }),
    ))
}
