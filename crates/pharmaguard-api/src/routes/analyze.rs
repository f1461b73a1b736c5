use axum::{Extension, Json};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::info;

use pharmaguard_core::ids::{new_patient_id, response_timestamp};
use pharmaguard_core::models::explanation::ExplanationProvider;
use pharmaguard_core::models::request::AnalyzeRequest;
use pharmaguard_core::models::response::{
    AnalyzeResponse, ClinicalRecommendation, NarrativeExplanation, PharmacogenomicProfile,
    QualityMetrics,
};
use pharmaguard_core::normalize::{
    diplotype_field, normalize_variants, phenotype_field, require_drug, require_gene,
};
use pharmaguard_core::risk::{classify, resolve_confidence};
use pharmaguard_explain::prompt::ExplanationContext;
use pharmaguard_explain::templates::deferred_explanation;

use crate::error::ApiError;
use crate::state::AppState;

/// Classify a drug/phenotype pair and attach a clinical explanation.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<(Extension<ExplanationProvider>, Json<AnalyzeResponse>), ApiError> {
    let Json(req) = payload?;

    let drug = require_drug(&req.drug)?;
    let gene = require_gene("primary_gene", &req.primary_gene)?;
    let diplotype = diplotype_field(&req.diplotype);
    let phenotype = phenotype_field(&req.phenotype);
    let detected_variants = normalize_variants(&req.detected_variants, &gene);

    let risk = classify(&drug, &phenotype, resolve_confidence(req.confidence));

    let explanation = if req.include_explanation {
        state
            .explain(ExplanationContext {
                gene: gene.clone(),
                phenotype: phenotype.clone(),
                drug: drug.clone(),
                risk_label: risk.risk_label.clone(),
                diplotype: diplotype.clone(),
                variant: None,
            })
            .await?
    } else {
        deferred_explanation()
    };

    info!(
        drug = %drug,
        gene = %gene,
        risk_label = %risk.risk_label,
        severity = %risk.severity,
        variants = detected_variants.len(),
        provider = explanation.provider.as_str(),
        "analysis complete"
    );

    Ok((
        Extension(explanation.provider),
        Json(AnalyzeResponse {
            patient_id: new_patient_id(),
            drug,
            timestamp: response_timestamp(),
            risk_assessment: risk,
            pharmacogenomic_profile: PharmacogenomicProfile {
                primary_gene: gene,
                diplotype,
                phenotype,
                detected_variants,
            },
            clinical_recommendation: ClinicalRecommendation::from(&explanation),
            llm_generated_explanation: NarrativeExplanation::from(&explanation),
            quality_metrics: QualityMetrics::accepted(),
        }),
    ))
}
