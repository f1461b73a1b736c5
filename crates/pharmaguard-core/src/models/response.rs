use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::explanation::{Explanation, ExplanationProvider};
use super::risk::RiskAssessment;

/// A detected variant after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Variant {
    pub rsid: String,
    pub gene: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_info: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PharmacogenomicProfile {
    pub primary_gene: String,
    pub diplotype: String,
    pub phenotype: String,
    pub detected_variants: Vec<Variant>,
}

/// Profile echoed by `/variant-summary` (no variant list).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileSummary {
    pub primary_gene: String,
    pub diplotype: String,
    pub phenotype: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalRecommendation {
    pub summary: String,
    pub dosage_recommendation: String,
    pub warnings: Vec<String>,
}

/// The narrative subset of an [`Explanation`] exposed to clients.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NarrativeExplanation {
    pub summary: String,
    pub detailed_explanation: String,
    pub biological_mechanism: String,
    pub variant_explanation: String,
}

/// Static flags: the request was accepted and parsed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QualityMetrics {
    pub json_parsing_success: bool,
    pub supported_drug: bool,
    pub supported_gene: bool,
}

impl QualityMetrics {
    pub fn accepted() -> Self {
        Self {
            json_parsing_success: true,
            supported_drug: true,
            supported_gene: true,
        }
    }
}

impl From<&Explanation> for ClinicalRecommendation {
    fn from(e: &Explanation) -> Self {
        Self {
            summary: e.clinical_recommendation.clone(),
            dosage_recommendation: e.dosage_recommendation.clone(),
            warnings: e.warnings.clone(),
        }
    }
}

impl From<&Explanation> for NarrativeExplanation {
    fn from(e: &Explanation) -> Self {
        Self {
            summary: e.summary.clone(),
            detailed_explanation: e.detailed_explanation.clone(),
            biological_mechanism: e.biological_mechanism.clone(),
            variant_explanation: e.variant_explanation.clone(),
        }
    }
}

/// Response of `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalyzeResponse {
    pub patient_id: String,
    pub drug: String,
    pub timestamp: String,
    pub risk_assessment: RiskAssessment,
    pub pharmacogenomic_profile: PharmacogenomicProfile,
    pub clinical_recommendation: ClinicalRecommendation,
    pub llm_generated_explanation: NarrativeExplanation,
    pub quality_metrics: QualityMetrics,
}

/// The variant a `/variant-summary` response is scoped to.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VariantDetail {
    pub rsid: String,
    pub gene: String,
    pub variant_info: Option<String>,
}

/// Response of `POST /variant-summary`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VariantSummaryResponse {
    pub variant: VariantDetail,
    pub risk_assessment: RiskAssessment,
    pub pharmacogenomic_profile: ProfileSummary,
    pub clinical_recommendation: ClinicalRecommendation,
    pub llm_generated_explanation: NarrativeExplanation,
    pub provider: ExplanationProvider,
}

/// Response of `GET /supported`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupportedSets {
    pub drugs: Vec<String>,
    pub genes: Vec<String>,
}
