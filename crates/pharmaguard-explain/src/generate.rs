//! The explanation state machine.
//!
//! [`request_explanation`] returns a typed outcome for the external path;
//! [`explain`] turns any failure into the fallback template.

use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use pharmaguard_core::models::explanation::{Explanation, ExplanationProvider};

use crate::client::{CompletionClient, CompletionRequest};
use crate::config::ExplainerConfig;
use crate::error::ExplainError;
use crate::prompt::{ExplanationContext, REQUIRED_FIELDS, SYSTEM_PROMPT, build_prompt};
use crate::templates::fallback_explanation;

/// The seven fields a model reply must carry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedExplanation {
    pub summary: String,
    pub detailed_explanation: String,
    pub biological_mechanism: String,
    pub variant_explanation: String,
    pub clinical_recommendation: String,
    pub dosage_recommendation: String,
    pub warnings: Vec<String>,
}

impl GeneratedExplanation {
    pub fn into_explanation(self, model: &str) -> Explanation {
        Explanation {
            summary: self.summary,
            detailed_explanation: self.detailed_explanation,
            biological_mechanism: self.biological_mechanism,
            variant_explanation: self.variant_explanation,
            clinical_recommendation: self.clinical_recommendation,
            dosage_recommendation: self.dosage_recommendation,
            warnings: self.warnings,
            provider: ExplanationProvider::Openai,
            model: Some(model.to_string()),
            reason: None,
        }
    }
}

/// Validate raw model output: non-empty, JSON, all required fields present.
///
/// A field that is present but has the wrong type (`null` text, `warnings`
/// given as a string) passes the presence check and is then rejected as
/// [`ExplainError::ResponseParse`], so it also ends in the fallback.
pub fn parse_reply(text: &str) -> Result<GeneratedExplanation, ExplainError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ExplainError::EmptyResponse);
    }

    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| ExplainError::ResponseParse(e.to_string()))?;

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| value.get(**field).is_none())
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ExplainError::MissingFields(missing));
    }

    serde_json::from_value(value).map_err(|e| ExplainError::ResponseParse(e.to_string()))
}

/// Run the external explanation path once. No retries.
pub fn request_explanation(
    config: &ExplainerConfig,
    client: &dyn CompletionClient,
    ctx: &ExplanationContext,
) -> Result<GeneratedExplanation, ExplainError> {
    let api_key = config.credential().ok_or(ExplainError::MissingCredential)?;

    if !client.is_available() {
        return Err(ExplainError::ClientUnavailable);
    }

    let prompt = build_prompt(ctx);
    let text = client.complete(&CompletionRequest {
        api_key,
        model: &config.model,
        base_url: &config.base_url,
        system_prompt: SYSTEM_PROMPT,
        prompt: &prompt,
    })?;

    parse_reply(&text)
}

/// Produce an explanation, degrading to the fallback template on any failure.
pub fn explain(
    config: &ExplainerConfig,
    client: &dyn CompletionClient,
    ctx: &ExplanationContext,
) -> Explanation {
    let request_id = Uuid::new_v4();
    info!(
        request_id = %request_id,
        drug = %ctx.drug,
        gene = %ctx.gene,
        phenotype = %ctx.phenotype,
        "generating explanation"
    );

    match request_explanation(config, client, ctx) {
        Ok(generated) => {
            info!(request_id = %request_id, model = %config.model, "explanation generated");
            generated.into_explanation(&config.model)
        }
        Err(e) => {
            warn!(request_id = %request_id, reason = %e, "using fallback explanation");
            fallback_explanation(ctx, e.to_string())
        }
    }
}
