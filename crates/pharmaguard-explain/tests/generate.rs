use std::sync::Mutex;

use pharmaguard_core::models::explanation::ExplanationProvider;
use pharmaguard_explain::client::{CompletionClient, CompletionRequest};
use pharmaguard_explain::config::ExplainerConfig;
use pharmaguard_explain::error::ExplainError;
use pharmaguard_explain::generate::{explain, parse_reply, request_explanation};
use pharmaguard_explain::prompt::{ExplanationContext, VariantFocus};
use pharmaguard_explain::templates::{DEFERRED_SUMMARY, FALLBACK_WARNINGS, deferred_explanation};

/// Canned backend that records the prompts it receives.
struct StubClient {
    available: bool,
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl StubClient {
    fn replying(text: &str) -> Self {
        Self {
            available: true,
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            available: true,
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::replying("{}")
        }
    }

    fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl CompletionClient for StubClient {
    fn is_available(&self) -> bool {
        self.available
    }

    fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, ExplainError> {
        self.prompts.lock().unwrap().push(request.prompt.to_string());
        self.reply.clone().map_err(ExplainError::Invocation)
    }
}

const VALID_REPLY: &str = r#"{
    "summary": "CYP2D6 poor metabolizers convert little codeine to morphine.",
    "detailed_explanation": "Reduced CYP2D6 activity lowers morphine formation.",
    "biological_mechanism": "CYP2D6 O-demethylates codeine.",
    "variant_explanation": "rs3892097 causes a splicing defect.",
    "clinical_recommendation": "Avoid codeine.",
    "dosage_recommendation": "Use a non-tramadol alternative.",
    "warnings": ["Reduced analgesia"]
}"#;

fn configured() -> ExplainerConfig {
    ExplainerConfig {
        api_key: Some("sk-test".to_string()),
        ..ExplainerConfig::default()
    }
}

fn context(variant: Option<VariantFocus>) -> ExplanationContext {
    ExplanationContext {
        gene: "CYP2D6".to_string(),
        phenotype: "PM".to_string(),
        drug: "CODEINE".to_string(),
        risk_label: "Adjust Dosage".to_string(),
        diplotype: "*4/*4".to_string(),
        variant,
    }
}

#[test]
fn missing_credential_falls_back_without_calling_the_client() {
    let client = StubClient::replying(VALID_REPLY);
    let explanation = explain(&ExplainerConfig::default(), &client, &context(None));

    assert_eq!(explanation.provider, ExplanationProvider::Fallback);
    assert!(explanation.reason.as_deref().unwrap().contains("missing"));
    assert_eq!(client.calls(), 0);
}

#[test]
fn blank_credential_counts_as_missing() {
    let config = ExplainerConfig {
        api_key: Some("   ".to_string()),
        ..ExplainerConfig::default()
    };
    let err = request_explanation(&config, &StubClient::replying(VALID_REPLY), &context(None))
        .unwrap_err();
    assert!(matches!(err, ExplainError::MissingCredential));
}

#[test]
fn unavailable_client_falls_back() {
    let client = StubClient::unavailable();
    let explanation = explain(&configured(), &client, &context(None));

    assert_eq!(explanation.provider, ExplanationProvider::Fallback);
    assert_eq!(
        explanation.reason.as_deref(),
        Some("openai client is not available in this build")
    );
    assert_eq!(client.calls(), 0);
}

#[test]
fn call_failure_is_recorded_in_reason() {
    let client = StubClient::failing("connection refused");
    let explanation = explain(&configured(), &client, &context(None));

    assert_eq!(explanation.provider, ExplanationProvider::Fallback);
    assert_eq!(
        explanation.reason.as_deref(),
        Some("OpenAI call failed: connection refused")
    );
    assert_eq!(client.calls(), 1, "failures are not retried");
}

#[test]
fn whitespace_reply_is_an_empty_response() {
    let explanation = explain(&configured(), &StubClient::replying(" \n "), &context(None));
    assert_eq!(explanation.provider, ExplanationProvider::Fallback);
    assert_eq!(explanation.reason.as_deref(), Some("empty response"));
}

#[test]
fn non_json_reply_is_a_parse_failure() {
    let err = parse_reply("Codeine is risky for this patient.").unwrap_err();
    assert!(matches!(err, ExplainError::ResponseParse(_)));
}

#[test]
fn incomplete_reply_lists_missing_fields() {
    let err = parse_reply(r#"{"summary": "s", "warnings": []}"#).unwrap_err();
    match err {
        ExplainError::MissingFields(fields) => {
            assert_eq!(
                fields,
                vec![
                    "detailed_explanation",
                    "biological_mechanism",
                    "variant_explanation",
                    "clinical_recommendation",
                    "dosage_recommendation",
                ]
            );
        }
        other => panic!("expected MissingFields, got {other:?}"),
    }

    let explanation = explain(
        &configured(),
        &StubClient::replying(r#"{"summary": "s"}"#),
        &context(None),
    );
    assert!(
        explanation
            .reason
            .as_deref()
            .unwrap()
            .starts_with("missing required fields")
    );
}

#[test]
fn valid_reply_is_tagged_with_provider_and_model() {
    let config = ExplainerConfig {
        model: "gpt-4.1-mini".to_string(),
        ..configured()
    };
    let explanation = explain(&config, &StubClient::replying(VALID_REPLY), &context(None));

    assert_eq!(explanation.provider, ExplanationProvider::Openai);
    assert_eq!(explanation.model.as_deref(), Some("gpt-4.1-mini"));
    assert!(explanation.reason.is_none());
    assert_eq!(explanation.clinical_recommendation, "Avoid codeine.");
    assert_eq!(explanation.warnings, vec!["Reduced analgesia"]);
}

#[test]
fn prompt_carries_selected_variant() {
    let client = StubClient::replying(VALID_REPLY);
    let variant = VariantFocus {
        rsid: "rs3892097".to_string(),
        info: Some("*4 · splice defect".to_string()),
    };
    explain(&configured(), &client, &context(Some(variant)));

    let prompts = client.prompts.lock().unwrap();
    assert!(prompts[0].contains("Drug: CODEINE"));
    assert!(prompts[0].contains("Risk label: Adjust Dosage"));
    assert!(prompts[0].contains("rs3892097"));
    assert!(prompts[0].contains("*4 · splice defect"));
}

#[test]
fn fallback_interpolates_context_and_fixed_warnings() {
    let variant = VariantFocus {
        rsid: "rs4244285".to_string(),
        info: None,
    };
    let mut ctx = context(Some(variant));
    ctx.gene = "CYP2C19".to_string();
    ctx.drug = "CLOPIDOGREL".to_string();

    let explanation = explain(&ExplainerConfig::default(), &StubClient::unavailable(), &ctx);

    assert!(explanation.summary.contains("CYP2C19 PM phenotype"));
    assert!(explanation.summary.contains("CLOPIDOGREL"));
    assert!(explanation.variant_explanation.contains("rs4244285"));
    assert_eq!(explanation.warnings, FALLBACK_WARNINGS.to_vec());
    assert!(explanation.model.is_none());
}

#[test]
fn deferred_explanation_is_fixed() {
    let explanation = deferred_explanation();
    assert_eq!(explanation.provider, ExplanationProvider::Deferred);
    assert_eq!(explanation.summary, DEFERRED_SUMMARY);
    assert_eq!(explanation.summary, "Select a variant to generate an AI summary.");
    assert!(explanation.reason.is_none());
}

#[test]
fn present_but_mistyped_fields_are_parse_failures() {
    let null_field = r#"{
        "summary": "s",
        "detailed_explanation": "d",
        "biological_mechanism": "b",
        "variant_explanation": null,
        "clinical_recommendation": "c",
        "dosage_recommendation": "r",
        "warnings": []
    }"#;
    let err = parse_reply(null_field).unwrap_err();
    assert!(matches!(err, ExplainError::ResponseParse(_)), "got {err:?}");

    let string_warnings = r#"{
        "summary": "s",
        "detailed_explanation": "d",
        "biological_mechanism": "b",
        "variant_explanation": "v",
        "clinical_recommendation": "c",
        "dosage_recommendation": "r",
        "warnings": "Reduced analgesia"
    }"#;
    let explanation = explain(
        &configured(),
        &StubClient::replying(string_warnings),
        &context(None),
    );
    assert_eq!(explanation.provider, ExplanationProvider::Fallback);
    assert!(
        explanation
            .reason
            .as_deref()
            .unwrap()
            .starts_with("response parsing failed")
    );
}
