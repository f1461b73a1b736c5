//! Prompt construction for the explanation request.

/// The variant an explanation is focused on, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantFocus {
    pub rsid: String,
    pub info: Option<String>,
}

/// Everything the generator knows about one drug/gene/phenotype call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationContext {
    pub gene: String,
    pub phenotype: String,
    pub drug: String,
    pub risk_label: String,
    pub diplotype: String,
    pub variant: Option<VariantFocus>,
}

/// Field names the model must return, in prompt order.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "summary",
    "detailed_explanation",
    "biological_mechanism",
    "variant_explanation",
    "clinical_recommendation",
    "dosage_recommendation",
    "warnings",
];

pub const SYSTEM_PROMPT: &str = "\
You are a clinical pharmacogenomics assistant. \
Respond with a single JSON object and nothing else.";

/// Build the single user prompt sent to the text-generation service.
pub fn build_prompt(ctx: &ExplanationContext) -> String {
    let mut prompt = String::from(
        "Generate a concise, patient-safe pharmacogenomic explanation. \
         Do not provide definitive medical advice.\n\n",
    );

    prompt.push_str(&format!("Drug: {}\n", ctx.drug.to_uppercase()));
    prompt.push_str(&format!("Gene: {}\n", ctx.gene));
    prompt.push_str(&format!("Diplotype: {}\n", ctx.diplotype));
    prompt.push_str(&format!("Phenotype: {}\n", ctx.phenotype));
    prompt.push_str(&format!("Risk label: {}\n", ctx.risk_label));

    if let Some(variant) = &ctx.variant {
        prompt.push_str(&format!("Selected variant: {}\n", variant.rsid));
        if let Some(info) = &variant.info {
            prompt.push_str(&format!("Variant details: {info}\n"));
        }
    }

    prompt.push_str(
        "\nReturn a JSON object with exactly these fields:\n\
         - summary: 2-3 sentence overview\n\
         - detailed_explanation: why this genotype may affect response\n\
         - biological_mechanism: how the gene product acts on the drug\n\
         - variant_explanation: what the detected variant(s) change\n\
         - clinical_recommendation: appropriate clinician follow-up\n\
         - dosage_recommendation: dosing guidance referencing CPIC\n\
         - warnings: array of short safety warnings\n",
    );

    prompt
}
