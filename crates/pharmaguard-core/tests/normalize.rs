use pharmaguard_core::error::CoreError;
use pharmaguard_core::ids::{new_patient_id, response_timestamp};
use pharmaguard_core::models::request::{AnalyzeRequest, VariantInput};
use pharmaguard_core::normalize::{
    diplotype_field, display_diplotype, display_phenotype, normalize_variants, phenotype_field,
    require_drug, require_gene,
};
use pharmaguard_core::tables::{supported_drugs_list, supported_genes_list};

#[test]
fn supported_lists_are_sorted() {
    assert_eq!(
        supported_drugs_list(),
        "AZATHIOPRINE, CLOPIDOGREL, CODEINE, FLUOROURACIL, SIMVASTATIN, WARFARIN"
    );
    assert_eq!(
        supported_genes_list(),
        "CYP2C19, CYP2C9, CYP2D6, DPYD, SLCO1B1, TPMT"
    );
}

#[test]
fn drug_is_upper_cased_before_validation() {
    assert_eq!(require_drug(" codeine ").unwrap(), "CODEINE");
}

#[test]
fn unsupported_drug_lists_all_supported_drugs() {
    let err = require_drug("aspirin").unwrap_err();
    assert!(matches!(err, CoreError::UnsupportedDrug { ref drug, .. } if drug == "ASPIRIN"));
    let message = err.to_string();
    assert!(message.starts_with("Unsupported drug. Supported drugs: "));
    for drug in ["CODEINE", "WARFARIN", "CLOPIDOGREL", "SIMVASTATIN", "AZATHIOPRINE", "FLUOROURACIL"] {
        assert!(message.contains(drug), "{drug} missing from {message}");
    }
}

#[test]
fn unsupported_gene_names_the_field() {
    let err = require_gene("primary_gene", "brca1").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported primary_gene. Supported genes: CYP2C19, CYP2C9, CYP2D6, DPYD, SLCO1B1, TPMT"
    );
    assert_eq!(require_gene("primary_gene", "cyp2d6").unwrap(), "CYP2D6");
}

#[test]
fn blank_profile_fields_become_unknown() {
    assert_eq!(phenotype_field(""), "Unknown");
    assert_eq!(phenotype_field(" im "), "IM");
    assert_eq!(diplotype_field("  "), "Unknown");
    assert_eq!(diplotype_field(" *1/*4 "), "*1/*4");
}

#[test]
fn variants_without_gene_inherit_primary_gene() {
    let variants = vec![
        VariantInput {
            rsid: "rs3892097".to_string(),
            gene: None,
            variant_info: None,
        },
        VariantInput {
            rsid: "rs4244285".to_string(),
            gene: Some("cyp2c19".to_string()),
            variant_info: Some("*2 · splice defect".to_string()),
        },
        VariantInput {
            rsid: "rs1065852".to_string(),
            gene: Some(" ".to_string()),
            variant_info: None,
        },
    ];

    let normalized = normalize_variants(&variants, "CYP2D6");
    assert_eq!(normalized.len(), 3);
    assert_eq!(normalized[0].gene, "CYP2D6");
    assert_eq!(normalized[1].gene, "CYP2C19");
    assert_eq!(normalized[1].variant_info.as_deref(), Some("*2 · splice defect"));
    assert_eq!(normalized[2].gene, "CYP2D6");
    assert_eq!(normalized[2].rsid, "rs1065852");
}

#[test]
fn display_diplotype_splits_on_first_separator() {
    assert_eq!(display_diplotype(Some("*4/*4 · splice defect · rare"), "*1/*1"), "*4/*4");
    assert_eq!(display_diplotype(Some("c.506-1G>A — splice defect"), "*1/*4"), "*1/*4");
    assert_eq!(display_diplotype(None, "Unknown"), "Unknown");
}

#[test]
fn display_phenotype_annotates_cross_gene_variants() {
    assert_eq!(display_phenotype("PM", "CYP2C19", "CYP2D6"), "PM (CYP2D6)");
    assert_eq!(display_phenotype("PM", "CYP2D6", "CYP2D6"), "PM");
    assert_eq!(display_phenotype("UNKNOWN", "CYP2C19", "CYP2D6"), "UNKNOWN");
    assert_eq!(display_phenotype("Unknown", "CYP2C19", "CYP2D6"), "Unknown");
}

#[test]
fn analyze_request_defaults() {
    let req: AnalyzeRequest =
        serde_json::from_str(r#"{"drug":"codeine","primary_gene":"cyp2d6"}"#).unwrap();
    assert_eq!(req.diplotype, "Unknown");
    assert_eq!(req.phenotype, "Unknown");
    assert!(req.detected_variants.is_empty());
    assert!(req.confidence.is_none());
    assert!(req.include_explanation);
}

#[test]
fn patient_id_has_expected_shape() {
    let id = new_patient_id();
    let suffix = id.strip_prefix("PATIENT_").unwrap();
    assert_eq!(suffix.len(), 6);
    assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
}

#[test]
fn timestamp_is_utc_seconds() {
    let ts = response_timestamp();
    // e.g. 2026-10-16 09:30:00Z
    assert_eq!(ts.len(), 20);
    assert!(ts.ends_with('Z'));
    assert_eq!(&ts[10..11], " ");
}
