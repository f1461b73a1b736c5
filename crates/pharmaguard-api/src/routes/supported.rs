use axum::Json;

use pharmaguard_core::models::response::SupportedSets;
use pharmaguard_core::tables::{SUPPORTED_DRUGS, SUPPORTED_GENES};

/// The drugs and genes this service accepts, sorted.
pub async fn supported_sets() -> Json<SupportedSets> {
    Json(SupportedSets {
        drugs: sorted(SUPPORTED_DRUGS),
        genes: sorted(SUPPORTED_GENES),
    })
}

fn sorted(items: &[&str]) -> Vec<String> {
    let mut v: Vec<String> = items.iter().map(|s| s.to_string()).collect();
    v.sort();
    v
}
