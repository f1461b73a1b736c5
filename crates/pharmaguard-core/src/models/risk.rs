use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::tables::Severity;

/// Output of the risk classifier. Derived per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    pub risk_label: String,
    pub confidence_score: f64,
    pub severity: Severity,
}
