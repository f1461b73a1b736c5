use std::sync::Arc;

use pharmaguard_core::models::explanation::Explanation;
use pharmaguard_explain::client::{CompletionClient, OpenAiClient};
use pharmaguard_explain::config::ExplainerConfig;
use pharmaguard_explain::generate;
use pharmaguard_explain::prompt::ExplanationContext;

use crate::error::ApiError;

/// Where explanation settings come from.
#[derive(Clone, Debug)]
pub enum ExplainerSource {
    /// Re-read the process environment on every request.
    Environment,
    Fixed(ExplainerConfig),
}

impl ExplainerSource {
    pub fn resolve(&self) -> ExplainerConfig {
        match self {
            ExplainerSource::Environment => ExplainerConfig::from_env(),
            ExplainerSource::Fixed(config) => config.clone(),
        }
    }
}

/// Shared application state, injected into all route handlers via Axum state.
///
/// Holds no per-request data; everything here is immutable.
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
    pub explainer: ExplainerSource,
}

impl AppState {
    pub fn from_env() -> Self {
        Self {
            completion: Arc::new(OpenAiClient::new()),
            explainer: ExplainerSource::Environment,
        }
    }

    /// Generate an explanation on the blocking pool so a slow external call
    /// only holds up its own request.
    pub async fn explain(&self, ctx: ExplanationContext) -> Result<Explanation, ApiError> {
        let config = self.explainer.resolve();
        let client = Arc::clone(&self.completion);

        tokio::task::spawn_blocking(move || generate::explain(&config, client.as_ref(), &ctx))
            .await
            .map_err(|e| ApiError::Internal(format!("explanation task failed: {e}")))
    }
}
