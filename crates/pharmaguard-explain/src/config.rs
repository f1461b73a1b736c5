use std::env;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Settings for the external text-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainerConfig {
    /// `None` (or blank) means the service is not configured.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for ExplainerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ExplainerConfig {
    /// Read `OPENAI_API_KEY`, `OPENAI_MODEL` and `OPENAI_BASE_URL`.
    ///
    /// Called per request so a rotated key is picked up without a restart.
    pub fn from_env() -> Self {
        let non_blank = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());

        Self {
            api_key: non_blank("OPENAI_API_KEY"),
            model: non_blank("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_blank("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// The API key, if one is configured and non-blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}
