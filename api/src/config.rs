//! Analysis service configuration.
//!
//! Only the credential comes from the environment. Native builds read the
//! process environment at startup; wasm builds read the value baked in at
//! compile time, since a browser page has no environment of its own.

use std::fmt;

pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_THINKING_BUDGET: u32 = 12_000;

/// Environment variables consulted for the credential, in order.
pub const CREDENTIAL_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub thinking_budget: u32,
}

impl AnalysisConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            thinking_budget: DEFAULT_THINKING_BUDGET,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(lookup_var)
    }

    /// Build from an arbitrary variable source. The first non-blank
    /// credential variable wins.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = CREDENTIAL_VARS
            .iter()
            .filter_map(|name| lookup(*name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .unwrap_or_default();

        if api_key.is_empty() {
            tracing::warn!(
                target: "facelab.config",
                "no analysis credential found (checked {})",
                CREDENTIAL_VARS.join(", ")
            );
        }

        Self::new(api_key)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_thinking_budget(mut self, budget: u32) -> Self {
        self.thinking_budget = budget;
        self
    }

    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl fmt::Debug for AnalysisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.has_credential() { "[redacted]" } else { "<unset>" };
        f.debug_struct("AnalysisConfig")
            .field("api_key", &key)
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("thinking_budget", &self.thinking_budget)
            .finish()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lookup_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(target_arch = "wasm32")]
fn lookup_var(name: &str) -> Option<String> {
    let baked = match name {
        "GEMINI_API_KEY" => option_env!("GEMINI_API_KEY"),
        "API_KEY" => option_env!("API_KEY"),
        _ => None,
    };
    baked.map(str::to_string)
}
