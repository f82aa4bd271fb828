//! Snippet-service configuration.
//!
//! Values come from the process environment and are re-read on every request, so rotating the
//! credential does not need a restart. A missing credential is the supported offline mode.

use crate::foundation::error::{MarkError, MarkResult};

/// Environment variable holding the upstream credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable overriding the model name.
pub const MODEL_ENV: &str = "MARK_SNIPPET_MODEL";
/// Environment variable overriding the chat-completions endpoint.
pub const ENDPOINT_ENV: &str = "MARK_SNIPPET_ENDPOINT";

/// Model used when [`MODEL_ENV`] is unset.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Endpoint used when [`ENDPOINT_ENV`] is unset.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Settings for one snippet request.
#[derive(Clone, PartialEq, Eq)]
pub struct SnippetConfig {
    /// Upstream credential; `None` means offline.
    pub api_key: Option<String>,
    /// Model name sent upstream.
    pub model: String,
    /// Full chat-completions URL.
    pub endpoint: String,
}

impl std::fmt::Debug for SnippetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnippetConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl SnippetConfig {
    /// Offline configuration (no credential).
    pub fn offline() -> Self {
        Self::default()
    }

    /// Configuration with a credential and default model/endpoint.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Read from the process environment.
    pub fn from_env() -> MarkResult<Self> {
        Ok(Self::from_values(
            optional_env(API_KEY_ENV)?,
            optional_env(MODEL_ENV)?,
            optional_env(ENDPOINT_ENV)?,
        ))
    }

    /// Build from already-read values; empty strings count as unset.
    pub fn from_values(
        api_key: Option<String>,
        model: Option<String>,
        endpoint: Option<String>,
    ) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            api_key: non_empty(api_key),
            model: non_empty(model).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            endpoint: non_empty(endpoint).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        }
    }

    /// Return `true` when a credential is present.
    pub fn is_online(&self) -> bool {
        self.api_key.is_some()
    }
}

fn optional_env(key: &str) -> MarkResult<Option<String>> {
    match std::env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(MarkError::config(format!("failed to read {key}: {e}"))),
    }
}

/// Where a [`SnippetConfig`] comes from.
#[derive(Clone, Debug)]
pub enum ConfigSource {
    /// Re-read the process environment on each load.
    Env,
    /// Always use this value.
    Fixed(SnippetConfig),
}

impl ConfigSource {
    /// Resolve the current configuration.
    pub fn load(&self) -> MarkResult<SnippetConfig> {
        match self {
            ConfigSource::Env => SnippetConfig::from_env(),
            ConfigSource::Fixed(c) => Ok(c.clone()),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
