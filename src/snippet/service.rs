use std::sync::Arc;

use crate::{
    config::{ConfigSource, SnippetConfig},
    foundation::error::MarkResult,
    foundation::rng::SceneRng,
    snippet::fallback,
    snippet::generator::{ChatCompletionsGenerator, SnippetGenerator},
};

/// JSON body of the snippet endpoint.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SnippetResponse {
    /// Self-contained HTML document.
    pub html: String,
    /// Set when `html` is canned content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    /// Upstream failure description, when generation was attempted and failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SnippetResponse {
    /// Successful generation.
    pub fn generated(html: String) -> Self {
        Self {
            html,
            fallback: None,
            error: None,
        }
    }

    /// Canned content, optionally with the reason generation failed.
    pub fn canned(html: &str, error: Option<String>) -> Self {
        Self {
            html: html.to_string(),
            fallback: Some(true),
            error,
        }
    }

    /// Return `true` when `html` is canned content.
    pub fn is_fallback(&self) -> bool {
        self.fallback.unwrap_or(false)
    }
}

/// Generates snippets, degrading to canned content.
///
/// Never fails: a missing credential, an unreadable configuration or an upstream error all
/// resolve to a canned snippet chosen by seed (or at random without one).
#[derive(Clone)]
pub struct SnippetService {
    config: ConfigSource,
    generator: Arc<dyn SnippetGenerator>,
}

impl std::fmt::Debug for SnippetService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnippetService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SnippetService {
    /// Service with an explicit generator.
    pub fn new(config: ConfigSource, generator: Arc<dyn SnippetGenerator>) -> Self {
        Self { config, generator }
    }

    /// Service backed by the chat-completions client.
    pub fn chat_completions(config: ConfigSource) -> MarkResult<Self> {
        Ok(Self::new(config, Arc::new(ChatCompletionsGenerator::new()?)))
    }

    /// Offline service; always returns canned content.
    pub fn offline() -> MarkResult<Self> {
        Self::chat_completions(ConfigSource::Fixed(SnippetConfig::offline()))
    }

    /// Produce a snippet for `seed`/`message`.
    #[tracing::instrument(skip(self, message, rng))]
    pub async fn snippet<R: SceneRng + Send + ?Sized>(
        &self,
        seed: Option<&str>,
        message: Option<&str>,
        rng: &mut R,
    ) -> SnippetResponse {
        let config = match self.config.load() {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(error = %e, "snippet config unreadable, serving offline");
                SnippetConfig::offline()
            }
        };

        if !config.is_online() {
            tracing::debug!("no api key, serving canned snippet");
            return SnippetResponse::canned(fallback::pick_snippet(seed, rng), None);
        }

        match self.generator.generate(&config, seed, message).await {
            Ok(html) => SnippetResponse::generated(html),
            Err(e) => {
                tracing::warn!(error = %e, "snippet generation failed");
                SnippetResponse::canned(fallback::pick_snippet(seed, rng), Some(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/snippet/service.rs"]
mod tests;
