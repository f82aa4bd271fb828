use std::time::Duration;

use async_trait::async_trait;

use crate::{
    config::SnippetConfig,
    foundation::error::{MarkError, MarkResult},
    snippet::prompt::{ChatRequest, ChatResponse, strip_code_fences},
};

/// Produces a decorative HTML snippet. Implementations may fail; callers fall back to canned
/// content.
#[async_trait]
pub trait SnippetGenerator: Send + Sync {
    /// Generate one snippet for `seed`/`message` using `config`.
    async fn generate(
        &self,
        config: &SnippetConfig,
        seed: Option<&str>,
        message: Option<&str>,
    ) -> MarkResult<String>;
}

/// Upstream request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Chat-completions client.
#[derive(Clone, Debug)]
pub struct ChatCompletionsGenerator {
    client: reqwest::Client,
}

impl ChatCompletionsGenerator {
    /// Build a client with the default timeout.
    pub fn new() -> MarkResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MarkError::config(format!("build http client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SnippetGenerator for ChatCompletionsGenerator {
    #[tracing::instrument(skip(self, config, message), fields(model = %config.model))]
    async fn generate(
        &self,
        config: &SnippetConfig,
        seed: Option<&str>,
        message: Option<&str>,
    ) -> MarkResult<String> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| MarkError::config("no api key configured"))?;

        let body = ChatRequest::for_snippet(&config.model, seed, message);
        let response = self
            .client
            .post(&config.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| MarkError::external(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarkError::external_status(status.as_u16()));
        }

        let data: ChatResponse = response
            .json()
            .await
            .map_err(|e| MarkError::external(format!("invalid response body: {e}")))?;
        let content = data
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| MarkError::external("response contained no choices"))?;

        let html = strip_code_fences(&content);
        if html.is_empty() {
            return Err(MarkError::external("response contained an empty snippet"));
        }
        tracing::debug!(len = html.len(), "generated snippet");
        Ok(html)
    }
}
