//! Per-request scene resolution.
//!
//! Picks the requested scene or a weighted-random one, fetches generated content for scenes that
//! need it, and always ends with a renderable document.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use crate::{
    foundation::error::{MarkError, MarkResult},
    foundation::rng::SceneRng,
    scene::kind::{ACCENT_COLOR, SceneProps},
    scene::registry::{SceneEntry, SceneRegistry},
    scene::render::loading_scene,
    snippet::fallback::{pick_snippet, scene_default},
    snippet::service::{SnippetResponse, SnippetService},
};

/// Delay before retrying a selection that found no scenes.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Upper bound on the snippet fetch while a page waits for it.
pub const DEFAULT_SNIPPET_TIMEOUT: Duration = Duration::from_secs(8);

/// Query parameters of the scenes page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SceneRequest {
    /// Explicit scene id.
    pub scene: Option<String>,
    /// Variation seed.
    pub seed: Option<String>,
    /// Free-text message.
    pub message: Option<String>,
    /// `"true"` enables the diagnostic panel.
    pub debug: Option<String>,
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

impl SceneRequest {
    /// Explicit scene id, if non-empty.
    pub fn scene_id(&self) -> Option<&str> {
        non_empty(&self.scene)
    }

    /// Seed, if non-empty.
    pub fn seed(&self) -> Option<&str> {
        non_empty(&self.seed)
    }

    /// Message, if non-empty.
    pub fn message(&self) -> Option<&str> {
        non_empty(&self.message)
    }

    /// Return `true` when `debug=true`.
    pub fn debug_enabled(&self) -> bool {
        self.debug.as_deref() == Some("true")
    }
}

/// Pick the requested scene, or a weighted-random one (AI scenes included) when the id is absent
/// or unknown.
pub fn select_scene<'a, R: SceneRng + ?Sized>(
    registry: &'a SceneRegistry,
    scene_id: Option<&str>,
    rng: &mut R,
) -> MarkResult<&'a SceneEntry> {
    if let Some(id) = scene_id {
        if let Some(entry) = registry.get(id) {
            return Ok(entry);
        }
        tracing::debug!(id, "unknown scene id, selecting at random");
    }
    registry.get_random(false, rng)
}

/// Outcome of resolving one scenes-page request.
#[derive(Clone, Debug)]
pub struct ResolvedScene {
    /// Selected entry; `None` when the loading scene was rendered instead.
    pub scene: Option<SceneEntry>,
    /// Complete HTML document for the scene.
    pub document: String,
    /// Set when the scene's generated content was replaced by canned content.
    pub fallback: bool,
    /// Upstream failure description, for the diagnostic panel.
    pub error: Option<String>,
    /// Time spent resolving.
    pub load_time: Duration,
}

/// Resolves scenes against a shared registry.
#[derive(Clone, Debug)]
pub struct Orchestrator {
    registry: Arc<SceneRegistry>,
    snippets: SnippetService,
    retry_delay: Duration,
    snippet_timeout: Duration,
    fetch_snippets: bool,
}

impl Orchestrator {
    /// Create an orchestrator with the default retry delay and snippet timeout.
    pub fn new(registry: Arc<SceneRegistry>, snippets: SnippetService) -> Self {
        Self {
            registry,
            snippets,
            retry_delay: DEFAULT_RETRY_DELAY,
            snippet_timeout: DEFAULT_SNIPPET_TIMEOUT,
            fetch_snippets: true,
        }
    }

    /// Override the retry delay.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Override the snippet fetch timeout.
    pub fn with_snippet_timeout(mut self, timeout: Duration) -> Self {
        self.snippet_timeout = timeout;
        self
    }

    /// Never call the snippet service; API scenes get a built-in default snippet instead.
    pub fn without_snippet_fetch(mut self) -> Self {
        self.fetch_snippets = false;
        self
    }

    /// Shared registry.
    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    /// Snippet service used for API-dependent scenes.
    pub fn snippets(&self) -> &SnippetService {
        &self.snippets
    }

    async fn select_with_retry<R: SceneRng + Send + ?Sized>(
        &self,
        scene_id: Option<&str>,
        rng: &mut R,
    ) -> Option<SceneEntry> {
        match select_scene(&self.registry, scene_id, rng) {
            Ok(entry) => return Some(entry.clone()),
            Err(MarkError::NoScenesAvailable) => {
                tracing::warn!(delay_ms = self.retry_delay.as_millis() as u64, "no scenes, retrying");
            }
            Err(e) => {
                tracing::warn!(error = %e, "scene selection failed");
                return None;
            }
        }
        tokio::time::sleep(self.retry_delay).await;
        select_scene(&self.registry, scene_id, rng).ok().cloned()
    }

    async fn fetch_snippet<R: SceneRng + Send + ?Sized>(
        &self,
        req: &SceneRequest,
        rng: &mut R,
    ) -> SnippetResponse {
        let fetch = self.snippets.snippet(req.seed(), req.message(), &mut *rng);
        let outcome = tokio::time::timeout(self.snippet_timeout, fetch).await;
        match outcome {
            Ok(resp) => resp,
            Err(_) => {
                let timeout_ms = self.snippet_timeout.as_millis() as u64;
                tracing::warn!(timeout_ms, "snippet fetch timed out");
                SnippetResponse::canned(
                    pick_snippet(req.seed(), rng),
                    Some(format!("snippet fetch timed out after {timeout_ms}ms")),
                )
            }
        }
    }

    /// Resolve a request into a renderable document. Never fails.
    #[tracing::instrument(skip(self, rng), fields(scene = ?req.scene, seed = ?req.seed))]
    pub async fn resolve<R: SceneRng + Send + ?Sized>(
        &self,
        req: &SceneRequest,
        rng: &mut R,
    ) -> ResolvedScene {
        let started = Instant::now();

        let Some(entry) = self.select_with_retry(req.scene_id(), rng).await else {
            return ResolvedScene {
                scene: None,
                document: loading_scene(),
                fallback: false,
                error: None,
                load_time: started.elapsed(),
            };
        };

        let mut props = SceneProps::mark(
            req.seed().map(str::to_string),
            req.message().map(str::to_string),
        )
        .with_primary_color(ACCENT_COLOR);
        let mut fallback = false;
        let mut error = None;
        if entry.requires_api {
            let html = if self.fetch_snippets {
                let snippet = self.fetch_snippet(req, rng).await;
                fallback = snippet.is_fallback();
                error = snippet.error;
                snippet.html
            } else {
                fallback = true;
                scene_default(req.seed(), req.message(), rng)
            };
            props = props.with_snippet(html);
        }

        let document = entry.kind.render(&props);
        tracing::info!(scene = %entry.id, fallback, "scene resolved");
        ResolvedScene {
            scene: Some(entry),
            document,
            fallback,
            error,
            load_time: started.elapsed(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/orchestrator.rs"]
mod tests;
