use std::sync::Arc;

use crate::{
    foundation::error::MarkResult,
    orchestrator::Orchestrator,
    scene::registry::SceneRegistry,
    snippet::service::SnippetService,
};

/// Shared state handed to every handler.
///
/// Cloning is cheap: the registry sits behind an `Arc` and the snippet service shares its
/// generator.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Scene selection and rendering.
    pub orchestrator: Orchestrator,
}

impl AppState {
    /// State over an explicit registry and snippet service.
    pub fn new(registry: SceneRegistry, snippets: SnippetService) -> Self {
        Self {
            orchestrator: Orchestrator::new(Arc::new(registry), snippets),
        }
    }

    /// Default catalog, reading the snippet configuration from the environment per request.
    pub fn from_env() -> MarkResult<Self> {
        Ok(Self::new(
            SceneRegistry::with_default_scenes(),
            SnippetService::chat_completions(crate::config::ConfigSource::Env)?,
        ))
    }

    /// Snippet service used by the API and the AI scene.
    pub fn snippets(&self) -> &SnippetService {
        self.orchestrator.snippets()
    }

    /// Registered scenes.
    pub fn registry(&self) -> &SceneRegistry {
        self.orchestrator.registry()
    }
}
