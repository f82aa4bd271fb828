//! HTTP handlers.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse},
};
use url::form_urlencoded;

use crate::{
    artwork::svg::mark_svg,
    foundation::rng::ThreadSceneRng,
    messages::{resolve_message, share_url},
    orchestrator::SceneRequest,
    scene::registry::SceneEntry,
    server::pages,
    server::state::AppState,
    snippet::service::SnippetResponse,
};

/// Decoded query parameters. The first occurrence of a repeated key wins and unknown keys are
/// ignored, so no query string is ever rejected.
#[derive(Debug, Default)]
pub(crate) struct QueryParams(HashMap<String, String>);

impl QueryParams {
    pub(crate) fn parse(raw: Option<&str>) -> Self {
        let mut params = HashMap::new();
        for (k, v) in form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            params.entry(k.into_owned()).or_insert_with(|| v.into_owned());
        }
        Self(params)
    }

    /// Value of `key`, if present and non-empty.
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    fn owned(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    pub(crate) fn scene_request(&self) -> SceneRequest {
        SceneRequest {
            scene: self.owned("scene"),
            seed: self.owned("seed"),
            message: self.owned("message"),
            debug: self.owned("debug"),
        }
    }
}

/// GET `/` - message config form.
pub async fn config_handler() -> Html<String> {
    Html(pages::config_page())
}

/// GET `/link?option=&custom=` - share link for the chosen message.
///
/// The link's origin comes from the request's `Host` header.
pub async fn link_handler(headers: HeaderMap, RawQuery(raw): RawQuery) -> impl IntoResponse {
    let q = QueryParams::parse(raw.as_deref());
    let Some(message) = q
        .get("option")
        .and_then(|o| resolve_message(o, q.get("custom")))
    else {
        return (
            StatusCode::BAD_REQUEST,
            Html(pages::link_error_page("Pick a message (or write one) first.")),
        );
    };

    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    match share_url(&format!("http://{host}"), &message) {
        Ok(url) => (StatusCode::OK, Html(pages::link_page(&url))),
        Err(e) => {
            tracing::warn!(error = %e, "share link failed");
            (
                StatusCode::BAD_REQUEST,
                Html(pages::link_error_page(&e.to_string())),
            )
        }
    }
}

/// GET `/scenes?scene=&seed=&message=&debug=` - one full-screen scene plus footer.
pub async fn scenes_handler(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Html<String> {
    let req = QueryParams::parse(raw.as_deref()).scene_request();
    let mut rng = ThreadSceneRng::new();
    let resolved = state.orchestrator.resolve(&req, &mut rng).await;
    let footer = pages::scene_footer(state.registry().get_all(), &req, &resolved);
    Html(pages::inject_before_body_end(&resolved.document, &footer))
}

/// GET `/api/mark-snippet?seed=&message=` - generated (or canned) HTML snippet.
///
/// Always `200 OK`; failures surface as `fallback`/`error` in the body.
pub async fn snippet_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Json<SnippetResponse> {
    let q = QueryParams::parse(raw.as_deref());
    let mut rng = ThreadSceneRng::new();
    let resp = state
        .snippets()
        .snippet(q.get("seed"), q.get("message"), &mut rng)
        .await;
    Json(resp)
}

/// GET `/api/mark-image?seed=` - deterministic SVG artwork.
pub async fn image_handler(RawQuery(raw): RawQuery) -> impl IntoResponse {
    let q = QueryParams::parse(raw.as_deref());
    let svg = mark_svg(q.get("seed"));
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        svg,
    )
}

/// GET `/api/scenes` - the registered catalog.
pub async fn scenes_catalog_handler(State(state): State<AppState>) -> Json<Vec<SceneEntry>> {
    Json(state.registry().get_all().to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/server/handlers.rs"]
mod tests;
