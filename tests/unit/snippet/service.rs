use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::*;
use crate::foundation::error::MarkError;
use crate::foundation::rng::SequenceRng;

struct Failing {
    calls: AtomicUsize,
}

#[async_trait]
impl SnippetGenerator for Failing {
    async fn generate(
        &self,
        _config: &SnippetConfig,
        _seed: Option<&str>,
        _message: Option<&str>,
    ) -> MarkResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(MarkError::external_status(500))
    }
}

struct Echo;

#[async_trait]
impl SnippetGenerator for Echo {
    async fn generate(
        &self,
        config: &SnippetConfig,
        seed: Option<&str>,
        message: Option<&str>,
    ) -> MarkResult<String> {
        Ok(format!(
            "{}|{}|{}",
            config.model,
            seed.unwrap_or("-"),
            message.unwrap_or("-")
        ))
    }
}

fn online() -> ConfigSource {
    ConfigSource::Fixed(SnippetConfig::with_api_key("sk-test"))
}

#[tokio::test]
async fn offline_serves_seeded_fallback_without_calling_generator() {
    let generator = Arc::new(Failing {
        calls: AtomicUsize::new(0),
    });
    let svc = SnippetService::new(
        ConfigSource::Fixed(SnippetConfig::offline()),
        generator.clone(),
    );
    let mut rng = SequenceRng::new(vec![0.9]);
    let resp = svc.snippet(Some("abc"), None, &mut rng).await;
    assert_eq!(resp.html, fallback::SNIPPETS[0]);
    assert!(resp.is_fallback());
    assert!(resp.error.is_none());
    assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn upstream_500_falls_back_with_error() {
    let svc = SnippetService::new(
        online(),
        Arc::new(Failing {
            calls: AtomicUsize::new(0),
        }),
    );
    let mut rng = SequenceRng::new(vec![0.0]);
    let resp = svc.snippet(Some("abc"), Some("hi"), &mut rng).await;
    assert_eq!(resp.fallback, Some(true));
    assert!(resp.error.as_deref().is_some_and(|e| e.contains("500")));
    assert!(fallback::SNIPPETS.contains(&resp.html.as_str()));
}

#[tokio::test]
async fn success_passes_seed_and_message_through() {
    let svc = SnippetService::new(online(), Arc::new(Echo));
    let mut rng = SequenceRng::default();
    let resp = svc.snippet(Some("s"), Some("m"), &mut rng).await;
    assert_eq!(resp.html, "gpt-4o-mini|s|m");
    assert!(!resp.is_fallback());
    assert!(resp.error.is_none());
}

#[test]
fn response_omits_absent_fields() {
    let v = serde_json::to_value(SnippetResponse::generated("x".to_string())).unwrap();
    assert_eq!(v, serde_json::json!({ "html": "x" }));

    let v = serde_json::to_value(SnippetResponse::canned("y", Some("boom".to_string()))).unwrap();
    assert_eq!(
        v,
        serde_json::json!({ "html": "y", "fallback": true, "error": "boom" })
    );
}
