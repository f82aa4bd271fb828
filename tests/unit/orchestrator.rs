use async_trait::async_trait;

use super::*;
use crate::config::{ConfigSource, SnippetConfig};
use crate::foundation::rng::SequenceRng;
use crate::scene::kind::SceneKind;
use crate::snippet::fallback::{SNIPPETS, neon_default};
use crate::snippet::generator::SnippetGenerator;

struct Fixed(Option<&'static str>);

#[async_trait]
impl SnippetGenerator for Fixed {
    async fn generate(
        &self,
        _config: &SnippetConfig,
        _seed: Option<&str>,
        _message: Option<&str>,
    ) -> MarkResult<String> {
        self.0
            .map(str::to_string)
            .ok_or_else(|| MarkError::external_status(500))
    }
}

struct Stalled;

#[async_trait]
impl SnippetGenerator for Stalled {
    async fn generate(
        &self,
        _config: &SnippetConfig,
        _seed: Option<&str>,
        _message: Option<&str>,
    ) -> MarkResult<String> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok("too late".to_string())
    }
}

fn orchestrator(registry: SceneRegistry, generator: Fixed) -> Orchestrator {
    let snippets = SnippetService::new(
        ConfigSource::Fixed(SnippetConfig::with_api_key("sk-test")),
        Arc::new(generator),
    );
    Orchestrator::new(Arc::new(registry), snippets).with_retry_delay(Duration::ZERO)
}

fn req(scene: Option<&str>, seed: Option<&str>) -> SceneRequest {
    SceneRequest {
        scene: scene.map(str::to_string),
        seed: seed.map(str::to_string),
        ..SceneRequest::default()
    }
}

#[test]
fn empty_query_values_are_absent() {
    let r = SceneRequest {
        scene: Some(String::new()),
        seed: Some(String::new()),
        message: Some("hi".to_string()),
        debug: Some("yes".to_string()),
    };
    assert_eq!(r.scene_id(), None);
    assert_eq!(r.seed(), None);
    assert_eq!(r.message(), Some("hi"));
    assert!(!r.debug_enabled());

    let r = SceneRequest {
        debug: Some("true".to_string()),
        ..SceneRequest::default()
    };
    assert!(r.debug_enabled());
}

#[test]
fn explicit_scene_wins_regardless_of_rng() {
    let reg = SceneRegistry::with_default_scenes();
    for v in [0.0, 0.5, 0.99] {
        let mut rng = SequenceRng::new(vec![v]);
        assert_eq!(select_scene(&reg, Some("glitch"), &mut rng).unwrap().id, "glitch");
    }
}

#[test]
fn unknown_scene_falls_back_to_weighted_pick() {
    let reg = SceneRegistry::with_default_scenes();
    let mut rng = SequenceRng::new(vec![0.0]);
    assert_eq!(select_scene(&reg, Some("nope"), &mut rng).unwrap().id, "ai-markup");
    let mut rng = SequenceRng::new(vec![0.99]);
    assert_eq!(select_scene(&reg, None, &mut rng).unwrap().id, "spotlight");
}

#[test]
fn empty_registry_reports_no_scenes() {
    let reg = SceneRegistry::new();
    let mut rng = SequenceRng::new(vec![0.5]);
    assert!(matches!(
        select_scene(&reg, Some("glitch"), &mut rng),
        Err(MarkError::NoScenesAvailable)
    ));
}

#[tokio::test]
async fn explicit_scene_renders_independent_of_seed() {
    let orch = orchestrator(SceneRegistry::with_default_scenes(), Fixed(Some("<p>x</p>")));
    for seed in [None, Some("a"), Some("zzz")] {
        let mut rng = SequenceRng::new(vec![0.0]);
        let resolved = orch.resolve(&req(Some("glitch"), seed), &mut rng).await;
        let scene = resolved.scene.unwrap();
        assert_eq!(scene.id, "glitch");
        assert_eq!(scene.kind, SceneKind::Glitch);
        assert!(!resolved.fallback);
        assert!(resolved.error.is_none());
        assert!(resolved.document.contains("class=\"stack\""));
    }
}

#[tokio::test]
async fn ai_scene_embeds_generated_snippet() {
    let orch = orchestrator(
        SceneRegistry::with_default_scenes(),
        Fixed(Some("<p>generated</p>")),
    );
    let mut rng = SequenceRng::new(vec![0.0]);
    let resolved = orch.resolve(&req(Some("ai-markup"), Some("abc")), &mut rng).await;
    assert_eq!(resolved.scene.unwrap().id, "ai-markup");
    assert!(!resolved.fallback);
    assert!(resolved.document.contains("&lt;p&gt;generated&lt;/p&gt;"));
}

#[tokio::test]
async fn ai_scene_upstream_failure_uses_canned_snippet() {
    let orch = orchestrator(
        SceneRegistry::with_default_scenes(),
        Fixed(None),
    );
    let mut rng = SequenceRng::new(vec![0.0]);
    let resolved = orch.resolve(&req(Some("ai-markup"), Some("abc")), &mut rng).await;
    assert!(resolved.fallback);
    assert!(resolved.error.as_deref().is_some_and(|e| !e.is_empty()));
    // "abc" hashes to 294, an even index.
    let expected = escape(SNIPPETS[0]);
    assert!(resolved.document.contains(&expected));
}

#[tokio::test]
async fn empty_registry_renders_loading_scene() {
    let orch = orchestrator(SceneRegistry::new(), Fixed(Some("unused")));
    let mut rng = SequenceRng::new(vec![0.5]);
    let resolved = orch.resolve(&SceneRequest::default(), &mut rng).await;
    assert!(resolved.scene.is_none());
    assert_eq!(resolved.document, loading_scene());
}

fn escape(s: &str) -> String {
    crate::scene::render::escape_html(s)
}

#[tokio::test]
async fn scenes_get_the_accent_color() {
    let orch = orchestrator(SceneRegistry::with_default_scenes(), Fixed(Some("unused")));
    let mut rng = SequenceRng::new(vec![0.0]);
    let resolved = orch.resolve(&req(Some("marquee"), None), &mut rng).await;
    assert!(resolved.document.contains("color: #ff006e"));
    assert!(!resolved.document.contains("color: #ffffff"));
}

#[tokio::test]
async fn slow_snippet_times_out_to_canned_content() {
    let snippets = SnippetService::new(
        ConfigSource::Fixed(SnippetConfig::with_api_key("sk-test")),
        Arc::new(Stalled),
    );
    let orch = Orchestrator::new(Arc::new(SceneRegistry::with_default_scenes()), snippets)
        .with_snippet_timeout(Duration::from_millis(20));
    let mut rng = SequenceRng::new(vec![0.0]);
    let resolved = orch.resolve(&req(Some("ai-markup"), Some("abc")), &mut rng).await;
    assert!(resolved.fallback);
    assert!(resolved.error.as_deref().is_some_and(|e| e.contains("timed out")));
    assert!(resolved.document.contains(&escape(SNIPPETS[0])));
    assert!(resolved.load_time < Duration::from_secs(5));
}

#[tokio::test]
async fn offline_mode_uses_every_scene_default() {
    let orch = orchestrator(SceneRegistry::with_default_scenes(), Fixed(Some("unused")))
        .without_snippet_fetch();
    // 'c' = 99 -> neon, 'a' = 97 -> matrix, 'b' = 98 -> cube.
    let mut rng = SequenceRng::new(vec![0.0]);
    let mut r = req(Some("ai-markup"), Some("c"));
    r.message = Some("hello".to_string());
    let neon = orch.resolve(&r, &mut rng).await;
    assert!(neon.fallback);
    assert!(neon.error.is_none());
    assert!(neon.document.contains(&escape(&neon_default(Some("hello")))));

    let matrix = orch.resolve(&req(Some("ai-markup"), Some("a")), &mut rng).await;
    assert!(matrix.document.contains("&lt;canvas id=&quot;c&quot;&gt;"));
    let cube = orch.resolve(&req(Some("ai-markup"), Some("b")), &mut rng).await;
    assert!(cube.document.contains("class=&quot;cube&quot;"));
    assert!(!cube.document.contains("unused"));
}
