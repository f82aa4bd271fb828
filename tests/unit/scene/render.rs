use super::*;

fn props(message: Option<&str>) -> SceneProps {
    SceneProps::mark(Some("abc".to_string()), message.map(str::to_string))
}

#[test]
fn escape_covers_markup_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">'&'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn every_kind_renders_a_document_with_the_text() {
    let p = props(None);
    for kind in SceneKind::ALL {
        let html = kind.render(&p);
        assert!(html.starts_with("<!DOCTYPE html>"), "{kind:?}");
        assert!(html.trim_end().ends_with("</html>"), "{kind:?}");
        if kind != SceneKind::AiMarkup {
            assert!(html.contains("MARK"), "{kind:?}");
        }
    }
}

#[test]
fn message_is_escaped_and_shown() {
    let p = props(Some("<b>wake up</b>"));
    let html = SceneKind::Marquee.render(&p);
    assert!(html.contains("&lt;b&gt;wake up&lt;/b&gt;"));
    assert!(!html.contains("<b>wake up</b>"));
}

#[test]
fn blank_message_is_omitted() {
    let html = SceneKind::Glitch.render(&props(Some("   ")));
    assert!(!html.contains("class=\"message\""));
}

#[test]
fn rendering_is_deterministic() {
    let p = props(Some("hi"));
    for kind in SceneKind::ALL {
        assert_eq!(kind.render(&p), kind.render(&p));
    }
}

#[test]
fn primary_color_override_is_used() {
    let mut p = props(None);
    p.primary_color = Some("#123456".to_string());
    assert!(SceneKind::RadarPing.render(&p).contains("#123456"));
    p.primary_color = None;
    assert!(SceneKind::RadarPing.render(&p).contains("#00ff00"));
}

#[test]
fn ai_markup_embeds_snippet_in_sandboxed_frame() {
    let p = props(None).with_snippet("<p class=\"x\">hello & bye</p>");
    let html = SceneKind::AiMarkup.render(&p);
    assert!(html.contains("sandbox=\"allow-scripts\""));
    assert!(html.contains("srcdoc=\"&lt;p class=&quot;x&quot;&gt;hello &amp; bye&lt;/p&gt;\""));
}

#[test]
fn ai_markup_without_snippet_uses_builtin_default() {
    let html = SceneKind::AiMarkup.render(&props(None));
    assert!(html.contains("srcdoc=\"&lt;!DOCTYPE html&gt;"));
}

#[test]
fn loading_rotations_follow_index_formula() {
    assert_eq!(loading_rotation(0), -180);
    assert_eq!(loading_rotation(1), 47 - 180);
    assert_eq!(loading_rotation(8), (8 * 47 % 360) - 180);
    let html = loading_scene();
    assert_eq!(html.matches("<span style=").count(), LOADING_LETTERS.len());
}
