use super::*;
use crate::foundation::rng::SequenceRng;

#[test]
fn seed_abc_always_picks_first_snippet() {
    // 97 + 98 + 99 = 294, 294 % 2 == 0
    let mut rng = SequenceRng::new(vec![0.9]);
    for _ in 0..5 {
        assert_eq!(pick_snippet(Some("abc"), &mut rng), SNIPPETS[0]);
    }
}

#[test]
fn odd_hash_picks_second_snippet() {
    let mut rng = SequenceRng::new(vec![0.0]);
    // 'a' = 97
    assert_eq!(pick_snippet(Some("a"), &mut rng), SNIPPETS[1]);
}

#[test]
fn unseeded_pick_follows_rng() {
    let mut rng = SequenceRng::new(vec![0.1, 0.9]);
    assert_eq!(pick_snippet(None, &mut rng), SNIPPETS[0]);
    assert_eq!(pick_snippet(None, &mut rng), SNIPPETS[1]);
}

#[test]
fn canned_snippets_are_full_documents() {
    for s in SNIPPETS {
        assert!(s.starts_with("<!DOCTYPE html>"));
        assert!(s.ends_with("</html>"));
        assert!(s.contains('M') && s.contains('K'));
    }
}

#[test]
fn neon_default_shows_escaped_message() {
    let html = neon_default(Some("WAKE UP <MARK>"));
    assert!(html.contains("class=\"mark\">MARK"));
    assert!(html.contains("WAKE UP &lt;MARK&gt;"));
    assert!(html.ends_with("</html>"));
    assert!(!neon_default(None).contains("class=\"message\""));
}

#[test]
fn scene_default_is_seeded() {
    // 'a' = 97 -> 97 % 3 == 1 (matrix), 'b' = 98 -> 2 (cube), 'c' = 99 -> 0 (neon)
    let mut rng = SequenceRng::new(vec![0.0]);
    assert!(scene_default(Some("a"), None, &mut rng).contains("<canvas id=\"c\">"));
    assert!(scene_default(Some("b"), None, &mut rng).contains("class=\"cube\""));
    assert_eq!(
        scene_default(Some("c"), Some("hi"), &mut rng),
        neon_default(Some("hi"))
    );
}

#[test]
fn unseeded_scene_default_follows_rng() {
    let mut rng = SequenceRng::new(vec![0.1, 0.5, 0.9]);
    assert_eq!(scene_default(None, Some("hi"), &mut rng), neon_default(Some("hi")));
    assert!(scene_default(None, None, &mut rng).contains("<canvas id=\"c\">"));
    assert!(scene_default(None, None, &mut rng).contains("class=\"cube\""));
}
