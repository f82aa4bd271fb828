use super::*;

#[test]
fn style_for_abc() {
    // 294 % 5 == 4, 295 % 5 == 0, 294 % 3 == 0
    let style = ArtworkStyle::from_selector(seed_hash("abc"));
    assert_eq!(style.primary, "#3a86ff");
    assert_eq!(style.secondary, "#ff006e");
    assert_eq!(style.pattern, Pattern::GradientBurst);
}

#[test]
fn pattern_cycles_by_selector() {
    assert_eq!(Pattern::from_selector(0), Pattern::GradientBurst);
    assert_eq!(Pattern::from_selector(1), Pattern::Geometric);
    assert_eq!(Pattern::from_selector(2), Pattern::Wave);
    assert_eq!(Pattern::from_selector(3), Pattern::GradientBurst);
}

#[test]
fn seeded_output_is_deterministic() {
    assert_eq!(mark_svg(Some("mark")), mark_svg(Some("mark")));
}

#[test]
fn every_pattern_renders_text_and_closes() {
    for n in 0..3u64 {
        let svg = render_svg(ArtworkStyle::from_selector(n));
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(">MARK</text>"));
    }
}

#[test]
fn burst_has_twenty_rings() {
    let svg = render_svg(ArtworkStyle::from_selector(0));
    assert_eq!(svg.matches("<circle ").count(), 20);
    // First ring sits at angle 0, radius 200 from the center.
    assert!(svg.contains("<circle cx=\"600\" cy=\"300\" r=\"20\""));
}

#[test]
fn geometric_has_stripes() {
    let svg = render_svg(ArtworkStyle::from_selector(1));
    assert_eq!(svg.matches("opacity=\"0.5\"").count(), 20);
}

#[test]
fn wave_has_five_lines() {
    let svg = render_svg(ArtworkStyle::from_selector(2));
    assert_eq!(svg.matches("<path ").count(), 5);
    assert!(svg.contains("M 0 300 Q 200 250 400 300 T 800 300"));
}

#[test]
fn number_formatting_is_compact() {
    assert_eq!(num(600.0), "600");
    assert_eq!(num(0.96), "0.96");
    assert_eq!(num(-0.0001), "0");
    assert_eq!(num(590.211_303_259), "590.211");
}
