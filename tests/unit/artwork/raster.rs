use super::*;
use crate::artwork::svg::{ArtworkStyle, HEIGHT, WIDTH, render_svg};

#[test]
fn parse_ok_and_err() {
    parse_svg(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"></svg>"#).unwrap();
    assert!(parse_svg("<svg").is_err());
}

#[test]
fn every_pattern_parses() {
    for n in 0..3u64 {
        let tree = parse_svg(&render_svg(ArtworkStyle::from_selector(n))).unwrap();
        assert_eq!(tree.size().width() as u32, WIDTH);
        assert_eq!(tree.size().height() as u32, HEIGHT);
    }
}

#[test]
fn png_has_scaled_dimensions() {
    let svg = render_svg(ArtworkStyle::from_selector(1));
    let png = render_png(&svg, 0.5).unwrap();
    let img = image::load_from_memory(&png).unwrap();
    assert_eq!(img.width(), WIDTH / 2);
    assert_eq!(img.height(), HEIGHT / 2);
}

#[test]
fn geometric_background_uses_primary_color() {
    // Selector 1: primary "#fb5607"; the corner pixel at (799, 599) is outside every stripe.
    let svg = render_svg(ArtworkStyle::from_selector(1));
    let png = render_png(&svg, 1.0).unwrap();
    let img = image::load_from_memory(&png).unwrap().to_rgba8();
    let px = img.get_pixel(WIDTH - 1, HEIGHT - 1);
    assert_eq!(px.0, [0xfb, 0x56, 0x07, 0xff]);
}

#[test]
fn rejects_bad_scale() {
    let svg = render_svg(ArtworkStyle::from_selector(0));
    assert!(render_png(&svg, 0.0).is_err());
    assert!(render_png(&svg, f32::NAN).is_err());
}
