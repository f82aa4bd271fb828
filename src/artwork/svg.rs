use std::fmt::Write as _;

use kurbo::{Point, Vec2};

use crate::foundation::hash::seed_hash;

/// Canvas width of generated artwork.
pub const WIDTH: u32 = 800;
/// Canvas height of generated artwork.
pub const HEIGHT: u32 = 600;

/// Accent colors, indexed by `n % len` and `(n + 1) % len`.
pub const PALETTE: [&str; 5] = ["#ff006e", "#fb5607", "#ffbe0b", "#8338ec", "#3a86ff"];

/// Background pattern of a generated image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Radial gradient with a ring of circles.
    GradientBurst,
    /// Overlapping translucent stripes.
    Geometric,
    /// Vertical gradient with quadratic wave lines.
    Wave,
}

impl Pattern {
    /// Patterns in selection order.
    pub const ALL: [Pattern; 3] = [Pattern::GradientBurst, Pattern::Geometric, Pattern::Wave];

    /// Pattern for selector `n`.
    pub fn from_selector(n: u64) -> Self {
        Self::ALL[(n % Self::ALL.len() as u64) as usize]
    }
}

/// Everything that varies between generated images.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArtworkStyle {
    /// Background pattern.
    pub pattern: Pattern,
    /// First accent color.
    pub primary: &'static str,
    /// Second accent color.
    pub secondary: &'static str,
}

impl ArtworkStyle {
    /// Style for selector `n`.
    pub fn from_selector(n: u64) -> Self {
        let len = PALETTE.len() as u64;
        Self {
            pattern: Pattern::from_selector(n),
            primary: PALETTE[(n % len) as usize],
            secondary: PALETTE[(n.wrapping_add(1) % len) as usize],
        }
    }
}

/// Selector for an optional seed: the seed hash, or the current unix time in milliseconds.
pub fn selector(seed: Option<&str>) -> u64 {
    match seed {
        Some(s) => seed_hash(s),
        None => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0),
    }
}

/// Generate the image for an optional seed.
pub fn mark_svg(seed: Option<&str>) -> String {
    render_svg(ArtworkStyle::from_selector(selector(seed)))
}

fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn mark_text(out: &mut String, size: u32, extra: &str) {
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" font-family=\"Arial Black, Arial, sans-serif\" font-size=\"{size}\" \
         font-weight=\"900\" fill=\"white\" text-anchor=\"middle\" dominant-baseline=\"middle\"{extra}>MARK</text>",
        WIDTH / 2,
        HEIGHT / 2,
    );
}

/// Render the SVG document for `style`.
pub fn render_svg(style: ArtworkStyle) -> String {
    let ArtworkStyle {
        pattern,
        primary,
        secondary,
    } = style;
    let mut out = format!(
        "<svg width=\"{WIDTH}\" height=\"{HEIGHT}\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" xmlns=\"http://www.w3.org/2000/svg\">"
    );

    match pattern {
        Pattern::GradientBurst => {
            let _ = write!(
                out,
                "<defs><radialGradient id=\"grad\">\
                 <stop offset=\"0%\" stop-color=\"{primary}\" stop-opacity=\"1\"/>\
                 <stop offset=\"100%\" stop-color=\"{secondary}\" stop-opacity=\"1\"/>\
                 </radialGradient></defs>\
                 <rect width=\"{WIDTH}\" height=\"{HEIGHT}\" fill=\"url(#grad)\"/>"
            );
            mark_text(&mut out, 120, "");
            let center = Point::new(f64::from(WIDTH) / 2.0, f64::from(HEIGHT) / 2.0);
            for i in 0..20u32 {
                let angle = f64::from(i) * std::f64::consts::PI / 10.0;
                let p = center + Vec2::from_angle(angle) * 200.0;
                let _ = write!(
                    out,
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"white\" stroke-width=\"2\" opacity=\"{}\"/>",
                    num(p.x),
                    num(p.y),
                    20 + i * 2,
                    num(1.0 - f64::from(i) * 0.04),
                );
            }
        }
        Pattern::Geometric => {
            let _ = write!(
                out,
                "<rect width=\"{WIDTH}\" height=\"{HEIGHT}\" fill=\"{primary}\"/>"
            );
            for i in 0..10u32 {
                let _ = write!(
                    out,
                    "<rect x=\"{}\" y=\"0\" width=\"40\" height=\"{HEIGHT}\" fill=\"{secondary}\" opacity=\"0.5\"/>\
                     <rect x=\"0\" y=\"{}\" width=\"{WIDTH}\" height=\"30\" fill=\"{secondary}\" opacity=\"0.5\"/>",
                    i * 80,
                    i * 60,
                );
            }
            mark_text(
                &mut out,
                140,
                &format!(" stroke=\"{secondary}\" stroke-width=\"3\""),
            );
        }
        Pattern::Wave => {
            let _ = write!(
                out,
                "<defs><linearGradient id=\"wave\" x1=\"0%\" y1=\"0%\" x2=\"0%\" y2=\"100%\">\
                 <stop offset=\"0%\" stop-color=\"{primary}\" stop-opacity=\"1\"/>\
                 <stop offset=\"100%\" stop-color=\"{secondary}\" stop-opacity=\"1\"/>\
                 </linearGradient></defs>\
                 <rect width=\"{WIDTH}\" height=\"{HEIGHT}\" fill=\"url(#wave)\"/>"
            );
            for i in 0..5u32 {
                let base = 300 + i * 30;
                let crest = 250 + i * 30;
                let _ = write!(
                    out,
                    "<path d=\"M 0 {base} Q 200 {crest} 400 {base} T 800 {base}\" fill=\"none\" \
                     stroke=\"white\" stroke-width=\"3\" opacity=\"{}\"/>",
                    num(1.0 - f64::from(i) * 0.15),
                );
            }
            mark_text(&mut out, 150, "");
        }
    }

    out.push_str("</svg>");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/artwork/svg.rs"]
mod tests;
