use std::io::Cursor;

use anyhow::Context;

use crate::foundation::error::{MarkError, MarkResult};

/// Parse SVG text into a `usvg` tree with system fonts loaded.
pub fn parse_svg(svg: &str) -> MarkResult<usvg::Tree> {
    let mut opts = usvg::Options::default();
    opts.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize SVG text and encode it as PNG, scaling the intrinsic size by `scale`.
pub fn render_png(svg: &str, scale: f32) -> MarkResult<Vec<u8>> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(MarkError::validation("png scale must be positive"));
    }
    let tree = parse_svg(svg)?;
    let size = tree.size();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;

    const MAX_DIM: u32 = 8_192;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(MarkError::validation(format!(
            "png size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| MarkError::validation("failed to allocate pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied pixels; PNG wants straight alpha.
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| MarkError::validation("pixel buffer size mismatch"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/artwork/raster.rs"]
mod tests;
