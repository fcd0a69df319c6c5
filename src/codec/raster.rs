use std::io::Cursor;

use anyhow::Context as _;

use crate::codec::svg::to_svg_document;
use crate::foundation::core::Canvas;
use crate::layout::scene::SceneGraph;

/// Fixed supersampling factor: the raster surface is always `4x` the requested
/// display size, so exports stay crisp under downstream scaling.
pub const SUPERSAMPLE: u32 = 4;

/// Rasterize a scene graph to PNG bytes at `display * SUPERSAMPLE` pixels.
///
/// The scene is serialized through the vector codec (unscaled logical viewBox,
/// pixel-sized width/height), parsed with usvg and drawn with resvg. The surface
/// is filled with the background color before the vector content lands on top —
/// rasterizers that treat the document background as transparent would otherwise
/// leak through. Any failure to acquire or parse the drawing surface maps to
/// [`LogoError::RenderBackendUnavailable`] and produces no partial output.
///
/// [`LogoError::RenderBackendUnavailable`]: crate::LogoError::RenderBackendUnavailable
#[tracing::instrument(skip(scene, display))]
pub fn to_png(scene: &SceneGraph, display: Canvas) -> crate::LogoResult<Vec<u8>> {
    use crate::foundation::error::LogoError;

    let surface = display.scaled(SUPERSAMPLE);
    let svg = to_svg_document(scene, surface);

    let tree = usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default())
        .map_err(|e| LogoError::render_backend_unavailable(format!("parse svg tree: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(surface.width, surface.height)
        .ok_or_else(|| LogoError::render_backend_unavailable("failed to allocate pixmap"))?;

    // Defensive fill; a background color the rasterizer cannot parse falls back
    // to opaque black rather than failing the export.
    let (r, g, b) = scene
        .background_fill()
        .and_then(parse_hex_rgb)
        .unwrap_or((0, 0, 0));
    pixmap.fill(resvg::tiny_skia::Color::from_rgba8(r, g, b, 255));

    let sx = (surface.width as f32) / tree.size().width();
    let sy = (surface.height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    encode_png(pixmap.data(), surface)
}

fn encode_png(premul_rgba: &[u8], surface: Canvas) -> crate::LogoResult<Vec<u8>> {
    let mut rgba = premul_rgba.to_vec();
    demultiply_rgba8_in_place(&mut rgba);

    let img = image::RgbaImage::from_raw(surface.width, surface.height, rgba)
        .context("pixmap size mismatch")?;

    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(out)
}

/// `#RRGGBB` / `#RRGGBBAA` to opaque rgb; anything else is `None`.
///
/// This sits on the untrusted `bgColor` path, so it must tolerate arbitrary
/// strings; the ASCII check keeps the byte slicing below safe.
fn parse_hex_rgb(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim().strip_prefix('#')?;
    if !s.is_ascii() || (s.len() != 6 && s.len() != 8) {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some((r, g, b))
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::LogoConfig;
    use crate::layout::engine::layout;

    #[test]
    fn surface_is_exactly_four_times_display_size() {
        let scene = layout(&LogoConfig::default());
        let png = to_png(&scene, Canvas { width: 200, height: 100 }).unwrap();

        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.width(), 800);
        assert_eq!(img.height(), 400);
    }

    #[test]
    fn background_is_composited_under_content() {
        let scene = layout(&LogoConfig::default());
        let png = to_png(&scene, Canvas { width: 50, height: 25 }).unwrap();

        let img = image::load_from_memory(&png).unwrap().to_rgba8();
        // Default background is opaque black; corners are never covered by text.
        let corner = img.get_pixel(0, 0);
        assert_eq!(corner.0, [0, 0, 0, 255]);
    }

    #[test]
    fn malformed_background_color_falls_back_instead_of_failing() {
        let mut config = LogoConfig::default();
        config.palette.bg_color = "definitely-not-a-color".to_string();
        let scene = layout(&config);
        let png = to_png(&scene, Canvas { width: 40, height: 20 }).unwrap();
        assert!(!png.is_empty());
    }

    #[test]
    fn parse_hex_rgb_accepts_rgb_and_rgba_forms() {
        assert_eq!(parse_hex_rgb("#DC2626"), Some((0xDC, 0x26, 0x26)));
        assert_eq!(parse_hex_rgb("#DC262680"), Some((0xDC, 0x26, 0x26)));
        assert_eq!(parse_hex_rgb("red"), None);
        assert_eq!(parse_hex_rgb("#FFF"), None);
    }

    #[test]
    fn parse_hex_rgb_tolerates_non_ascii_input() {
        // Six bytes but not six ASCII hex digits; must be None, never a panic.
        assert_eq!(parse_hex_rgb("#aébcd"), None);
        assert_eq!(parse_hex_rgb("#ééé"), None);
    }

    #[test]
    fn non_ascii_background_color_does_not_panic() {
        let mut config = LogoConfig::default();
        config.palette.bg_color = "#aébcd".to_string();
        let scene = layout(&config);
        let png = to_png(&scene, Canvas { width: 40, height: 20 }).unwrap();
        assert!(!png.is_empty());
    }

    #[test]
    fn demultiply_inverts_premultiply() {
        // 50% alpha mid gray, premultiplied.
        let mut px = vec![64u8, 64, 64, 128];
        demultiply_rgba8_in_place(&mut px);
        assert_eq!(px[3], 128);
        assert!((px[0] as i32 - 128).abs() <= 1);
    }
}
