use std::fmt::Write as _;

use crate::foundation::core::Canvas;
use crate::layout::scene::{Node, SceneGraph, TextNode};

/// Serialize a scene graph to a self-contained SVG document.
///
/// The `viewBox` is always the logical canvas; `display` only sets the requested
/// `width`/`height` attributes, so geometry is independent of output pixel size.
/// The background appears twice: as a document-level `style` (for viewers that
/// ignore shape nodes) and as an explicit `<rect>`. Attribute order is fixed and
/// number formatting is stable, so equal scene graphs serialize byte-identically.
pub fn to_svg_document(scene: &SceneGraph, display: Canvas) -> String {
    let mut out = String::with_capacity(1024);

    let bg = scene.background_fill().unwrap_or("none");
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="background-color: {}">"#,
        scene.canvas.width,
        scene.canvas.height,
        display.width,
        display.height,
        escape_attr(bg),
    );
    out.push('\n');

    for node in &scene.nodes {
        match node {
            Node::Background { fill } => {
                let _ = write!(
                    out,
                    r#"  <rect width="{}" height="{}" fill="{}"/>"#,
                    scene.canvas.width,
                    scene.canvas.height,
                    escape_attr(fill),
                );
                out.push('\n');
            }
            Node::Text(t) => {
                write_text(&mut out, t);
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn write_text(out: &mut String, t: &TextNode) {
    // Translate first, then shear, so the shear pivots around the anchored
    // position rather than the document origin.
    let _ = write!(
        out,
        r#"  <text transform="translate({} {}) skewX({})" fill="{}" font-family="{}" font-weight="{}" font-size="{}" text-anchor="middle" dominant-baseline="middle""#,
        fmt_num(t.anchor.x + t.x_offset),
        fmt_num(t.anchor.y),
        fmt_num(t.skew_deg),
        escape_attr(&t.fill),
        escape_attr(&t.font_family),
        t.weight.as_svg(),
        fmt_num(t.font_size),
    );
    if let Some(spacing) = t.letter_spacing_em {
        let _ = write!(out, r#" letter-spacing="{}em""#, fmt_num(spacing));
    }
    let _ = write!(out, ">{}</text>", escape_text(&t.content));
    out.push('\n');
}

/// Stable minimal-decimal formatting; Rust's f64 Display is already the shortest
/// roundtrip form, this only normalizes negative zero.
fn fmt_num(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v}")
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
