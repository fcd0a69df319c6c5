use crate::config::model::{LayoutParams, LogoConfig, OffsetSkewParams, SpacingParams};
use crate::foundation::core::{LOGICAL_CANVAS, NAME_ROW_LIFT, Point};
use crate::layout::scene::{FontWeight, Node, SceneGraph, TextNode};

/// Average advance width per glyph relative to font size, used to place the
/// symbol after the main run in spacing mode. An estimate is sufficient: segment
/// positions are anchor-based, not flow-based.
const AVG_GLYPH_ADVANCE: f64 = 0.62;

/// Oblique lean applied to the symbol segment in spacing mode.
const SPACING_SYMBOL_SKEW: f64 = -15.0;

/// Map a config to its scene graph.
///
/// Total, pure and deterministic: the same config always yields a field-for-field
/// identical graph. Empty segment text still emits its node (with empty content),
/// and out-of-range offsets/skews pass through unclamped; values that land
/// off-canvas clip visually, which is accepted behavior.
#[tracing::instrument(skip(config), fields(mode = mode_name(&config.layout)))]
pub fn layout(config: &LogoConfig) -> SceneGraph {
    let canvas = LOGICAL_CANVAS;
    let center = canvas.center();
    let name_anchor = Point::new(center.x, center.y - NAME_ROW_LIFT);

    let mut nodes = vec![Node::Background {
        fill: config.palette.bg_color.clone(),
    }];

    match &config.layout {
        LayoutParams::OffsetSkew(p) => {
            emit_offset_skew(config, p, name_anchor, center, &mut nodes);
        }
        LayoutParams::Spacing(p) => {
            emit_spacing(config, p, name_anchor, center, &mut nodes);
        }
    }

    SceneGraph { canvas, nodes }
}

fn mode_name(layout: &LayoutParams) -> &'static str {
    match layout {
        LayoutParams::OffsetSkew(_) => "offset-skew",
        LayoutParams::Spacing(_) => "spacing",
    }
}

fn emit_offset_skew(
    config: &LogoConfig,
    p: &OffsetSkewParams,
    name_anchor: Point,
    center: Point,
    nodes: &mut Vec<Node>,
) {
    let mut chars = config.text_main.chars();
    let first: String = chars.next().map(String::from).unwrap_or_default();
    let rest: String = chars.collect();

    nodes.push(Node::Text(TextNode {
        content: first,
        fill: config.palette.color_main.clone(),
        font_family: config.font_family.clone(),
        weight: FontWeight::Black,
        font_size: p.font_size_main_first,
        anchor: name_anchor,
        x_offset: p.x_offset_main_first,
        skew_deg: p.skew_main_first,
        letter_spacing_em: None,
    }));

    nodes.push(Node::Text(TextNode {
        content: rest,
        fill: config.palette.color_main_rest.clone(),
        font_family: config.font_family.clone(),
        weight: FontWeight::Black,
        font_size: p.font_size_main_rest,
        anchor: name_anchor,
        x_offset: p.x_offset_main_rest,
        skew_deg: p.skew_main_rest,
        letter_spacing_em: Some(p.letter_spacing_main_rest),
    }));

    nodes.push(Node::Text(TextNode {
        content: config.text_secondary.clone(),
        fill: config.palette.color_secondary.clone(),
        font_family: config.font_family.clone(),
        weight: FontWeight::Black,
        font_size: p.font_size_secondary,
        anchor: name_anchor,
        x_offset: p.x_offset_secondary,
        skew_deg: p.skew_secondary,
        letter_spacing_em: None,
    }));

    nodes.push(Node::Text(TextNode {
        content: config.text_tagline.clone(),
        fill: config.palette.color_tagline.clone(),
        font_family: config.font_family.clone(),
        weight: FontWeight::Bold,
        font_size: p.font_size_tagline,
        anchor: Point::new(center.x, center.y + p.tagline_offset),
        x_offset: 0.0,
        skew_deg: p.skew_tagline,
        letter_spacing_em: Some(p.letter_spacing_tagline),
    }));
}

fn emit_spacing(
    config: &LogoConfig,
    p: &SpacingParams,
    name_anchor: Point,
    center: Point,
    nodes: &mut Vec<Node>,
) {
    // One concatenated run plus the symbol, separated by `gap` and centered as a
    // block. Run widths are estimated from glyph counts; the estimate only moves
    // anchors, it cannot make the layout non-deterministic.
    let em = p.font_size_main * AVG_GLYPH_ADVANCE * (1.0 + p.letter_spacing);
    let main_w = em * config.text_main.chars().count() as f64;
    let symbol_w = em * config.text_secondary.chars().count() as f64;
    let total_w = main_w + p.gap + symbol_w;

    let main_center = -total_w / 2.0 + main_w / 2.0;
    let symbol_center = total_w / 2.0 - symbol_w / 2.0;

    nodes.push(Node::Text(TextNode {
        content: config.text_main.clone(),
        fill: config.palette.color_main.clone(),
        font_family: config.font_family.clone(),
        weight: FontWeight::Black,
        font_size: p.font_size_main,
        anchor: name_anchor,
        x_offset: main_center,
        skew_deg: 0.0,
        letter_spacing_em: Some(p.letter_spacing),
    }));

    nodes.push(Node::Text(TextNode {
        content: config.text_secondary.clone(),
        fill: config.palette.color_secondary.clone(),
        font_family: config.font_family.clone(),
        weight: FontWeight::Black,
        font_size: p.font_size_main,
        anchor: name_anchor,
        x_offset: symbol_center,
        skew_deg: SPACING_SYMBOL_SKEW,
        letter_spacing_em: None,
    }));

    nodes.push(Node::Text(TextNode {
        content: config.text_tagline.clone(),
        fill: config.palette.color_tagline.clone(),
        font_family: config.font_family.clone(),
        weight: FontWeight::Bold,
        font_size: p.font_size_tagline,
        anchor: Point::new(center.x, center.y + p.tagline_offset),
        x_offset: 0.0,
        skew_deg: 0.0,
        letter_spacing_em: Some(p.letter_spacing),
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::ColorPalette;

    fn spacing_config() -> LogoConfig {
        LogoConfig {
            layout: LayoutParams::Spacing(SpacingParams {
                font_size_main: 72.0,
                font_size_tagline: 18.0,
                letter_spacing: 0.05,
                gap: 24.0,
                tagline_offset: 50.0,
            }),
            ..LogoConfig::default()
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let c = LogoConfig::default();
        assert_eq!(layout(&c), layout(&c));

        let s = spacing_config();
        assert_eq!(layout(&s), layout(&s));
    }

    #[test]
    fn default_scene_has_background_and_four_text_nodes() {
        let scene = layout(&LogoConfig::default());
        assert_eq!(scene.nodes.len(), 5);
        assert!(matches!(scene.nodes[0], Node::Background { .. }));
        assert_eq!(scene.background_fill(), Some("#000000"));

        let texts: Vec<&TextNode> = scene.text_nodes().collect();
        assert_eq!(texts.len(), 4);
        assert_eq!(texts[0].content, "D");
        assert_eq!(texts[1].content, "imo");
        assert_eq!(texts[2].content, "V");
        assert_eq!(texts[3].content, "CONSTRUCTION");
    }

    #[test]
    fn name_row_is_lifted_and_tagline_dropped() {
        let scene = layout(&LogoConfig::default());
        let texts: Vec<&TextNode> = scene.text_nodes().collect();
        assert_eq!(texts[0].anchor, Point::new(200.0, 85.0));
        assert_eq!(texts[1].anchor, Point::new(200.0, 85.0));
        assert_eq!(texts[2].anchor, Point::new(200.0, 85.0));
        assert_eq!(texts[3].anchor, Point::new(200.0, 155.0));
    }

    #[test]
    fn font_size_change_keeps_anchor_fixed() {
        let base = LogoConfig::default();
        let mut big = base.clone();
        if let LayoutParams::OffsetSkew(p) = &mut big.layout {
            p.font_size_main_first = 170.0;
        }

        let a = layout(&base);
        let b = layout(&big);
        let first_a = a.text_nodes().next().unwrap();
        let first_b = b.text_nodes().next().unwrap();
        assert_eq!(first_a.anchor, first_b.anchor);
        assert_eq!(first_a.x_offset, first_b.x_offset);
        assert_ne!(first_a.font_size, first_b.font_size);
    }

    #[test]
    fn empty_main_text_emits_empty_nodes_without_panicking() {
        let c = LogoConfig {
            text_main: String::new(),
            ..LogoConfig::default()
        };
        let scene = layout(&c);
        let texts: Vec<&TextNode> = scene.text_nodes().collect();
        assert_eq!(texts.len(), 4);
        assert_eq!(texts[0].content, "");
        assert_eq!(texts[1].content, "");
        // Siblings are anchor-positioned, not flow-based: the symbol stays put.
        assert_eq!(texts[2].x_offset, 85.0);
    }

    #[test]
    fn single_char_main_text_has_empty_rest() {
        let c = LogoConfig {
            text_main: "D".to_string(),
            ..LogoConfig::default()
        };
        let texts: Vec<TextNode> = layout(&c).text_nodes().cloned().collect();
        assert_eq!(texts[0].content, "D");
        assert_eq!(texts[1].content, "");
    }

    #[test]
    fn extreme_skew_passes_through_unclamped() {
        let mut c = LogoConfig::default();
        if let LayoutParams::OffsetSkew(p) = &mut c.layout {
            p.skew_secondary = 80.0;
            p.x_offset_secondary = 900.0;
        }
        let scene = layout(&c);
        let symbol = scene.text_nodes().nth(2).unwrap();
        assert_eq!(symbol.skew_deg, 80.0);
        assert_eq!(symbol.x_offset, 900.0);
    }

    #[test]
    fn spacing_mode_emits_three_text_nodes_with_gap() {
        let scene = layout(&spacing_config());
        let texts: Vec<&TextNode> = scene.text_nodes().collect();
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[0].content, "Dimo");
        assert_eq!(texts[1].content, "V");
        assert_eq!(texts[1].skew_deg, SPACING_SYMBOL_SKEW);
        // Symbol sits to the right of the main run.
        assert!(texts[1].x_offset > texts[0].x_offset);
    }

    #[test]
    fn palette_swap_changes_only_fills() {
        let dark = LogoConfig::default();
        let light = dark.with_palette(ColorPalette::light_default());

        let a = layout(&dark);
        let b = layout(&light);
        assert_eq!(a.nodes.len(), b.nodes.len());
        assert_eq!(a.background_fill(), Some("#000000"));
        assert_eq!(b.background_fill(), Some("#FFFFFF"));

        for (na, nb) in a.text_nodes().zip(b.text_nodes()) {
            assert_eq!(na.content, nb.content);
            assert_eq!(na.anchor, nb.anchor);
            assert_eq!(na.x_offset, nb.x_offset);
            assert_eq!(na.skew_deg, nb.skew_deg);
            assert_eq!(na.font_size, nb.font_size);
            assert_eq!(na.weight, nb.weight);
            assert_eq!(na.letter_spacing_em, nb.letter_spacing_em);
        }
    }
}
