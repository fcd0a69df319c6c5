use crate::foundation::core::{Canvas, Point};

/// Ordered, back-to-front list of drawable nodes on the fixed logical canvas.
///
/// Node order is part of the contract: the background rectangle first, then text
/// nodes in fixed emission order. Two scene graphs compare field-for-field equal
/// exactly when the codecs produce identical output for them.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneGraph {
    /// Logical canvas the node geometry is expressed in.
    pub canvas: Canvas,
    pub nodes: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Node {
    /// Full-canvas solid fill, always emitted first.
    Background { fill: String },
    Text(TextNode),
}

/// Font weight of a text node; the name/symbol row is heavy, the tagline bold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum FontWeight {
    Black,
    Bold,
}

impl FontWeight {
    /// SVG `font-weight` attribute value.
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Black => "900",
            Self::Bold => "bold",
        }
    }
}

/// One positioned text run.
///
/// `anchor` is the segment's centerline point and is independent of font size;
/// `x_offset` and `skew_deg` are applied on top of it as translate-then-shear, so
/// the shear pivots around the translated position.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextNode {
    /// May be empty; empty content renders nothing but the node is still emitted.
    pub content: String,
    pub fill: String,
    pub font_family: String,
    pub weight: FontWeight,
    pub font_size: f64,
    pub anchor: Point,
    pub x_offset: f64,
    pub skew_deg: f64,
    /// Letter spacing in em, serialized only when present.
    pub letter_spacing_em: Option<f64>,
}

impl SceneGraph {
    /// Iterate over the text nodes in emission order.
    pub fn text_nodes(&self) -> impl Iterator<Item = &TextNode> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Text(t) => Some(t),
            Node::Background { .. } => None,
        })
    }

    /// The background fill, if the graph carries a background node.
    pub fn background_fill(&self) -> Option<&str> {
        self.nodes.iter().find_map(|n| match n {
            Node::Background { fill } => Some(fill.as_str()),
            Node::Text(_) => None,
        })
    }
}
