use crate::foundation::error::{LogoError, LogoResult};

/// Five-slot color scheme of one logo variant.
///
/// Values are carried verbatim into SVG `fill` attributes; the layout engine never
/// interprets color syntax, so producers (the edit surface or the synthesizer) are
/// responsible for supplying valid CSS color values. Malformed values degrade at
/// raster time, they never panic.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    /// Fill of the leading letter and the symbol accent.
    pub color_main: String,
    /// Fill of the remainder of the main name.
    pub color_main_rest: String,
    /// Fill of the secondary symbol.
    pub color_secondary: String,
    /// Fill of the tagline row.
    pub color_tagline: String,
    /// Document background fill.
    pub bg_color: String,
}

impl ColorPalette {
    /// Default dark-variant palette (red accent on black).
    pub fn dark_default() -> Self {
        Self {
            color_main: "#DC2626".to_string(),
            color_main_rest: "#FFFFFF".to_string(),
            color_secondary: "#DC2626".to_string(),
            color_tagline: "#FFFFFF".to_string(),
            bg_color: "#000000".to_string(),
        }
    }

    /// Default light-variant palette (red accent on white).
    pub fn light_default() -> Self {
        Self {
            color_main: "#DC2626".to_string(),
            color_main_rest: "#000000".to_string(),
            color_secondary: "#DC2626".to_string(),
            color_tagline: "#000000".to_string(),
            bg_color: "#FFFFFF".to_string(),
        }
    }
}

/// Per-segment geometry of the offset/skew layout mode. Logical units, skew in
/// degrees, letter spacing in em. Values are applied as given; the engine does not
/// clamp out-of-range offsets or skews.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetSkewParams {
    pub font_size_main_first: f64,
    pub skew_main_first: f64,
    pub x_offset_main_first: f64,

    pub font_size_main_rest: f64,
    pub skew_main_rest: f64,
    pub x_offset_main_rest: f64,
    #[serde(default)]
    pub letter_spacing_main_rest: f64,

    pub font_size_secondary: f64,
    pub skew_secondary: f64,
    pub x_offset_secondary: f64,

    pub font_size_tagline: f64,
    pub tagline_offset: f64,
    #[serde(default)]
    pub letter_spacing_tagline: f64,
    pub skew_tagline: f64,
}

/// Geometry of the simpler shared-spacing layout mode: one font size and letter
/// spacing for the whole main run, a fixed gap before the symbol.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingParams {
    pub font_size_main: f64,
    pub font_size_tagline: f64,
    #[serde(default)]
    pub letter_spacing: f64,
    pub gap: f64,
    pub tagline_offset: f64,
}

/// One of the two sibling layout schemas, discriminated by field presence so the
/// original flat offset/skew JSON deserializes unchanged.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum LayoutParams {
    OffsetSkew(OffsetSkewParams),
    Spacing(SpacingParams),
}

/// The full declarative parameter set for one logo render.
///
/// `LogoConfig` is immutable value data: edits, palette swaps and applied AI
/// variations all produce a new value, nothing mutates one in place. The wire
/// shape is the original flat camelCase object (palette and layout fields
/// flattened alongside the text fields).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoConfig {
    /// Main name; may be empty (the engine renders nothing for empty segments).
    pub text_main: String,
    /// Secondary symbol, usually a single glyph.
    pub text_secondary: String,
    /// Tagline row below the name.
    pub text_tagline: String,
    /// CSS font-family stack.
    pub font_family: String,
    #[serde(flatten)]
    pub palette: ColorPalette,
    #[serde(flatten)]
    pub layout: LayoutParams,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            text_main: "Dimo".to_string(),
            text_secondary: "V".to_string(),
            text_tagline: "CONSTRUCTION".to_string(),
            font_family: "Arial, Helvetica, sans-serif".to_string(),
            palette: ColorPalette::dark_default(),
            layout: LayoutParams::OffsetSkew(OffsetSkewParams {
                font_size_main_first: 85.0,
                skew_main_first: 0.0,
                x_offset_main_first: -65.0,

                font_size_main_rest: 85.0,
                skew_main_rest: 0.0,
                x_offset_main_rest: 10.0,
                letter_spacing_main_rest: 0.0,

                font_size_secondary: 85.0,
                skew_secondary: -15.0,
                x_offset_secondary: 85.0,

                font_size_tagline: 20.0,
                tagline_offset: 55.0,
                letter_spacing_tagline: 0.35,
                skew_tagline: 0.0,
            }),
        }
    }
}

impl LogoConfig {
    /// Derive a variant sharing every structural field but carrying `palette`.
    pub fn with_palette(&self, palette: ColorPalette) -> Self {
        Self {
            palette,
            ..self.clone()
        }
    }

    /// Check the invariants an untrusted producer must satisfy before this config
    /// may reach the layout engine: all numbers finite, font family non-empty.
    /// Out-of-range skews and offsets are accepted as-is.
    pub fn validate(&self) -> LogoResult<()> {
        if self.font_family.trim().is_empty() {
            return Err(LogoError::validation("fontFamily must be non-empty"));
        }

        let numbers: Vec<(&str, f64)> = match &self.layout {
            LayoutParams::OffsetSkew(p) => vec![
                ("fontSizeMainFirst", p.font_size_main_first),
                ("skewMainFirst", p.skew_main_first),
                ("xOffsetMainFirst", p.x_offset_main_first),
                ("fontSizeMainRest", p.font_size_main_rest),
                ("skewMainRest", p.skew_main_rest),
                ("xOffsetMainRest", p.x_offset_main_rest),
                ("letterSpacingMainRest", p.letter_spacing_main_rest),
                ("fontSizeSecondary", p.font_size_secondary),
                ("skewSecondary", p.skew_secondary),
                ("xOffsetSecondary", p.x_offset_secondary),
                ("fontSizeTagline", p.font_size_tagline),
                ("taglineOffset", p.tagline_offset),
                ("letterSpacingTagline", p.letter_spacing_tagline),
                ("skewTagline", p.skew_tagline),
            ],
            LayoutParams::Spacing(p) => vec![
                ("fontSizeMain", p.font_size_main),
                ("fontSizeTagline", p.font_size_tagline),
                ("letterSpacing", p.letter_spacing),
                ("gap", p.gap),
                ("taglineOffset", p.tagline_offset),
            ],
        };

        for (name, value) in numbers {
            if !value.is_finite() {
                return Err(LogoError::validation(format!(
                    "{name} must be a finite number"
                )));
            }
        }

        Ok(())
    }
}
