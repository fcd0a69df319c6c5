//! Logoforge is a parametric wordmark logo studio.
//!
//! The pipeline turns a declarative parameter set (`LogoConfig`) into files:
//!
//! 1. **Layout**: `LogoConfig -> SceneGraph` (pure, deterministic; fixed 400x200 logical canvas)
//! 2. **Vector codec**: `SceneGraph -> SVG` (byte-stable serialization)
//! 3. **Raster codec**: `SceneGraph -> PNG` at a fixed 4x supersampling factor
//! 4. **Synthesis** (optional): an AI backend proposes new `LogoConfig` values,
//!    re-validated at the boundary before they reach the layout engine
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: layout and SVG serialization are pure and stable
//!   for a given input, so the SVG and PNG exports of one config always agree.
//! - **Immutable configs**: every edit, palette swap, or applied AI variation is a
//!   whole-value replacement; a failed operation leaves prior state untouched.
#![forbid(unsafe_code)]

mod codec;
mod config;
mod export;
mod foundation;
mod layout;
mod studio;
mod synth;

pub use codec::raster::{SUPERSAMPLE, to_png};
pub use codec::svg::to_svg_document;
pub use config::file::LogoDocument;
pub use config::model::{ColorPalette, LayoutParams, LogoConfig, OffsetSkewParams, SpacingParams};
pub use export::{Variant, export_basename, write_png, write_svg};
pub use foundation::core::{Canvas, LOGICAL_CANVAS, LOGICAL_HEIGHT, LOGICAL_WIDTH, Point};
pub use foundation::error::{LogoError, LogoResult};
pub use layout::engine::layout;
pub use layout::scene::{FontWeight, Node, SceneGraph, TextNode};
pub use studio::Studio;
pub use synth::gemini::GeminiSynthesizer;
pub use synth::{VariationSynthesizer, parse_config, parse_variations};
