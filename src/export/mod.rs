use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::codec::raster::to_png;
use crate::codec::svg::to_svg_document;
use crate::config::model::LogoConfig;
use crate::foundation::core::Canvas;
use crate::foundation::error::LogoResult;
use crate::layout::engine::layout;

/// Which palette pairing a file belongs to; becomes the filename suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Dark,
    Light,
}

impl Variant {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Dark => "_dark",
            Self::Light => "_light",
        }
    }
}

/// Filename stem for an export: sanitized `{textMain}_{textSecondary}{suffix}`.
/// Characters outside `[A-Za-z0-9_-]` become `_`; fully empty text falls back to
/// `"logo"` so exports always have a usable name.
pub fn export_basename(config: &LogoConfig, variant: Variant) -> String {
    let main = sanitize(&config.text_main);
    let secondary = sanitize(&config.text_secondary);
    let stem = match (main.is_empty(), secondary.is_empty()) {
        (true, true) => "logo".to_string(),
        (false, true) => main,
        (true, false) => secondary,
        (false, false) => format!("{main}_{secondary}"),
    };
    format!("{stem}{}", variant.suffix())
}

fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim_matches('_')
        .to_string()
}

/// Render `config` and write the SVG export into `dir`. Returns the written path.
#[tracing::instrument(skip(config, display))]
pub fn write_svg(
    config: &LogoConfig,
    variant: Variant,
    display: Canvas,
    dir: &Path,
) -> LogoResult<PathBuf> {
    let svg = to_svg_document(&layout(config), display);
    let path = dir.join(format!("{}.svg", export_basename(config, variant)));
    write_file(&path, svg.as_bytes())?;
    Ok(path)
}

/// Render `config` and write the PNG export (at 4x `display`) into `dir`.
#[tracing::instrument(skip(config, display))]
pub fn write_png(
    config: &LogoConfig,
    variant: Variant,
    display: Canvas,
    dir: &Path,
) -> LogoResult<PathBuf> {
    let png = to_png(&layout(config), display)?;
    let path = dir.join(format!("{}.png", export_basename(config, variant)));
    write_file(&path, &png)?;
    Ok(path)
}

fn write_file(path: &Path, bytes: &[u8]) -> LogoResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))
            .map_err(crate::LogoError::Other)?;
    }
    std::fs::write(path, bytes)
        .with_context(|| format!("write '{}'", path.display()))
        .map_err(crate::LogoError::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_joins_sanitized_parts_with_suffix() {
        let config = LogoConfig::default();
        assert_eq!(export_basename(&config, Variant::Dark), "Dimo_V_dark");
        assert_eq!(export_basename(&config, Variant::Light), "Dimo_V_light");
    }

    #[test]
    fn basename_sanitizes_hostile_text() {
        let config = LogoConfig {
            text_main: "Di/mo & Co.".to_string(),
            text_secondary: "<V>".to_string(),
            ..LogoConfig::default()
        };
        assert_eq!(
            export_basename(&config, Variant::Dark),
            "Di_mo___Co_V_dark"
        );
    }

    #[test]
    fn basename_falls_back_when_text_is_empty() {
        let config = LogoConfig {
            text_main: String::new(),
            text_secondary: String::new(),
            ..LogoConfig::default()
        };
        assert_eq!(export_basename(&config, Variant::Light), "logo_light");
    }

    #[test]
    fn write_svg_creates_file_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_svg(
            &LogoConfig::default(),
            Variant::Dark,
            Canvas { width: 800, height: 400 },
            dir.path(),
        )
        .unwrap();
        assert!(path.ends_with("Dimo_V_dark.svg"));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("<svg"));
    }
}
