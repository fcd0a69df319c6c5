use std::path::Path;

use anyhow::Context as _;

use crate::config::model::{ColorPalette, LogoConfig};
use crate::foundation::error::{LogoError, LogoResult};

/// Persisted studio document: the dark config carries all structural fields, the
/// light variant stores only its palette and is merged over the dark config's
/// non-color fields at use time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LogoDocument {
    pub dark: LogoConfig,
    pub light: ColorPalette,
}

impl Default for LogoDocument {
    fn default() -> Self {
        Self {
            dark: LogoConfig::default(),
            light: ColorPalette::light_default(),
        }
    }
}

impl LogoDocument {
    /// The light-variant config: dark structure with the light palette applied.
    pub fn light_config(&self) -> LogoConfig {
        self.dark.with_palette(self.light.clone())
    }

    /// Load a document from disk. Any IO or parse failure maps to
    /// [`LogoError::InvalidConfigFile`]; the caller's state is never touched.
    pub fn load(path: &Path) -> LogoResult<Self> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| LogoError::invalid_config_file(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&data)
            .map_err(|e| LogoError::invalid_config_file(format!("{}: {e}", path.display())))
    }

    /// Write the document as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> LogoResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create config dir '{}'", parent.display()))
                .map_err(LogoError::Other)?;
        }
        let data = serde_json::to_string_pretty(self)
            .context("serialize logo document")
            .map_err(LogoError::Other)?;
        std::fs::write(path, data)
            .with_context(|| format!("write config '{}'", path.display()))
            .map_err(LogoError::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.json");

        let doc = LogoDocument::default();
        doc.save(&path).unwrap();
        let loaded = LogoDocument::load(&path).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn malformed_json_is_invalid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = LogoDocument::load(&path).unwrap_err();
        assert!(matches!(err, LogoError::InvalidConfigFile(_)));
    }

    #[test]
    fn missing_file_is_invalid_config_file() {
        let err = LogoDocument::load(Path::new("/nonexistent/logo.json")).unwrap_err();
        assert!(matches!(err, LogoError::InvalidConfigFile(_)));
    }

    #[test]
    fn light_config_merges_palette_over_dark_structure() {
        let doc = LogoDocument::default();
        let light = doc.light_config();
        assert_eq!(light.text_main, doc.dark.text_main);
        assert_eq!(light.layout, doc.dark.layout);
        assert_eq!(light.palette, doc.light);
    }
}
