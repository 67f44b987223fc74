use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::syllable::AccentStyle;

/// Options fixed when an [`Engine`](crate::Engine) is created.
///
/// ```toml
/// accent = "legacy"
/// echo_key_on_removal = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tone placement convention for every syllable the engine composes.
    pub accent: AccentStyle,
    /// After a key toggles its own mark off (`ass`), also insert the key literally (`as`).
    pub echo_key_on_removal: bool,
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(msg = "config_loaded", path = %path.display(), ?config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.accent, AccentStyle::Modern);
        assert!(!config.echo_key_on_removal);
    }

    #[test]
    fn parses_all_fields() {
        let config = EngineConfig::from_toml_str(
            r#"
            accent = "legacy"
            echo_key_on_removal = true
            "#,
        )
        .unwrap();
        assert_eq!(config.accent, AccentStyle::Legacy);
        assert!(config.echo_key_on_removal);
    }

    #[test]
    fn rejects_unknown_accent() {
        let err = EngineConfig::from_toml_str(r#"accent = "classic""#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = EngineConfig::load("/nonexistent/telex.toml").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/telex.toml"));
    }
}
