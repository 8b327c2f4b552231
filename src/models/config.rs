use std::path::{Path, PathBuf};

use mono_bitmap::{DitherMode, LumaWeighting, RowPadding};
use serde::Deserialize;

use crate::error::ConvertError;

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_FILE_ENV: &str = "CONFIG_FILE";

/// Application configuration loaded from a YAML file.
///
/// Every field is optional; an empty file yields the defaults.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Floyd-Steinberg when true, plain threshold when false
    #[serde(default = "default_dither")]
    pub dither: bool,

    /// Policy for widths that are not a multiple of 8
    #[serde(default)]
    pub row_padding: PaddingSetting,

    /// Greyscale weighting
    #[serde(default)]
    pub luma: LumaSetting,

    /// Wrap the literal in a C declaration with this name
    #[serde(default)]
    pub symbol: Option<String>,
}

fn default_dither() -> bool {
    true
}

/// Row padding as spelled in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PaddingSetting {
    /// Zero-pad the last byte of each row
    #[default]
    Pad,
    /// Drop trailing columns (matches older bitmaps)
    Truncate,
}

impl From<PaddingSetting> for RowPadding {
    fn from(setting: PaddingSetting) -> Self {
        match setting {
            PaddingSetting::Pad => RowPadding::Pad,
            PaddingSetting::Truncate => RowPadding::Truncate,
        }
    }
}

/// Greyscale weighting as spelled in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LumaSetting {
    /// BT.601 weights divided by 3 (darker, matches older bitmaps)
    #[default]
    Compatible,
    /// Plain BT.601 weights
    Bt601,
}

impl From<LumaSetting> for LumaWeighting {
    fn from(setting: LumaSetting) -> Self {
        match setting {
            LumaSetting::Compatible => LumaWeighting::Compatible,
            LumaSetting::Bt601 => LumaWeighting::Bt601,
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text. `path` is only used for errors.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, ConvertError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|source| ConvertError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from a file. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content, path)?;
        tracing::info!(
            path = %path.display(),
            dither = config.dither,
            row_padding = ?config.row_padding,
            luma = ?config.luma,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load from `explicit`, else from `$CONFIG_FILE`, else use defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConvertError> {
        let from_env = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);
        match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn dither_mode(&self) -> DitherMode {
        if self.dither {
            DitherMode::FloydSteinberg
        } else {
            DitherMode::Threshold
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dither: default_dither(),
            row_padding: PaddingSetting::default(),
            luma: LumaSetting::default(),
            symbol: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Result<AppConfig, ConvertError> {
        AppConfig::from_yaml(yaml, Path::new("test.yaml"))
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert!(config.dither);
        assert_eq!(config.row_padding, PaddingSetting::Pad);
        assert_eq!(config.luma, LumaSetting::Compatible);
        assert_eq!(config.symbol, None);
        assert_eq!(config.dither_mode(), DitherMode::FloydSteinberg);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse("").unwrap(), AppConfig::default());
        assert_eq!(parse("\n  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_full_config() {
        let yaml = r#"
dither: false
row_padding: truncate
luma: bt601
symbol: splash_logo
"#;
        let config = parse(yaml).unwrap();
        assert!(!config.dither);
        assert_eq!(config.dither_mode(), DitherMode::Threshold);
        assert_eq!(config.row_padding, PaddingSetting::Truncate);
        assert_eq!(config.luma, LumaSetting::Bt601);
        assert_eq!(config.symbol.as_deref(), Some("splash_logo"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse("row_padding: truncate\n").unwrap();
        assert!(config.dither);
        assert_eq!(config.row_padding, PaddingSetting::Truncate);
        assert_eq!(config.luma, LumaSetting::Compatible);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse("dithering: true\n").unwrap_err();
        match err {
            ConvertError::Config { path, .. } => assert_eq!(path, Path::new("test.yaml")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_padding_rejected() {
        assert!(matches!(
            parse("row_padding: round\n"),
            Err(ConvertError::Config { .. })
        ));
    }

    #[test]
    fn test_settings_map_to_core_types() {
        assert_eq!(RowPadding::from(PaddingSetting::Pad), RowPadding::Pad);
        assert_eq!(RowPadding::from(PaddingSetting::Truncate), RowPadding::Truncate);
        assert_eq!(
            LumaWeighting::from(LumaSetting::Compatible),
            LumaWeighting::Compatible
        );
        assert_eq!(LumaWeighting::from(LumaSetting::Bt601), LumaWeighting::Bt601);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = AppConfig::load(Path::new("/nonexistent/esther.yaml")).unwrap_err();
        assert!(matches!(err, ConvertError::Io(_)));
    }
}
