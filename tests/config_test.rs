//! Loading YAML configuration from disk.

mod common;

use common::TestDir;
use esther::error::ConvertError;
use esther::models::{AppConfig, LumaSetting, PaddingSetting};
use esther::services::Converter;
use mono_bitmap::{DitherMode, LumaWeighting, RowPadding};
use pretty_assertions::assert_eq;

#[test]
fn test_load_full_config() {
    let dir = TestDir::new();
    let path = dir.file(
        "esther.yaml",
        "dither: false\nrow_padding: truncate\nluma: bt601\nsymbol: logo\n",
    );

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(
        config,
        AppConfig {
            dither: false,
            row_padding: PaddingSetting::Truncate,
            luma: LumaSetting::Bt601,
            symbol: Some("logo".to_string()),
        }
    );
}

#[test]
fn test_resolve_explicit_path() {
    let dir = TestDir::new();
    let path = dir.file("esther.yaml", "luma: bt601\n");

    let config = AppConfig::resolve(Some(&path)).unwrap();
    assert_eq!(config.luma, LumaSetting::Bt601);
    assert!(config.dither);
}

#[test]
fn test_empty_file_gives_defaults() {
    let dir = TestDir::new();
    let path = dir.file("empty.yaml", "");
    assert_eq!(AppConfig::load(&path).unwrap(), AppConfig::default());
}

#[test]
fn test_invalid_yaml_reports_path() {
    let dir = TestDir::new();
    let path = dir.file("broken.yaml", "dither: [unclosed\n");

    match AppConfig::load(&path).unwrap_err() {
        ConvertError::Config { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_config_drives_converter() {
    let dir = TestDir::new();
    let path = dir.file("esther.yaml", "dither: false\nrow_padding: truncate\n");

    let config = AppConfig::load(&path).unwrap();
    let converter = Converter::from_config(&config).unwrap();

    assert_eq!(converter.settings().mode(), DitherMode::Threshold);
    assert_eq!(converter.settings().padding(), RowPadding::Truncate);
    assert_eq!(converter.settings().weighting(), LumaWeighting::Compatible);
}

#[test]
fn test_invalid_symbol_in_config_rejected() {
    let dir = TestDir::new();
    let path = dir.file("esther.yaml", "symbol: \"my-logo\"\n");

    let config = AppConfig::load(&path).unwrap();
    assert!(matches!(
        Converter::from_config(&config),
        Err(ConvertError::InvalidSymbol(_))
    ));
}
