use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use esther::models::{AppConfig, LumaSetting, PaddingSetting};
use esther::rendering::encode_preview_png;
use esther::services::Converter;

#[derive(Parser)]
#[command(name = "esther", version)]
#[command(about = "Convert a PNG into a packed 1-bit bitmap literal for monochrome displays")]
struct Cli {
    /// PNG file to convert
    input: PathBuf,

    /// Write the literal to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Threshold only (disable Floyd-Steinberg)
    #[arg(long)]
    no_dither: bool,

    /// Policy for widths that are not a multiple of 8
    #[arg(long, value_enum, value_name = "MODE")]
    row_padding: Option<PaddingSetting>,

    /// Greyscale weighting
    #[arg(long, value_enum, value_name = "MODE")]
    luma: Option<LumaSetting>,

    /// Wrap the literal in a C declaration with this name
    #[arg(long, value_name = "NAME")]
    symbol: Option<String>,

    /// Also write a 1-bit PNG preview
    #[arg(long, value_name = "FILE")]
    preview: Option<PathBuf>,

    /// YAML config file (defaults to $CONFIG_FILE)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Flags win over the config file.
    fn apply_overrides(&self, config: &mut AppConfig) {
        if self.no_dither {
            config.dither = false;
        }
        if let Some(padding) = self.row_padding {
            config.row_padding = padding;
        }
        if let Some(luma) = self.luma {
            config.luma = luma;
        }
        if let Some(symbol) = &self.symbol {
            config.symbol = Some(symbol.clone());
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the literal, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "esther=warn,mono_bitmap=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let mut config =
        AppConfig::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);

    let converter = Converter::from_config(&config)?;
    let output = converter
        .convert_file(&cli.input)
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    // Encode everything before touching the filesystem
    let preview = cli
        .preview
        .as_ref()
        .map(|path| encode_preview_png(&output.bitmap).map(|png| (path, png)))
        .transpose()
        .context("Failed to encode preview")?;

    match &cli.output {
        Some(path) => std::fs::write(path, &output.text)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.text.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }

    if let Some((path, png)) = preview {
        std::fs::write(path, &png)
            .with_context(|| format!("Failed to write preview {}", path.display()))?;
        tracing::info!(path = %path.display(), bytes = png.len(), "Wrote preview");
    }

    Ok(())
}
