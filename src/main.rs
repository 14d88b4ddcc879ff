//! Command-line interface for pastel_recolor
//!
//! Recolors one background image and prints the paths it wrote.

use std::io::Write;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use pastel_recolor::constants::naming;
use pastel_recolor::{recolor_background, RecolorConfig};

/// Recolor a watercolor background toward a pastel hue
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input image
    #[arg(default_value = naming::DEFAULT_INPUT, value_hint = clap::ValueHint::FilePath)]
    input: PathBuf,

    /// JSON configuration file (missing fields use defaults)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Target hue color, e.g. #6c6389
    #[arg(long)]
    target: Option<String>,

    /// Tint background color, e.g. #fbf6f7
    #[arg(long)]
    tint: Option<String>,

    /// Saturation multiplier for recolored pixels
    #[arg(long)]
    saturation_scale: Option<f32>,

    /// Pixels with R, G and B all above this (0.0-1.0) are left white
    #[arg(long)]
    white_threshold: Option<f32>,

    /// Lossy WebP quality (0-100)
    #[arg(long)]
    webp_quality: Option<f32>,

    /// Write the effective configuration as JSON and exit
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    write_config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn effective_config(&self) -> Result<RecolorConfig> {
        let mut config = match &self.config {
            Some(path) => RecolorConfig::from_json_file(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => RecolorConfig::default(),
        };

        if let Some(target) = &self.target {
            config.target_hex = target.clone();
        }
        if let Some(tint) = &self.tint {
            config.tint_hex = tint.clone();
        }
        if let Some(scale) = self.saturation_scale {
            config.saturation_scale = scale;
        }
        if let Some(threshold) = self.white_threshold {
            config.white_threshold = threshold;
        }
        if let Some(quality) = self.webp_quality {
            config.webp_quality = quality;
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "[{style}{}{style:#} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = cli.effective_config()?;

    if let Some(path) = &cli.write_config {
        config.to_json_file(path)?;
        println!("Configuration saved to {}", path.display());
        return Ok(());
    }

    match recolor_background(&cli.input, &config) {
        Ok(outputs) => {
            println!("Processed: {}", cli.input.display());
            println!("Saved files:");
            for (key, path) in outputs.entries() {
                println!(" - {}: {}", key, path.display());
            }
            Ok(())
        }
        Err(error) if error.is_input_error() => {
            eprintln!("{}", error.user_message());
            process::exit(1);
        }
        Err(error) => Err(error).context(format!("recoloring {}", cli.input.display())),
    }
}
