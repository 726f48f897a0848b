//! Command-line and environment configuration.
//!
//! Every flag can also be set through an environment variable, and a `.env`
//! file in the working directory is loaded before arguments are parsed.
//!
//! - `--endpoint` / `PET_GALLERY_ENDPOINT`: base address serving `/pets`
//!   (default: the public pet listing)
//! - `--output-dir` / `PET_GALLERY_OUTPUT_DIR`: where downloads are written
//!   (default: `.`, created if missing)
//! - `--log-format` / `LOG_FORMAT`: `text` or `json` (default: `text`)
//! - `RUST_LOG`: log filter (default: `info`)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pet_gallery_core::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "pet-gallery", version, about = "Browse, filter and download pet images")]
pub struct Config {
    /// Base address of the pet listing.
    #[arg(long, env = "PET_GALLERY_ENDPOINT", default_value = DEFAULT_BASE_URL, value_parser = parse_endpoint)]
    pub endpoint: String,

    /// Directory downloaded images are written to.
    #[arg(long, env = "PET_GALLERY_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Config {
    /// Load `.env`, parse the process arguments, and prepare the output
    /// directory.
    pub fn load() -> Result<Self> {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();
        Self::parse().prepare()
    }

    fn prepare(self) -> Result<Self> {
        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                self.output_dir.display()
            )
        })?;
        Ok(self)
    }
}

fn parse_endpoint(raw: &str) -> Result<String, String> {
    let url = url::Url::parse(raw).map_err(|e| format!("invalid endpoint URL: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(raw.to_string()),
        other => Err(format!("unsupported scheme {other:?}, expected http or https")),
    }
}
