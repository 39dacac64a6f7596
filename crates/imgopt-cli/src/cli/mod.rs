//! CLI for imgopt.

mod report;

use anyhow::{Context, Result};
use clap::Parser;
use imgopt_core::catalog::IMAGES;
use imgopt_core::config;
use imgopt_core::encode::WebpEncoder;
use imgopt_core::fetch::CurlFetcher;
use imgopt_core::processor::Processor;
use imgopt_core::url_model;
use std::io;
use std::path::PathBuf;

use report::Reporter;

/// Download the site's images and re-encode them as WebP.
///
/// With no arguments, processes the built-in image list into `assets/images/`,
/// skipping files that already exist.
#[derive(Debug, Parser)]
#[command(name = "imgopt")]
#[command(about = "Download site images and re-encode them as optimized WebP", long_about = None)]
pub struct Cli {
    /// Directory for the .webp files (overrides the config file).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Read configuration from this TOML file instead of ~/.config/imgopt/config.toml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with status 1 if any image failed.
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let mut cfg = config::load(self.config.as_deref())?;
        if let Some(dir) = self.output_dir {
            cfg.output_dir = dir;
        }
        tracing::debug!("loaded config: {:?}", cfg);

        let base_url = url_model::parse_base_url(&cfg.base_url)
            .with_context(|| format!("invalid base_url {:?}", cfg.base_url))?;
        let processor = Processor::new(
            CurlFetcher::new(&cfg.http),
            WebpEncoder,
            base_url,
            cfg.source_quality,
            cfg.output_dir,
        );

        let mut reporter = Reporter::new(io::stdout().lock());
        reporter.header(IMAGES.len(), processor.output_dir())?;
        let summary = processor.run(&IMAGES, |event| reporter.on_event(&event))?;
        reporter.summary(&summary, processor.output_dir())?;

        if self.strict && !summary.all_succeeded() {
            anyhow::bail!(
                "{} of {} images failed: {}",
                summary.failed_count(),
                summary.total,
                summary.failed.join(", ")
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
