//! CLI for the YTH handle categorizer.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use yth_core::config;
use yth_core::pipeline;

/// Top-level CLI. No required arguments: paths come from the config file,
/// with optional per-run overrides.
#[derive(Debug, Parser)]
#[command(name = "yth")]
#[command(about = "YTH: keyword-based grouping for handle lists", long_about = None)]
pub struct Cli {
    /// Input text file (overrides the configured input path).
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output file (overrides the configured output path).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        if let Some(input) = cli.input {
            cfg.input_path = input;
        }
        if let Some(output) = cli.output {
            cfg.output_path = output;
        }

        let summary = pipeline::run(&cfg)?;
        for (cat, count) in &summary.category_counts {
            if *count > 0 {
                tracing::debug!("category {}: {} handles", cat, count);
            }
        }
        println!(
            "Wrote {} handles to {}",
            summary.unique_handles,
            cfg.output_path.display()
        );

        Ok(())
    }
}
