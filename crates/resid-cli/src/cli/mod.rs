//! CLI for resid.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use resid_core::config;
use resid_core::Resolver;

use commands::{run_absolute, run_classify, run_config_path, run_inspect};

/// Top-level CLI for resid.
#[derive(Debug, Parser)]
#[command(name = "resid")]
#[command(about = "resid: classify URLs, paths and streams into resource kinds", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the best matching kind for a source.
    Classify {
        /// URL, path or other source string.
        source: String,

        /// Fall back to resembling kinds when nothing is strictly supported.
        #[arg(long, conflicts_with = "strict")]
        heuristic: bool,

        /// Only accept strictly supported kinds (overrides the config).
        #[arg(long)]
        strict: bool,

        /// Emit the descriptor summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show every configured kind with its status for a source.
    Inspect {
        /// URL, path or other source string.
        source: String,

        /// Emit one summary per kind as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Make a URL absolute against a base URL.
    Absolute {
        /// Relative or absolute URL.
        url: String,

        /// Base URL supplying the missing parts.
        #[arg(long)]
        base: String,
    },

    /// Print the location of the config file.
    ConfigPath,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let resolver = Resolver::from_config(&cfg);

        match cli.command {
            CliCommand::Classify {
                source,
                heuristic,
                strict,
                json,
            } => {
                let strict = if heuristic {
                    false
                } else {
                    strict || cfg.strict
                };
                run_classify(&resolver, &source, strict, json)?;
            }
            CliCommand::Inspect { source, json } => run_inspect(&resolver, &source, json)?,
            CliCommand::Absolute { url, base } => run_absolute(&url, &base)?,
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
