//! Command-line argument definitions for the Plainsight CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control where the catalog is written, which
//! artifacts are rendered, configuration file selection, and logging
//! verbosity.

use std::path::PathBuf;

use clap::Parser;

use plainsight::Artifact;

/// Command-line arguments for the Plainsight diagram writer
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory the artifacts are written to (overrides the configuration)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Render only the named artifact; may be repeated
    #[arg(long = "only", value_name = "NAME")]
    pub only: Vec<Artifact>,

    /// Print the artifact names and exit
    #[arg(long)]
    pub list: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
