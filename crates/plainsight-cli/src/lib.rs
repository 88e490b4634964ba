//! CLI logic for the Plainsight diagram writer.
//!
//! This module renders the catalog and persists each artifact as a file.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use config::{AppConfig, ConfigError, OutputConfig, load_config};

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use thiserror::Error;

use plainsight::{Artifact, Catalog, PlainsightError, theme::Theme};

/// Errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Plainsight(#[from] PlainsightError),
}

/// Run the Plainsight CLI application
///
/// Renders the catalog (or the artifacts selected with `--only`) against the
/// Gruvbox palette and writes each artifact into the output directory. With
/// `--list` the artifact names are printed instead.
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration loading errors
/// - Rendering errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), CliError> {
    if args.list {
        for artifact in Artifact::ALL {
            println!("{artifact}");
        }
        return Ok(());
    }

    let app_config = config::load_config(args.config.as_ref())?;
    let output = app_config.output();
    let directory = args
        .output_dir
        .as_deref()
        .unwrap_or_else(|| output.directory());

    info!(output_dir = directory.display().to_string(); "Rendering catalog");

    let catalog = if args.only.is_empty() {
        Catalog::build(Theme::gruvbox())?
    } else {
        Catalog::build_only(Theme::gruvbox(), args.only.iter().copied())?
    };

    let written = write_catalog(&catalog, directory, output)?;

    info!(count = written.len(); "Catalog exported successfully");

    Ok(())
}

/// Writes every artifact of `catalog` to `<directory>/<name>.<extension>`.
///
/// The directory is created if needed. When the configuration disables
/// overwriting, existing files are left untouched.
///
/// Returns the paths that were written.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the directory cannot be created or a file
/// cannot be written.
pub fn write_catalog(
    catalog: &Catalog,
    directory: &Path,
    output: &OutputConfig,
) -> Result<Vec<PathBuf>, CliError> {
    fs::create_dir_all(directory)?;

    let mut written = Vec::with_capacity(catalog.len());
    for (name, markup) in catalog.iter() {
        let path = directory.join(format!("{name}.{}", output.extension()));
        if !output.overwrite() && path.exists() {
            warn!(path = path.display().to_string(); "File exists, skipping");
            continue;
        }

        fs::write(&path, markup)?;
        debug!(artifact = name, bytes = markup.len(); "Artifact written");
        info!(path = path.display().to_string(); "Created");
        written.push(path);
    }

    Ok(written)
}
