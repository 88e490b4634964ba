//! Error adapter for converting [`CliError`] to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. None of the
//! errors carry source spans, so each adapter contributes a code and a help
//! line only.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use plainsight::PlainsightError;

use crate::{CliError, ConfigError};

/// Adapter presenting a [`CliError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl ErrorAdapter<'_> {
    fn code_str(&self) -> &'static str {
        match self.0 {
            CliError::Io(_) => "plainsight::io",
            CliError::Config(ConfigError::MissingFile(_)) => "plainsight::config::missing",
            CliError::Config(_) => "plainsight::config",
            CliError::Plainsight(PlainsightError::Compose { .. }) => "plainsight::compose",
            CliError::Plainsight(PlainsightError::UnknownArtifact(_)) => {
                "plainsight::unknown_artifact"
            }
        }
    }

    fn help_str(&self) -> &'static str {
        match self.0 {
            CliError::Io(_) => "check that the output directory is writable",
            CliError::Config(ConfigError::MissingFile(_)) => {
                "pass an existing file to --config, or omit it to use the defaults"
            }
            CliError::Config(_) => {
                "expected an [output] table with directory, extension and overwrite"
            }
            CliError::Plainsight(PlainsightError::Compose { .. }) => {
                "the theme must define every color token the artifact uses"
            }
            CliError::Plainsight(PlainsightError::UnknownArtifact(_)) => {
                "run with --list to see the available artifacts"
            }
        }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code_str()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.help_str()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
