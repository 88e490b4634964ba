//! Error types for catalog generation.

use thiserror::Error;

use plainsight_core::theme::ThemeError;

/// The main error type for Plainsight operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlainsightError {
    /// An artifact referenced a color the theme does not define.
    #[error("failed to compose `{artifact}`: {source}")]
    Compose {
        artifact: &'static str,
        #[source]
        source: ThemeError,
    },

    #[error("unknown artifact `{0}`")]
    UnknownArtifact(String),
}

impl PlainsightError {
    /// Create a new `Compose` error for the named artifact.
    pub fn compose(artifact: &'static str, source: ThemeError) -> Self {
        Self::Compose { artifact, source }
    }
}
