//! The catalog: every artifact of the documentation page, by name.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use log::{debug, info};

use plainsight_core::{draw::Scene, theme::Theme};

use crate::{chart, diagram, error::PlainsightError};

/// The fixed set of artifacts, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    EncryptionFlow,
    DecryptionFlow,
    Keygen,
    Encapsulation,
    SymmetricEncryption,
    Steganography,
    FullDecryption,
    PayloadFormat,
    MlkemPerformance,
    QualityVsCapacity,
}

impl Artifact {
    /// Every artifact, in catalog order.
    pub const ALL: [Artifact; 10] = [
        Self::EncryptionFlow,
        Self::DecryptionFlow,
        Self::Keygen,
        Self::Encapsulation,
        Self::SymmetricEncryption,
        Self::Steganography,
        Self::FullDecryption,
        Self::PayloadFormat,
        Self::MlkemPerformance,
        Self::QualityVsCapacity,
    ];

    /// The name the artifact is published under.
    pub fn name(self) -> &'static str {
        match self {
            Self::EncryptionFlow => "encryption_flow",
            Self::DecryptionFlow => "decryption_flow",
            Self::Keygen => "keygen",
            Self::Encapsulation => "encapsulation",
            Self::SymmetricEncryption => "symmetric_encryption",
            Self::Steganography => "steganography",
            Self::FullDecryption => "full_decryption",
            Self::PayloadFormat => "payload_format",
            Self::MlkemPerformance => "mlkem_performance",
            Self::QualityVsCapacity => "quality_vs_capacity",
        }
    }

    /// Composes a fresh scene for this artifact.
    pub fn scene(self) -> Scene {
        match self {
            Self::EncryptionFlow => diagram::encryption_flow(),
            Self::DecryptionFlow => diagram::decryption_flow(),
            Self::Keygen => diagram::keygen(),
            Self::Encapsulation => diagram::encapsulation(),
            Self::SymmetricEncryption => diagram::symmetric_encryption(),
            Self::Steganography => diagram::steganography(),
            Self::FullDecryption => diagram::full_decryption(),
            Self::PayloadFormat => diagram::payload_format(),
            Self::MlkemPerformance => chart::mlkem_performance(),
            Self::QualityVsCapacity => chart::quality_vs_capacity(),
        }
    }

    /// Composes and serializes this artifact.
    ///
    /// # Errors
    ///
    /// Returns [`PlainsightError::Compose`] if the artifact uses a color
    /// `theme` does not define.
    pub fn render(self, theme: &Theme) -> Result<String, PlainsightError> {
        debug!(artifact = self.name(); "Composing artifact");
        self.scene()
            .render(theme)
            .map_err(|err| PlainsightError::compose(self.name(), err))
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Artifact {
    type Err = PlainsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|artifact| artifact.name() == s)
            .ok_or_else(|| PlainsightError::UnknownArtifact(s.to_string()))
    }
}

/// Rendered artifacts keyed by name, in catalog order.
///
/// # Examples
///
/// ```
/// # use plainsight::{Catalog, catalog::Artifact};
/// # use plainsight_core::theme::Theme;
/// let catalog = Catalog::build_only(Theme::gruvbox(), [Artifact::Keygen]).unwrap();
/// assert_eq!(catalog.names().collect::<Vec<_>>(), ["keygen"]);
/// assert!(catalog.get("keygen").unwrap().contains("Public Key"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    artifacts: IndexMap<&'static str, String>,
}

impl Catalog {
    /// Renders every artifact.
    ///
    /// # Errors
    ///
    /// Stops at the first artifact that fails to render; no partial catalog
    /// is returned.
    pub fn build(theme: &Theme) -> Result<Self, PlainsightError> {
        Self::build_only(theme, Artifact::ALL)
    }

    /// Renders the given artifacts, in the order given. Duplicates render once.
    pub fn build_only(
        theme: &Theme,
        artifacts: impl IntoIterator<Item = Artifact>,
    ) -> Result<Self, PlainsightError> {
        let mut rendered = IndexMap::new();
        for artifact in artifacts {
            if rendered.contains_key(artifact.name()) {
                continue;
            }
            let markup = artifact.render(theme)?;
            info!(artifact = artifact.name(), bytes = markup.len(); "Artifact rendered");
            rendered.insert(artifact.name(), markup);
        }
        Ok(Self {
            artifacts: rendered,
        })
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.artifacts.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.artifacts.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.artifacts
            .iter()
            .map(|(name, markup)| (*name, markup.as_str()))
    }
}
