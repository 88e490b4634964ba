//! The semantic color palette shared by every diagram.
//!
//! Drawables never hold concrete colors. They hold a [`ThemeToken`] and ask a
//! [`Theme`] for its [`Color`] at render time, so a single registry decides the
//! look of the whole catalog.
//!
//! # Example
//!
//! ```
//! # use plainsight_core::theme::{Theme, ThemeToken};
//! let theme = Theme::gruvbox();
//! let accent = theme.color(ThemeToken::Yellow).unwrap();
//! assert_eq!(accent, theme.color_named("yellow").unwrap());
//! ```

use std::{fmt, str::FromStr, sync::OnceLock};

use indexmap::IndexMap;
use log::trace;
use thiserror::Error;

use crate::color::Color;

static GRUVBOX: OnceLock<Theme> = OnceLock::new();

/// The Gruvbox dark values behind [`Theme::gruvbox`], as written into markup.
pub const GRUVBOX_PALETTE: [(ThemeToken, &str); 8] = [
    (ThemeToken::Bg, "#1d2021"),
    (ThemeToken::BgCard, "#3c3836"),
    (ThemeToken::Fg, "#ebdbb2"),
    (ThemeToken::Aqua, "#8ec07c"),
    (ThemeToken::Yellow, "#fabd2f"),
    (ThemeToken::Purple, "#d3869b"),
    (ThemeToken::Green, "#b8bb26"),
    (ThemeToken::Orange, "#fe8019"),
];

/// Errors raised while resolving theme colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A token was referenced that the registry does not define.
    #[error("unknown theme token `{0}`")]
    UnknownToken(String),
}

/// Semantic color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeToken {
    /// Page background, used behind the charts
    Bg,
    /// Fill of labeled boxes and chart plot areas
    BgCard,
    /// Foreground text
    Fg,
    Aqua,
    Yellow,
    Purple,
    Green,
    Orange,
}

impl ThemeToken {
    /// All tokens, in palette order.
    pub const ALL: [ThemeToken; 8] = [
        Self::Bg,
        Self::BgCard,
        Self::Fg,
        Self::Aqua,
        Self::Yellow,
        Self::Purple,
        Self::Green,
        Self::Orange,
    ];

    /// Returns the name this token is known by.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bg => "bg",
            Self::BgCard => "bg_card",
            Self::Fg => "fg",
            Self::Aqua => "aqua",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Orange => "orange",
        }
    }
}

impl fmt::Display for ThemeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeToken {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|token| token.name() == s)
            .ok_or_else(|| ThemeError::UnknownToken(s.to_string()))
    }
}

/// An immutable mapping from [`ThemeToken`] to [`Color`].
///
/// A theme is fixed once constructed. [`Theme::gruvbox`] is the palette the
/// catalog is rendered with; [`Theme::new`] builds other (possibly partial)
/// registries.
#[derive(Debug, Clone)]
pub struct Theme {
    colors: IndexMap<ThemeToken, Color>,
}

impl Theme {
    /// Creates a theme from token/color pairs. Later pairs override earlier ones.
    pub fn new(entries: impl IntoIterator<Item = (ThemeToken, Color)>) -> Self {
        Self {
            colors: entries.into_iter().collect(),
        }
    }

    /// Returns the process-wide Gruvbox dark palette.
    pub fn gruvbox() -> &'static Self {
        GRUVBOX.get_or_init(|| {
            Self::new(GRUVBOX_PALETTE.iter().map(|(token, hex)| {
                let color = Color::new(hex).expect("palette entries are valid hex colors");
                (*token, color)
            }))
        })
    }

    /// Returns the color registered for `token`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownToken`] if this registry does not define `token`.
    pub fn color(&self, token: ThemeToken) -> Result<Color, ThemeError> {
        trace!(token = token.name(); "Resolving theme color");
        self.colors
            .get(&token)
            .copied()
            .ok_or_else(|| ThemeError::UnknownToken(token.name().to_string()))
    }

    /// Returns the color registered under the token called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownToken`] if `name` is not a token, or if
    /// this registry does not define it.
    pub fn color_named(&self, name: &str) -> Result<Color, ThemeError> {
        self.color(name.parse()?)
    }

    /// Returns `true` if `token` is defined by this registry.
    pub fn contains(&self, token: ThemeToken) -> bool {
        self.colors.contains_key(&token)
    }

    /// Iterates over the registered colors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeToken, Color)> + '_ {
        self.colors.iter().map(|(token, color)| (*token, *color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gruvbox_defines_every_token() {
        let theme = Theme::gruvbox();
        for token in ThemeToken::ALL {
            assert!(theme.contains(token), "missing {token}");
            assert!(theme.color(token).is_ok());
        }
        assert_eq!(theme.iter().count(), ThemeToken::ALL.len());
    }

    #[test]
    fn test_gruvbox_is_shared() {
        assert!(std::ptr::eq(Theme::gruvbox(), Theme::gruvbox()));
    }

    #[test]
    fn test_gruvbox_values() {
        let theme = Theme::gruvbox();
        assert_eq!(
            theme.color(ThemeToken::Aqua).unwrap(),
            Color::new("#8ec07c").unwrap()
        );
        assert_eq!(
            theme.color(ThemeToken::BgCard).unwrap(),
            Color::new("#3c3836").unwrap()
        );
    }

    #[test]
    fn test_gruvbox_serializes_registry_hex() {
        let theme = Theme::gruvbox();
        for (token, hex) in GRUVBOX_PALETTE {
            assert_eq!(theme.color(token).unwrap().to_string(), hex, "{token}");
        }
    }

    #[test]
    fn test_token_name_round_trip() {
        for token in ThemeToken::ALL {
            assert_eq!(token.name().parse::<ThemeToken>().unwrap(), token);
        }
    }

    #[test]
    fn test_unknown_token_name() {
        let err = "magenta".parse::<ThemeToken>().unwrap_err();
        assert_eq!(err, ThemeError::UnknownToken("magenta".to_string()));
        assert_eq!(err.to_string(), "unknown theme token `magenta`");

        let err = Theme::gruvbox().color_named("magenta").unwrap_err();
        assert_eq!(err, ThemeError::UnknownToken("magenta".to_string()));
    }

    #[test]
    fn test_partial_theme_reports_missing_token() {
        let theme = Theme::new([(ThemeToken::Fg, Color::new("white").unwrap())]);

        assert!(theme.color(ThemeToken::Fg).is_ok());
        assert_eq!(
            theme.color(ThemeToken::Orange),
            Err(ThemeError::UnknownToken("orange".to_string()))
        );
    }

    #[test]
    fn test_later_entries_override() {
        let theme = Theme::new([
            (ThemeToken::Fg, Color::new("white").unwrap()),
            (ThemeToken::Fg, Color::new("red").unwrap()),
        ]);
        assert_eq!(
            theme.color(ThemeToken::Fg).unwrap(),
            Color::new("red").unwrap()
        );
    }
}
