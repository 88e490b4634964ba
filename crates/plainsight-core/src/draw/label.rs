//! Faint annotation labels such as "public key" above a dashed key arrow.

use crate::{
    draw::{Drawable, LayeredOutput, Text, TextDefinition},
    geometry::{Bounds, Point},
    theme::{Theme, ThemeError, ThemeToken},
};

/// Font size used when a label is created without [`Label::with_size`].
pub const DEFAULT_LABEL_SIZE: u16 = 11;

const LABEL_OPACITY: f32 = 0.6;

/// Small, semi-transparent text centered on its anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: Text,
}

impl Label {
    pub fn new(x: f32, y: f32, text: impl Into<String>) -> Self {
        Self {
            text: Text::new(Self::definition(DEFAULT_LABEL_SIZE), text, Point::new(x, y)),
        }
    }

    /// Returns this label drawn at a different font size.
    pub fn with_size(self, size: u16) -> Self {
        Self {
            text: Text::new(Self::definition(size), self.text.content(), self.text.position()),
        }
    }

    pub fn text(&self) -> &str {
        self.text.content()
    }

    pub fn position(&self) -> Point {
        self.text.position()
    }

    pub fn font_size(&self) -> u16 {
        self.text.definition().font_size()
    }

    fn definition(size: u16) -> TextDefinition {
        let mut definition = TextDefinition::new();
        definition.set_font_size(size);
        definition.set_color(ThemeToken::Fg);
        definition.set_opacity(Some(LABEL_OPACITY));
        definition
    }
}

impl Drawable for Label {
    fn render_to_layers(&self, theme: &Theme) -> Result<LayeredOutput, ThemeError> {
        self.text.render_to_layers(theme)
    }

    fn bounds(&self) -> Bounds {
        self.text.bounds()
    }
}
