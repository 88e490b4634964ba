//! Text rendering definitions for diagram labels and chart annotations.
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable text element placed at an anchor point
//!
//! Text is emitted as an SVG `<text>` element on the
//! [`Text`](crate::draw::RenderLayer::Text) layer. Diagrams only ever name the
//! generic `monospace` family, so the output carries no font references.
//!
//! # Quick Start
//!
//! ```
//! # use plainsight_core::draw::{Drawable, Text, TextDefinition};
//! # use plainsight_core::geometry::Point;
//! # use plainsight_core::theme::Theme;
//! let mut style = TextDefinition::new();
//! style.set_font_size(11);
//!
//! let text = Text::new(style, "public key", Point::new(185.0, 15.0));
//! let output = text.render_to_layers(Theme::gruvbox()).unwrap();
//! assert!(!output.is_empty());
//! ```

use svg::node::element as svg_element;

use crate::{
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Bounds, Point, Size},
    theme::{Theme, ThemeError, ThemeToken},
};

/// Font family used by every diagram.
pub const FONT_FAMILY: &str = "monospace";

/// Horizontal alignment of text relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Defines the visual style for text elements.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"monospace"` |
/// | Font size | `13` |
/// | Color | [`ThemeToken::Fg`] |
/// | Opacity | `None` (opaque) |
/// | Anchor | [`TextAnchor::Middle`] |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_size: u16,
    color: ThemeToken,
    opacity: Option<f32>,
    anchor: TextAnchor,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the fill color token.
    pub fn set_color(&mut self, color: ThemeToken) {
        self.color = color;
    }

    /// Sets the opacity of the whole text element.
    ///
    /// `None` leaves the text fully opaque and emits no `opacity` attribute.
    pub fn set_opacity(&mut self, opacity: Option<f32>) {
        self.opacity = opacity;
    }

    /// Sets the horizontal alignment.
    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Always [`FONT_FAMILY`].
    pub fn font_family(&self) -> &'static str {
        FONT_FAMILY
    }

    pub fn color(&self) -> ThemeToken {
        self.color
    }

    pub fn opacity(&self) -> Option<f32> {
        self.opacity
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_size: 13,
            color: ThemeToken::Fg,
            opacity: None,
            anchor: TextAnchor::default(),
        }
    }
}

/// A renderable text element: content, style and the baseline anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    definition: TextDefinition,
    content: String,
    position: Point,
}

impl Text {
    /// Creates a new text element anchored at `position` (SVG `x`/`y`).
    pub fn new(definition: TextDefinition, content: impl Into<String>, position: Point) -> Self {
        Self {
            definition,
            content: content.into(),
            position,
        }
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the anchor point of this element.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the style of this element.
    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }

    /// Rough extent of the text, assuming monospace glyphs 0.6em wide.
    fn estimated_size(&self) -> Size {
        let font_size = f32::from(self.definition.font_size);
        let width = self.content.chars().count() as f32 * font_size * 0.6;
        Size::new(width, font_size)
    }
}

impl Drawable for Text {
    fn render_to_layers(&self, theme: &Theme) -> Result<LayeredOutput, ThemeError> {
        let mut output = LayeredOutput::new();

        let mut rendered_text = svg_element::Text::new(self.content.as_str())
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("fill", theme.color(self.definition.color)?)
            .set("text-anchor", self.definition.anchor.to_svg_value())
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if let Some(opacity) = self.definition.opacity {
            rendered_text = rendered_text.set("opacity", opacity);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        Ok(output)
    }

    fn bounds(&self) -> Bounds {
        let size = self.estimated_size();
        let min_x = match self.definition.anchor {
            TextAnchor::Start => self.position.x(),
            TextAnchor::Middle => self.position.x() - size.width() / 2.0,
            TextAnchor::End => self.position.x() - size.width(),
        };
        Bounds::new_from_top_left(
            Point::new(min_x, self.position.y() - size.height()),
            size,
        )
    }
}
