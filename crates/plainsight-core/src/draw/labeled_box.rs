//! The labeled box: a rounded card outlined in an accent color with a
//! centered caption.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextDefinition},
    geometry::{Bounds, Point, Size},
    theme::{Theme, ThemeError, ThemeToken},
};

/// Size used when a box is created without [`LabeledBox::with_size`].
pub const DEFAULT_BOX_SIZE: Size = Size::new(120.0, 50.0);

const CORNER_RADIUS: f32 = 8.0;
const OUTLINE_WIDTH: f32 = 2.0;
const CAPTION_FONT_SIZE: u16 = 13;
// Nudges the caption baseline so the glyphs sit visually centered
const CAPTION_BASELINE_OFFSET: f32 = 5.0;

/// A rounded rectangle filled with [`ThemeToken::BgCard`], outlined in its
/// accent token, with its caption centered in [`ThemeToken::Fg`].
///
/// Caption length is not checked against the box size.
///
/// # Examples
///
/// ```
/// # use plainsight_core::draw::{Drawable, LabeledBox};
/// # use plainsight_core::theme::ThemeToken;
/// let message = LabeledBox::new(0.0, 25.0, "Message", ThemeToken::Aqua).with_size(100.0, 45.0);
/// assert_eq!(message.text(), "Message");
/// assert_eq!(message.bounds().max_x(), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledBox {
    bounds: Bounds,
    text: String,
    accent: ThemeToken,
}

impl LabeledBox {
    /// Creates a box with its top-left corner at `(x, y)` and the default 120×50 size.
    pub fn new(x: f32, y: f32, text: impl Into<String>, accent: ThemeToken) -> Self {
        Self {
            bounds: Bounds::new_from_top_left(Point::new(x, y), DEFAULT_BOX_SIZE),
            text: text.into(),
            accent,
        }
    }

    /// Returns this box resized, keeping its top-left corner.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.bounds = Bounds::new_from_top_left(self.bounds.min_point(), Size::new(width, height));
        self
    }

    /// Returns the caption.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the outline color token.
    pub fn accent(&self) -> ThemeToken {
        self.accent
    }

    /// Point where the caption baseline is anchored.
    pub fn caption_anchor(&self) -> Point {
        let center = self.bounds.center();
        center.with_y(center.y() + CAPTION_BASELINE_OFFSET)
    }

    fn caption(&self) -> Text {
        let mut definition = TextDefinition::new();
        definition.set_font_size(CAPTION_FONT_SIZE);
        Text::new(definition, self.text.as_str(), self.caption_anchor())
    }
}

impl Drawable for LabeledBox {
    fn render_to_layers(&self, theme: &Theme) -> Result<LayeredOutput, ThemeError> {
        let mut output = LayeredOutput::new();
        let size = self.bounds.to_size();
        let outline = StrokeDefinition::solid(self.accent, OUTLINE_WIDTH);

        let rect = svg_element::Rectangle::new()
            .set("x", self.bounds.min_x())
            .set("y", self.bounds.min_y())
            .set("width", size.width())
            .set("height", size.height())
            .set("rx", CORNER_RADIUS)
            .set("ry", CORNER_RADIUS)
            .set("fill", theme.color(ThemeToken::BgCard)?);
        let rect = apply_stroke!(rect, &outline, theme);

        output.add_to_layer(RenderLayer::Content, Box::new(rect));
        output.merge(self.caption().render_to_layers(theme)?);
        Ok(output)
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::color::Color;

    #[test]
    fn test_default_size() {
        let b = LabeledBox::new(10.0, 20.0, "Box", ThemeToken::Aqua);
        assert_eq!(b.bounds().to_size(), Size::new(120.0, 50.0));
        assert_eq!(b.bounds().min_point(), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_with_size_keeps_corner() {
        let b = LabeledBox::new(140.0, 25.0, "ML-KEM", ThemeToken::Green).with_size(90.0, 45.0);
        assert_eq!(b.bounds().min_point(), Point::new(140.0, 25.0));
        assert_approx_eq!(f32, b.bounds().max_x(), 230.0);
        assert_approx_eq!(f32, b.bounds().max_y(), 70.0);
    }

    #[test]
    fn test_caption_anchor() {
        let b = LabeledBox::new(0.0, 25.0, "Message", ThemeToken::Aqua).with_size(100.0, 45.0);
        let anchor = b.caption_anchor();
        assert_approx_eq!(f32, anchor.x(), 50.0);
        assert_approx_eq!(f32, anchor.y(), 52.5);
    }

    #[test]
    fn test_render_uses_theme_colors() {
        let theme = Theme::gruvbox();
        let b = LabeledBox::new(0.0, 0.0, "Public Key", ThemeToken::Yellow);
        let output = b.render_to_layers(theme).unwrap();
        assert_eq!(output.count_on(RenderLayer::Content), 1);
        assert_eq!(output.count_on(RenderLayer::Text), 1);

        let rendered: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(rendered.contains(r##"stroke="#fabd2f""##));
        assert!(rendered.contains(r##"fill="#3c3836""##));
        assert!(rendered.contains(r##"fill="#ebdbb2""##));
        assert!(rendered.contains(r#"rx="8""#));
        assert!(rendered.contains(r#"stroke-width="2""#));
        assert!(rendered.contains("Public Key"));
    }

    #[test]
    fn test_render_missing_accent_fails() {
        let theme = Theme::new([
            (ThemeToken::BgCard, Color::new("#3c3836").unwrap()),
            (ThemeToken::Fg, Color::new("#ebdbb2").unwrap()),
        ]);
        let b = LabeledBox::new(0.0, 0.0, "Combine", ThemeToken::Green);
        assert_eq!(
            b.render_to_layers(&theme).unwrap_err(),
            ThemeError::UnknownToken("green".to_string())
        );
    }

    #[test]
    fn test_negative_coordinates_accepted() {
        let b = LabeledBox::new(-10.0, -5.0, "Off-canvas", ThemeToken::Orange).with_size(-1.0, 3.0);
        assert!(b.render_to_layers(Theme::gruvbox()).is_ok());
    }
}
