//! Stroke and line-style definitions.
//!
//! - [`StrokeDefinition`]: stroke color token, width, style and opacity
//! - [`StrokeStyle`]: line pattern (solid or dashed)
//! - [`apply_stroke!`](crate::apply_stroke!): applies a stroke to an SVG element
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke` | resolved through the [`Theme`](crate::theme::Theme) |
//! | `width` | `stroke-width` | `2` |
//! | `style` | `stroke-dasharray` | `"6,4"` |
//! | `opacity` | `stroke-opacity` | `0.3` |

use crate::theme::ThemeToken;

/// Defines the visual style of a stroke, including dash patterns.
///
/// - `Solid`: No dasharray attribute
/// - `Dashed`: "6,4"
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// 6px dash, 4px gap
    Dashed,
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("6,4"),
        }
    }
}

/// A stroke definition for lines and outlines.
///
/// # Examples
///
/// ```
/// use plainsight_core::draw::{StrokeDefinition, StrokeStyle};
/// use plainsight_core::theme::ThemeToken;
///
/// let outline = StrokeDefinition::solid(ThemeToken::Aqua, 2.0);
/// let key_feed = StrokeDefinition::dashed(ThemeToken::Yellow, 2.0);
/// assert_eq!(*key_feed.style(), StrokeStyle::Dashed);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: ThemeToken,
    width: f32,
    style: StrokeStyle,
    opacity: Option<f32>,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: ThemeToken, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
            opacity: None,
        }
    }

    /// Creates a solid stroke (convenience constructor).
    pub fn solid(color: ThemeToken, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke (convenience constructor).
    pub fn dashed(color: ThemeToken, width: f32) -> Self {
        Self::new(color, width).with_style(StrokeStyle::Dashed)
    }

    /// Returns the stroke color token.
    pub fn color(&self) -> ThemeToken {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Returns the stroke opacity, if one was set.
    pub fn opacity(&self) -> Option<f32> {
        self.opacity
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    /// Returns this stroke with a different style.
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.set_style(style);
        self
    }

    /// Returns this stroke drawn at the given opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// The stroke color is resolved through the given theme; the macro uses `?`,
/// so it must be invoked in a function returning
/// `Result<_, ThemeError>` (or an error type convertible from it).
///
/// # Examples
///
/// ```
/// use plainsight_core::draw::StrokeDefinition;
/// use plainsight_core::theme::{Theme, ThemeError, ThemeToken};
/// use svg::node::element as svg_element;
///
/// fn outline() -> Result<svg_element::Rectangle, ThemeError> {
///     let theme = Theme::gruvbox();
///     let stroke = StrokeDefinition::solid(ThemeToken::Green, 2.0);
///     let rect = svg_element::Rectangle::new().set("width", 90).set("height", 45);
///     Ok(plainsight_core::apply_stroke!(rect, &stroke, theme))
/// }
/// # outline().unwrap();
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr, $theme:expr) => {{
        let mut elem = $element
            .set("stroke", $theme.color($stroke.color())?)
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        if let Some(opacity) = $stroke.opacity() {
            elem = elem.set("stroke-opacity", opacity);
        }

        elem
    }};
}
