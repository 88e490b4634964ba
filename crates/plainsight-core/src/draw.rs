//! Drawing primitives and the scene graph.
//!
//! Every primitive implements [`Drawable`]: it resolves its colors through a
//! [`Theme`] and emits SVG nodes tagged with the [`RenderLayer`] they belong
//! on. A [`Scene`] owns the primitives of one diagram and serializes them in
//! a single final pass.

mod arrow;
mod label;
mod labeled_box;
mod layer;
mod scene;
mod shapes;
mod stroke;
mod text;

pub use arrow::{ARROW_ACCENT, Arrow};
pub use label::{DEFAULT_LABEL_SIZE, Label};
pub use labeled_box::{DEFAULT_BOX_SIZE, LabeledBox};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use scene::{Node, Scene};
pub use shapes::{Dot, Line, Polyline, Rect};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{FONT_FAMILY, Text, TextAnchor, TextDefinition};

use crate::{
    geometry::Bounds,
    theme::{Theme, ThemeError},
};

/// A visual element that can be rendered against a theme.
pub trait Drawable: std::fmt::Debug {
    /// Renders the element, grouping its SVG nodes by layer.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownToken`] if the element references a color
    /// token `theme` does not define.
    fn render_to_layers(&self, theme: &Theme) -> Result<LayeredOutput, ThemeError>;

    /// The area the element covers, in diagram coordinates.
    fn bounds(&self) -> Bounds;
}
