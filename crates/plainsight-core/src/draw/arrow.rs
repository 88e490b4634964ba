//! Directional arrows.
//!
//! Each arrow carries its own `<marker>` definition next to the line that
//! references it. The marker id is taken from the diagram's
//! [`MarkerIdGenerator`] when the arrow is created, so a diagram can hold any
//! number of arrows without their arrowheads colliding.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, StrokeStyle},
    geometry::{Bounds, Point, Size},
    identifier::{MarkerId, MarkerIdGenerator},
    theme::{Theme, ThemeError, ThemeToken},
};

/// Color token for every arrow line and arrowhead.
pub const ARROW_ACCENT: ThemeToken = ThemeToken::Yellow;

const LINE_WIDTH: f32 = 2.0;
const MARKER_WIDTH: f32 = 10.0;
const MARKER_HEIGHT: f32 = 7.0;
const MARKER_REF_X: f32 = 9.0;
const MARKER_REF_Y: f32 = 3.5;
const ARROWHEAD_POINTS: &str = "0 0, 10 3.5, 0 7";

/// A straight line from `from` to `to` ending in a triangular arrowhead.
///
/// # Examples
///
/// ```
/// # use plainsight_core::draw::Arrow;
/// # use plainsight_core::geometry::Point;
/// # use plainsight_core::identifier::MarkerIdGenerator;
/// let mut ids = MarkerIdGenerator::new();
/// let feed = Arrow::new(&mut ids, Point::new(100.0, 48.0), Point::new(130.0, 48.0));
/// let key = Arrow::new(&mut ids, Point::new(185.0, 18.0), Point::new(185.0, 25.0)).dashed();
///
/// assert_eq!(feed.marker_id().as_str(), "arrow1");
/// assert_eq!(key.marker_id().as_str(), "arrow2");
/// assert!(key.is_dashed());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    marker_id: MarkerId,
    from: Point,
    to: Point,
    stroke: StrokeDefinition,
}

impl Arrow {
    /// Creates a solid arrow, consuming exactly one id from `ids`.
    pub fn new(ids: &mut MarkerIdGenerator, from: Point, to: Point) -> Self {
        Self {
            marker_id: ids.next_id(),
            from,
            to,
            stroke: StrokeDefinition::solid(ARROW_ACCENT, LINE_WIDTH),
        }
    }

    /// Returns this arrow drawn with the dashed pattern.
    pub fn dashed(mut self) -> Self {
        self.stroke.set_style(StrokeStyle::Dashed);
        self
    }

    /// Returns the id of the marker this arrow defines.
    pub fn marker_id(&self) -> &MarkerId {
        &self.marker_id
    }

    /// Returns the start point.
    pub fn from(&self) -> Point {
        self.from
    }

    /// Returns the end point, where the arrowhead sits.
    pub fn to(&self) -> Point {
        self.to
    }

    /// Returns true if the line is dashed.
    pub fn is_dashed(&self) -> bool {
        *self.stroke.style() != StrokeStyle::Solid
    }

    fn marker(&self, theme: &Theme) -> Result<svg_element::Marker, ThemeError> {
        Ok(svg_element::Marker::new()
            .set("id", self.marker_id.as_str())
            .set("markerWidth", MARKER_WIDTH)
            .set("markerHeight", MARKER_HEIGHT)
            .set("refX", MARKER_REF_X)
            .set("refY", MARKER_REF_Y)
            .set("orient", "auto")
            .add(
                svg_element::Polygon::new()
                    .set("points", ARROWHEAD_POINTS)
                    .set("fill", theme.color(ARROW_ACCENT)?),
            ))
    }
}

impl Drawable for Arrow {
    fn render_to_layers(&self, theme: &Theme) -> Result<LayeredOutput, ThemeError> {
        let mut output = LayeredOutput::new();

        let line = svg_element::Line::new()
            .set("x1", self.from.x())
            .set("y1", self.from.y())
            .set("x2", self.to.x())
            .set("y2", self.to.y());
        let line = apply_stroke!(line, &self.stroke, theme).set("marker-end", self.marker_id.url());

        let group = svg_element::Group::new()
            .add(svg_element::Definitions::new().add(self.marker(theme)?))
            .add(line);

        output.add_to_layer(RenderLayer::Arrow, Box::new(group));
        Ok(output)
    }

    fn bounds(&self) -> Bounds {
        let min = Point::new(self.from.x().min(self.to.x()), self.from.y().min(self.to.y()));
        let max = Point::new(self.from.x().max(self.to.x()), self.from.y().max(self.to.y()));
        let extent = max.sub_point(min);
        Bounds::new_from_top_left(min, Size::new(extent.x(), extent.y()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(arrow: &Arrow) -> String {
        arrow
            .render_to_layers(Theme::gruvbox())
            .unwrap()
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_each_arrow_consumes_one_id() {
        let mut ids = MarkerIdGenerator::new();
        let a = Arrow::new(&mut ids, Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let b = Arrow::new(&mut ids, Point::new(0.0, 0.0), Point::new(0.0, 10.0));

        assert_eq!(ids.issued(), 2);
        assert_ne!(a.marker_id(), b.marker_id());
    }

    #[test]
    fn test_render_references_own_marker() {
        let mut ids = MarkerIdGenerator::new();
        ids.next_id();
        let arrow = Arrow::new(&mut ids, Point::new(100.0, 48.0), Point::new(130.0, 48.0));
        let rendered = render(&arrow);

        assert!(rendered.contains(r#"id="arrow2""#));
        assert!(rendered.contains(r#"marker-end="url(#arrow2)""#));
        assert!(rendered.contains(r#"points="0 0, 10 3.5, 0 7""#));
        assert!(rendered.contains(r#"refX="9""#));
        assert!(rendered.contains(r#"refY="3.5""#));
        assert!(rendered.contains(r#"x1="100""#));
        assert!(rendered.contains(r#"x2="130""#));
        assert!(!rendered.contains("stroke-dasharray"));
    }

    #[test]
    fn test_dashed_arrow() {
        let mut ids = MarkerIdGenerator::new();
        let arrow = Arrow::new(&mut ids, Point::new(185.0, 18.0), Point::new(185.0, 25.0)).dashed();
        assert!(arrow.is_dashed());
        assert!(render(&arrow).contains(r#"stroke-dasharray="6,4""#));
    }

    #[test]
    fn test_arrow_uses_accent_color() {
        let mut ids = MarkerIdGenerator::new();
        let arrow = Arrow::new(&mut ids, Point::default(), Point::new(5.0, 5.0));
        let rendered = render(&arrow);

        assert!(rendered.contains(r##"stroke="#fabd2f""##));
        assert!(rendered.contains(r##"fill="#fabd2f""##));
    }

    #[test]
    fn test_arrow_missing_accent_fails() {
        let mut ids = MarkerIdGenerator::new();
        let arrow = Arrow::new(&mut ids, Point::default(), Point::new(5.0, 5.0));
        assert_eq!(
            arrow.render_to_layers(&Theme::new([])).unwrap_err(),
            ThemeError::UnknownToken("yellow".to_string())
        );
    }

    #[test]
    fn test_arrow_bounds_any_direction() {
        let mut ids = MarkerIdGenerator::new();
        let arrow = Arrow::new(&mut ids, Point::new(270.0, 60.0), Point::new(320.0, 80.0));
        let reversed = Arrow::new(&mut ids, Point::new(320.0, 80.0), Point::new(270.0, 60.0));
        assert_eq!(arrow.bounds(), reversed.bounds());
        assert_eq!(arrow.bounds().min_point(), Point::new(270.0, 60.0));
    }
}
