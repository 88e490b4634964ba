//! Plain shapes the charts are built from.
//!
//! Unlike [`LabeledBox`](crate::draw::LabeledBox), these carry no caption and
//! let the caller pick the [`RenderLayer`] they land on, so gridlines can sit
//! under bars and plot areas under gridlines.

use svg::node::element::{self as svg_element, path::Data};

use crate::{
    apply_stroke,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Point, Size},
    theme::{Theme, ThemeError, ThemeToken},
};

/// A filled rectangle, optionally with rounded corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    bounds: Bounds,
    fill: ThemeToken,
    radius: f32,
    layer: RenderLayer,
}

impl Rect {
    pub fn new(top_left: Point, size: Size, fill: ThemeToken) -> Self {
        Self {
            bounds: Bounds::new_from_top_left(top_left, size),
            fill,
            radius: 0.0,
            layer: RenderLayer::Content,
        }
    }

    /// Rounds the corners with `rx = ry = radius`.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn on_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn fill(&self) -> ThemeToken {
        self.fill
    }

    pub fn layer(&self) -> RenderLayer {
        self.layer
    }
}

impl Drawable for Rect {
    fn render_to_layers(&self, theme: &Theme) -> Result<LayeredOutput, ThemeError> {
        let mut output = LayeredOutput::new();
        let size = self.bounds.to_size();

        let mut rect = svg_element::Rectangle::new()
            .set("x", self.bounds.min_x())
            .set("y", self.bounds.min_y())
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", theme.color(self.fill)?);

        if self.radius > 0.0 {
            rect = rect.set("rx", self.radius).set("ry", self.radius);
        }

        output.add_to_layer(self.layer, Box::new(rect));
        Ok(output)
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// A straight stroked segment without an arrowhead.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    from: Point,
    to: Point,
    stroke: StrokeDefinition,
    layer: RenderLayer,
}

impl Line {
    pub fn new(from: Point, to: Point, stroke: StrokeDefinition) -> Self {
        Self {
            from,
            to,
            stroke,
            layer: RenderLayer::Content,
        }
    }

    pub fn on_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn from(&self) -> Point {
        self.from
    }

    pub fn to(&self) -> Point {
        self.to
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

impl Drawable for Line {
    fn render_to_layers(&self, theme: &Theme) -> Result<LayeredOutput, ThemeError> {
        let mut output = LayeredOutput::new();
        let line = svg_element::Line::new()
            .set("x1", self.from.x())
            .set("y1", self.from.y())
            .set("x2", self.to.x())
            .set("y2", self.to.y());
        let line = apply_stroke!(line, &self.stroke, theme);

        output.add_to_layer(self.layer, Box::new(line));
        Ok(output)
    }

    fn bounds(&self) -> Bounds {
        bounds_of(&[self.from, self.to])
    }
}

/// An open path through `points` in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    stroke: StrokeDefinition,
}

impl Polyline {
    pub fn new(points: impl IntoIterator<Item = Point>, stroke: StrokeDefinition) -> Self {
        Self {
            points: points.into_iter().collect(),
            stroke,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Builds the path data: one move to the first point, then a line to each following point.
    fn data(&self) -> Data {
        let mut points = self.points.iter();
        let Some(first) = points.next() else {
            return Data::new();
        };
        points.fold(Data::new().move_to((first.x(), first.y())), |data, p| {
            data.line_to((p.x(), p.y()))
        })
    }
}

impl Drawable for Polyline {
    fn render_to_layers(&self, theme: &Theme) -> Result<LayeredOutput, ThemeError> {
        let mut output = LayeredOutput::new();
        if self.points.is_empty() {
            return Ok(output);
        }

        let path = svg_element::Path::new()
            .set("d", self.data())
            .set("fill", "none")
            .set("stroke-linejoin", "round");
        let path = apply_stroke!(path, &self.stroke, theme);

        output.add_to_layer(RenderLayer::Content, Box::new(path));
        Ok(output)
    }

    fn bounds(&self) -> Bounds {
        bounds_of(&self.points)
    }
}

/// A filled circle marking one data point.
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    center: Point,
    radius: f32,
    fill: ThemeToken,
}

impl Dot {
    pub fn new(center: Point, radius: f32, fill: ThemeToken) -> Self {
        Self {
            center,
            radius,
            fill,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Drawable for Dot {
    fn render_to_layers(&self, theme: &Theme) -> Result<LayeredOutput, ThemeError> {
        let mut output = LayeredOutput::new();
        let circle = svg_element::Circle::new()
            .set("cx", self.center.x())
            .set("cy", self.center.y())
            .set("r", self.radius)
            .set("fill", theme.color(self.fill)?);

        output.add_to_layer(RenderLayer::Content, Box::new(circle));
        Ok(output)
    }

    fn bounds(&self) -> Bounds {
        let corner = Point::new(self.center.x() - self.radius, self.center.y() - self.radius);
        Bounds::new_from_top_left(corner, Size::new(self.radius * 2.0, self.radius * 2.0))
    }
}

fn bounds_of(points: &[Point]) -> Bounds {
    let Some(first) = points.first() else {
        return Bounds::default();
    };
    let (min, max) = points.iter().fold((*first, *first), |(min, max), p| {
        (
            Point::new(min.x().min(p.x()), min.y().min(p.y())),
            Point::new(max.x().max(p.x()), max.y().max(p.y())),
        )
    });
    let extent = max.sub_point(min);
    Bounds::new_from_top_left(min, Size::new(extent.x(), extent.y()))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::draw::StrokeStyle;

    fn render(drawable: &impl Drawable) -> String {
        drawable
            .render_to_layers(Theme::gruvbox())
            .unwrap()
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_rect_plain() {
        let rect = Rect::new(Point::new(60.0, 40.0), Size::new(16.0, 50.0), ThemeToken::Aqua);
        let rendered = render(&rect);

        assert!(rendered.contains(r#"data-layer="content""#));
        assert!(rendered.contains(r#"width="16""#));
        assert!(!rendered.contains("rx="));
        assert!(!rendered.contains("stroke="));
    }

    #[test]
    fn test_rect_options() {
        let rect = Rect::new(Point::default(), Size::new(640.0, 320.0), ThemeToken::BgCard)
            .with_radius(8.0)
            .on_layer(RenderLayer::Background);
        let rendered = render(&rect);

        assert_eq!(rect.layer(), RenderLayer::Background);
        assert!(rendered.contains(r#"data-layer="background""#));
        assert!(rendered.contains(r#"rx="8""#));
        assert!(rendered.contains(r#"ry="8""#));
        assert!(rendered.contains(r##"fill="#3c3836""##));
        assert!(!rendered.contains("stroke"));
    }

    #[test]
    fn test_line_on_grid_layer() {
        let stroke = StrokeDefinition::solid(ThemeToken::Fg, 1.0).with_opacity(0.15);
        let line = Line::new(Point::new(60.0, 40.0), Point::new(600.0, 40.0), stroke)
            .on_layer(RenderLayer::Grid);
        let rendered = render(&line);

        assert!(rendered.contains(r#"data-layer="grid""#));
        assert!(rendered.contains(r#"stroke-opacity="0.15""#));
        assert_approx_eq!(f32, line.bounds().width(), 540.0);
        assert_approx_eq!(f32, line.bounds().height(), 0.0);
    }

    #[test]
    fn test_dashed_line() {
        let line = Line::new(
            Point::new(0.0, 10.0),
            Point::new(100.0, 10.0),
            StrokeDefinition::dashed(ThemeToken::Orange, 1.5),
        );
        assert_eq!(*line.stroke().style(), StrokeStyle::Dashed);
        assert!(render(&line).contains(r#"stroke-dasharray="6,4""#));
    }

    #[test]
    fn test_polyline_path_data() {
        let polyline = Polyline::new(
            [Point::new(0.0, 10.0), Point::new(5.0, 20.0), Point::new(10.0, 15.0)],
            StrokeDefinition::solid(ThemeToken::Aqua, 2.0),
        );
        let rendered = render(&polyline);

        assert!(rendered.contains("M0,10"));
        assert!(rendered.contains("L10,15"));
        assert!(rendered.contains(r#"fill="none""#));
        assert_approx_eq!(f32, polyline.bounds().max_y(), 20.0);
    }

    #[test]
    fn test_empty_polyline_renders_nothing() {
        let polyline = Polyline::new([], StrokeDefinition::solid(ThemeToken::Aqua, 2.0));
        assert!(polyline.render_to_layers(Theme::gruvbox()).unwrap().is_empty());
        assert_eq!(polyline.bounds(), Bounds::default());
    }

    #[test]
    fn test_dot() {
        let dot = Dot::new(Point::new(100.0, 50.0), 4.0, ThemeToken::Yellow);
        let rendered = render(&dot);

        assert!(rendered.contains(r#"cx="100""#));
        assert!(rendered.contains(r#"r="4""#));
        assert_eq!(dot.bounds().center(), Point::new(100.0, 50.0));
        assert_approx_eq!(f32, dot.bounds().width(), 8.0);
    }

    #[test]
    fn test_shape_missing_token_fails() {
        let dot = Dot::new(Point::default(), 4.0, ThemeToken::Purple);
        assert_eq!(
            dot.render_to_layers(&Theme::new([])).unwrap_err(),
            ThemeError::UnknownToken("purple".to_string())
        );
    }
}
