//! Line chart of stego image quality against embedding capacity.
//!
//! Capacity runs 0–100 % along x. Quality (PSNR) runs 40–70 dB along an
//! inverted y axis, so better images plot higher. A dashed line marks the
//! 40 dB floor.

use log::debug;

use plainsight_core::{
    draw::{Dot, Line, Polyline, Rect, RenderLayer, Scene, StrokeDefinition, TextAnchor},
    geometry::{Point, Size},
    theme::ThemeToken,
};

use super::{LinearScale, PointDataset, chart_text, format_value};

/// Capacity domain in percent.
pub const CAPACITY_DOMAIN: (f32, f32) = (0.0, 100.0);
/// Quality domain in dB.
pub const QUALITY_DOMAIN: (f32, f32) = (40.0, 70.0);
/// Quality below which artifacts become visible.
pub const QUALITY_THRESHOLD: f32 = 40.0;

/// Measured PSNR (dB) at each embedding capacity (%).
pub const QUALITY_SAMPLES: [(f32, f32); 5] = [
    (10.0, 66.4),
    (25.0, 62.3),
    (50.0, 59.1),
    (75.0, 57.4),
    (100.0, 56.1),
];

const VIEW_SIZE: Size = Size::new(640.0, 360.0);
const PLOT_LEFT: f32 = 60.0;
const PLOT_TOP: f32 = 40.0;
const PLOT_WIDTH: f32 = 540.0;
const PLOT_HEIGHT: f32 = 260.0;
const PLOT_RIGHT: f32 = PLOT_LEFT + PLOT_WIDTH;
const PLOT_BOTTOM: f32 = PLOT_TOP + PLOT_HEIGHT;

const X_SCALE: LinearScale = LinearScale::new(CAPACITY_DOMAIN, (PLOT_LEFT, PLOT_RIGHT));
const Y_SCALE: LinearScale = LinearScale::new(QUALITY_DOMAIN, (PLOT_BOTTOM, PLOT_TOP));

const X_TICKS: [f32; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];
const Y_TICKS: [f32; 4] = [40.0, 50.0, 60.0, 70.0];

const POINT_RADIUS: f32 = 4.0;
const VALUE_LABEL_OFFSET: f32 = 10.0;
const LINE_COLOR: ThemeToken = ThemeToken::Aqua;
const THRESHOLD_COLOR: ThemeToken = ThemeToken::Orange;
const THRESHOLD_CALLOUT: &str = "40 dB: visible artifacts below";

const TITLE: &str = "Image quality vs. capacity used";
const TITLE_POSITION: Point = Point::new(330.0, 24.0);
const Y_AXIS_TITLE: &str = "PSNR (dB)";
const Y_AXIS_TITLE_POSITION: Point = Point::new(PLOT_LEFT, 30.0);
const X_AXIS_TITLE: &str = "capacity used (%)";
const X_AXIS_TITLE_POSITION: Point = Point::new(330.0, 345.0);

/// One plotted sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlottedPoint {
    pub capacity: f32,
    pub quality: f32,
    pub position: Point,
}

impl PlottedPoint {
    /// Where the quality value is printed, centered above the point.
    pub fn label_anchor(&self) -> Point {
        self.position
            .with_y(self.position.y() - VALUE_LABEL_OFFSET)
    }
}

/// The dashed quality floor and its callout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub quality: f32,
    pub y: f32,
    pub callout: Point,
}

/// Computed geometry of the quality/capacity chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartLayout {
    points: Vec<PlottedPoint>,
    threshold: Threshold,
}

impl LineChartLayout {
    /// Places every sample of `dataset`, keeping dataset order for the path.
    pub fn compute(dataset: &PointDataset) -> Self {
        if !dataset.is_increasing_in_x() {
            debug!(points = dataset.len(); "Line chart dataset is not increasing in x");
        }

        let points = dataset
            .points()
            .iter()
            .map(|&(capacity, quality)| PlottedPoint {
                capacity,
                quality,
                position: Point::new(x_for(capacity), y_for(quality)),
            })
            .collect();

        let threshold_y = y_for(QUALITY_THRESHOLD);
        let threshold = Threshold {
            quality: QUALITY_THRESHOLD,
            y: threshold_y,
            callout: Point::new(PLOT_RIGHT - 6.0, threshold_y - 6.0),
        };

        debug!(points = dataset.len(); "Line chart layout computed");

        Self { points, threshold }
    }

    pub fn points(&self) -> &[PlottedPoint] {
        &self.points
    }

    /// Path vertices in dataset order.
    pub fn path(&self) -> Vec<Point> {
        self.points.iter().map(|p| p.position).collect()
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Builds the chart's scene: page, plot card, axes, path, points and threshold.
    pub fn to_scene(&self) -> Scene {
        let mut scene = Scene::new(VIEW_SIZE).with_background(ThemeToken::Bg);
        let grid = StrokeDefinition::solid(ThemeToken::Fg, 1.0).with_opacity(0.15);

        scene.add(
            Rect::new(
                Point::new(PLOT_LEFT, PLOT_TOP),
                Size::new(PLOT_WIDTH, PLOT_HEIGHT),
                ThemeToken::BgCard,
            )
            .on_layer(RenderLayer::Background),
        );

        for title in [
            (TITLE, TITLE_POSITION, 14, TextAnchor::Middle),
            (Y_AXIS_TITLE, Y_AXIS_TITLE_POSITION, 11, TextAnchor::Start),
            (X_AXIS_TITLE, X_AXIS_TITLE_POSITION, 11, TextAnchor::Middle),
        ] {
            let (content, position, size, anchor) = title;
            scene.add(chart_text(content, position, size, anchor, ThemeToken::Fg, None));
        }

        for quality in Y_TICKS {
            let y = y_for(quality);
            scene.add(
                Line::new(Point::new(PLOT_LEFT, y), Point::new(PLOT_RIGHT, y), grid.clone())
                    .on_layer(RenderLayer::Grid),
            );
            scene.add(chart_text(
                format_value(quality),
                Point::new(PLOT_LEFT - 8.0, y + 4.0),
                10,
                TextAnchor::End,
                ThemeToken::Fg,
                Some(0.6),
            ));
        }

        for capacity in X_TICKS {
            scene.add(chart_text(
                format!("{}%", format_value(capacity)),
                Point::new(x_for(capacity), PLOT_BOTTOM + 18.0),
                10,
                TextAnchor::Middle,
                ThemeToken::Fg,
                Some(0.6),
            ));
        }

        scene.add(
            Line::new(
                Point::new(PLOT_LEFT, self.threshold.y),
                Point::new(PLOT_RIGHT, self.threshold.y),
                StrokeDefinition::dashed(THRESHOLD_COLOR, 1.5),
            )
            .on_layer(RenderLayer::Grid),
        );
        scene.add(chart_text(
            THRESHOLD_CALLOUT,
            self.threshold.callout,
            10,
            TextAnchor::End,
            THRESHOLD_COLOR,
            None,
        ));

        scene.add(Polyline::new(
            self.path(),
            StrokeDefinition::solid(LINE_COLOR, 2.5),
        ));
        for point in &self.points {
            scene.add(Dot::new(point.position, POINT_RADIUS, LINE_COLOR));
            scene.add(chart_text(
                format_value(point.quality),
                point.label_anchor(),
                11,
                TextAnchor::Middle,
                ThemeToken::Fg,
                None,
            ));
        }

        scene
    }
}

/// Horizontal position of a capacity value.
pub fn x_for(capacity: f32) -> f32 {
    X_SCALE.scale(capacity)
}

/// Vertical position of a quality value; higher quality gives a smaller y.
pub fn y_for(quality: f32) -> f32 {
    Y_SCALE.scale(quality)
}

/// The built-in quality/capacity samples.
pub fn quality_samples() -> PointDataset {
    PointDataset::new(QUALITY_SAMPLES)
}

/// PSNR of the stego image at 10–100 % of its embedding capacity.
pub fn quality_vs_capacity() -> Scene {
    LineChartLayout::compute(&quality_samples()).to_scene()
}
