//! Grouped bar chart of ML-KEM operation timings.
//!
//! ```text
//!   80 ┤─────────────────────────────────────────
//!   60 ┤─────────────────────────────── ▇ ───────
//!   40 ┤────────────────── ▇   ▇ ▇ ▇ ───────────
//!   20 ┤───── ▇ ▇ ▇ ────── ▇ ▇ ▇ ▇ ▇ ▇ ──────────
//!    0 ┼───────────────────────────────────────── baseline
//!          512        768        1024
//!       ■ KeyGen   ■ Encap   ■ Decap
//! ```
//!
//! Each category occupies one [`GROUP_WIDTH`]-wide slot; within a slot the
//! three series are drawn left to right. The plot holds [`MAX_CATEGORIES`]
//! slots.

use log::{debug, warn};

use plainsight_core::{
    draw::{Line, Rect, RenderLayer, Scene, StrokeDefinition, TextAnchor},
    geometry::{Point, Size},
    theme::ThemeToken,
};

use super::{SeriesDataset, chart_text, format_value};

/// Value mapped to the full chart height.
pub const MAX_SCALE: f32 = 80.0;
/// Pixel height of the plot area.
pub const CHART_HEIGHT: f32 = 240.0;
/// Horizontal slot taken by one category.
pub const GROUP_WIDTH: f32 = 180.0;
/// Number of category slots that fit across the plot.
pub const MAX_CATEGORIES: usize = (PLOT_WIDTH / GROUP_WIDTH) as usize;
/// Series names, in drawing order.
pub const SERIES_NAMES: [&str; 3] = ["KeyGen", "Encap", "Decap"];
/// Series fill colors, in drawing order.
pub const SERIES_COLORS: [ThemeToken; 3] = [ThemeToken::Aqua, ThemeToken::Yellow, ThemeToken::Purple];
/// Gridline positions as fractions of [`MAX_SCALE`].
pub const GRID_FRACTIONS: [f32; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// ML-KEM timings in microseconds per parameter set: keygen, encap, decap.
pub const MLKEM_TIMINGS: [(&str, [f32; 3]); 3] = [
    ("512", [25.0, 24.0, 32.0]),
    ("768", [39.0, 37.0, 47.0]),
    ("1024", [58.0, 54.0, 69.0]),
];

const VIEW_SIZE: Size = Size::new(640.0, 380.0);
const PLOT_LEFT: f32 = 60.0;
const PLOT_TOP: f32 = 50.0;
const PLOT_WIDTH: f32 = 540.0;
const BASELINE_Y: f32 = PLOT_TOP + CHART_HEIGHT;

const BAR_WIDTH: f32 = 36.0;
const BAR_GAP: f32 = 8.0;
const BAR_RADIUS: f32 = 2.0;
const GROUP_PADDING: f32 = (GROUP_WIDTH - 3.0 * BAR_WIDTH - 2.0 * BAR_GAP) / 2.0;
const VALUE_LABEL_OFFSET: f32 = 6.0;
const TICK_LABEL_OFFSET: f32 = 8.0;
const CATEGORY_LABEL_OFFSET: f32 = 20.0;

const TITLE: &str = "ML-KEM performance (µs)";
const TITLE_POSITION: Point = Point::new(320.0, 28.0);
const LEGEND_Y: f32 = 345.0;
const LEGEND_LEFT: f32 = 190.0;
const LEGEND_STEP: f32 = 100.0;
const SWATCH_SIZE: f32 = 12.0;

/// Pixel height of a bar showing `value`, clamped to the plot.
///
/// # Examples
///
/// ```
/// # use plainsight::chart::bar::{bar_height, CHART_HEIGHT, MAX_SCALE};
/// assert_eq!(bar_height(0.0), 0.0);
/// assert_eq!(bar_height(MAX_SCALE / 2.0), CHART_HEIGHT / 2.0);
/// assert_eq!(bar_height(MAX_SCALE * 2.0), CHART_HEIGHT);
/// ```
pub fn bar_height(value: f32) -> f32 {
    ((value / MAX_SCALE) * CHART_HEIGHT).clamp(0.0, CHART_HEIGHT)
}

/// Geometry of one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    category: String,
    series: usize,
    value: f32,
    top_left: Point,
    size: Size,
}

impl Bar {
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Index into [`SERIES_NAMES`] and [`SERIES_COLORS`].
    pub fn series(&self) -> usize {
        self.series
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn height(&self) -> f32 {
        self.size.height()
    }

    pub fn width(&self) -> f32 {
        self.size.width()
    }

    pub fn color(&self) -> ThemeToken {
        SERIES_COLORS[self.series]
    }

    /// Where the raw value is printed, centered just above the bar.
    pub fn label_anchor(&self) -> Point {
        Point::new(
            self.top_left.x() + self.size.width() / 2.0,
            self.top_left.y() - VALUE_LABEL_OFFSET,
        )
    }
}

/// A horizontal gridline and the value it marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gridline {
    pub value: f32,
    pub y: f32,
}

/// A category caption under its group of bars.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLabel {
    pub text: String,
    pub position: Point,
}

/// Computed geometry of a grouped bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartLayout {
    bars: Vec<Bar>,
    gridlines: Vec<Gridline>,
    categories: Vec<CategoryLabel>,
}

impl BarChartLayout {
    /// Lays out every category of `dataset` left to right.
    ///
    /// The plot has room for [`MAX_CATEGORIES`] groups. Further groups keep
    /// the same spacing and are drawn past the right edge of the plot; a
    /// warning is logged when that happens.
    pub fn compute(dataset: &SeriesDataset) -> Self {
        if dataset.len() > MAX_CATEGORIES {
            warn!(
                categories = dataset.len(),
                max_categories = MAX_CATEGORIES;
                "Bar chart has more categories than the plot fits"
            );
        }

        let mut bars = Vec::with_capacity(dataset.len() * 3);
        let mut categories = Vec::with_capacity(dataset.len());

        for (group, row) in dataset.rows().iter().enumerate() {
            let group_left = PLOT_LEFT + group as f32 * GROUP_WIDTH;
            for (series, value) in row.values().into_iter().enumerate() {
                let height = bar_height(value);
                let x = group_left + GROUP_PADDING + series as f32 * (BAR_WIDTH + BAR_GAP);
                bars.push(Bar {
                    category: row.category().to_string(),
                    series,
                    value,
                    top_left: Point::new(x, BASELINE_Y - height),
                    size: Size::new(BAR_WIDTH, height),
                });
            }
            categories.push(CategoryLabel {
                text: row.category().to_string(),
                position: Point::new(
                    group_left + GROUP_WIDTH / 2.0,
                    BASELINE_Y + CATEGORY_LABEL_OFFSET,
                ),
            });
        }

        let gridlines = GRID_FRACTIONS
            .iter()
            .map(|fraction| Gridline {
                value: fraction * MAX_SCALE,
                y: BASELINE_Y - fraction * CHART_HEIGHT,
            })
            .collect();

        debug!(categories = dataset.len(), bars = bars.len(); "Bar chart layout computed");

        Self {
            bars,
            gridlines,
            categories,
        }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn gridlines(&self) -> &[Gridline] {
        &self.gridlines
    }

    pub fn categories(&self) -> &[CategoryLabel] {
        &self.categories
    }

    /// Y coordinate every bar stands on.
    pub fn baseline(&self) -> f32 {
        BASELINE_Y
    }

    /// Builds the chart's scene: page, plot card, gridlines, bars, labels and legend.
    pub fn to_scene(&self) -> Scene {
        let mut scene = Scene::new(VIEW_SIZE).with_background(ThemeToken::Bg);

        scene.add(
            Rect::new(
                Point::new(PLOT_LEFT, PLOT_TOP),
                Size::new(PLOT_WIDTH, CHART_HEIGHT),
                ThemeToken::BgCard,
            )
            .on_layer(RenderLayer::Background),
        );
        scene.add(chart_text(
            TITLE,
            TITLE_POSITION,
            14,
            TextAnchor::Middle,
            ThemeToken::Fg,
            None,
        ));

        for gridline in &self.gridlines {
            let stroke = if gridline.value == 0.0 {
                StrokeDefinition::solid(ThemeToken::Fg, 1.0).with_opacity(0.4)
            } else {
                StrokeDefinition::dashed(ThemeToken::Fg, 1.0).with_opacity(0.15)
            };
            scene.add(
                Line::new(
                    Point::new(PLOT_LEFT, gridline.y),
                    Point::new(PLOT_LEFT + PLOT_WIDTH, gridline.y),
                    stroke,
                )
                .on_layer(RenderLayer::Grid),
            );
            scene.add(chart_text(
                format_value(gridline.value),
                Point::new(PLOT_LEFT - TICK_LABEL_OFFSET, gridline.y + 4.0),
                10,
                TextAnchor::End,
                ThemeToken::Fg,
                Some(0.6),
            ));
        }

        for bar in &self.bars {
            scene.add(Rect::new(bar.top_left, bar.size, bar.color()).with_radius(BAR_RADIUS));
            scene.add(chart_text(
                format_value(bar.value),
                bar.label_anchor(),
                11,
                TextAnchor::Middle,
                ThemeToken::Fg,
                None,
            ));
        }

        for category in &self.categories {
            scene.add(chart_text(
                format!("ML-KEM-{}", category.text),
                category.position,
                12,
                TextAnchor::Middle,
                ThemeToken::Fg,
                None,
            ));
        }

        for (i, (name, color)) in SERIES_NAMES.iter().zip(SERIES_COLORS).enumerate() {
            let x = LEGEND_LEFT + i as f32 * LEGEND_STEP;
            scene.add(Rect::new(
                Point::new(x, LEGEND_Y - SWATCH_SIZE),
                Size::new(SWATCH_SIZE, SWATCH_SIZE),
                color,
            ));
            scene.add(chart_text(
                *name,
                Point::new(x + SWATCH_SIZE + 6.0, LEGEND_Y),
                11,
                TextAnchor::Start,
                ThemeToken::Fg,
                None,
            ));
        }

        scene
    }
}

/// The built-in ML-KEM timing dataset.
pub fn mlkem_timings() -> SeriesDataset {
    MLKEM_TIMINGS.into_iter().collect()
}

/// Grouped bars of keygen, encap and decap time for ML-KEM-512/768/1024.
pub fn mlkem_performance() -> Scene {
    BarChartLayout::compute(&mlkem_timings()).to_scene()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use plainsight_core::theme::Theme;

    use super::*;

    #[test]
    fn test_single_category_heights() {
        let dataset: SeriesDataset = [("512", [25.0, 24.0, 32.0])].into_iter().collect();
        let layout = BarChartLayout::compute(&dataset);
        let bars = layout.bars();

        assert_eq!(bars.len(), 3);
        assert!(bars[0].height() < bars[2].height());
        assert!(bars[2].height() < CHART_HEIGHT);
        assert_approx_eq!(f32, bars[0].height(), 75.0);
        assert_approx_eq!(f32, bars[2].height(), 96.0);
    }

    #[test]
    fn test_bars_stand_on_baseline() {
        let layout = BarChartLayout::compute(&mlkem_timings());
        for bar in layout.bars() {
            assert_approx_eq!(f32, bar.top_left().y() + bar.height(), layout.baseline());
        }
    }

    #[test]
    fn test_series_order_within_group() {
        let layout = BarChartLayout::compute(&mlkem_timings());
        for group in layout.bars().chunks(3) {
            assert_eq!(group[0].series(), 0);
            assert_eq!(group[1].series(), 1);
            assert_eq!(group[2].series(), 2);
            assert!(group[0].top_left().x() < group[1].top_left().x());
            assert!(group[1].top_left().x() < group[2].top_left().x());
            assert!(group.iter().all(|b| b.category() == group[0].category()));
        }
    }

    #[test]
    fn test_groups_offset_by_group_width() {
        let layout = BarChartLayout::compute(&mlkem_timings());
        let bars = layout.bars();
        assert_approx_eq!(f32, bars[3].top_left().x() - bars[0].top_left().x(), GROUP_WIDTH);
        assert_approx_eq!(f32, bars[6].top_left().x() - bars[3].top_left().x(), GROUP_WIDTH);

        let categories: Vec<_> = layout.categories().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(categories, ["512", "768", "1024"]);
    }

    #[test]
    fn test_gridlines() {
        let layout = BarChartLayout::compute(&mlkem_timings());
        let values: Vec<_> = layout.gridlines().iter().map(|g| g.value).collect();
        assert_eq!(values, [0.0, 20.0, 40.0, 60.0, 80.0]);
        assert_approx_eq!(f32, layout.gridlines()[0].y, layout.baseline());
        assert_approx_eq!(f32, layout.gridlines()[4].y, layout.baseline() - CHART_HEIGHT);
    }

    #[test]
    fn test_bars_fit_inside_plot() {
        let layout = BarChartLayout::compute(&mlkem_timings());
        let last = layout.bars().last().unwrap();
        assert!(last.top_left().x() + last.width() <= PLOT_LEFT + PLOT_WIDTH);
        assert_eq!(last.color(), ThemeToken::Purple);
    }

    #[test]
    fn test_extra_category_overflows_plot() {
        let dataset: SeriesDataset = [
            ("512", [25.0, 24.0, 32.0]),
            ("768", [39.0, 37.0, 47.0]),
            ("1024", [58.0, 54.0, 69.0]),
            ("2048", [10.0, 10.0, 10.0]),
        ]
        .into_iter()
        .collect();
        assert!(dataset.len() > MAX_CATEGORIES);

        let layout = BarChartLayout::compute(&dataset);
        let (fitting, overflow) = layout.bars().split_at(MAX_CATEGORIES * 3);

        let plot_right = PLOT_LEFT + PLOT_WIDTH;
        assert!(fitting.iter().all(|b| b.top_left().x() + b.width() <= plot_right));
        assert_eq!(overflow.len(), 3);
        assert!(overflow.iter().all(|b| b.category() == "2048"));
        assert!(overflow.iter().all(|b| b.top_left().x() >= plot_right));
        assert!(layout.categories()[3].position.x() > plot_right);
    }

    #[test]
    fn test_scene_renders_labels_and_legend() {
        let markup = mlkem_performance().render(Theme::gruvbox()).unwrap();
        assert!(markup.contains(r#"viewBox="0 0 640 380""#));
        for text in ["ML-KEM-512", "ML-KEM-1024", "KeyGen", "Encap", "Decap", "µs"] {
            assert!(markup.contains(text), "missing {text}");
        }
    }

    #[test]
    fn test_empty_dataset() {
        let layout = BarChartLayout::compute(&SeriesDataset::new());
        assert!(layout.bars().is_empty());
        assert_eq!(layout.gridlines().len(), GRID_FRACTIONS.len());
    }

    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn height_within_plot(v in 0.0f32..=MAX_SCALE) {
                let h = bar_height(v);
                prop_assert!(h >= 0.0);
                prop_assert!(h <= CHART_HEIGHT);
            }

            #[test]
            fn height_monotonic(a in 0.0f32..=MAX_SCALE, b in 0.0f32..=MAX_SCALE) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(bar_height(lo) <= bar_height(hi));
            }

            #[test]
            fn layout_is_deterministic(values in prop::array::uniform3(0.0f32..100.0)) {
                let dataset: SeriesDataset = [("512", values)].into_iter().collect();
                prop_assert_eq!(BarChartLayout::compute(&dataset), BarChartLayout::compute(&dataset));
            }
        }
    }
}
