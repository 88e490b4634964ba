//! Chart layout engine.
//!
//! Turns the two small datasets of the documentation page into geometry:
//!
//! - [`bar`]: grouped bars, three series per category
//! - [`line`]: a polyline with point markers and a threshold line
//!
//! Layouts are pure closed-form scaling over fixed plot rectangles. Computing
//! a layout twice from the same dataset yields identical geometry.

pub mod bar;
pub mod line;

pub use bar::{BarChartLayout, mlkem_performance};
pub use line::{LineChartLayout, quality_vs_capacity};

use plainsight_core::{
    draw::{Text, TextAnchor, TextDefinition},
    geometry::Point,
    theme::ThemeToken,
};

/// Linear map from a value domain onto a pixel range.
///
/// The range may be inverted (`range.0 > range.1`), which is how vertical
/// axes put larger values higher on screen.
///
/// # Examples
///
/// ```
/// # use plainsight::chart::LinearScale;
/// let y = LinearScale::new((40.0, 70.0), (300.0, 40.0));
/// assert_eq!(y.scale(40.0), 300.0);
/// assert_eq!(y.scale(70.0), 40.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f32, f32),
    range: (f32, f32),
}

impl LinearScale {
    pub const fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f32, f32) {
        self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    /// Maps `value` onto the range. Values outside the domain extrapolate.
    ///
    /// An empty domain maps everything to the start of the range.
    pub fn scale(&self, value: f32) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// One category of a grouped bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRow {
    category: String,
    values: [f32; 3],
}

impl SeriesRow {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn values(&self) -> [f32; 3] {
        self.values
    }
}

/// Ordered categories, each holding one value per series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesDataset {
    rows: Vec<SeriesRow>,
}

impl SeriesDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a category after the existing ones.
    pub fn push(&mut self, category: impl Into<String>, values: [f32; 3]) {
        self.rows.push(SeriesRow {
            category: category.into(),
            values,
        });
    }

    pub fn rows(&self) -> &[SeriesRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, [f32; 3])> for SeriesDataset {
    fn from_iter<I: IntoIterator<Item = (S, [f32; 3])>>(iter: I) -> Self {
        let mut dataset = Self::new();
        for (category, values) in iter {
            dataset.push(category, values);
        }
        dataset
    }
}

/// Ordered `(x, y)` samples of a line chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointDataset {
    points: Vec<(f32, f32)>,
}

impl PointDataset {
    pub fn new(points: impl IntoIterator<Item = (f32, f32)>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if every x is greater than the one before it.
    ///
    /// The polyline is drawn in dataset order, so a dataset that is not
    /// increasing in x folds back on itself.
    pub fn is_increasing_in_x(&self) -> bool {
        self.points.windows(2).all(|pair| pair[0].0 < pair[1].0)
    }
}

/// Chart text in the diagram font.
pub(crate) fn chart_text(
    content: impl Into<String>,
    position: Point,
    size: u16,
    anchor: TextAnchor,
    color: ThemeToken,
    opacity: Option<f32>,
) -> Text {
    let mut definition = TextDefinition::new();
    definition.set_font_size(size);
    definition.set_anchor(anchor);
    definition.set_color(color);
    definition.set_opacity(opacity);
    Text::new(definition, content, position)
}

/// Formats a data value the way chart labels print it: no trailing `.0`.
pub(crate) fn format_value(value: f32) -> String {
    format!("{value}")
}
