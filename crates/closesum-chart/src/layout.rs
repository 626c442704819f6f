//! Chart geometry: axis ranges, pixel scales, gridlines and tick labels.
//!
//! Everything here is plain arithmetic over a [`SecuritySeries`]; nothing
//! touches a drawing backend, so the scales can be checked directly.
//!
//! ```text
//!  (0,0) ┌───────────────────────────────┐
//!        │ margin                        │
//!        │   ┌───────────────────────┐   │
//!        │   │ plot area             │   │
//!        │   │ (W - 2m) x (H - 2m)   │   │
//!        │   └───────────────────────┘   │
//!        │                               │
//!        └───────────────────────────────┘ (W,H)
//! ```

use closesum_aggregate::SecuritySeries;

use crate::surface::{Point, TextAnchor};

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 800;

/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 400;

/// Default margin reserved around the plot area for axes and labels.
pub const DEFAULT_MARGIN: u32 = 50;

/// Number of equal bands the y range is split into.
pub const Y_BANDS: usize = 5;

/// Upper bound on the number of x-axis labels.
pub const MAX_X_LABELS: usize = 5;

/// Distance from the plot bottom to the x label centre line.
const X_LABEL_OFFSET: f64 = 15.0;

/// Gap between the y axis and the right edge of y labels.
const Y_LABEL_GAP: f64 = 8.0;

/// Canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Margin on every side of the plot area.
    pub margin: u32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_MARGIN)
    }
}

impl ChartLayout {
    /// Creates a layout.
    #[must_use]
    pub const fn new(width: u32, height: u32, margin: u32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Returns the plot area inside the margins.
    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        let margin = f64::from(self.margin);
        PlotArea {
            left: margin,
            top: margin,
            width: (f64::from(self.width) - 2.0 * margin).max(0.0),
            height: (f64::from(self.height) - 2.0 * margin).max(0.0),
        }
    }
}

/// The rectangle data is plotted in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    /// Left edge (the y axis).
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl PlotArea {
    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (the x axis).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Horizontal centre.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical centre.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// A horizontal gridline at a data value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gridline {
    /// Data value of the line.
    pub value: f64,
    /// Pixel row of the line.
    pub y: f64,
}

/// A positioned tick label.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    /// Label text.
    pub text: String,
    /// Anchor point (vertical centre of the text).
    pub at: Point,
    /// Alignment relative to the anchor.
    pub anchor: TextAnchor,
}

/// Pixel-space layout of one security's chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    /// Plot area.
    pub plot: PlotArea,
    /// Number of points, gaps included.
    pub point_count: usize,
    /// Value at the bottom of the plot.
    pub y_min: f64,
    /// Value at the top of the plot.
    pub y_max: f64,
}

impl ChartGeometry {
    /// Computes the geometry of a series.
    #[must_use]
    pub fn compute(layout: &ChartLayout, series: &SecuritySeries) -> Self {
        Self::from_range(layout, series.len(), series.value_range())
    }

    /// Computes the geometry from a point count and a value range.
    ///
    /// A missing range (no usable values) plots around zero. A degenerate
    /// range `v..v` is widened to `v - 0.5..v + 0.5`, so the span is
    /// exactly one and every value sits at mid-height.
    #[must_use]
    pub fn from_range(layout: &ChartLayout, point_count: usize, range: Option<(f64, f64)>) -> Self {
        let (lo, hi) = range.unwrap_or((0.0, 0.0));
        let (y_min, y_max) = if hi > lo {
            (lo, hi)
        } else {
            (lo - 0.5, lo + 0.5)
        };
        Self {
            plot: layout.plot_area(),
            point_count,
            y_min,
            y_max,
        }
    }

    /// Divisor of the x scale; never zero.
    #[must_use]
    pub fn x_denominator(&self) -> f64 {
        self.point_count.saturating_sub(1).max(1) as f64
    }

    /// Divisor of the y scale: the value span, clamped to at least one.
    ///
    /// A span below one is not stretched; its points keep their distance
    /// from the bottom of the plot.
    #[must_use]
    pub fn y_denominator(&self) -> f64 {
        (self.y_max - self.y_min).max(1.0)
    }

    /// Pixel column of the point at `index`.
    ///
    /// A single-point series is centred horizontally.
    #[must_use]
    pub fn x(&self, index: usize) -> f64 {
        if self.point_count == 1 {
            return self.plot.center_x();
        }
        self.plot.left + index as f64 * (self.plot.width / self.x_denominator())
    }

    /// Pixel row of a change value.
    #[must_use]
    pub fn y(&self, value: f64) -> f64 {
        self.plot.bottom() - (value - self.y_min) * (self.plot.height / self.y_denominator())
    }

    /// Pixel position of a point, or `None` for a gap.
    #[must_use]
    pub fn position(&self, index: usize, value: f64) -> Option<Point> {
        value
            .is_finite()
            .then(|| Point::new(self.x(index), self.y(value)))
    }

    /// Pixel columns of the vertical gridlines, one per point.
    #[must_use]
    pub fn vertical_gridlines(&self) -> Vec<f64> {
        (0..self.point_count).map(|i| self.x(i)).collect()
    }

    /// The horizontal gridlines, bottom to top, both ends included.
    #[must_use]
    pub fn horizontal_gridlines(&self) -> Vec<Gridline> {
        let step = (self.y_max - self.y_min) / Y_BANDS as f64;
        (0..=Y_BANDS)
            .map(|k| {
                let value = self.y_min + k as f64 * step;
                Gridline {
                    value,
                    y: self.y(value),
                }
            })
            .collect()
    }

    /// Index stride between x labels.
    ///
    /// Labels go at indices that are multiples of `ceil(n / 5)`, which keeps
    /// at most five of them regardless of series length.
    #[must_use]
    pub fn x_label_step(&self) -> usize {
        self.point_count.div_ceil(MAX_X_LABELS).max(1)
    }

    /// The sparse x-axis labels, centred under their ticks.
    #[must_use]
    pub fn x_labels(&self, series: &SecuritySeries) -> Vec<TickLabel> {
        let y = self.plot.bottom() + X_LABEL_OFFSET;
        series
            .points
            .iter()
            .enumerate()
            .step_by(self.x_label_step())
            .map(|(i, point)| TickLabel {
                text: point.date.clone(),
                at: Point::new(self.x(i), y),
                anchor: TextAnchor::Middle,
            })
            .collect()
    }

    /// The y-axis value labels, one per horizontal gridline.
    #[must_use]
    pub fn y_labels(&self) -> Vec<TickLabel> {
        let x = self.plot.left - Y_LABEL_GAP;
        self.horizontal_gridlines()
            .into_iter()
            .map(|line| TickLabel {
                text: format!("{:.2}", line.value),
                at: Point::new(x, line.y),
                anchor: TextAnchor::End,
            })
            .collect()
    }
}
