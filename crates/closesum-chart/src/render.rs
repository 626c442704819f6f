//! Chart rendering over a [`Surface`].

use closesum_aggregate::SecuritySeries;

use crate::layout::{ChartGeometry, ChartLayout, TickLabel};
use crate::surface::{Color, Orientation, Point, Rect, Surface, TextAnchor, TextSize, TextStyle};

/// Caption under the x axis.
pub const X_CAPTION: &str = "Dates";

/// Caption beside the y axis.
pub const Y_CAPTION: &str = "Stock Change";

/// Length of the x-axis tick notches.
const NOTCH_LENGTH: f64 = 5.0;

/// Colours and marker size of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartTheme {
    /// Canvas background.
    pub background: Color,
    /// Title text.
    pub title: Color,
    /// Gridlines.
    pub grid: Color,
    /// Axes and notches.
    pub axis: Color,
    /// Captions and tick labels.
    pub label: Color,
    /// Series line.
    pub line: Color,
    /// Point markers.
    pub marker: Color,
    /// Marker radius in pixels.
    pub marker_radius: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            title: Color::BLACK,
            grid: Color::rgb(221, 221, 221),
            axis: Color::BLACK,
            label: Color::rgb(51, 51, 51),
            line: Color::rgb(0, 102, 204),
            marker: Color::rgb(0, 102, 204),
            marker_radius: 3.0,
        }
    }
}

/// Renders one security's line chart.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    layout: ChartLayout,
    theme: ChartTheme,
}

impl ChartRenderer {
    /// Creates a renderer for the given layout with the default theme.
    #[must_use]
    pub fn new(layout: ChartLayout) -> Self {
        Self {
            layout,
            theme: ChartTheme::default(),
        }
    }

    /// Sets the theme.
    #[must_use]
    pub const fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Returns the canvas layout.
    #[must_use]
    pub const fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Draws the complete chart of `series` onto `surface`.
    ///
    /// Returns the geometry the chart was drawn with.
    pub fn render<S: Surface + ?Sized>(
        &self,
        series: &SecuritySeries,
        surface: &mut S,
    ) -> ChartGeometry {
        let geometry = ChartGeometry::compute(&self.layout, series);

        self.draw_background(surface);
        self.draw_title(series, surface);
        self.draw_gridlines(&geometry, surface);
        self.draw_axes(&geometry, surface);
        self.draw_captions(&geometry, surface);
        self.draw_series(&geometry, series, surface);
        self.draw_x_ticks(&geometry, series, surface);
        self.draw_y_labels(&geometry, surface);

        geometry
    }

    fn draw_background<S: Surface + ?Sized>(&self, surface: &mut S) {
        let rect = Rect::new(
            0.0,
            0.0,
            f64::from(self.layout.width),
            f64::from(self.layout.height),
        );
        surface.fill_rect(rect, self.theme.background);
    }

    fn draw_title<S: Surface + ?Sized>(&self, series: &SecuritySeries, surface: &mut S) {
        let at = Point::new(
            f64::from(self.layout.width) / 2.0,
            f64::from(self.layout.margin) / 2.0,
        );
        let style = TextStyle::new(self.theme.title, TextAnchor::Middle).with_size(TextSize::Title);
        surface.fill_text(&series.id.display_name(), at, style);
    }

    fn draw_gridlines<S: Surface + ?Sized>(&self, geometry: &ChartGeometry, surface: &mut S) {
        let plot = geometry.plot;
        for x in geometry.vertical_gridlines() {
            surface.stroke_line(
                Point::new(x, plot.top),
                Point::new(x, plot.bottom()),
                self.theme.grid,
            );
        }
        for line in geometry.horizontal_gridlines() {
            surface.stroke_line(
                Point::new(plot.left, line.y),
                Point::new(plot.right(), line.y),
                self.theme.grid,
            );
        }
    }

    fn draw_axes<S: Surface + ?Sized>(&self, geometry: &ChartGeometry, surface: &mut S) {
        let plot = geometry.plot;
        let origin = Point::new(plot.left, plot.bottom());
        surface.stroke_line(Point::new(plot.left, plot.top), origin, self.theme.axis);
        surface.stroke_line(origin, Point::new(plot.right(), plot.bottom()), self.theme.axis);
    }

    fn draw_captions<S: Surface + ?Sized>(&self, geometry: &ChartGeometry, surface: &mut S) {
        let plot = geometry.plot;
        let margin = f64::from(self.layout.margin);
        let style = TextStyle::new(self.theme.label, TextAnchor::Middle);

        surface.fill_text(
            X_CAPTION,
            Point::new(plot.center_x(), f64::from(self.layout.height) - margin * 0.3),
            style,
        );
        surface.fill_text(
            Y_CAPTION,
            Point::new(margin * 0.3, plot.center_y()),
            style.with_orientation(Orientation::Vertical),
        );
    }

    /// Draws line segments between neighbouring valid points and a marker
    /// on every valid point. A gap breaks the line on both sides.
    fn draw_series<S: Surface + ?Sized>(
        &self,
        geometry: &ChartGeometry,
        series: &SecuritySeries,
        surface: &mut S,
    ) {
        let positions: Vec<Option<Point>> = series
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| geometry.position(i, p.change))
            .collect();

        for pair in positions.windows(2) {
            if let [Some(from), Some(to)] = pair {
                surface.stroke_line(*from, *to, self.theme.line);
            }
        }
        for pos in positions.iter().flatten() {
            surface.stroke_arc_point(*pos, self.theme.marker_radius, self.theme.marker);
        }
    }

    fn draw_x_ticks<S: Surface + ?Sized>(
        &self,
        geometry: &ChartGeometry,
        series: &SecuritySeries,
        surface: &mut S,
    ) {
        let bottom = geometry.plot.bottom();
        for x in geometry.vertical_gridlines() {
            surface.stroke_line(
                Point::new(x, bottom),
                Point::new(x, bottom + NOTCH_LENGTH),
                self.theme.axis,
            );
        }
        self.draw_labels(geometry.x_labels(series), surface);
    }

    fn draw_y_labels<S: Surface + ?Sized>(&self, geometry: &ChartGeometry, surface: &mut S) {
        self.draw_labels(geometry.y_labels(), surface);
    }

    fn draw_labels<S: Surface + ?Sized>(&self, labels: Vec<TickLabel>, surface: &mut S) {
        for label in labels {
            let style = TextStyle::new(self.theme.label, label.anchor);
            surface.fill_text(&label.text, label.at, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use closesum_aggregate::SeriesPoint;
    use closesum_types::SecurityId;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Rect(Rect, Color),
        Line(Point, Point, Color),
        Text(String, Point, TextStyle),
        Marker(Point),
    }

    #[derive(Debug, Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.ops.push(Op::Rect(rect, color));
        }

        fn stroke_line(&mut self, from: Point, to: Point, color: Color) {
            self.ops.push(Op::Line(from, to, color));
        }

        fn fill_text(&mut self, text: &str, at: Point, style: TextStyle) {
            self.ops.push(Op::Text(text.to_string(), at, style));
        }

        fn stroke_arc_point(&mut self, center: Point, _radius: f64, _color: Color) {
            self.ops.push(Op::Marker(center));
        }
    }

    impl Recorder {
        fn markers(&self) -> Vec<Point> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Marker(p) => Some(*p),
                    _ => None,
                })
                .collect()
        }

        fn lines_of(&self, color: Color) -> Vec<(Point, Point)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Line(a, b, c) if *c == color => Some((*a, *b)),
                    _ => None,
                })
                .collect()
        }

        fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(t, _, _) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    fn series(name: &str, values: &[f64]) -> SecuritySeries {
        let mut s = SecuritySeries::new(SecurityId::from_name(name));
        for (i, v) in values.iter().enumerate() {
            s.push(SeriesPoint::new(format!("2024-01-{:02}", i + 1), *v));
        }
        s
    }

    fn render(s: &SecuritySeries) -> Recorder {
        let mut rec = Recorder::default();
        ChartRenderer::default().render(s, &mut rec);
        rec
    }

    fn series_color() -> Color {
        ChartTheme::default().line
    }

    #[test]
    fn test_background_first_and_title_second() {
        let rec = render(&series("First Bank", &[1.0, 2.0]));
        match &rec.ops[0] {
            Op::Rect(rect, color) => {
                assert_eq!(*color, Color::WHITE);
                assert_relative_eq!(rect.width, 800.0);
                assert_relative_eq!(rect.height, 400.0);
            }
            other => panic!("expected background, got {other:?}"),
        }
        match &rec.ops[1] {
            Op::Text(text, _, style) => {
                assert_eq!(text, "First Bank");
                assert_eq!(style.size, TextSize::Title);
            }
            other => panic!("expected title, got {other:?}"),
        }
    }

    #[test]
    fn test_single_point_draws_one_marker_no_segment() {
        let rec = render(&series("ABC", &[4.0]));
        let markers = rec.markers();
        assert_eq!(markers.len(), 1);
        assert_relative_eq!(markers[0].x, 400.0);
        assert!(rec.lines_of(series_color()).is_empty());
    }

    #[test]
    fn test_line_connects_consecutive_points() {
        let rec = render(&series("ABC", &[1.0, 3.0, 2.0]));
        assert_eq!(rec.lines_of(series_color()).len(), 2);
        assert_eq!(rec.markers().len(), 3);
    }

    #[test]
    fn test_gap_breaks_line() {
        let rec = render(&series("ABC", &[1.0, f64::NAN, 2.0, 3.0]));
        // Only 2.0 -> 3.0 survives.
        assert_eq!(rec.lines_of(series_color()).len(), 1);
        assert_eq!(rec.markers().len(), 3);
        assert!(rec.markers().iter().all(|p| p.y.is_finite()));
    }

    #[test]
    fn test_flat_series_markers_share_row() {
        let rec = render(&series("ABC", &[2.0, 2.0, 2.0]));
        let markers = rec.markers();
        assert_eq!(markers.len(), 3);
        assert!(markers.iter().all(|p| (p.y - 200.0).abs() < 1e-9));
    }

    #[test]
    fn test_scenario_axis_span() {
        let mut rec = Recorder::default();
        let geometry = ChartRenderer::default().render(&series("ABC", &[1.0, 2.0]), &mut rec);
        assert_relative_eq!(geometry.y_min, 1.0);
        assert_relative_eq!(geometry.y_max, 2.0);
        let texts = rec.texts();
        assert!(texts.contains(&"1.00"));
        assert!(texts.contains(&"2.00"));
    }

    #[test]
    fn test_captions_and_rotation() {
        let rec = render(&series("ABC", &[1.0, 2.0]));
        let caption = rec.ops.iter().find_map(|op| match op {
            Op::Text(t, _, style) if t == Y_CAPTION => Some(*style),
            _ => None,
        });
        assert_eq!(caption.unwrap().orientation, Orientation::Vertical);
        assert!(rec.texts().contains(&X_CAPTION));
    }

    #[test]
    fn test_draw_order() {
        let rec = render(&series("ABC", &[1.0, 2.0]));
        let first_marker = rec.ops.iter().position(|op| matches!(op, Op::Marker(_)));
        let x_caption = rec
            .ops
            .iter()
            .position(|op| matches!(op, Op::Text(t, _, _) if t == X_CAPTION));
        let last_label = rec
            .ops
            .iter()
            .rposition(|op| matches!(op, Op::Text(t, _, _) if t == "2.00"));
        assert!(x_caption < first_marker);
        assert!(first_marker < last_label);
    }

    #[test]
    fn test_notches_per_point() {
        let rec = render(&series("ABC", &[1.0, 2.0, 3.0, 4.0]));
        let theme = ChartTheme::default();
        let notches = rec
            .lines_of(theme.axis)
            .into_iter()
            .filter(|(a, b)| (b.y - a.y - NOTCH_LENGTH).abs() < 1e-9)
            .count();
        assert_eq!(notches, 4);
    }

    #[test]
    fn test_empty_series_renders() {
        let rec = render(&series("ABC", &[]));
        assert!(rec.markers().is_empty());
        assert!(rec.texts().contains(&"ABC"));
    }
}
