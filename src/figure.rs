//! Parametric circle figure
//!
//! The curve and the arrows are drawn with [plotters] on a canvas sized so that
//! one data unit spans the same number of pixels along both axes.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;
use std::path::Path;

use crate::{Arrow, Circle, Extent, Result};

/// Figure title
pub const TITLE: &str = "Parametric Equation Circle";
/// Default width of the plotting area [px]
pub const PLOT_WIDTH: u32 = 640;
/// Largest width of the plotting area [px]
pub const MAX_PLOT_WIDTH: u32 = 16_384;
/// Axes padding as a fraction of the data range
pub const AXES_MARGIN: f64 = 0.05;

const TITLE_AREA: u32 = 40;
const LABEL_AREA: u32 = 40;
const MARGIN: u32 = 10;

/// Axes ranges and pixel sizes of a figure
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    /// plotting area (width,height) [px]
    pub plot_size: (u32, u32),
    /// whole canvas (width,height) [px]
    pub canvas_size: (u32, u32),
}
impl Layout {
    /// Number of pixels per data unit along the x and y axes
    pub fn scale(&self) -> (f64, f64) {
        (
            self.plot_size.0 as f64 / (self.x_range.end - self.x_range.start),
            self.plot_size.1 as f64 / (self.y_range.end - self.y_range.start),
        )
    }
}

/// Unit circle with its arrow annotations
pub struct Figure {
    circle: Circle,
    arrows: Vec<Arrow>,
    title: String,
    width: u32,
}
impl Default for Figure {
    fn default() -> Self {
        Self::new(Circle::default())
    }
}
impl Figure {
    /// Creates a figure of the `circle` with the five arrow annotations
    pub fn new(circle: Circle) -> Self {
        Self {
            circle,
            arrows: Arrow::annotations().to_vec(),
            title: TITLE.to_string(),
            width: PLOT_WIDTH,
        }
    }
    /// Sets the width of the plotting area [px]
    pub fn width(self, width: u32) -> Self {
        Self {
            width: width.max(1),
            ..self
        }
    }
    pub fn title<S: Into<String>>(self, title: S) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }
    pub fn circle(&self) -> &Circle {
        &self.circle
    }
    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }
    /// Bounding box of the curve and of the arrows
    pub fn extent(&self) -> Extent {
        let curve = Extent::from_points(self.circle.points());
        self.arrows
            .iter()
            .map(Arrow::extent)
            .fold(curve, |acc, e| Some(acc.map_or(e, |a| a.union(e))))
            .unwrap_or(Extent::UNIT)
    }
    /// Axes ranges padded by [AXES_MARGIN] with a 1:1 aspect ratio
    pub fn layout(&self) -> Layout {
        let extent = self.extent().padded(AXES_MARGIN);
        let plot_width = self.width;
        let plot_height =
            ((plot_width as f64 * extent.height() / extent.width()).round() as u32).max(1);
        Layout {
            x_range: extent.x_min..extent.x_max,
            y_range: extent.y_min..extent.y_max,
            plot_size: (plot_width, plot_height),
            canvas_size: (
                plot_width.saturating_add(LABEL_AREA + 2 * MARGIN),
                plot_height.saturating_add(TITLE_AREA + LABEL_AREA + 2 * MARGIN),
            ),
        }
    }
    /// Draws the figure on `root`
    ///
    /// `root` is expected to be [Layout::canvas_size] large.
    pub fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        let layout = self.layout();
        log::debug!(
            "axes: x {:?}, y {:?}, plot {:?}px",
            layout.x_range,
            layout.y_range,
            layout.plot_size
        );

        root.fill(&WHITE)?;
        // title in its own band: a chart caption takes a font dependent height off the plot
        let (title_area, body) = root.split_vertically(TITLE_AREA);
        let (width, _) = title_area.dim_in_pixel();
        let style = TextStyle::from(("sans-serif", 20).into_font())
            .pos(Pos::new(HPos::Center, VPos::Center));
        title_area.draw_text(
            &self.title,
            &style,
            ((width / 2) as i32, (TITLE_AREA / 2) as i32),
        )?;

        let mut chart = ChartBuilder::on(&body)
            .margin(MARGIN)
            .set_label_area_size(LabelAreaPosition::Left, LABEL_AREA)
            .set_label_area_size(LabelAreaPosition::Bottom, LABEL_AREA)
            .build_cartesian_2d(layout.x_range, layout.y_range)?;
        chart.configure_mesh().disable_mesh().draw()?;

        let color = colorous::TABLEAU10[0];
        let rgb = RGBColor(color.r, color.g, color.b);
        chart.draw_series(LineSeries::new(self.circle.points(), rgb.stroke_width(2)))?;

        for arrow in self.arrows.iter() {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![arrow.origin, arrow.tip()],
                arrow.color.stroke_width(1),
            )))?;
            chart.draw_series(std::iter::once(Polygon::new(
                arrow.head().to_vec(),
                arrow.color.filled(),
            )))?;
        }

        root.present()?;
        Ok(())
    }
    /// Writes the figure to `path`
    ///
    /// An `svg` extension selects the SVG backend, any other the bitmap one.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        log::info!("making figure: {:?}", path);
        let size = self.layout().canvas_size;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => {
                self.draw(&SVGBackend::new(path, size).into_drawing_area())?
            }
            _ => self.draw(&BitMapBackend::new(path, size).into_drawing_area())?,
        }
        log::info!("... figure written to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_contain_everything() {
        let figure = Figure::default();
        let Layout {
            x_range, y_range, ..
        } = figure.layout();
        let inside = |(x, y): (f64, f64)| x_range.contains(&x) && y_range.contains(&y);
        assert!(figure.circle().points().all(inside));
        for arrow in figure.arrows() {
            assert!(inside(arrow.origin));
            assert!(inside(arrow.tip()));
            assert!(arrow.head().into_iter().all(inside));
        }
    }

    #[test]
    fn arrow_heads_set_the_bounds() {
        let extent = Figure::default().extent();
        let apex = Arrow::annotations()[4].head()[1];
        assert_eq!(extent.y_max, apex.1);
        assert!((extent.y_min + 1.075).abs() < 1e-9);
        assert!((extent.x_min + 1.075).abs() < 1e-9);
        assert!((extent.x_max - 1.075).abs() < 1e-9);
    }

    #[test]
    fn equal_aspect_ratio() {
        for width in [100, 640, 1024] {
            let layout = Figure::default().width(width).layout();
            let (sx, sy) = layout.scale();
            println!("{width}px: {layout:?}");
            // within one pixel of rounding over the plot height
            assert!(
                (sx - sy).abs() * (layout.y_range.end - layout.y_range.start) <= 1.,
                "x scale: {sx}, y scale: {sy}"
            );
        }
    }

    #[test]
    fn canvas_wraps_plot() {
        let layout = Figure::default().layout();
        assert_eq!(layout.plot_size.0, PLOT_WIDTH);
        assert_eq!(layout.canvas_size.0, PLOT_WIDTH + LABEL_AREA + 2 * MARGIN);
        assert_eq!(
            layout.canvas_size.1,
            layout.plot_size.1 + TITLE_AREA + LABEL_AREA + 2 * MARGIN
        );
        assert!(layout.plot_size.1 > layout.plot_size.0);
    }

    #[test]
    fn empty_circle() {
        let figure = Figure::new(Circle::parametric(0)).width(0);
        assert!(figure.circle().is_empty());
        let layout = figure.layout();
        assert_eq!(layout.plot_size.0, 1);
        assert!(layout.x_range.end > layout.x_range.start);
    }

    fn render(figure: &Figure) -> String {
        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, figure.layout().canvas_size).into_drawing_area();
            figure.draw(&root).unwrap();
        }
        svg
    }

    #[test]
    fn draws_title_curve_and_arrows() {
        let svg = render(&Figure::default());
        assert_eq!(svg.matches(TITLE).count(), 1);
        assert_eq!(svg.matches("<polygon").count(), 5);
        assert_eq!(svg.matches(r##"fill="#008000""##).count(), 5);
        assert!(svg.contains("<polyline"));
    }

    #[test]
    fn draws_custom_title() {
        let svg = render(&Figure::default().title("Unit circle"));
        assert!(svg.contains("Unit circle"));
        assert!(!svg.contains(TITLE));
    }

    #[test]
    fn huge_width_saturates() {
        let layout = Figure::default().width(u32::MAX).layout();
        assert_eq!(layout.canvas_size.0, u32::MAX);
        assert_eq!(layout.canvas_size.1, u32::MAX);
    }
}
