//! Log-log convergence chart
//!
//! Draws one line-with-markers series per non-empty dataset and writes a PNG.

use crate::cli::config::PlotConfig;
use crate::console::Console;
use crate::errors::{ConvergenceError, Result};
use crate::types::{ConvergenceRecord, Dataset, Marker};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters_backend::DrawingErrorKind;
use std::ops::Range;
use std::path::Path;

/// Points per inch, used to turn point sizes into pixels
const POINTS_PER_INCH: f64 = 72.0;

/// Axis range used when nothing can be drawn on log axes
const FALLBACK_RANGE: Range<f64> = 1.0..10.0;

/// Figure layout, in physical units
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Line width in points
    pub line_width_pt: f64,
    /// Marker diameter in points
    pub marker_size_pt: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self::from(&PlotConfig::default())
    }
}

impl From<&PlotConfig> for PlotOptions {
    fn from(config: &PlotConfig) -> Self {
        Self {
            width_in: config.width_in,
            height_in: config.height_in,
            dpi: config.dpi,
            title: config.title.clone(),
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            line_width_pt: 2.0,
            marker_size_pt: 8.0,
        }
    }
}

impl PlotOptions {
    /// Image size in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        )
    }

    fn points_to_px(&self, points: f64) -> f64 {
        points * self.dpi as f64 / POINTS_PER_INCH
    }

    fn line_px(&self) -> u32 {
        self.points_to_px(self.line_width_pt).round().max(1.0) as u32
    }

    fn marker_radius_px(&self) -> i32 {
        (self.points_to_px(self.marker_size_pt) / 2.0).round().max(1.0) as i32
    }

    fn font_px(&self, points: f64) -> u32 {
        self.points_to_px(points).round().max(1.0) as u32
    }
}

/// A dataset and its records, ready to draw
#[derive(Debug, Clone, Copy)]
pub struct PlotSeries<'a> {
    pub dataset: &'a Dataset,
    pub records: &'a [ConvergenceRecord],
}

impl<'a> PlotSeries<'a> {
    pub fn new(dataset: &'a Dataset, records: &'a [ConvergenceRecord]) -> Self {
        Self { dataset, records }
    }

    fn points(&self) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .filter(|r| r.is_log_plottable())
            .map(|r| (r.dofs as f64, r.error))
            .collect()
    }
}

/// Axis bounds over all points, padded in log space
///
/// A range collapsed to a single value is widened by a factor of two each way.
pub fn log_range(values: impl IntoIterator<Item = f64>) -> Option<Range<f64>> {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| *v > 0.0 && v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;

    let span = hi.log10() - lo.log10();
    if span <= f64::EPSILON {
        return Some(lo / 2.0..hi * 2.0);
    }

    let pad = 10f64.powf(0.1 * span);
    Some(lo / pad..hi * pad)
}

/// Render the comparison chart to `output`
///
/// Empty series are left out and at least one must remain. Points that cannot
/// go on log axes are masked; if none are left the axes fall back to a fixed
/// range. When no usable font is available, the chart is rendered again
/// without any text.
pub fn plot_comparison(
    series: &[PlotSeries<'_>],
    output: &Path,
    options: &PlotOptions,
    console: &Console,
) -> Result<()> {
    let drawn: Vec<PlotSeries<'_>> = series
        .iter()
        .copied()
        .filter(|s| !s.records.is_empty())
        .collect();

    if drawn.is_empty() {
        return Err(ConvergenceError::Plot("no non-empty series to plot".to_string()));
    }

    let x_range = log_range(drawn.iter().flat_map(|s| s.points()).map(|(x, _)| x));
    let y_range = log_range(drawn.iter().flat_map(|s| s.points()).map(|(_, y)| y));
    let (x_range, y_range) = match (x_range, y_range) {
        (Some(x), Some(y)) => (x, y),
        _ => {
            console.warning(
                "No positive (DOFs, error) points for log-log axes; using default axis range",
            );
            (FALLBACK_RANGE, FALLBACK_RANGE)
        }
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ConvergenceError::io(parent, e))?;
    }

    let size = options.pixel_size();
    let root = BitMapBackend::new(output, size).into_drawing_area();
    let first = render(root, &drawn, x_range.clone(), y_range.clone(), options, true);

    match first {
        Ok(()) => {}
        Err(DrawingAreaErrorKind::BackendError(DrawingErrorKind::FontError(e))) => {
            console.warning(&format!("No usable font ({}); saving chart without text", e));
            let root = BitMapBackend::new(output, size).into_drawing_area();
            render(root, &drawn, x_range, y_range, options, false)
                .map_err(|e| ConvergenceError::Plot(e.to_string()))?;
        }
        Err(e) => return Err(ConvergenceError::Plot(e.to_string())),
    }

    console.info(&format!("Saved plot to {}", output.display()));
    Ok(())
}

fn render<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    series: &[PlotSeries<'_>],
    x_range: Range<f64>,
    y_range: Range<f64>,
    options: &PlotOptions,
    with_text: bool,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let title_px = options.font_px(14.0);
    let label_px = options.font_px(12.0);
    let tick_px = options.font_px(10.0);
    let legend_px = options.font_px(11.0);
    let line_px = options.line_px();
    let radius = options.marker_radius_px();

    let mut builder = ChartBuilder::on(&root);
    builder.margin(options.font_px(8.0));
    if with_text {
        builder
            .caption(&options.title, ("sans-serif", title_px))
            .x_label_area_size(label_px * 3)
            .y_label_area_size(label_px * 4);
    }

    let mut chart = builder.build_cartesian_2d(x_range.log_scale(), y_range.log_scale())?;

    if with_text {
        chart
            .configure_mesh()
            .x_desc(options.x_label.as_str())
            .y_desc(options.y_label.as_str())
            .axis_desc_style(("sans-serif", label_px))
            .label_style(("sans-serif", tick_px))
            .x_label_formatter(&|v| format!("{:.0e}", v))
            .y_label_formatter(&|v| format!("{:.0e}", v))
            .bold_line_style(BLACK.mix(0.25).stroke_width(1))
            .light_line_style(BLACK.mix(0.08).stroke_width(1))
            .draw()?;
    }

    for s in series {
        let color = s.dataset.style.color.rgb();
        let points = s.points();

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(line_px)))?
            .label(s.dataset.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(line_px))
            });

        match s.dataset.style.marker {
            Marker::Circle => {
                chart.draw_series(
                    points
                        .iter()
                        .map(|&p| Circle::new(p, radius, color.filled())),
                )?;
            }
            Marker::Square => {
                chart.draw_series(points.iter().map(|&p| {
                    EmptyElement::at(p)
                        + Rectangle::new([(-radius, -radius), (radius, radius)], color.filled())
                }))?;
            }
            Marker::Triangle => {
                chart.draw_series(
                    points
                        .iter()
                        .map(|&p| TriangleMarker::new(p, radius, color.filled())),
                )?;
            }
            Marker::Cross => {
                chart.draw_series(
                    points
                        .iter()
                        .map(|&p| Cross::new(p, radius, color.stroke_width(line_px))),
                )?;
            }
        }
    }

    if with_text {
        chart
            .configure_series_labels()
            .label_font(("sans-serif", legend_px))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperRight)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
