// src/plot_framework.rs

use plotters::backend::SVGBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MESSAGE,
    LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Zips a time axis with one value column into plottable points.
pub fn paired(time_s: &[f64], values: &[f64]) -> Vec<(f64, f64)> {
    time_s
        .iter()
        .zip(values)
        .map(|(&t, &v)| (t, v))
        .collect()
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

/// Computes the x/y plot ranges covering every point of every series.
/// The x axis is kept tight; the y axis gets the standard padding.
/// Returns `None` when no series holds any data.
pub fn series_bounds(series: &[PlotSeries]) -> Option<(Range<f64>, Range<f64>)> {
    let xs: Vec<f64> = series
        .iter()
        .flat_map(|s| s.data.iter().map(|&(x, _)| x))
        .collect();
    let ys: Vec<f64> = series
        .iter()
        .flat_map(|s| s.data.iter().map(|&(_, y)| y))
        .collect();
    if xs.is_empty() {
        return None;
    }

    let xs = Array1::from(xs);
    let ys = Array1::from(ys);
    let x_min = *xs.min().ok()?;
    let x_max = *xs.max().ok()?;
    let (y_min, y_max) = calculate_range(*ys.min().ok()?, *ys.max().ok()?);
    Some((x_min..x_max, y_min..y_max))
}

/// Draw a "Data Unavailable" message on a plot area.
fn draw_unavailable_message(
    area: &DrawingArea<SVGBackend, Shift>,
    chart_title: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Constants for text rendering
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4; // Additional spacing between lines

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = format!("{chart_title}\nData Unavailable: {reason}");

    // Estimate text dimensions for centering
    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;
    let estimated_text_height = lines.len().saturating_mul(estimated_line_height as usize) as i32;

    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - estimated_text_height / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

/// Renders one line chart to an SVG file.
///
/// An empty or degenerate dataset still produces a file, carrying a centered
/// placeholder message instead of axes, so a misconfigured window remains
/// visible in the output directory.
pub fn draw_line_chart(output_path: &Path, plot_config: &PlotConfig) -> Result<(), Box<dyn Error>> {
    let root_area = SVGBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let has_data = plot_config.series.iter().any(|s| !s.data.is_empty());
    let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
        && plot_config.y_range.end > plot_config.y_range.start;

    if !has_data || !valid_ranges {
        let reason = if !has_data {
            "No data points"
        } else {
            "Invalid ranges"
        };
        draw_unavailable_message(&root_area, &plot_config.title, reason)?;
        root_area.present()?;
        println!(
            "  Plot saved as '{}' (placeholder only: {}).",
            output_path.display(),
            reason
        );
        return Ok(());
    }

    let mut chart = ChartBuilder::on(&root_area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(10)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;
    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            s.color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    s.color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    root_area.present()?;
    println!("  Plot saved as '{}'.", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::style::colors::full_palette::BLUE;

    fn series(data: Vec<(f64, f64)>) -> PlotSeries {
        PlotSeries {
            data,
            label: "test".to_string(),
            color: BLUE,
            stroke_width: 1,
        }
    }

    #[test]
    fn test_calculate_range_padding() {
        let (min, max) = calculate_range(0.0, 100.0);
        assert_eq!(min, -15.0);
        assert_eq!(max, 115.0);
    }

    #[test]
    fn test_calculate_range_degenerate() {
        let (min, max) = calculate_range(5.0, 5.0);
        assert_eq!(min, 4.5);
        assert_eq!(max, 5.5);
    }

    #[test]
    fn test_calculate_range_swapped_inputs() {
        let (min, max) = calculate_range(10.0, -10.0);
        assert!(min < -10.0 && max > 10.0);
    }

    #[test]
    fn test_series_bounds_covers_all_series() {
        let bounds = series_bounds(&[
            series(vec![(0.0, -5.0), (2.0, 5.0)]),
            series(vec![(1.0, 20.0), (3.0, 0.0)]),
        ]);
        let (x_range, y_range) = bounds.expect("bounds for non-empty series");
        assert_eq!(x_range, 0.0..3.0);
        assert!(y_range.start < -5.0 && y_range.end > 20.0);
    }

    #[test]
    fn test_series_bounds_empty() {
        assert!(series_bounds(&[]).is_none());
        assert!(series_bounds(&[series(vec![])]).is_none());
    }

    #[test]
    fn test_paired_zips_time_with_values() {
        let points = paired(&[0.0, 0.5, 1.0], &[10.0, 20.0, 30.0]);
        assert_eq!(points, vec![(0.0, 10.0), (0.5, 20.0), (1.0, 30.0)]);
        assert!(paired(&[], &[]).is_empty());
    }
}

// src/plot_framework.rs
