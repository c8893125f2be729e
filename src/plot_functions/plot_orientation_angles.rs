// src/plot_functions/plot_orientation_angles.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_ALPHA_MAIN, COLOR_BETA_MAIN, COLOR_GAMMA_MAIN, LINE_WIDTH_PLOT, X_AXIS_LABEL,
    Y_AXIS_LABEL,
};
use crate::data_analysis::trace::OrientationTrace;
use crate::plot_framework::{draw_line_chart, paired, series_bounds, PlotConfig, PlotSeries};

/// Generates the raw orientation chart: unwrapped alpha plus beta and gamma.
pub fn plot_orientation_angles(
    trace: &OrientationTrace,
    title: &str,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let series = vec![
        PlotSeries {
            data: paired(&trace.time_s, &trace.alpha_unwrapped),
            label: "Alpha (Z)".to_string(),
            color: *COLOR_ALPHA_MAIN,
            stroke_width: LINE_WIDTH_PLOT,
        },
        PlotSeries {
            data: paired(&trace.time_s, &trace.beta),
            label: "Beta (X)".to_string(),
            color: *COLOR_BETA_MAIN,
            stroke_width: LINE_WIDTH_PLOT,
        },
        PlotSeries {
            data: paired(&trace.time_s, &trace.gamma),
            label: "Gamma (Y)".to_string(),
            color: *COLOR_GAMMA_MAIN,
            stroke_width: LINE_WIDTH_PLOT,
        },
    ];

    let (x_range, y_range) = series_bounds(&series).unwrap_or((0.0..1.0, 0.0..1.0));

    draw_line_chart(
        output_path,
        &PlotConfig {
            title: format!("Device Orientation — {title}"),
            x_range,
            y_range,
            series,
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
        },
    )
}

// src/plot_functions/plot_orientation_angles.rs
