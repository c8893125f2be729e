// src/plot_functions/plot_corrected_angles.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_FORWARD_MAIN, COLOR_RIGHT_MAIN, COLOR_UP_MAIN, LINE_WIDTH_PLOT, X_AXIS_LABEL,
    Y_AXIS_LABEL,
};
use crate::data_analysis::trace::OrientationTrace;
use crate::plot_framework::{draw_line_chart, paired, series_bounds, PlotConfig, PlotSeries};

/// Generates the corrected-orientation chart: forward and right angles plus
/// the unwrapped up angle.
pub fn plot_corrected_angles(
    trace: &OrientationTrace,
    title: &str,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let series = vec![
        PlotSeries {
            data: paired(&trace.time_s, &trace.a),
            label: "Forward".to_string(),
            color: *COLOR_FORWARD_MAIN,
            stroke_width: LINE_WIDTH_PLOT,
        },
        PlotSeries {
            data: paired(&trace.time_s, &trace.b),
            label: "Right".to_string(),
            color: *COLOR_RIGHT_MAIN,
            stroke_width: LINE_WIDTH_PLOT,
        },
        PlotSeries {
            data: paired(&trace.time_s, &trace.c_unwrapped),
            label: "Up".to_string(),
            color: *COLOR_UP_MAIN,
            stroke_width: LINE_WIDTH_PLOT,
        },
    ];

    let (x_range, y_range) = series_bounds(&series).unwrap_or((0.0..1.0, 0.0..1.0));

    draw_line_chart(
        output_path,
        &PlotConfig {
            title: format!("Device Orientation (Corrected) — {title}"),
            x_range,
            y_range,
            series,
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
        },
    )
}

// src/plot_functions/plot_corrected_angles.rs
