// src/pipeline.rs

use std::fs;
use std::path::Path;

use crate::data_analysis::trace::build_trace;
use crate::data_input::csv_loader::load_recording;
use crate::data_input::sample_data::RecordingConfig;
use crate::error::PlotterError;
use crate::plot_functions::plot_corrected_angles::plot_corrected_angles;
use crate::plot_functions::plot_orientation_angles::plot_orientation_angles;

/// Processes one recording end to end: load the CSV, window and unwrap the
/// series, and render both charts into `output_dir`.
///
/// The output directory is created if absent. The chart filenames are derived
/// from the CSV filename stem: `{stem}_angles.svg` and
/// `{stem}_corrected_angles.svg`.
pub fn process_recording(
    config: &RecordingConfig,
    output_dir: &Path,
) -> Result<(), PlotterError> {
    let samples = load_recording(&config.csv_path)?;
    let trace = build_trace(&samples, config.window_start_s, config.window_end_s);

    fs::create_dir_all(output_dir).map_err(|source| PlotterError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let stem = config
        .csv_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let angles_path = output_dir.join(format!("{stem}_angles.svg"));
    plot_orientation_angles(&trace, &config.title, &angles_path).map_err(|e| {
        PlotterError::Render {
            path: angles_path.clone(),
            message: e.to_string(),
        }
    })?;

    let corrected_path = output_dir.join(format!("{stem}_corrected_angles.svg"));
    plot_corrected_angles(&trace, &config.title, &corrected_path).map_err(|e| {
        PlotterError::Render {
            path: corrected_path.clone(),
            message: e.to_string(),
        }
    })?;

    Ok(())
}

// src/pipeline.rs
