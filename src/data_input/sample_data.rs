// src/data_input/sample_data.rs

use std::path::PathBuf;

/// One configured recording: where the CSV lives, how to label the charts,
/// and which time window of the capture is relevant.
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    pub csv_path: PathBuf,
    pub title: String,
    pub window_start_s: f64,
    pub window_end_s: f64,
    /// Nominal offset in degrees noted during the capture session. Kept for
    /// parity with the capture notes; the transform does not use it.
    pub offset_deg: f64,
}

impl RecordingConfig {
    pub fn new(
        csv_path: impl Into<PathBuf>,
        title: impl Into<String>,
        window_start_s: f64,
        window_end_s: f64,
        offset_deg: f64,
    ) -> Self {
        Self {
            csv_path: csv_path.into(),
            title: title.into(),
            window_start_s,
            window_end_s,
            offset_deg,
        }
    }
}

/// Structure to hold data parsed from a single row of the recording CSV.
/// Uses `Option<f64>` to handle potentially missing or unparseable values;
/// the timestamp is mandatory since rows without one are skipped at load.
#[derive(Debug, Default, Clone)]
pub struct SampleRow {
    pub timestamp_ms: f64,    // Milliseconds since the device epoch.
    pub alpha: Option<f64>,   // Orientation around Z (degrees).
    pub beta: Option<f64>,    // Orientation around X (degrees).
    pub gamma: Option<f64>,   // Orientation around Y (degrees).
    pub a: Option<f64>,       // Corrected forward angle (degrees).
    pub b: Option<f64>,       // Corrected right angle (degrees).
    pub c: Option<f64>,       // Corrected up angle (degrees).
}

// src/data_input/sample_data.rs
