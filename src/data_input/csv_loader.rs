// src/data_input/csv_loader.rs

use csv::ReaderBuilder;
use std::path::Path;

use crate::data_input::sample_data::SampleRow;
use crate::error::PlotterError;

/// Header columns a recording must provide. Additional columns are ignored.
pub const REQUIRED_HEADERS: [&str; 7] =
    ["timestamp_ms", "alpha", "beta", "gamma", "a", "b", "c"];

/// Parses one recording CSV into sample rows.
///
/// Every required header must be present (extra columns are ignored and
/// header names are trimmed). Rows whose timestamp is missing or unparseable
/// are skipped with a warning, since they cannot be placed in time. Angle
/// values that are missing, unparseable, or non-finite are stored as `None`.
pub fn load_recording(csv_path: &Path) -> Result<Vec<SampleRow>, PlotterError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .map_err(|source| PlotterError::DataLoad {
            path: csv_path.to_path_buf(),
            source,
        })?;

    let header_record = reader
        .headers()
        .map_err(|source| PlotterError::DataLoad {
            path: csv_path.to_path_buf(),
            source,
        })?
        .clone();

    // Map each required header to its column index in this file.
    let mut header_indices = [0usize; REQUIRED_HEADERS.len()];
    for (slot, &name) in REQUIRED_HEADERS.iter().enumerate() {
        match header_record.iter().position(|h| h.trim() == name) {
            Some(csv_idx) => header_indices[slot] = csv_idx,
            None => {
                return Err(PlotterError::MissingColumn {
                    path: csv_path.to_path_buf(),
                    column: name,
                })
            }
        }
    }

    let mut samples: Vec<SampleRow> = Vec::new();
    for (row_index, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let parse_f64_by_slot = |slot: usize| -> Option<f64> {
                    record
                        .get(header_indices[slot])
                        .and_then(|val_str| val_str.parse::<f64>().ok())
                        .filter(|val| val.is_finite())
                };

                let timestamp_ms = match parse_f64_by_slot(0) {
                    Some(t_ms) => t_ms,
                    None => {
                        log::warn!(
                            "skipping row {} of '{}': missing or invalid 'timestamp_ms'",
                            row_index + 1,
                            csv_path.display()
                        );
                        continue;
                    }
                };

                samples.push(SampleRow {
                    timestamp_ms,
                    alpha: parse_f64_by_slot(1),
                    beta: parse_f64_by_slot(2),
                    gamma: parse_f64_by_slot(3),
                    a: parse_f64_by_slot(4),
                    b: parse_f64_by_slot(5),
                    c: parse_f64_by_slot(6),
                });
            }
            Err(e) => {
                log::warn!(
                    "skipping row {} of '{}' due to CSV read error: {}",
                    row_index + 1,
                    csv_path.display(),
                    e
                );
            }
        }
    }

    Ok(samples)
}

// src/data_input/csv_loader.rs
