// src/data_analysis/time_normalization.rs

/// Converts raw millisecond timestamps into seconds relative to the first
/// sample. Returns an empty vector for empty input.
pub fn relative_time_s(timestamps_ms: &[f64]) -> Vec<f64> {
    match timestamps_ms.first() {
        Some(&t0_ms) => timestamps_ms
            .iter()
            .map(|&t_ms| (t_ms - t0_ms) / 1000.0)
            .collect(),
        None => Vec::new(),
    }
}

/// Shifts a series so its first value becomes exactly 0.
pub fn rezero(series: &mut [f64]) {
    if let Some(&first) = series.first() {
        for value in series.iter_mut() {
            *value -= first;
        }
    }
}


// src/data_analysis/time_normalization.rs
