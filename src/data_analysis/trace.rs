// src/data_analysis/trace.rs

use ndarray::Array1;

use crate::data_analysis::angle_unwrap::unwrap_degrees;
use crate::data_analysis::time_normalization::{relative_time_s, rezero};
use crate::data_input::sample_data::SampleRow;

/// Cleaned, windowed, unwrapped series for one recording. All vectors have
/// equal length and share row order with the retained samples; both charts
/// draw from this one dataset.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OrientationTrace {
    pub time_s: Vec<f64>,
    pub alpha_unwrapped: Vec<f64>,
    pub beta: Vec<f64>,
    pub gamma: Vec<f64>,
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub c_unwrapped: Vec<f64>,
}

impl OrientationTrace {
    pub fn len(&self) -> usize {
        self.time_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_s.is_empty()
    }
}

/// Phase-unwraps the present values of one windowed column and re-zeroes the
/// result against its first present value. The output is aligned with the
/// input: rows where the column was missing stay `None`.
///
/// Unwrapping runs over the whole windowed column, not just the rows that
/// survive the incomplete-row drop, so a dropped row still contributes its
/// deltas to the wrap corrections of its neighbors.
fn unwrap_present(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let present: Vec<f64> = values.iter().filter_map(|v| *v).collect();
    let mut unwrapped = unwrap_degrees(&Array1::from(present)).to_vec();
    rezero(&mut unwrapped);

    let mut remaining = unwrapped.into_iter();
    values
        .iter()
        .map(|v| v.and_then(|_| remaining.next()))
        .collect()
}

/// Builds the plotted series from raw samples.
///
/// Steps, in order: relative time from the first sample, inclusive trim to
/// `[window_start_s, window_end_s]`, re-zero of the retained time axis,
/// phase unwrap of the full windowed `alpha` and `c` columns (each re-zeroed
/// to start at 0 degrees), then removal of rows with any missing value from
/// the plotted series.
pub fn build_trace(
    samples: &[SampleRow],
    window_start_s: f64,
    window_end_s: f64,
) -> OrientationTrace {
    let timestamps_ms: Vec<f64> = samples.iter().map(|row| row.timestamp_ms).collect();
    let time_s = relative_time_s(&timestamps_ms);

    // Inclusive on both window edges.
    let windowed: Vec<(f64, &SampleRow)> = time_s
        .iter()
        .zip(samples)
        .filter(|(&t, _)| t >= window_start_s && t <= window_end_s)
        .map(|(&t, row)| (t, row))
        .collect();

    if windowed.is_empty() {
        if !samples.is_empty() {
            log::warn!(
                "window [{window_start_s}, {window_end_s}] s retained no samples; \
                 the charts for this recording will be empty"
            );
        }
        return OrientationTrace::default();
    }

    // The window starts at time 0 regardless of where it sat in the capture.
    let window_t0 = windowed[0].0;

    let alpha_column: Vec<Option<f64>> = windowed.iter().map(|(_, row)| row.alpha).collect();
    let c_column: Vec<Option<f64>> = windowed.iter().map(|(_, row)| row.c).collect();
    let alpha_unwrapped = unwrap_present(&alpha_column);
    let c_unwrapped = unwrap_present(&c_column);

    let mut trace = OrientationTrace::default();
    for (i, (t, row)) in windowed.iter().enumerate() {
        let complete = (
            alpha_unwrapped[i],
            row.beta,
            row.gamma,
            row.a,
            row.b,
            c_unwrapped[i],
        );
        let (alpha_u, beta, gamma, a, b, c_u) = match complete {
            (Some(alpha_u), Some(beta), Some(gamma), Some(a), Some(b), Some(c_u)) => {
                (alpha_u, beta, gamma, a, b, c_u)
            }
            _ => continue, // incomplete row, dropped from both charts
        };

        trace.time_s.push(t - window_t0);
        trace.alpha_unwrapped.push(alpha_u);
        trace.beta.push(beta);
        trace.gamma.push(gamma);
        trace.a.push(a);
        trace.b.push(b);
        trace.c_unwrapped.push(c_u);
    }

    if trace.is_empty() {
        log::warn!(
            "window [{window_start_s}, {window_end_s}] s retained {} samples but all were \
             incomplete; the charts for this recording will be empty",
            windowed.len()
        );
    }

    trace
}


// src/data_analysis/trace.rs
