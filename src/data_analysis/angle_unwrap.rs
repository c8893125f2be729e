// src/data_analysis/angle_unwrap.rs

use ndarray::Array1;
use std::f64::consts::{PI, TAU};

/// Phase-unwraps a series of angles given in degrees.
///
/// The series is converted to radians, each consecutive delta is folded back
/// into (-pi, pi] by accumulating +-2*pi corrections, and the result is
/// converted back to degrees. This removes the artificial jumps a wrapped
/// angle source produces at the 0/360 degree boundary. The first element is
/// passed through untouched; an empty input yields an empty output.
pub fn unwrap_degrees(angles_deg: &Array1<f64>) -> Array1<f64> {
    if angles_deg.is_empty() {
        return Array1::zeros(0);
    }

    let mut unwrapped: Vec<f64> = Vec::with_capacity(angles_deg.len());
    unwrapped.push(angles_deg[0]);

    // Cumulative correction in radians, always an integer multiple of 2*pi.
    let mut cumulative = 0.0_f64;
    let mut prev_rad = angles_deg[0].to_radians();

    for &deg in angles_deg.iter().skip(1) {
        let rad = deg.to_radians();
        let delta = rad - prev_rad;

        // Fold the delta into (-pi, pi]. rem_euclid lands in [-pi, pi), so a
        // fold of exactly -pi for a positive delta maps to +pi instead.
        let mut folded = (delta + PI).rem_euclid(TAU) - PI;
        if folded == -PI && delta > 0.0 {
            folded = PI;
        }

        cumulative += folded - delta;
        unwrapped.push((rad + cumulative).to_degrees());
        prev_rad = rad;
    }

    Array1::from(unwrapped)
}


// src/data_analysis/angle_unwrap.rs
