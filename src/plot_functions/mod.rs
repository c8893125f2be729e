// src/plot_functions/mod.rs

pub mod plot_corrected_angles;
pub mod plot_orientation_angles;

// src/plot_functions/mod.rs
