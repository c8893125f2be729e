// src/data_analysis/mod.rs

pub mod angle_unwrap;
pub mod time_normalization;
pub mod trace;

// src/data_analysis/mod.rs
