// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE, GREEN, ORANGE};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 900;
pub const PLOT_HEIGHT: u32 = 600;

// Directory the rendered charts are written to.
pub const OUTPUT_DIR: &str = "output";

// Axis labels shared by both chart types.
pub const X_AXIS_LABEL: &str = "Time (seconds)";
pub const Y_AXIS_LABEL: &str = "Angle (degrees)";

// --- Plot Color Assignments ---
// Both charts reuse the same three-color cycle for their series.
pub const COLOR_ALPHA_MAIN: &RGBColor = &BLUE;
pub const COLOR_BETA_MAIN: &RGBColor = &ORANGE;
pub const COLOR_GAMMA_MAIN: &RGBColor = &GREEN;
pub const COLOR_FORWARD_MAIN: &RGBColor = &BLUE;
pub const COLOR_RIGHT_MAIN: &RGBColor = &ORANGE;
pub const COLOR_UP_MAIN: &RGBColor = &GREEN;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Font sizes
pub const FONT_SIZE_CHART_TITLE: u32 = 24;
pub const FONT_SIZE_AXIS_LABEL: u32 = 16;
pub const FONT_SIZE_LEGEND: u32 = 15;
pub const FONT_SIZE_MESSAGE: i32 = 18;

// src/constants.rs
