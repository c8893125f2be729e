// src/error.rs

use std::path::PathBuf;

/// Failure modes surfaced while processing one recording.
#[derive(Debug, thiserror::Error)]
pub enum PlotterError {
    #[error("failed to read '{}': {source}", path.display())]
    DataLoad {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("'{}' is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("failed to create output directory '{}': {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to render '{}': {message}", path.display())]
    Render { path: PathBuf, message: String },
}

// src/error.rs
