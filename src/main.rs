// src/main.rs

use std::error::Error;
use std::path::Path;

use orientation_csv_render::constants::OUTPUT_DIR;
use orientation_csv_render::data_input::sample_data::RecordingConfig;
use orientation_csv_render::pipeline::process_recording;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // One entry per capture from the orientation test session. The last field
    // is the nominal offset in degrees noted during capture; the transform
    // does not use it.
    let recordings = [
        RecordingConfig::new("device_orientation_01.csv", "Parallel to ground", 0.6, 6.0, 0.0),
        RecordingConfig::new("device_orientation_02.csv", "45 degrees tilt", 1.8, 8.0, 0.0),
        RecordingConfig::new("device_orientation_03.csv", "Vertical position", 2.0, 6.5, -360.0),
    ];

    let output_dir = Path::new(OUTPUT_DIR);

    // Recordings are processed strictly in order; the first failure aborts
    // the whole run.
    for config in &recordings {
        println!("Processing {}", config.csv_path.display());
        process_recording(config, output_dir)?;
    }

    println!("All plots saved to ./{OUTPUT_DIR}/");
    Ok(())
}

// src/main.rs
