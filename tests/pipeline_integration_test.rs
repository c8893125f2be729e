// tests/pipeline_integration_test.rs

use std::fs;
use std::path::Path;

use orientation_csv_render::data_input::sample_data::RecordingConfig;
use orientation_csv_render::error::PlotterError;
use orientation_csv_render::pipeline::process_recording;

fn write_csv(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write test CSV");
}

fn read_svg(path: &Path) -> String {
    assert!(path.exists(), "expected '{}' to exist", path.display());
    fs::read_to_string(path).expect("read rendered SVG")
}

#[test]
fn test_full_pipeline_renders_both_charts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("device_orientation_01.csv");
    let output_dir = dir.path().join("output");

    // Alpha wraps past the 360 boundary; an extra column must be ignored.
    write_csv(
        &csv_path,
        "timestamp_ms,alpha,beta,gamma,a,b,c,extra\n\
         0,350,1,2,3,4,5,99\n\
         500,355,1,2,3,4,6,99\n\
         1000,5,1,2,3,4,7,99\n\
         1500,10,1,2,3,4,8,99\n",
    );

    let config = RecordingConfig::new(&csv_path, "Wrap scenario", 0.0, 1.5, 0.0);
    process_recording(&config, &output_dir).expect("pipeline should succeed");

    let angles_svg = read_svg(&output_dir.join("device_orientation_01_angles.svg"));
    let corrected_svg = read_svg(&output_dir.join("device_orientation_01_corrected_angles.svg"));

    // Legend labels and axis descriptions end up as SVG text elements.
    assert!(angles_svg.contains("Alpha (Z)"));
    assert!(angles_svg.contains("Beta (X)"));
    assert!(angles_svg.contains("Gamma (Y)"));
    assert!(angles_svg.contains("Time (seconds)"));
    assert!(angles_svg.contains("Device Orientation — Wrap scenario"));

    assert!(corrected_svg.contains("Forward"));
    assert!(corrected_svg.contains("Right"));
    assert!(corrected_svg.contains("Up"));
    assert!(corrected_svg.contains("Device Orientation (Corrected) — Wrap scenario"));
}

#[test]
fn test_output_directory_creation_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("rec.csv");
    let output_dir = dir.path().join("output");
    fs::create_dir_all(&output_dir).expect("pre-create output dir");

    write_csv(
        &csv_path,
        "timestamp_ms,alpha,beta,gamma,a,b,c\n0,1,2,3,4,5,6\n100,2,3,4,5,6,7\n",
    );

    let config = RecordingConfig::new(&csv_path, "Existing dir", 0.0, 1.0, 0.0);
    process_recording(&config, &output_dir).expect("existing output dir is not an error");
    assert!(output_dir.join("rec_angles.svg").exists());
    assert!(output_dir.join("rec_corrected_angles.svg").exists());
}

#[test]
fn test_header_only_csv_still_produces_charts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("empty.csv");
    let output_dir = dir.path().join("output");

    write_csv(&csv_path, "timestamp_ms,alpha,beta,gamma,a,b,c\n");

    let config = RecordingConfig::new(&csv_path, "Header only", 0.0, 1.0, 0.0);
    process_recording(&config, &output_dir).expect("empty recording is not an error");

    // Placeholder charts are still written for both plot types.
    let angles_svg = read_svg(&output_dir.join("empty_angles.svg"));
    let corrected_svg = read_svg(&output_dir.join("empty_corrected_angles.svg"));
    assert!(angles_svg.contains("No data points"));
    assert!(corrected_svg.contains("No data points"));
}

#[test]
fn test_window_outside_recording_produces_placeholder_charts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("short.csv");
    let output_dir = dir.path().join("output");

    write_csv(
        &csv_path,
        "timestamp_ms,alpha,beta,gamma,a,b,c\n0,1,2,3,4,5,6\n100,2,3,4,5,6,7\n",
    );

    // The window starts after the recording ends.
    let config = RecordingConfig::new(&csv_path, "Late window", 10.0, 20.0, 0.0);
    process_recording(&config, &output_dir).expect("empty window is not an error");
    assert!(read_svg(&output_dir.join("short_angles.svg")).contains("No data points"));
}

#[test]
fn test_missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = RecordingConfig::new(
        dir.path().join("does_not_exist.csv"),
        "Missing",
        0.0,
        1.0,
        0.0,
    );

    let err = process_recording(&config, &dir.path().join("output"))
        .expect_err("missing file must fail");
    assert!(matches!(&err, PlotterError::DataLoad { .. }), "got {err:?}");
}

#[test]
fn test_missing_column_is_reported_by_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("no_gamma.csv");
    write_csv(&csv_path, "timestamp_ms,alpha,beta,a,b,c\n0,1,2,4,5,6\n");

    let config = RecordingConfig::new(&csv_path, "No gamma", 0.0, 1.0, 0.0);
    let err = process_recording(&config, &dir.path().join("output"))
        .expect_err("missing column must fail");
    match err {
        PlotterError::MissingColumn { column, .. } => assert_eq!(column, "gamma"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn test_rerunning_pipeline_overwrites_outputs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("rec.csv");
    let output_dir = dir.path().join("output");

    write_csv(
        &csv_path,
        "timestamp_ms,alpha,beta,gamma,a,b,c\n0,350,1,2,3,4,5\n500,10,1,2,3,4,5\n",
    );

    let config = RecordingConfig::new(&csv_path, "Rerun", 0.0, 1.0, 0.0);
    process_recording(&config, &output_dir).expect("first run");
    let first = read_svg(&output_dir.join("rec_angles.svg"));
    process_recording(&config, &output_dir).expect("second run");
    let second = read_svg(&output_dir.join("rec_angles.svg"));

    // The transform is deterministic, so reruns produce identical charts.
    assert_eq!(first, second);
}

// tests/pipeline_integration_test.rs
