//! Integration test: Verify binary prints correct version

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_eventboard"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected output to contain version '{}', but got: {}",
        env!("CARGO_PKG_VERSION"),
        stdout
    );
}

#[test]
fn unknown_start_location_is_rejected() {
    let dir = std::env::temp_dir();
    let config = dir.join("eventboard_version_test_config.toml");
    let log = dir.join("eventboard_version_test.log");
    std::fs::write(&config, format!("log_file_path = {:?}\n", log.display().to_string()))
        .expect("write config");

    let output = Command::new(env!("CARGO_BIN_EXE_eventboard"))
        .args(["--config"])
        .arg(&config)
        .args(["--open", "nowhere.html"])
        .output()
        .expect("Failed to execute binary");

    let _ = std::fs::remove_file(&config);
    let _ = std::fs::remove_file(&log);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nowhere.html"), "stderr: {stderr}");
}
