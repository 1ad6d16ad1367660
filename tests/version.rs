//! Integration test: the binary reports its version without touching the terminal

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_dropselect"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected output to contain version, but got: {}",
        stdout
    );
}

#[test]
fn missing_items_file_is_reported() {
    let output = Command::new(env!("CARGO_BIN_EXE_dropselect"))
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("<ITEMS>"), "stderr: {}", stderr);
}
