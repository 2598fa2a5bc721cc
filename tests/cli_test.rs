//! Tests for the imatrix binary

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use image::{Rgb, RgbImage};

fn imatrix() -> Command {
    Command::new(env!("CARGO_BIN_EXE_imatrix"))
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("imatrix-cli-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn scenario_png(dir: &PathBuf) -> PathBuf {
    let mut img = RgbImage::new(2, 1);
    img.put_pixel(0, 0, Rgb([10, 20, 30]));
    img.put_pixel(1, 0, Rgb([40, 50, 60]));
    let path = dir.join("scenario.png");
    img.save(&path).unwrap();
    path
}

#[test]
fn test_binary_output_summary() {
    let dir = scratch_dir("bin");
    let input = scenario_png(&dir);
    let output = dir.join("out.bin");

    let result = imatrix().arg(&input).arg("--bin").arg(&output).output().unwrap();
    assert!(result.status.success());

    let stdout = String::from_utf8(result.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], format!("Loaded {}  mode=RGB  2x1x3  bytes=6", input.display()));
    assert_eq!(lines[1], format!("Wrote BIN  -> {}", output.display()));
    assert_eq!(fs::read(&output).unwrap().len(), 30);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_json_output_with_mode() {
    let dir = scratch_dir("json");
    let input = scenario_png(&dir);
    let output = dir.join("out.json");

    let result = imatrix()
        .arg(&input)
        .args(["--mode", "RGBA", "--json"])
        .arg(&output)
        .output()
        .unwrap();
    assert!(result.status.success());

    let stdout = String::from_utf8(result.stdout).unwrap();
    assert!(stdout.contains("mode=RGBA  2x1x4  bytes=8"));
    assert!(stdout.contains(&format!("Wrote JSON -> {}", output.display())));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        r#"{"width":2,"height":1,"channels":4,"data":[10,20,30,255,40,50,60,255]}"#
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_config_supplies_mode() {
    let dir = scratch_dir("config");
    let input = scenario_png(&dir);
    let config = dir.join("imatrix.toml");
    fs::write(&config, "mode = \"L\"\n").unwrap();
    let output = dir.join("out.bin");

    let result = imatrix()
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .arg("--bin")
        .arg(&output)
        .output()
        .unwrap();
    assert!(result.status.success());
    assert_eq!(fs::read(&output).unwrap().len(), 24 + 2);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_invalid_mode_exits_non_zero() {
    let dir = scratch_dir("bad-mode");
    let output = dir.join("out.json");

    let result = imatrix()
        .args(["missing.png", "--mode", "XYZ", "--json"])
        .arg(&output)
        .output()
        .unwrap();
    assert!(!result.status.success());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert_eq!(stderr.matches("Invalid mode").count(), 1);
    assert!(stderr.starts_with("Error: "));
    assert!(!output.exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_both_outputs_exits_non_zero() {
    let result = imatrix()
        .args(["missing.png", "--json", "a.json", "--bin", "a.bin"])
        .output()
        .unwrap();
    assert!(!result.status.success());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("Usage error"));
    assert!(!stderr.contains("decode"));
}

#[test]
fn test_no_output_exits_non_zero() {
    let result = imatrix().arg("missing.png").output().unwrap();
    assert!(!result.status.success());
    assert!(String::from_utf8(result.stderr).unwrap().contains("Usage error"));
}

#[test]
fn test_missing_input_exits_non_zero() {
    let dir = scratch_dir("missing-input");
    let output = dir.join("out.bin");

    let result = imatrix()
        .arg(dir.join("nope.png"))
        .arg("--bin")
        .arg(&output)
        .output()
        .unwrap();
    assert!(!result.status.success());
    assert!(String::from_utf8(result.stderr).unwrap().contains("Failed to decode image"));
    assert!(!output.exists());

    fs::remove_dir_all(&dir).unwrap();
}
