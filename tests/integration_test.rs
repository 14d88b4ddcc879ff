//! Integration tests for the complete recolor_background pipeline
//!
//! These tests validate the end-to-end workflow including:
//! - Image loading and normalization
//! - Non-white mask and hue/saturation remap
//! - Compositing over white and tint backgrounds
//! - PNG and WebP export next to the input
//! - Error handling for missing input and bad parameters

use image::{Rgba, RgbaImage};
use pastel_recolor::color::{hex_to_rgb, rgb_to_hls};
use pastel_recolor::{recolor_background, OutputPaths, RecolorConfig, RecolorError};
use palette::Srgb;
use std::path::{Path, PathBuf};
use std::process::Command;

/// 2x2 scenario: white opaque, red opaque, white half-transparent, black transparent
fn write_scenario_image(dir: &Path) -> PathBuf {
    let mut image = RgbaImage::new(2, 2);
    image.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
    image.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
    image.put_pixel(0, 1, Rgba([255, 255, 255, 128]));
    image.put_pixel(1, 1, Rgba([0, 0, 0, 0]));

    let path = dir.join("BG1.png");
    image.save(&path).unwrap();
    path
}

fn dir_entries(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    entries.sort();
    entries
}

fn assert_close(actual: u8, expected: u8, what: &str) {
    assert!(
        (actual as i16 - expected as i16).abs() <= 1,
        "{}: expected {} +/- 1, got {}",
        what,
        expected,
        actual
    );
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_recolor_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("BG1.png");

    let err = recolor_background(&missing, &RecolorConfig::default()).unwrap_err();
    assert!(matches!(err, RecolorError::InputNotFound { .. }));
    assert!(dir_entries(dir.path()).is_empty(), "no outputs may be created");
}

#[test]
fn test_recolor_empty_path() {
    let result = recolor_background(Path::new(""), &RecolorConfig::default());
    assert!(result.is_err());
}

#[test]
fn test_recolor_invalid_color_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_scenario_image(dir.path());
    let config = RecolorConfig {
        target_hex: "#6c63".to_string(),
        ..RecolorConfig::default()
    };

    let err = recolor_background(&input, &config).unwrap_err();
    assert!(matches!(err, RecolorError::InvalidColor { .. }));
    assert_eq!(dir_entries(dir.path()), vec![input]);
}

#[test]
fn test_recolor_undecodable_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("BG1.png");
    std::fs::write(&input, b"definitely not a png").unwrap();

    let err = recolor_background(&input, &RecolorConfig::default()).unwrap_err();
    assert!(matches!(err, RecolorError::ImageLoadError { .. }));
    assert_eq!(dir_entries(dir.path()), vec![input]);
}

// ============================================================================
// End-to-End Scenario
// ============================================================================

#[test]
fn test_recolor_writes_four_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_scenario_image(dir.path());

    let outputs = recolor_background(&input, &RecolorConfig::default()).unwrap();
    assert_eq!(outputs, OutputPaths::for_input(&input).unwrap());

    for (key, path) in outputs.entries() {
        assert!(path.is_file(), "{} missing at {}", key, path.display());
        assert_eq!(path.parent(), Some(dir.path()));
    }
    assert_eq!(
        outputs.png_white.file_name().unwrap(),
        "BG1_pastel_lilac_white.png"
    );
    assert_eq!(
        outputs.webp_tint.file_name().unwrap(),
        "BG1_pastel_lilac_tinted.webp"
    );
}

#[test]
fn test_recolor_white_background_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_scenario_image(dir.path());
    let config = RecolorConfig::default();

    let outputs = recolor_background(&input, &config).unwrap();
    let white = image::open(&outputs.png_white).unwrap();
    assert_eq!(white.color(), image::ColorType::Rgb8, "output has no alpha");
    let white = white.to_rgb8();
    assert_eq!(white.dimensions(), (2, 2));

    // White stays white, half-transparent white over white is white,
    // transparent black shows the white background
    assert_eq!(white.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(white.get_pixel(0, 1).0, [255, 255, 255]);
    assert_eq!(white.get_pixel(1, 1).0, [255, 255, 255]);

    // Red becomes a lilac with red's lightness and 0.55x its saturation
    let [r, g, b] = white.get_pixel(1, 0).0;
    let hls = rgb_to_hls(Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0));
    let target = rgb_to_hls(hex_to_rgb(&config.target_hex).unwrap());
    assert!((hls.lightness - 0.5).abs() < 0.01, "lightness {}", hls.lightness);
    assert!((hls.saturation - 0.55).abs() < 0.02, "saturation {}", hls.saturation);
    assert!((hls.hue - target.hue).abs() < 0.01, "hue {}", hls.hue);
    assert!(b > r && r > g, "lilac ordering, got {:?}", [r, g, b]);
}

#[test]
fn test_recolor_tinted_background_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_scenario_image(dir.path());

    let outputs = recolor_background(&input, &RecolorConfig::default()).unwrap();
    let tinted = image::open(&outputs.png_tint).unwrap().to_rgb8();
    let white = image::open(&outputs.png_white).unwrap().to_rgb8();

    // Opaque pixels ignore the background
    assert_eq!(tinted.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(tinted.get_pixel(1, 0), white.get_pixel(1, 0));

    // Fully transparent pixel is exactly the tint #fbf6f7
    assert_eq!(tinted.get_pixel(1, 1).0, [251, 246, 247]);

    // Alpha 128/255 blends white with the tint
    let a = 128.0 / 255.0;
    let expected = [251.0, 246.0, 247.0].map(|t: f32| (255.0 * a + t * (1.0 - a)).round() as u8);
    let actual = tinted.get_pixel(0, 1).0;
    for i in 0..3 {
        assert_close(actual[i], expected[i], "half-transparent tint blend");
    }
}

#[test]
fn test_recolor_webp_outputs_decode() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_scenario_image(dir.path());

    let outputs = recolor_background(&input, &RecolorConfig::default()).unwrap();
    for path in [&outputs.webp_white, &outputs.webp_tint] {
        let bytes = std::fs::read(path).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (2, 2));
    }
}

#[test]
fn test_recolor_custom_target() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_scenario_image(dir.path());
    let config = RecolorConfig {
        target_hex: "#00ff00".to_string(),
        saturation_scale: 1.0,
        ..RecolorConfig::default()
    };

    let outputs = recolor_background(&input, &config).unwrap();
    let white = image::open(&outputs.png_white).unwrap().to_rgb8();

    // Red at full saturation with a pure green hue is pure green
    assert_eq!(white.get_pixel(1, 0).0, [0, 255, 0]);
}

#[test]
fn test_recolor_overwrites_previous_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_scenario_image(dir.path());
    let config = RecolorConfig::default();

    let first = recolor_background(&input, &config).unwrap();
    let before = std::fs::read(&first.png_white).unwrap();
    let second = recolor_background(&input, &config).unwrap();

    assert_eq!(first, second);
    assert_eq!(std::fs::read(&second.png_white).unwrap(), before);
    assert_eq!(dir_entries(dir.path()).len(), 5);
}

// ============================================================================
// Command-Line Interface
// ============================================================================

#[test]
fn test_cli_missing_input_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("BG1.png");

    let output = Command::new(env!("CARGO_BIN_EXE_pastel-recolor"))
        .arg(&missing)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Input file not found").count(), 1, "stderr: {}", stderr);
    assert!(dir_entries(dir.path()).is_empty());
}

#[test]
fn test_cli_invalid_color_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_scenario_image(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_pastel-recolor"))
        .arg(&input)
        .args(["--tint", "nothex"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("nothex").count(), 1, "stderr: {}", stderr);
    assert!(!stderr.contains("recoloring"), "stderr: {}", stderr);
    assert_eq!(dir_entries(dir.path()).len(), 1);
}

#[test]
fn test_cli_prints_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_scenario_image(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_pastel-recolor"))
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&input.display().to_string()));
    for key in ["png_white", "png_tint", "webp_white", "webp_tint"] {
        assert!(stdout.contains(key), "missing {} in {}", key, stdout);
    }
    assert_eq!(dir_entries(dir.path()).len(), 5);
}

#[test]
fn test_cli_write_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("recolor.json");

    let status = Command::new(env!("CARGO_BIN_EXE_pastel-recolor"))
        .args(["--target", "#112233", "--write-config"])
        .arg(&config_path)
        .status()
        .unwrap();

    assert!(status.success());
    let config = RecolorConfig::from_json_file(&config_path).unwrap();
    assert_eq!(config.target_hex, "#112233");
    assert_eq!(config.tint_hex, "#fbf6f7");
}

#[test]
fn test_cli_rejects_bad_color() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_scenario_image(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_pastel-recolor"))
        .args(["--tint", "nothex"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(dir_entries(dir.path()), vec![input]);
}
