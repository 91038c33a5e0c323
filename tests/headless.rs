use std::process::Command;

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};

fn write_fridge_photo(rgb: [u8; 3]) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("fridge-{}.png", uuid::Uuid::new_v4()));
    let img = DynamicImage::ImageRgb8(ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(
        16,
        16,
        Rgb(rgb),
    ));
    img.save_with_format(&path, ImageFormat::Png).unwrap();
    path
}

#[test]
fn headless_stdout_is_pure_json() {
    let photo = write_fridge_photo([255, 0, 0]);

    let output = Command::new(env!("CARGO_BIN_EXE_fridge-recommender"))
        .arg("--image")
        .arg(&photo)
        .env("FRIDGE__LOGGING__LEVEL", "debug")
        .output()
        .unwrap();
    let _ = std::fs::remove_file(&photo);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        report["ingredients"],
        serde_json::json!(["tomato", "apple", "egg", "chicken", "onion"])
    );
    assert_eq!(report["recommendations"][0]["recipe"]["name"], "Tomato Pasta");

    // Logging still happens, just not on stdout
    assert!(String::from_utf8_lossy(&output.stderr).contains("ColorHeuristicDetector"));
}

#[test]
fn headless_decode_failure_exits_non_zero() {
    let path = std::env::temp_dir().join(format!("fridge-{}.png", uuid::Uuid::new_v4()));
    std::fs::write(&path, b"not really a png").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_fridge-recommender"))
        .arg("--image")
        .arg(&path)
        .output()
        .unwrap();
    let _ = std::fs::remove_file(&path);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
