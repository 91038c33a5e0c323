use std::io::Cursor;
use std::sync::Arc;

use fridge_recommender::{
    AppError, FridgeAnalysisService, ImageUpload, RecipeCatalog, Session, Settings,
};
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use tower::ServiceExt;

fn encoded(rgb: [u8; 3], format: ImageFormat) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(
        32,
        24,
        Rgb(rgb),
    ));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

fn service() -> FridgeAnalysisService {
    FridgeAnalysisService::from_settings(&Settings::default(), Arc::new(RecipeCatalog::builtin()))
}

#[tokio::test]
async fn blue_fridge_recommends_dairy_first() {
    let upload = ImageUpload::new("fridge.png", encoded([0, 0, 255], ImageFormat::Png));
    let report = service().oneshot(upload).await.unwrap();

    assert_eq!(
        report.ingredients.to_vec(),
        vec!["milk", "cheese", "egg", "chicken", "onion"]
    );
    assert_eq!(report.recommendations[0].recipe.name, "Milkshake");
    assert_eq!(report.recommendations[1].recipe.name, "Grilled Cheese");
    assert!(report.recommendations.len() <= 8);
}

#[tokio::test]
async fn jpeg_uploads_are_accepted() {
    let upload = ImageUpload::new("fridge.jpg", encoded([250, 10, 10], ImageFormat::Jpeg));
    let report = service().oneshot(upload).await.unwrap();
    assert!(report.ingredients.contains("tomato"));
}

#[test]
fn session_keeps_only_latest_analysis() {
    let svc = service();
    let mut session = Session::new();

    let red = ImageUpload::new("red.png", encoded([255, 0, 0], ImageFormat::Png));
    session.record(svc.analyze(&red).unwrap());

    let broken = ImageUpload::new("broken.png", vec![0u8; 16]);
    assert!(matches!(svc.analyze(&broken), Err(AppError::ImageDecode(_))));

    // A failed analysis leaves the previous result alone
    assert_eq!(session.last_report().unwrap().source, "red.png");

    let blue = ImageUpload::new("blue.png", encoded([0, 0, 255], ImageFormat::Png));
    session.record(svc.analyze(&blue).unwrap());
    let last = session.last_report().unwrap();
    assert_eq!(last.source, "blue.png");
    assert!(!last.ingredients.contains("tomato"));
}

#[test]
fn report_serializes_to_json() {
    let upload = ImageUpload::new("fridge.png", encoded([0, 255, 0], ImageFormat::Png));
    let report = service().analyze(&upload).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["source"], "fridge.png");
    assert_eq!(json["ingredients"].as_array().unwrap().len(), 6);
    assert_eq!(json["recommendations"][0]["recipe"]["name"], "Scrambled Eggs");
    assert_eq!(json["recommendations"][2]["recipe"]["difficulty"], "Medium");
}
