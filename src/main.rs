use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use fridge_recommender::app::FridgeApp;
use fridge_recommender::{
    AppError, DetectionStrategy, FridgeAnalysisService, ImageUpload, RecipeCatalog, Settings,
};
use tower::ServiceExt;
use tracing::{Level, info};

#[derive(Parser)]
#[command(name = "fridge-recommender")]
#[command(about = "Recommend recipes from a photo of your fridge")]
#[command(version)]
struct Cli {
    /// Settings file (TOML); defaults to ./fridge.toml when present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the ingredient detection strategy
    #[arg(long, value_enum)]
    strategy: Option<DetectionStrategy>,

    /// Analyze this image and print the report as JSON instead of opening the window
    #[arg(long)]
    image: Option<PathBuf>,
}

fn init_logging(level: Level) {
    // stdout carries the headless report
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_headless(service: FridgeAnalysisService, path: PathBuf) -> Result<(), AppError> {
    let upload = ImageUpload::from_path(&path)?;
    let report = service.oneshot(upload).await?;
    report.write_json(std::io::stdout().lock())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(strategy) = cli.strategy {
        settings.detection.strategy = strategy;
    }
    init_logging(settings.log_level());

    let catalog = Arc::new(RecipeCatalog::load(settings.catalog.path.as_deref())?);
    let catalog_size = catalog.len();
    let service = FridgeAnalysisService::from_settings(&settings, catalog);
    info!(
        "Using {} with {} catalog ingredients",
        service.detector_name(),
        catalog_size
    );

    match cli.image {
        Some(path) => run_headless(service, path).await,
        None => FridgeApp::start_gui(&settings, service),
    }
}
