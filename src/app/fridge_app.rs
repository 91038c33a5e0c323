use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::app::session::Session;
use crate::app::views::{IngredientsView, RecipeListView, View};
use crate::config::Settings;
use crate::error::AppError;
use crate::pipeline::services::FridgeAnalysisService;
use crate::pipeline::types::ImageUpload;

pub struct FridgeApp {
    service: FridgeAnalysisService,
    session: Session,
    processing_delay: Duration,
    path_input: String,
    upload: Option<ImageUpload>,
    preview_uri: Option<String>,
    pending_since: Option<Instant>,
    errors: Vec<AppError>,
}

impl FridgeApp {
    pub fn new(settings: &Settings, service: FridgeAnalysisService) -> Self {
        Self {
            service,
            session: Session::new(),
            processing_delay: Duration::from_millis(settings.ui.processing_delay_ms),
            path_input: String::new(),
            upload: None,
            preview_uri: None,
            pending_since: None,
            errors: Vec::new(),
        }
    }

    pub fn start_gui(settings: &Settings, service: FridgeAnalysisService) -> Result<(), AppError> {
        let title = settings.ui.window_title.clone();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(egui::vec2(1280.0, 720.0))
                .with_drag_and_drop(true)
                .with_title(title.clone()),
            ..Default::default()
        };

        let settings = settings.clone();
        eframe::run_native(
            &title,
            options,
            Box::new(move |cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(FridgeApp::new(&settings, service)))
            }),
        )
        .map_err(|e| AppError::Ui(e.to_string()))
    }

    /// Swaps in a new photo and drops the previous preview from the loader caches.
    fn set_upload(&mut self, ctx: &egui::Context, upload: ImageUpload) {
        info!("Selected image {} ({} bytes)", upload.name, upload.bytes.len());
        let next_uri = format!("bytes://fridge-photo-{}", uuid::Uuid::new_v4());
        if let Some(old_uri) = self.preview_uri.replace(next_uri) {
            ctx.forget_image(&old_uri);
        }
        self.upload = Some(upload);
        self.pending_since = None;
    }

    fn load_from_path(&mut self, ctx: &egui::Context) {
        let path = PathBuf::from(self.path_input.trim());
        match ImageUpload::from_path(&path) {
            Ok(upload) => self.set_upload(ctx, upload),
            Err(e) => self.report_error(e),
        }
    }

    fn report_error(&mut self, err: AppError) {
        error!("{}", err);
        self.errors.push(err);
    }

    fn take_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            let upload = match (file.bytes, file.path) {
                (Some(bytes), _) => Ok(ImageUpload::new(file.name, bytes)),
                (None, Some(path)) => ImageUpload::from_path(&path),
                (None, None) => continue,
            };
            match upload {
                Ok(upload) => self.set_upload(ctx, upload),
                Err(e) => self.report_error(e),
            }
        }
    }

    /// Runs the analysis once the cosmetic processing delay has passed.
    fn poll_pending(&mut self, ctx: &egui::Context) {
        let Some(started) = self.pending_since else {
            return;
        };

        let elapsed = started.elapsed();
        if elapsed < self.processing_delay {
            ctx.request_repaint_after(self.processing_delay - elapsed);
            return;
        }

        self.pending_since = None;
        let Some(upload) = self.upload.as_ref() else {
            return;
        };
        match self.service.analyze(upload) {
            Ok(report) => self.session.record(report),
            Err(e) => self.report_error(e),
        }
    }

    fn draw_sidebar(ctx: &egui::Context) {
        egui::SidePanel::left("how_it_works")
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("How it works");
                ui.label("1. Upload a clear photo of your refrigerator");
                ui.label("2. Detection identifies ingredients in the image");
                ui.label("3. Get recommendations for recipes you can make");
                ui.label("4. Cook and enjoy your meal!");

                ui.separator();

                ui.heading("Tips for better results");
                ui.label("• Ensure good lighting");
                ui.label("• Keep items visible");
                ui.label("• Avoid cluttered shots");
                ui.label("• Include fresh ingredients");
            });
    }

    fn draw_upload_column(&mut self, ui: &mut egui::Ui) {
        ui.heading("📸 Upload Your Fridge Photo");
        ui.label("Drop a PNG or JPEG onto the window, or enter its path:");

        ui.horizontal(|ui| {
            let response = ui.text_edit_singleline(&mut self.path_input);
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Load").clicked() || submitted {
                self.load_from_path(ui.ctx());
            }
        });

        let (Some(upload), Some(uri)) = (self.upload.as_ref(), self.preview_uri.as_ref()) else {
            return;
        };

        ui.add(egui::Image::from_bytes(uri.clone(), upload.bytes.clone()).max_width(480.0));
        ui.label(format!("Uploaded Fridge Photo: {}", upload.name));

        let pending = self.pending_since.is_some();
        if ui
            .add_enabled(!pending, egui::Button::new("🔍 Analyze Ingredients"))
            .clicked()
        {
            self.pending_since = Some(Instant::now());
            ui.ctx().request_repaint();
        }

        if pending {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Analyzing your fridge contents...");
            });
        }
    }

    fn draw_results_column(&self, ui: &mut egui::Ui) {
        match self.session.last_report() {
            Some(report) if self.session.has_ingredients() => {
                IngredientsView::new(&report.ingredients).draw(ui);
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    RecipeListView::new(&report.recommendations).draw(ui);
                });
            }
            _ => {
                ui.heading("🥘 Recipe Recommendations");
                ui.label("👆 Upload and analyze a fridge photo to see recipe recommendations!");
                ui.separator();
                RecipeListView::draw_featured(ui);
            }
        }
    }

    fn draw_footer(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer")
            .resizable(true)
            .show(ctx, |ui| {
                if !self.errors.is_empty() {
                    ui.horizontal(|ui| {
                        ui.heading("Error Log");
                        if ui.button("Clear").clicked() {
                            self.errors.clear();
                        }
                    });
                    egui::ScrollArea::vertical()
                        .max_height(80.0)
                        .show(ui, |ui| {
                            for error in self.errors.iter().rev() {
                                ui.colored_label(egui::Color32::RED, format!("[ERROR] {}", error));
                            }
                        });
                    ui.separator();
                }

                ui.vertical_centered(|ui| {
                    ui.weak(format!(
                        "Ingredient detection: {} (demo heuristic, not a vision model)",
                        self.service.detector_name()
                    ));
                });
            });
    }
}

impl eframe::App for FridgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.take_dropped_files(ctx);
        self.poll_pending(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("🍽️ Smart Fridge Food Recommender");
            ui.label(
                "Upload a photo of your refrigerator and get personalized recipe recommendations!",
            );
        });

        Self::draw_sidebar(ctx);
        self.draw_footer(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                self.draw_upload_column(&mut cols[0]);
                self.draw_results_column(&mut cols[1]);
            });
        });
    }
}
