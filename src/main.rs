// src/main.rs
use eframe::egui;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod app;
mod chart;
mod client;
mod model;
mod render;
mod sanitize;
mod settings;
mod state;
mod store;
mod ui;

use app::SentiviewApp;
use client::AnalysisClient;
use settings::Settings;
use state::AppState;
use store::{FileStorage, ResultStore};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load();
    let store = ResultStore::new(Box::new(FileStorage::new(settings.storage_dir())));
    let client = AnalysisClient::new(settings.endpoint.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("Sentiview"),
        ..Default::default()
    };

    eframe::run_native(
        "Sentiview",
        options,
        Box::new(move |_cc| Box::new(SentiviewApp::new(AppState::new(store), client))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
