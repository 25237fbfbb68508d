//! Boklib - Entry Point
//!
//! En bokkatalog för personliga bibliotek.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(dead_code)]

mod app;
mod models;
mod services;
mod store;
mod ui;
mod utils;

use app::BoklibApp;
use eframe::egui;
use models::config::AppSettings;

fn main() -> eframe::Result<()> {
    // Initiera logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Startar Boklib v{}", env!("CARGO_PKG_VERSION"));

    // Fönsterstorleken kommer från sparade inställningar
    let settings = AppSettings::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("Boklib v{}", env!("CARGO_PKG_VERSION")))
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([800.0, 500.0])
            .with_app_id("boklib"),
        ..Default::default()
    };

    eframe::run_native(
        "Boklib",
        options,
        Box::new(|cc| Ok(Box::new(BoklibApp::new(cc)))),
    )
}
