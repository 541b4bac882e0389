use eframe::egui;

mod analysis;
mod api;
mod app_state;
mod config;
mod models;
mod screens;
mod tasks;
mod ui_components;
mod utils;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_NAME: &str = "LZT Token Checker";

const APP_WIDTH: f32 = 760.0;
const APP_HEIGHT: f32 = 860.0;

fn main() -> Result<(), eframe::Error> {
    // Set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("eframe", log::LevelFilter::Warn)
        .filter_module("egui_glow", log::LevelFilter::Warn)
        .filter_module("winit", log::LevelFilter::Warn)
        .filter_module("hyper", log::LevelFilter::Warn)
        .init();

    log::info!("[Main] Starting {} v{}", APP_NAME, APP_VERSION);

    let config = config::AppConfig::load();
    if let Err(e) = utils::http::init_client(config.request_timeout()) {
        // Requests will report the same error when they try to use the client
        log::error!("[Main] {}", e);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("{} v{}", APP_NAME, APP_VERSION))
            .with_inner_size([APP_WIDTH, APP_HEIGHT])
            .with_min_inner_size([520.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(screens::CheckerApp::new(cc, &config)))),
    )
}
