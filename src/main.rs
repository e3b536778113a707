//! Application entry point — Audio Scribe.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Create [`tokio`] runtime (multi-thread, 2 workers).
//! 4. Build the HTTP speech backend ([`HttpBackend`]) from config.
//! 5. Create worker channels (`command`, `result`).
//! 6. Spawn the job worker on the tokio runtime.
//! 7. Run [`eframe::run_native`] — blocks the main thread until the window
//!    is closed.

use std::sync::Arc;

use tokio::sync::mpsc;

use audio_scribe::{
    app::UploadApp,
    backend::{HttpBackend, SpeechBackend},
    config::AppConfig,
    worker::{run_worker, JobCommand, JobResult},
};

use eframe::egui;

// ---------------------------------------------------------------------------
// Native options builder
// ---------------------------------------------------------------------------

fn native_options(config: &AppConfig) -> eframe::NativeOptions {
    let mut vp = egui::ViewportBuilder::default()
        .with_inner_size([640.0, 520.0])
        .with_min_inner_size([420.0, 320.0]);

    if let Some((x, y)) = config.ui.window_position {
        vp = vp.with_position(egui::pos2(x, y));
    }

    eframe::NativeOptions {
        viewport: vp,
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> eframe::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Audio Scribe starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });
    log::info!("Speech backend: {}", config.backend.base_url);

    // 3. Tokio runtime (2 worker threads — uploads are I/O bound)
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to create tokio runtime");

    // 4. Speech backend
    let backend: Arc<dyn SpeechBackend> = Arc::new(HttpBackend::from_config(&config.backend));

    // 5. Channel setup
    let (command_tx, command_rx) = mpsc::channel::<JobCommand>(4);
    let (result_tx, result_rx) = mpsc::channel::<JobResult>(4);

    // 6. Spawn the job worker onto the tokio runtime
    rt.spawn(run_worker(backend, command_rx, result_tx));

    // 7. Build the egui app and run it (blocks until the window is closed)
    let app = UploadApp::new(command_tx, result_rx, config.clone());
    let options = native_options(&config);

    eframe::run_native(
        "Audio Scribe",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
