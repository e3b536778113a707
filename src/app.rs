//! Audio Scribe upload form — egui/eframe application.
//!
//! # Architecture
//!
//! [`UploadApp`] is the top-level [`eframe::App`].  It owns the form state
//! ([`UploadForm`]) and two channel endpoints:
//!
//! * `command_tx` — sends [`JobCommand`]s to the background worker.
//! * `result_rx`  — receives [`JobResult`]s from the worker.
//!
//! All form transitions live in [`UploadForm`]; this file only wires egui
//! widgets to those transitions and renders the outcome.  While a job is in
//! flight the submit button is disabled, so at most one request is
//! outstanding per window.

use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::form::{Mode, UploadForm};
use crate::lang::Language;
use crate::worker::{JobCommand, JobResult};

/// File-picker extensions offered by default.  Purely a dialog filter — the
/// backend is the only validator of what is actually inside the file.
const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "m4a", "flac", "ogg", "opus", "aac", "webm"];

// ---------------------------------------------------------------------------
// UploadApp
// ---------------------------------------------------------------------------

/// eframe application — the audio upload form.
pub struct UploadApp {
    // ── Form state ───────────────────────────────────────────────────────
    /// File / mode / language selections and result texts.
    pub form: UploadForm,
    /// Alert-style notice shown above the results (input error or the
    /// generic processing-failure message).
    pub error_notice: Option<String>,

    // ── Channels ─────────────────────────────────────────────────────────
    /// Send submissions to the background worker.
    pub command_tx: mpsc::Sender<JobCommand>,
    /// Receive terminal results from the background worker.
    pub result_rx: mpsc::Receiver<JobResult>,

    // ── Configuration ────────────────────────────────────────────────────
    /// Application configuration (read-only after startup).
    pub config: AppConfig,
    /// Last observed window position, persisted on exit.
    window_pos: Option<(f32, f32)>,
}

impl UploadApp {
    /// Create a new [`UploadApp`] with default form state.
    pub fn new(
        command_tx: mpsc::Sender<JobCommand>,
        result_rx: mpsc::Receiver<JobResult>,
        config: AppConfig,
    ) -> Self {
        Self {
            form: UploadForm::default(),
            error_notice: None,
            command_tx,
            result_rx,
            config,
            window_pos: None,
        }
    }

    // ── Channel polling ──────────────────────────────────────────────────

    /// Drain all pending worker results (non-blocking).
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                JobResult::Completed(outcome) => {
                    self.form.finish(&outcome);
                    self.error_notice = None;
                }
                JobResult::Failed { notice } => {
                    self.form.fail();
                    self.error_notice = Some(notice);
                }
            }
        }
    }

    // ── Widget rows ──────────────────────────────────────────────────────

    /// File selection: native dialog button plus the chosen file name.
    fn draw_file_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let picker = ui.add_enabled(
                !self.form.submitting,
                egui::Button::new("Choose audio file…"),
            );
            if picker.clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .set_title("Select audio file")
                    .add_filter("Audio", AUDIO_EXTENSIONS)
                    .pick_file()
                {
                    log::info!("selected file: {}", path.display());
                    self.form.select_file(path);
                    self.error_notice = None;
                }
            }

            match &self.form.selected_file {
                Some(path) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    ui.label(name);
                }
                None => {
                    ui.label(
                        egui::RichText::new("No file selected")
                            .color(egui::Color32::from_rgb(140, 140, 140)),
                    );
                }
            }
        });
    }

    /// Mode selection radio buttons.
    fn draw_mode_row(&mut self, ui: &mut egui::Ui) {
        let mut mode = self.form.mode;
        ui.horizontal(|ui| {
            ui.radio_value(&mut mode, Mode::Transcribe, Mode::Transcribe.label());
            ui.radio_value(&mut mode, Mode::Translate, Mode::Translate.label());
        });
        // Route through the transition so stale results are cleared.
        self.form.select_mode(mode);
    }

    /// Source / destination language dropdowns (translate mode only).
    fn draw_language_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("From")
                .selected_text(self.form.src_lang.display_name())
                .show_ui(ui, |ui| {
                    for &lang in Language::source_options() {
                        ui.selectable_value(&mut self.form.src_lang, lang, lang.display_name());
                    }
                });

            ui.add_space(12.0);

            egui::ComboBox::from_label("To")
                .selected_text(self.form.dest_lang.display_name())
                .show_ui(ui, |ui| {
                    for &lang in Language::dest_options() {
                        ui.selectable_value(&mut self.form.dest_lang, lang, lang.display_name());
                    }
                });
        });
    }

    /// Submit button (disabled while a request is in flight) plus spinner.
    fn draw_submit_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let label = self.form.mode.action_label(self.form.submitting);
            let button = ui.add_enabled(!self.form.submitting, egui::Button::new(label));

            if button.clicked() {
                match self.form.begin_submit() {
                    Ok(job) => {
                        self.error_notice = None;
                        if self.command_tx.try_send(JobCommand::Submit(job)).is_err() {
                            // Worker gone or queue full; treat like any failure.
                            log::error!("could not hand job to worker");
                            self.form.fail();
                            self.error_notice =
                                Some(crate::worker::GENERIC_FAILURE_NOTICE.into());
                        }
                    }
                    Err(e) => {
                        self.error_notice = Some(e.to_string());
                    }
                }
            }

            if self.form.submitting {
                ui.spinner();
            }
        });
    }

    /// Alert-style notice for input errors and failed submissions.
    fn draw_error_notice(&self, ui: &mut egui::Ui) {
        if let Some(ref notice) = self.error_notice {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(notice.as_str())
                    .color(egui::Color32::from_rgb(255, 136, 68)),
            );
        }
    }

    /// Result panels; each appears only when it has text.
    fn draw_results(&self, ui: &mut egui::Ui) {
        if !self.form.transcript.is_empty() {
            ui.add_space(12.0);
            ui.heading("Original Transcript:");
            ui.label(self.form.transcript.as_str());
        }

        if !self.form.translation.is_empty() {
            ui.add_space(12.0);
            ui.heading(format!(
                "Translation ({}):",
                self.form.dest_lang.display_name()
            ));
            ui.label(self.form.translation.as_str());
        }
    }
}

// ---------------------------------------------------------------------------
// eframe::App impl
// ---------------------------------------------------------------------------

impl eframe::App for UploadApp {
    /// Called every frame by eframe.  Polls the worker channel, then renders
    /// the form.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        // A result can arrive without any input event, so keep repainting
        // while a request is in flight.
        if self.form.submitting {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // Remember where the window is for on_exit.
        if let Some(rect) = ctx.input(|i| i.viewport().outer_rect) {
            self.window_pos = Some((rect.min.x, rect.min.y));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Audio Transcriber & Translator");
            ui.add_space(8.0);

            self.draw_file_row(ui);
            ui.add_space(6.0);
            self.draw_mode_row(ui);

            if self.form.mode == Mode::Translate {
                ui.add_space(6.0);
                self.draw_language_row(ui);
            }

            ui.add_space(8.0);
            self.draw_submit_row(ui);
            self.draw_error_notice(ui);

            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.draw_results(ui);
            });
        });
    }

    /// Persist the window position on exit (best-effort).
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("Audio Scribe closing");
        if let Some(pos) = self.window_pos {
            let mut config = self.config.clone();
            config.ui.window_position = Some(pos);
            if let Err(e) = config.save() {
                log::warn!("failed to save settings: {e}");
            }
        }
    }
}
