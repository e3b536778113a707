//! Upload form state machine.
//!
//! [`UploadForm`] is the single source of truth for the UI: file selection,
//! mode, language pair, result texts, and the in-flight flag.  All
//! transitions are plain methods so they can be unit-tested without any
//! windowing or network machinery; the egui layer in `app.rs` only calls
//! into here and renders the result.
//!
//! ```text
//! Idle ──begin_submit──▶ Submitting
//!      ◀──finish──  (results set)
//!      ◀──fail────  (results untouched, notice shown by the app)
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::backend::{JobOutcome, JobRequest};
use crate::lang::Language;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// The operation requested: transcribe-only or transcribe-plus-translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Transcribe,
    Translate,
}

impl Mode {
    /// Radio-button label.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Transcribe => "Transcribe (Text only)",
            Mode::Translate => "Translate (Any language)",
        }
    }

    /// Submit-button label for this mode, switching to a progress form while
    /// a request is in flight.
    pub fn action_label(&self, submitting: bool) -> &'static str {
        match (self, submitting) {
            (Mode::Transcribe, false) => "Transcribe",
            (Mode::Transcribe, true) => "Transcribing...",
            (Mode::Translate, false) => "Translate",
            (Mode::Translate, true) => "Translating...",
        }
    }
}

// ---------------------------------------------------------------------------
// SubmitError
// ---------------------------------------------------------------------------

/// Reasons a submit attempt is refused before any network work happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// No audio file has been selected.
    #[error("Please upload an audio file")]
    NoFile,

    /// A previous submission has not resolved yet.  The submit button is
    /// disabled while in flight, so this is a second line of defence.
    #[error("A request is already in progress")]
    RequestInFlight,
}

// ---------------------------------------------------------------------------
// SubmitJob
// ---------------------------------------------------------------------------

/// A submission handed to the background worker: which file to upload and
/// what to ask the backend for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitJob {
    pub file: PathBuf,
    pub request: JobRequest,
}

// ---------------------------------------------------------------------------
// UploadForm
// ---------------------------------------------------------------------------

/// Transient UI state of the upload form.  Created with defaults at startup,
/// mutated only by user interaction or worker results, never persisted.
#[derive(Debug, Clone)]
pub struct UploadForm {
    /// Audio file chosen through the file dialog.
    pub selected_file: Option<PathBuf>,
    /// Current operation mode.
    pub mode: Mode,
    /// Source language, consulted only in translate mode.
    pub src_lang: Language,
    /// Destination language, consulted only in translate mode.
    pub dest_lang: Language,
    /// Transcript in the audio's original language ("" until a job succeeds).
    pub transcript: String,
    /// Translation into `dest_lang` ("" outside successful translate jobs).
    pub translation: String,
    /// True strictly between job creation and the terminal worker result.
    pub submitting: bool,
}

impl Default for UploadForm {
    fn default() -> Self {
        Self {
            selected_file: None,
            mode: Mode::Transcribe,
            src_lang: Language::Auto,
            dest_lang: Language::Hindi,
            transcript: String::new(),
            translation: String::new(),
            submitting: false,
        }
    }
}

impl UploadForm {
    /// Store a newly chosen file.  Stale results are cleared so the display
    /// never shows text from a previous file.
    pub fn select_file(&mut self, path: PathBuf) {
        self.selected_file = Some(path);
        self.clear_results();
    }

    /// Switch between transcribe and translate.  Clears results but keeps
    /// the language selections.
    pub fn select_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            self.clear_results();
        }
    }

    /// Build the tagged request for the current mode.  The language pair is
    /// only present in translate mode.
    pub fn build_request(&self) -> JobRequest {
        match self.mode {
            Mode::Transcribe => JobRequest::Transcribe,
            Mode::Translate => JobRequest::Translate {
                src: self.src_lang,
                dest: self.dest_lang,
            },
        }
    }

    /// Start a submission.
    ///
    /// Fails without side effects when no file is selected or a request is
    /// already in flight.  On success the form enters the submitting state
    /// and the returned job must be handed to the worker.
    pub fn begin_submit(&mut self) -> Result<SubmitJob, SubmitError> {
        if self.submitting {
            return Err(SubmitError::RequestInFlight);
        }
        let file = self
            .selected_file
            .clone()
            .ok_or(SubmitError::NoFile)?;

        self.submitting = true;
        Ok(SubmitJob {
            file,
            request: self.build_request(),
        })
    }

    /// Apply a successful job outcome and leave the submitting state.
    pub fn finish(&mut self, outcome: &JobOutcome) {
        self.transcript = outcome.transcript.clone();
        self.translation = outcome.translation.clone().unwrap_or_default();
        self.submitting = false;
    }

    /// Leave the submitting state after a failed job.  Result texts keep
    /// their pre-submit values.
    pub fn fail(&mut self) {
        self.submitting = false;
    }

    fn clear_results(&mut self) {
        self.transcript.clear();
        self.translation.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
