//! Audio Scribe — desktop client for a speech transcription/translation
//! service.
//!
//! The user picks an audio file, chooses transcribe-only or
//! transcribe-plus-translate with a language pair, and submits.  A background
//! worker uploads the file as multipart form data to the configured backend
//! and the form displays the returned text.
//!
//! Module map:
//!
//! * [`lang`]    — fixed language catalogue (wire codes + display names).
//! * [`form`]    — pure form state and transitions.
//! * [`backend`] — `SpeechBackend` trait, HTTP client, wire types.
//! * [`worker`]  — background job loop on the tokio runtime.
//! * [`config`]  — TOML settings with platform paths.
//! * [`app`]     — egui/eframe rendering of the form.

pub mod app;
pub mod backend;
pub mod config;
pub mod form;
pub mod lang;
pub mod worker;
