//! Speech backend client for Audio Scribe.
//!
//! This module provides:
//! * [`SpeechBackend`] — async trait implemented by all backend clients.
//! * [`HttpBackend`] — reqwest multipart client for the real service.
//! * [`JobRequest`] / [`JobOutcome`] — tagged request union and parsed result.
//! * [`AudioPayload`] — staged file bytes plus name and MIME type.
//! * [`BackendError`] — error variants for backend operations.

pub mod client;
pub mod types;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{BackendError, HttpBackend, SpeechBackend};
pub use types::{AudioPayload, JobOutcome, JobRequest};
