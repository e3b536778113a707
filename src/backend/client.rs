//! Core `SpeechBackend` trait and `HttpBackend` implementation.
//!
//! `HttpBackend` talks to the transcription service's two endpoints
//! (`/transcribe`, `/translate`) with multipart uploads.  All connection
//! details come from [`BackendConfig`]; nothing is hardcoded.

use async_trait::async_trait;
use thiserror::Error;

use crate::backend::types::{
    AudioPayload, ErrorResponse, JobOutcome, JobRequest, TranscribeResponse, TranslateResponse,
};
use crate::config::BackendConfig;

// ---------------------------------------------------------------------------
// BackendError
// ---------------------------------------------------------------------------

/// Errors that can occur while submitting audio to the backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("backend request timed out")]
    Timeout,

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The response body could not be parsed as the expected JSON shape.
    #[error("failed to parse backend response: {0}")]
    Parse(String),

    /// The selected audio file could not be read from disk.
    #[error("could not read audio file: {0}")]
    File(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            BackendError::Timeout
        } else {
            BackendError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// SpeechBackend trait
// ---------------------------------------------------------------------------

/// Async trait for the remote speech-processing service.
///
/// Implementors must be `Send + Sync` so they can be shared across threads
/// (e.g. wrapped in `Arc<dyn SpeechBackend>`).  The worker loop is written
/// against this trait, which keeps it testable with a stub backend.
#[async_trait]
pub trait SpeechBackend: Send + Sync {
    /// Upload `audio` and run the operation described by `request`.
    async fn process(
        &self,
        audio: AudioPayload,
        request: &JobRequest,
    ) -> Result<JobOutcome, BackendError>;
}

// ---------------------------------------------------------------------------
// HttpBackend
// ---------------------------------------------------------------------------

/// Talks to the speech service over HTTP multipart uploads.
///
/// # No hardcoded URLs
/// The base address and request timeout come exclusively from the
/// [`BackendConfig`] passed to [`HttpBackend::from_config`].
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build an `HttpBackend` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`.  A default (no-timeout) client is used as a
    /// last-resort fallback if the builder fails (should never happen in
    /// practice).
    pub fn from_config(config: &BackendConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for the endpoint serving `request`.
    fn endpoint_url(&self, request: &JobRequest) -> String {
        format!("{}{}", self.base_url, request.endpoint())
    }

    /// Assemble the multipart form: the audio under key `file`, plus the
    /// language pair as text fields in translate mode only.
    fn build_form(
        audio: AudioPayload,
        request: &JobRequest,
    ) -> Result<reqwest::multipart::Form, BackendError> {
        let part = reqwest::multipart::Part::bytes(audio.bytes)
            .file_name(audio.file_name)
            .mime_str(&audio.mime)
            .map_err(|e| BackendError::Request(format!("invalid audio part: {e}")))?;

        let mut form = reqwest::multipart::Form::new().part("file", part);

        if let JobRequest::Translate { src, dest } = request {
            form = form
                .text("src_lang", src.code())
                .text("dest_lang", dest.code());
        }

        Ok(form)
    }
}

#[async_trait]
impl SpeechBackend for HttpBackend {
    /// Upload the audio and parse the mode-specific success body.
    ///
    /// Non-2xx responses are reported as [`BackendError::Rejected`]; when the
    /// body carries an `{"error": …}` object its message is used, otherwise
    /// the status line's canonical reason.
    async fn process(
        &self,
        audio: AudioPayload,
        request: &JobRequest,
    ) -> Result<JobOutcome, BackendError> {
        let url = self.endpoint_url(request);
        let form = Self::build_form(audio, request)?;

        log::debug!("POST {url}");
        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
            };
            return Err(BackendError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        match request {
            JobRequest::Transcribe => {
                let body: TranscribeResponse = response
                    .json()
                    .await
                    .map_err(|e| BackendError::Parse(e.to_string()))?;
                Ok(JobOutcome {
                    transcript: body.transcript,
                    translation: None,
                })
            }
            JobRequest::Translate { .. } => {
                let body: TranslateResponse = response
                    .json()
                    .await
                    .map_err(|e| BackendError::Parse(e.to_string()))?;
                Ok(JobOutcome {
                    transcript: body.transcript_original,
                    translation: Some(body.translation),
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
