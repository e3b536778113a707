//! Request/response types for the speech backend.
//!
//! [`JobRequest`] is a tagged union: the language pair only exists in the
//! `Translate` variant, so a transcribe request structurally cannot carry
//! `src_lang` / `dest_lang` fields.

use std::path::Path;

use serde::Deserialize;

use crate::backend::client::BackendError;
use crate::lang::Language;

// ---------------------------------------------------------------------------
// JobRequest
// ---------------------------------------------------------------------------

/// What the user asked the backend to do with the uploaded audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobRequest {
    /// Speech-to-text only.
    Transcribe,
    /// Speech-to-text plus translation into `dest`.
    Translate {
        /// Language spoken in the audio (`Auto` lets the backend detect it).
        src: Language,
        /// Language to translate the transcript into.
        dest: Language,
    },
}

impl JobRequest {
    /// Path component of the endpoint handling this request.
    pub fn endpoint(&self) -> &'static str {
        match self {
            JobRequest::Transcribe => "/transcribe",
            JobRequest::Translate { .. } => "/translate",
        }
    }
}

// ---------------------------------------------------------------------------
// JobOutcome
// ---------------------------------------------------------------------------

/// Parsed result of a completed backend job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutcome {
    /// Transcript in the audio's original language.
    pub transcript: String,
    /// Translation into the requested destination language.  `None` for
    /// transcribe-only jobs.
    pub translation: Option<String>,
}

// ---------------------------------------------------------------------------
// Wire formats
// ---------------------------------------------------------------------------

/// Success body of `POST /transcribe`.
#[derive(Debug, Deserialize)]
pub(crate) struct TranscribeResponse {
    pub transcript: String,
}

/// Success body of `POST /translate`.
#[derive(Debug, Deserialize)]
pub(crate) struct TranslateResponse {
    pub transcript_original: String,
    pub translation: String,
}

/// Best-effort shape of a non-2xx error body.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
}

// ---------------------------------------------------------------------------
// AudioPayload
// ---------------------------------------------------------------------------

/// Audio file contents staged for upload.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    /// File name reported in the multipart part (backend may use the
    /// extension to pick a decoder).
    pub file_name: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
    /// MIME type guessed from the extension.
    pub mime: String,
}

impl AudioPayload {
    /// Read the file at `path` into an upload payload.
    pub async fn read(path: &Path) -> Result<Self, BackendError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| BackendError::File(format!("{}: {e}", path.display())))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".into());

        Ok(Self {
            file_name,
            bytes,
            mime: mime_for_path(path).to_string(),
        })
    }
}

/// Guess a MIME type from the file extension.  Unknown extensions fall back
/// to `application/octet-stream`; the backend sniffs the content anyway.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "m4a" | "mp4" => "audio/mp4",
        "flac" => "audio/flac",
        "ogg" | "oga" => "audio/ogg",
        "opus" => "audio/opus",
        "aac" => "audio/aac",
        "webm" => "audio/webm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn endpoints_match_backend_contract() {
        assert_eq!(JobRequest::Transcribe.endpoint(), "/transcribe");
        assert_eq!(
            JobRequest::Translate {
                src: Language::Auto,
                dest: Language::Hindi,
            }
            .endpoint(),
            "/translate"
        );
    }

    #[test]
    fn transcribe_response_parses() {
        let resp: TranscribeResponse =
            serde_json::from_str(r#"{"transcript": "hello"}"#).expect("parse");
        assert_eq!(resp.transcript, "hello");
    }

    #[test]
    fn translate_response_parses() {
        let resp: TranslateResponse = serde_json::from_str(
            r#"{"transcript_original": "bonjour", "translation": "नमस्ते"}"#,
        )
        .expect("parse");
        assert_eq!(resp.transcript_original, "bonjour");
        assert_eq!(resp.translation, "नमस्ते");
    }

    #[test]
    fn transcribe_response_rejects_missing_field() {
        let result: Result<TranscribeResponse, _> = serde_json::from_str(r#"{"text": "hi"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn error_response_parses() {
        let resp: ErrorResponse =
            serde_json::from_str(r#"{"error": "unsupported audio"}"#).expect("parse");
        assert_eq!(resp.error, "unsupported audio");
    }

    #[test]
    fn mime_guess_covers_common_audio() {
        assert_eq!(mime_for_path(Path::new("a.wav")), "audio/wav");
        assert_eq!(mime_for_path(Path::new("a.MP3")), "audio/mpeg");
        assert_eq!(mime_for_path(Path::new("a.flac")), "audio/flac");
        assert_eq!(mime_for_path(Path::new("a.bin")), "application/octet-stream");
        assert_eq!(mime_for_path(Path::new("noext")), "application/octet-stream");
    }

    #[tokio::test]
    async fn payload_read_loads_bytes_and_name() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("clip.wav");
        let mut f = std::fs::File::create(&path).expect("create");
        f.write_all(b"RIFF....WAVE").expect("write");

        let payload = AudioPayload::read(&path).await.expect("read");
        assert_eq!(payload.file_name, "clip.wav");
        assert_eq!(payload.bytes, b"RIFF....WAVE");
        assert_eq!(payload.mime, "audio/wav");
    }

    #[tokio::test]
    async fn payload_read_missing_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here.wav");
        let err = AudioPayload::read(&path).await.expect_err("should fail");
        assert!(matches!(err, BackendError::File(_)));
    }
}
