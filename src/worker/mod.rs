//! Background job worker — drives the file → upload → parse exchange.
//!
//! [`run_worker`] lives on the tokio runtime and responds to [`JobCommand`]s
//! received over a `tokio::sync::mpsc` channel.  Exactly one terminal
//! [`JobResult`] is emitted per command, success or failure, so the UI can
//! reset its in-flight flag unconditionally on receipt.
//!
//! # Job flow
//!
//! ```text
//! JobCommand::Submit { file, request }
//!   └─▶ read file bytes (tokio::fs)
//!         └─▶ backend.process(payload, request)
//!               ├─ Ok  → JobResult::Completed(outcome)
//!               └─ Err → log full detail, JobResult::Failed { generic notice }
//! ```
//!
//! Failures are terminal for that submission: no retry, no partial results.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::backend::{AudioPayload, BackendError, JobOutcome, SpeechBackend};
use crate::form::SubmitJob;

/// Notice shown to the user for any transport, parse, or file failure.  The
/// real cause goes to the developer log only.
pub const GENERIC_FAILURE_NOTICE: &str = "Error processing audio";

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Commands sent from the UI thread to the worker.
#[derive(Debug, Clone)]
pub enum JobCommand {
    /// Upload the job's file and run the requested operation.
    Submit(SubmitJob),
}

/// Terminal results delivered from the worker back to the UI.
#[derive(Debug, Clone)]
pub enum JobResult {
    /// The backend answered with a well-formed success body.
    Completed(JobOutcome),
    /// The exchange failed; `notice` is safe to show to the user.
    Failed { notice: String },
}

// ---------------------------------------------------------------------------
// Worker loop
// ---------------------------------------------------------------------------

/// Run the worker until the command channel closes.
///
/// Spawn inside a tokio task:
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use audio_scribe::backend::{HttpBackend, SpeechBackend};
/// use audio_scribe::config::AppConfig;
/// use audio_scribe::worker::{run_worker, JobCommand, JobResult};
///
/// # async fn example() {
/// let config = AppConfig::default();
/// let backend: Arc<dyn SpeechBackend> =
///     Arc::new(HttpBackend::from_config(&config.backend));
///
/// let (command_tx, command_rx) = tokio::sync::mpsc::channel::<JobCommand>(4);
/// let (result_tx, result_rx) = tokio::sync::mpsc::channel::<JobResult>(4);
/// tokio::spawn(run_worker(backend, command_rx, result_tx));
/// # }
/// ```
pub async fn run_worker(
    backend: Arc<dyn SpeechBackend>,
    mut command_rx: mpsc::Receiver<JobCommand>,
    result_tx: mpsc::Sender<JobResult>,
) {
    while let Some(command) = command_rx.recv().await {
        match command {
            JobCommand::Submit(job) => {
                let result = match execute_job(backend.as_ref(), &job).await {
                    Ok(outcome) => JobResult::Completed(outcome),
                    Err(e) => {
                        log::error!("submission of {} failed: {e}", job.file.display());
                        JobResult::Failed {
                            notice: GENERIC_FAILURE_NOTICE.into(),
                        }
                    }
                };
                let _ = result_tx.send(result).await;
            }
        }
    }
}

/// Read the job's file and hand it to the backend.
async fn execute_job(
    backend: &dyn SpeechBackend,
    job: &SubmitJob,
) -> Result<JobOutcome, BackendError> {
    let payload = AudioPayload::read(&job.file).await?;
    log::info!(
        "submitting {} ({} bytes) to {}",
        job.file.display(),
        payload.bytes.len(),
        job.request.endpoint()
    );
    backend.process(payload, &job.request).await
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::backend::JobRequest;
    use crate::lang::Language;

    /// Stub backend: records the request it saw and answers with a canned
    /// outcome or a transport error.
    struct StubBackend {
        fail: bool,
        seen: Mutex<Option<(String, JobRequest)>>,
    }

    impl StubBackend {
        fn ok() -> Self {
            Self {
                fail: false,
                seen: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                seen: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl SpeechBackend for StubBackend {
        async fn process(
            &self,
            audio: AudioPayload,
            request: &JobRequest,
        ) -> Result<JobOutcome, BackendError> {
            *self.seen.lock().unwrap() = Some((audio.file_name, *request));
            if self.fail {
                return Err(BackendError::Request("connection refused".into()));
            }
            Ok(match request {
                JobRequest::Transcribe => JobOutcome {
                    transcript: "hello".into(),
                    translation: None,
                },
                JobRequest::Translate { .. } => JobOutcome {
                    transcript: "bonjour".into(),
                    translation: Some("नमस्ते".into()),
                },
            })
        }
    }

    fn write_clip(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("clip.wav");
        std::fs::write(&path, b"RIFF....WAVE").expect("write clip");
        path
    }

    async fn run_one(backend: Arc<StubBackend>, job: SubmitJob) -> JobResult {
        let (command_tx, command_rx) = mpsc::channel(4);
        let (result_tx, mut result_rx) = mpsc::channel(4);
        let worker = tokio::spawn(run_worker(backend, command_rx, result_tx));

        command_tx
            .send(JobCommand::Submit(job))
            .await
            .expect("send command");
        let result = result_rx.recv().await.expect("one terminal result");

        drop(command_tx);
        worker.await.expect("worker exits cleanly");
        result
    }

    #[tokio::test]
    async fn transcribe_job_completes_with_transcript_only() {
        let dir = tempfile::tempdir().expect("temp dir");
        let backend = Arc::new(StubBackend::ok());
        let job = SubmitJob {
            file: write_clip(&dir),
            request: JobRequest::Transcribe,
        };

        let result = run_one(Arc::clone(&backend), job).await;
        match result {
            JobResult::Completed(outcome) => {
                assert_eq!(outcome.transcript, "hello");
                assert!(outcome.translation.is_none());
            }
            JobResult::Failed { notice } => panic!("unexpected failure: {notice}"),
        }

        let seen = backend.seen.lock().unwrap().clone();
        let (file_name, request) = seen.expect("backend was called");
        assert_eq!(file_name, "clip.wav");
        assert_eq!(request, JobRequest::Transcribe);
    }

    #[tokio::test]
    async fn translate_job_passes_language_pair_through() {
        let dir = tempfile::tempdir().expect("temp dir");
        let backend = Arc::new(StubBackend::ok());
        let request = JobRequest::Translate {
            src: Language::Auto,
            dest: Language::Hindi,
        };
        let job = SubmitJob {
            file: write_clip(&dir),
            request,
        };

        let result = run_one(Arc::clone(&backend), job).await;
        match result {
            JobResult::Completed(outcome) => {
                assert_eq!(outcome.transcript, "bonjour");
                assert_eq!(outcome.translation.as_deref(), Some("नमस्ते"));
            }
            JobResult::Failed { notice } => panic!("unexpected failure: {notice}"),
        }

        let seen = backend.seen.lock().unwrap().clone();
        assert_eq!(seen.expect("backend was called").1, request);
    }

    #[tokio::test]
    async fn transport_failure_yields_generic_notice() {
        let dir = tempfile::tempdir().expect("temp dir");
        let backend = Arc::new(StubBackend::failing());
        let job = SubmitJob {
            file: write_clip(&dir),
            request: JobRequest::Transcribe,
        };

        match run_one(backend, job).await {
            JobResult::Failed { notice } => assert_eq!(notice, GENERIC_FAILURE_NOTICE),
            JobResult::Completed(_) => panic!("expected failure"),
        }
    }

    #[tokio::test]
    async fn unreadable_file_fails_without_calling_backend() {
        let backend = Arc::new(StubBackend::ok());
        let job = SubmitJob {
            file: PathBuf::from("/definitely/not/here.wav"),
            request: JobRequest::Transcribe,
        };

        match run_one(Arc::clone(&backend), job).await {
            JobResult::Failed { notice } => assert_eq!(notice, GENERIC_FAILURE_NOTICE),
            JobResult::Completed(_) => panic!("expected failure"),
        }
        assert!(backend.seen.lock().unwrap().is_none());
    }
}
