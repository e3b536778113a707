//! Form state module — the pure, testable half of the UI.

pub mod state;

pub use state::{Mode, SubmitError, SubmitJob, UploadForm};
