//! Error types for the analysis pipeline
//!
//! One variant per pipeline stage. Every stage failure short-circuits
//! the orchestrator into its `Failed` state with the original cause
//! preserved; nothing is retried automatically.

use thiserror::Error;

/// Local file read failure, before any network activity.
#[derive(Debug, Error)]
#[error("Failed to read image file: {0}")]
pub struct DecodeError(pub String);

/// Hosting collaborator failure: unreachable, rejected, or a response
/// missing the expected URL field.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Image upload request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Image host rejected the upload: {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// 2xx response, but no display URL where one was expected. There is
    /// no fallback URL; this is terminal for the run.
    #[error("Image host response did not contain a display URL")]
    MissingUrl,
}

/// Inference collaborator failure.
///
/// Note that a 2xx response with an unexpected shape is *not* an error:
/// the inference client degrades missing fields to defaults instead.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Inference request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed: {status} {status_text}")]
    Status { status: u16, status_text: String },
}

/// Uniform failure surface of one orchestrator run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl AnalysisError {
    /// Human-readable cause for the failure notification, falling back
    /// to a generic message when the cause carries no text.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "Failed to analyze the image. Please try again.".to_string()
        } else {
            message
        }
    }
}
