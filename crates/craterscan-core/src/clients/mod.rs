//! Collaborator clients
//!
//! Trait seams for the two external collaborators plus their `reqwest`
//! implementations. The orchestrator depends only on the traits, so
//! tests can substitute mocks and never touch the network.

mod hosting;
mod inference;


pub use hosting::{parse_upload_response, HostingClient};
pub use inference::{parse_workflow_response, InferenceClient};

use crate::error::{InferenceError, PublishError};
use crate::models::{DetectionResult, EncodedPayload, PublishedImageRef};

/// Publishes an encoded image and returns a public URL for it.
#[allow(async_fn_in_trait)]
pub trait ImageHost {
    async fn publish(&self, payload: &EncodedPayload)
        -> Result<PublishedImageRef, PublishError>;
}

/// Submits a published image URL to the detection workflow.
#[allow(async_fn_in_trait)]
pub trait CraterDetector {
    async fn infer(&self, image: &PublishedImageRef)
        -> Result<DetectionResult, InferenceError>;
}
