//! Collaborator configuration
//!
//! Endpoints and credentials for the two external collaborators, lifted
//! out of the clients so the orchestrator stays independently testable
//! and no credential is hard-coded in the pipeline itself.

use serde::Deserialize;

/// Default upload endpoint of the hosting collaborator.
pub const DEFAULT_HOSTING_ENDPOINT: &str =
    "https://upload-images-hosting-get-url.p.rapidapi.com/upload";

/// Host header the hosting collaborator requires alongside its key.
pub const DEFAULT_HOSTING_API_HOST: &str = "upload-images-hosting-get-url.p.rapidapi.com";

/// Default endpoint of the fixed crater-detection workflow.
pub const DEFAULT_INFERENCE_ENDPOINT: &str =
    "https://serverless.roboflow.com/infer/workflows/lunar-detector/detect-count-and-visualize";

/// Shortest expiration the hosting collaborator supports. The published
/// URL only has to outlive one inference call.
pub const SHORTEST_EXPIRATION: &str = "1";

/// Endpoints and credentials for both collaborators.
///
/// API keys intentionally have no baked-in defaults; the frontend
/// injects them at build time.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CollaboratorConfig {
    pub hosting_endpoint: String,
    pub hosting_api_key: String,
    pub hosting_api_host: String,
    pub inference_endpoint: String,
    pub inference_api_key: String,
}

impl Default for CollaboratorConfig {
    fn default() -> Self {
        Self {
            hosting_endpoint: DEFAULT_HOSTING_ENDPOINT.to_string(),
            hosting_api_key: String::new(),
            hosting_api_host: DEFAULT_HOSTING_API_HOST.to_string(),
            inference_endpoint: DEFAULT_INFERENCE_ENDPOINT.to_string(),
            inference_api_key: String::new(),
        }
    }
}
