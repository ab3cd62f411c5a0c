//! Inference client for the crater detection collaborator
//!
//! Sends the published image URL to the fixed detection workflow and
//! reconciles the response permissively: the collaborator's response
//! shape is not contractually guaranteed, so missing fields degrade to
//! defaults instead of failing the run.

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::config::CollaboratorConfig;
use crate::error::InferenceError;
use crate::models::{DetectionResult, PublishedImageRef, PLACEHOLDER_CONFIDENCE};

use super::CraterDetector;

/// Client for the detection workflow endpoint.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: reqwest::Client,
    config: CollaboratorConfig,
}

impl InferenceClient {
    pub fn new(config: CollaboratorConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

/// Request body for the detection workflow.
#[derive(Debug, Serialize)]
struct WorkflowRequest<'a> {
    api_key: &'a str,
    inputs: WorkflowInputs<'a>,
}

#[derive(Debug, Serialize)]
struct WorkflowInputs<'a> {
    image: ImageInput<'a>,
}

#[derive(Debug, Serialize)]
struct ImageInput<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: &'a str,
}

/// Workflow response shape. Every field is optional by design.
#[derive(Debug, Default, Deserialize)]
struct WorkflowResponse {
    #[serde(default)]
    outputs: Vec<WorkflowOutput>,
}

#[derive(Debug, Default, Deserialize)]
struct WorkflowOutput {
    #[serde(default)]
    output_image: Option<OutputImage>,
    #[serde(default)]
    count_objects: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct OutputImage {
    #[serde(default)]
    value: String,
}

/// Reconcile a 2xx response body into a detection result.
///
/// Missing annotated image yields an empty image handle, missing count
/// yields zero, and an unparseable body yields both defaults. Do not
/// tighten this into a hard failure; see the response-shape policy in
/// DESIGN.md.
pub fn parse_workflow_response(body: &str) -> DetectionResult {
    let parsed: WorkflowResponse = serde_json::from_str(body).unwrap_or_default();
    let output = parsed.outputs.into_iter().next().unwrap_or_default();
    let annotated = output
        .output_image
        .map(|image| image.value)
        .unwrap_or_default();

    if annotated.is_empty() {
        log::warn!("inference response carried no annotated image");
    }

    DetectionResult {
        annotated_image: codec::to_data_uri(&annotated),
        object_count: output.count_objects.unwrap_or(0),
        confidence: PLACEHOLDER_CONFIDENCE,
    }
}

impl CraterDetector for InferenceClient {
    async fn infer(
        &self,
        image: &PublishedImageRef,
    ) -> Result<DetectionResult, InferenceError> {
        let request = WorkflowRequest {
            api_key: &self.config.inference_api_key,
            inputs: WorkflowInputs {
                image: ImageInput {
                    kind: "url",
                    value: image.as_str(),
                },
            },
        };

        let response = self
            .http
            .post(&self.config.inference_endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InferenceError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = response.text().await?;
        Ok(parse_workflow_response(&body))
    }
}
