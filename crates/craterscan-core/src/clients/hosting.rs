//! Publishing client for the image hosting collaborator
//!
//! Pure request/response: one form-encoded POST per publish, no retry
//! policy beyond propagating failure to the orchestrator.

use serde::Deserialize;

use crate::codec;
use crate::config::{CollaboratorConfig, SHORTEST_EXPIRATION};
use crate::error::PublishError;
use crate::models::{EncodedPayload, PublishedImageRef};

use super::ImageHost;

/// Client for the hosting collaborator's upload endpoint.
#[derive(Debug, Clone)]
pub struct HostingClient {
    http: reqwest::Client,
    config: CollaboratorConfig,
}

impl HostingClient {
    pub fn new(config: CollaboratorConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

/// Response envelope; only the nested display URL matters.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    data: Option<UploadData>,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    #[serde(default)]
    display_url: Option<String>,
}

/// Extract the display URL from a 2xx response body.
///
/// A body that is not JSON, or JSON without the nested URL field, is a
/// malformed response and terminal for the run.
pub fn parse_upload_response(body: &str) -> Result<String, PublishError> {
    let parsed: UploadResponse =
        serde_json::from_str(body).map_err(|_| PublishError::MissingUrl)?;
    parsed
        .data
        .and_then(|data| data.display_url)
        .ok_or(PublishError::MissingUrl)
}

impl ImageHost for HostingClient {
    async fn publish(
        &self,
        payload: &EncodedPayload,
    ) -> Result<PublishedImageRef, PublishError> {
        // The host accepts the raw base64 body only; a payload that
        // still carries a data-URI header loses it here.
        let body = codec::strip_data_uri_prefix(payload.as_str());

        let response = self
            .http
            .post(&self.config.hosting_endpoint)
            .header("x-rapidapi-key", &self.config.hosting_api_key)
            .header("x-rapidapi-host", &self.config.hosting_api_host)
            .form(&[("image", body), ("expiration", SHORTEST_EXPIRATION)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PublishError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = response.text().await?;
        let url = parse_upload_response(&body)?;
        log::info!("published image at {}", url);
        Ok(PublishedImageRef(url))
    }
}
