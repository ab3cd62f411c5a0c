//! Main application component
//!
//! The root component that assembles the panels and provides the shared
//! application state as context.

use craterscan_core::config::CollaboratorConfig;
use sycamore::prelude::*;

use crate::components::{AnalyzerPanel, StatusBar};
use crate::state::AppState;

/// Collaborator endpoints and credentials are injected at build time so
/// they never live in source. Unset variables fall back to the default
/// endpoints with empty (unauthenticated) keys.
fn collaborator_config() -> CollaboratorConfig {
    let mut config = CollaboratorConfig::default();
    if let Some(url) = option_env!("CRATERSCAN_HOSTING_URL") {
        config.hosting_endpoint = url.to_string();
    }
    if let Some(key) = option_env!("CRATERSCAN_HOSTING_KEY") {
        config.hosting_api_key = key.to_string();
    }
    if let Some(host) = option_env!("CRATERSCAN_HOSTING_HOST") {
        config.hosting_api_host = host.to_string();
    }
    if let Some(url) = option_env!("CRATERSCAN_INFERENCE_URL") {
        config.inference_endpoint = url.to_string();
    }
    if let Some(key) = option_env!("CRATERSCAN_INFERENCE_KEY") {
        config.inference_api_key = key.to_string();
    }
    config
}

/// Main application component
#[component]
pub fn App() -> View {
    let state = AppState::new(collaborator_config());
    provide_context(state);

    view! {
        div(class="app") {
            header(class="app-header") {
                div {
                    h1 { "Craterscan" }
                    span(class="subtitle") { "Lunar Crater Analyzer" }
                }
                span(class="tagline") {
                    "Detection runs on an external inference service"
                }
            }

            main(class="main-content") {
                AnalyzerPanel()
            }

            StatusBar()
        }
    }
}
