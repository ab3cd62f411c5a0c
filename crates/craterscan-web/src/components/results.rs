//! Results view
//!
//! Summary stats, the reveal comparator, and the download and reset
//! actions. Rendered only while a committed result exists; the result
//! itself is immutable until reset, so a snapshot is taken once.

use sycamore::prelude::*;

use crate::components::Comparator;
use crate::state::AppState;

#[component]
pub fn ResultsView() -> View {
    let state = use_context::<AppState>();

    // The panel only mounts this view while a result is committed
    let Some(result) = state.result.get_clone() else {
        return view! {};
    };

    let crater_count = result.crater_count.to_string();
    let confidence = format!("{}%", (result.confidence * 100.0).round() as u32);
    let original = result.original_image.as_str().to_string();
    let processed = result.processed_image.clone();
    let download_href = result.processed_image;

    let on_reset = move |_| state.reset();

    view! {
        section(class="card results-card") {
            header(class="results-header") {
                h2 { "Analysis Results" }
                button(class="reset-button", on:click=on_reset) {
                    "New Analysis"
                }
            }

            div(class="stats-row") {
                div(class="stat") {
                    p(class="stat-value") { (crater_count) }
                    p(class="stat-label") { "Craters Detected" }
                }
                div(class="stat") {
                    p(class="stat-value") { (confidence) }
                    p(class="stat-label") { "Confidence (placeholder)" }
                }
            }

            Comparator(original=original, processed=processed)

            div(class="download-row") {
                a(
                    class="download-link",
                    href=download_href,
                    download="processed-lunar-image.jpg"
                ) {
                    "Download Processed Image"
                }
            }
        }
    }
}
