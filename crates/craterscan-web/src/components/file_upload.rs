//! File upload component
//!
//! Thin wrapper over a native file input: picks a single image, reads
//! it into memory, and stages it on the application state. Validation
//! beyond the size ceiling is left to the `accept` attribute.

use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use crate::state::{AnalysisStatus, AppState, ACCEPTED_MEDIA_TYPES};
use crate::upload;

#[component]
pub fn FileUpload() -> View {
    let state = use_context::<AppState>();

    let on_change = move |event: Event| {
        let Some(input) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match upload::read_source_image(&file).await {
                Ok(image) => state.set_upload(image),
                Err(error) => state.status.set(AnalysisStatus::Error(error.to_string())),
            }
        });
    };

    view! {
        div(class="upload-zone") {
            label(class="upload-label") {
                "Choose a lunar surface photograph"
            }
            input(
                r#type="file",
                class="upload-input",
                accept=ACCEPTED_MEDIA_TYPES,
                on:change=on_change
            )
            p(class="upload-hint") { "JPEG, PNG, TIFF or BMP, up to 50 MB" }
        }
    }
}
