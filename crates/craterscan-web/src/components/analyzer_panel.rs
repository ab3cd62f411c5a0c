//! Analyzer panel
//!
//! Switches between the upload view and the results view, mirroring the
//! single-run lifecycle: upload, analyze, inspect, reset.

use sycamore::prelude::*;

use crate::components::{FileUpload, ResultsView};
use crate::state::AppState;

#[component]
pub fn AnalyzerPanel() -> View {
    let state = use_context::<AppState>();
    let has_result = create_memo({
        let state = state.clone();
        move || state.result.with(Option::is_some)
    });

    view! {
        (if has_result.get() {
            view! { ResultsView() }
        } else {
            view! { UploadView() }
        })
    }
}

/// Upload card: file input plus, once a file is staged, its summary row
/// and the analyze trigger.
#[component]
fn UploadView() -> View {
    let state = use_context::<AppState>();
    let analyzing = state.analyzing;
    let filename = state.filename;
    let has_upload = create_memo({
        let state = state.clone();
        move || state.has_upload()
    });
    let size_label = create_memo({
        let state = state.clone();
        move || {
            // Track the size signal; the string itself is derived
            let _ = state.file_size.get();
            state.file_size_string()
        }
    });

    view! {
        section(class="card upload-card") {
            h2 { "Upload Lunar Image" }
            FileUpload()
            (if has_upload.get() {
                let state = use_context::<AppState>();
                let on_analyze = move |_| {
                    if state.analyzing.get() {
                        return;
                    }
                    let state = state.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        state.run_analysis().await;
                    });
                };

                view! {
                    div(class="staged-file") {
                        div(class="staged-file-info") {
                            p(class="file-name") { (filename.get_clone()) }
                            p(class="file-size") { (size_label.get_clone()) }
                        }
                        button(
                            class="analyze-button",
                            disabled=move || analyzing.get(),
                            on:click=on_analyze
                        ) {
                            (if analyzing.get() { "Analyzing..." } else { "Analyze Craters" })
                        }
                    }
                }
            } else {
                view! {}
            })
        }
    }
}
