//! Status bar
//!
//! Single line at the bottom of the app reflecting the run state:
//! ready, in flight, the completion notice, or the failure cause.

use sycamore::prelude::*;

use crate::state::{AnalysisStatus, AppState};

#[component]
pub fn StatusBar() -> View {
    let state = use_context::<AppState>();
    let status = state.status;

    let message = create_memo(move || match status.get_clone() {
        AnalysisStatus::Empty => String::new(),
        AnalysisStatus::ImageLoaded => "Image loaded - ready to analyze".to_string(),
        AnalysisStatus::Analyzing => "Analyzing...".to_string(),
        AnalysisStatus::Complete(notice) => notice,
        AnalysisStatus::Error(cause) => cause,
    });

    let class = create_memo(move || match status.get_clone() {
        AnalysisStatus::Error(_) => "status-bar status-error",
        AnalysisStatus::Complete(_) => "status-bar status-ok",
        _ => "status-bar",
    });

    view! {
        footer(class=move || class.get_clone()) {
            span { (message.get_clone()) }
        }
    }
}
