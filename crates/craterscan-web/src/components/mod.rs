//! UI components
//!
//! One module per panel: the upload/results switcher, the file input,
//! the results view with the reveal comparator, and the status bar.

mod analyzer_panel;
mod comparator;
mod file_upload;
mod results;
mod status_bar;

pub use analyzer_panel::AnalyzerPanel;
pub use comparator::Comparator;
pub use file_upload::FileUpload;
pub use results::ResultsView;
pub use status_bar::StatusBar;
