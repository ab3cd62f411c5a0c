//! Craterscan Core Library
//!
//! Core functionality for the lunar crater analyzer: image transport
//! encoding, clients for the two external collaborators, the analysis
//! orchestrator, and the reveal-comparator geometry.
//!
//! Everything here is platform neutral and compiles for both native
//! targets (tests) and `wasm32-unknown-unknown` (the web frontend).

pub mod analyzer;
pub mod clients;
pub mod codec;
pub mod comparator;
pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use analyzer::{AnalysisOutcome, AnalysisPhase, Analyzer};
pub use comparator::ComparatorState;
pub use config::CollaboratorConfig;
pub use error::{AnalysisError, DecodeError, InferenceError, PublishError};
pub use models::{
    AnalysisResult, DetectionResult, EncodedPayload, PublishedImageRef, SourceImage,
};
