//! Data models for Craterscan
//!
//! Core data structures passed between the codec, the collaborator
//! clients, and the analysis orchestrator.

/// Confidence value attached to every detection result.
///
/// The inference collaborator does not currently return a confidence
/// value, so this constant stands in for one. Known gap: tests assert
/// that it stays constant rather than pretending it is derived.
pub const PLACEHOLDER_CONFIDENCE: f32 = 0.85;

/// A user-supplied image staged for analysis.
///
/// Owned by the orchestrator for the duration of one run; read and
/// encoded, never mutated.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Raw file bytes.
    pub bytes: Vec<u8>,
    /// Declared media type (e.g. "image/jpeg").
    pub media_type: String,
    /// Original filename, for display only.
    pub filename: String,
}

impl SourceImage {
    /// File size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

/// Base64 text form of a [`SourceImage`].
///
/// Transient: produced by the codec and discarded once the publishing
/// client has consumed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload(pub String);

impl EncodedPayload {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Publicly dereferenceable URL for a published image.
///
/// Short-lived: the hosting collaborator may expire it, so it is only
/// guaranteed valid for the duration of the inference call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedImageRef(pub String);

impl PublishedImageRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parsed output of one inference call.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    /// Annotated image as a renderable data URI. May wrap an empty body
    /// when the collaborator omitted the field.
    pub annotated_image: String,
    /// Number of detected objects; zero when the field was omitted.
    pub object_count: u32,
    /// Currently always [`PLACEHOLDER_CONFIDENCE`].
    pub confidence: f32,
}

/// Final outcome of one successful analysis run.
///
/// Immutable once constructed; a new run replaces the previous result
/// atomically, so the UI never observes a partial update.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// The published original, served by the hosting collaborator.
    pub original_image: PublishedImageRef,
    /// The annotated image as a renderable data URI.
    pub processed_image: String,
    /// Number of craters the detection workflow found.
    pub crater_count: u32,
    /// See [`PLACEHOLDER_CONFIDENCE`].
    pub confidence: f32,
}
