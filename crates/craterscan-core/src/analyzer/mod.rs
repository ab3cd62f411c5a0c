//! Analysis orchestrator
//!
//! Sequences codec -> publish -> infer for a single staged image and
//! owns the run state machine. At most one run is in flight at a time.
//! A reset bumps the run generation, so the late completion of an
//! abandoned run can never clobber newer or reset state.

use std::cell::RefCell;

use crate::clients::{CraterDetector, ImageHost};
use crate::codec;
use crate::error::AnalysisError;
use crate::models::{AnalysisResult, EncodedPayload, SourceImage};

#[cfg(test)]
mod tests;

/// Orchestration states of an analysis run.
///
/// `Idle -> Encoding -> Publishing -> Inferring -> Done`, with `Failed`
/// absorbing from any of the three working states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// No run active; waiting for an image and an analyze trigger.
    Idle,
    /// Reading and base64-encoding the staged image.
    Encoding,
    /// Waiting on the hosting collaborator.
    Publishing,
    /// Waiting on the inference collaborator.
    Inferring,
    /// Run completed; a result is committed.
    Done,
    /// Run failed, carrying the human-readable cause.
    Failed(String),
}

impl AnalysisPhase {
    /// Whether a run is currently in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Encoding | Self::Publishing | Self::Inferring)
    }
}

/// Outcome of one `analyze` call.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// Run finished and its result was committed.
    Completed(AnalysisResult),
    /// Call was a no-op: no image staged, or another run already in
    /// flight. No collaborator call was made.
    Ignored,
    /// The run was abandoned by a reset or a new upload while in flight;
    /// its late completion was discarded.
    Superseded,
    /// Run failed; the cause is also recorded in [`AnalysisPhase::Failed`].
    Failed(String),
}

struct RunState {
    phase: AnalysisPhase,
    source: Option<SourceImage>,
    result: Option<AnalysisResult>,
    /// Monotonic run id. Completion handlers compare against it before
    /// writing anything back.
    generation: u64,
}

/// The analysis orchestrator.
///
/// Generic over the two collaborator seams so tests can drive it with
/// mocks. Single-threaded by design: interior mutability goes through a
/// `RefCell` and no borrow is ever held across an await point.
pub struct Analyzer<H, D> {
    host: H,
    detector: D,
    state: RefCell<RunState>,
}

impl<H: ImageHost, D: CraterDetector> Analyzer<H, D> {
    pub fn new(host: H, detector: D) -> Self {
        Self {
            host,
            detector,
            state: RefCell::new(RunState {
                phase: AnalysisPhase::Idle,
                source: None,
                result: None,
                generation: 0,
            }),
        }
    }

    /// Snapshot of the current phase.
    pub fn phase(&self) -> AnalysisPhase {
        self.state.borrow().phase.clone()
    }

    /// Last committed result, if any.
    pub fn result(&self) -> Option<AnalysisResult> {
        self.state.borrow().result.clone()
    }

    /// Whether an image is staged for analysis.
    pub fn has_source(&self) -> bool {
        self.state.borrow().source.is_some()
    }

    /// Stage a new source image, discarding any previous result.
    ///
    /// A new upload supersedes whatever run is still in flight.
    pub fn set_source(&self, image: SourceImage) {
        let mut state = self.state.borrow_mut();
        if state.phase.is_busy() {
            state.generation += 1;
        }
        state.source = Some(image);
        state.result = None;
        state.phase = AnalysisPhase::Idle;
    }

    /// Discard the staged image and any result and return to `Idle`.
    ///
    /// Accepted from any state. A reset during an in-flight run abandons
    /// it; already-dispatched collaborator calls complete and their
    /// results are discarded by the generation check.
    pub fn reset(&self) {
        let mut state = self.state.borrow_mut();
        state.generation += 1;
        state.source = None;
        state.result = None;
        state.phase = AnalysisPhase::Idle;
    }

    /// Run one analysis to completion.
    ///
    /// No-op (`Ignored`) when nothing is staged or another run is in
    /// flight. A non-ignored run makes exactly one publish call and, if
    /// publishing succeeds, exactly one inference call.
    pub async fn analyze(&self) -> AnalysisOutcome {
        let (payload, run) = match self.begin() {
            Some(started) => started,
            None => return AnalysisOutcome::Ignored,
        };

        if !self.advance(run, AnalysisPhase::Publishing) {
            return AnalysisOutcome::Superseded;
        }
        let published = match self.host.publish(&payload).await {
            Ok(url) => url,
            Err(error) => return self.fail(run, AnalysisError::from(error)),
        };
        // The payload is transient; the publishing client has consumed it.
        drop(payload);

        if !self.advance(run, AnalysisPhase::Inferring) {
            return AnalysisOutcome::Superseded;
        }
        let detection = match self.detector.infer(&published).await {
            Ok(detection) => detection,
            Err(error) => return self.fail(run, AnalysisError::from(error)),
        };

        self.commit(
            run,
            AnalysisResult {
                original_image: published,
                processed_image: detection.annotated_image,
                crater_count: detection.object_count,
                confidence: detection.confidence,
            },
        )
    }

    /// Entry guard: start a run only from a non-busy phase with an image
    /// staged. Returns the encoded payload and the new run id.
    fn begin(&self) -> Option<(EncodedPayload, u64)> {
        let mut state = self.state.borrow_mut();
        if state.phase.is_busy() {
            return None;
        }
        let (payload, filename, size) = {
            let source = state.source.as_ref()?;
            (
                codec::encode(&source.bytes),
                source.filename.clone(),
                source.size_bytes(),
            )
        };

        state.generation += 1;
        state.phase = AnalysisPhase::Encoding;
        state.result = None;
        let run = state.generation;
        log::info!("run {}: encoded {} ({} bytes)", run, filename, size);
        Some((payload, run))
    }

    /// Move to `next` if this run is still current.
    fn advance(&self, run: u64, next: AnalysisPhase) -> bool {
        let mut state = self.state.borrow_mut();
        if state.generation != run {
            log::info!("run {}: superseded, discarding", run);
            return false;
        }
        state.phase = next;
        true
    }

    fn commit(&self, run: u64, result: AnalysisResult) -> AnalysisOutcome {
        let mut state = self.state.borrow_mut();
        if state.generation != run {
            log::info!("run {}: superseded, discarding result", run);
            return AnalysisOutcome::Superseded;
        }
        log::info!("run {}: detected {} craters", run, result.crater_count);
        state.result = Some(result.clone());
        state.phase = AnalysisPhase::Done;
        AnalysisOutcome::Completed(result)
    }

    fn fail(&self, run: u64, error: AnalysisError) -> AnalysisOutcome {
        let mut state = self.state.borrow_mut();
        if state.generation != run {
            log::info!("run {}: superseded, discarding failure", run);
            return AnalysisOutcome::Superseded;
        }
        let message = error.user_message();
        log::error!("run {}: {}", run, message);
        state.phase = AnalysisPhase::Failed(message.clone());
        AnalysisOutcome::Failed(message)
    }
}
