//! Reveal comparator geometry
//!
//! Split state for the before/after view. The percentage is the durable
//! quantity; the pixel boundary is always derived from it and the
//! measured container width, so a resize can never drift the user's
//! chosen split position.

#[cfg(test)]
mod tests;

/// Split position and measured container width for the reveal view.
///
/// `split_percent` is user-owned (slider input); `container_width_px` is
/// environment-owned (layout and resize events).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparatorState {
    split_percent: u8,
    container_width_px: f64,
}

impl ComparatorState {
    /// Initial state: split centered, container not yet measured.
    pub fn new() -> Self {
        Self {
            split_percent: 50,
            container_width_px: 0.0,
        }
    }

    /// Current split position in percent.
    pub fn split_percent(&self) -> u8 {
        self.split_percent
    }

    /// Set the split position. The range input guarantees 0..=100;
    /// values are deliberately not clamped here.
    pub fn set_split_percent(&mut self, percent: u8) {
        self.split_percent = percent;
    }

    /// Measured container width in pixels.
    pub fn container_width(&self) -> f64 {
        self.container_width_px
    }

    /// Record a freshly measured container width. Negative measurements
    /// (a collapsed layout) are treated as zero width.
    pub fn set_container_width(&mut self, width_px: f64) {
        self.container_width_px = width_px.max(0.0);
    }

    /// Pixel x-coordinate of the split boundary.
    ///
    /// Always within `[0, container_width]` for in-range percentages.
    pub fn clip_boundary(&self) -> f64 {
        f64::from(self.split_percent) / 100.0 * self.container_width_px
    }

    /// Width of the region hidden on the right of the original overlay,
    /// as consumed by `clip-path: inset(0 <right>px 0 0)`.
    pub fn right_inset(&self) -> f64 {
        self.container_width_px - self.clip_boundary()
    }
}

impl Default for ComparatorState {
    fn default() -> Self {
        Self::new()
    }
}
