/// Normalized page scroll in `[0, 1]`.
///
/// `max(.., 1)` keeps a page that fits the viewport at 0 instead of dividing
/// by zero; anything non-finite also collapses to 0.
#[inline]
pub fn scroll_progress(scroll_offset: f64, document_height: f64, viewport_height: f64) -> f32 {
    if !(scroll_offset.is_finite() && document_height.is_finite() && viewport_height.is_finite()) {
        return 0.0;
    }
    let scrollable = (document_height - viewport_height).max(1.0);
    let progress = (scroll_offset / scrollable).clamp(0.0, 1.0);
    if progress.is_finite() {
        progress as f32
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    progress: f32,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Recompute from the latest scroll notification.
    pub fn update(&mut self, scroll_offset: f64, document_height: f64, viewport_height: f64) {
        self.progress = scroll_progress(scroll_offset, document_height, viewport_height);
    }
}
