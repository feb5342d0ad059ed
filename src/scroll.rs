//! Scroll-trigger policy
//!
//! A pure decision function over viewport measurements and pagination
//! state. It owns no state of its own; the session feeds it the current
//! guard flag and page counters and acts on the verdict.

/// Scroll measurements of the rendered page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Total height of the rendered document
    pub document_height: f64,
    /// Height of the visible area
    pub viewport_height: f64,
    /// Distance scrolled from the top
    pub scroll_offset: f64,
}

impl Viewport {
    /// Create a viewport from raw measurements
    pub fn new(document_height: f64, viewport_height: f64, scroll_offset: f64) -> Self {
        Self {
            document_height,
            viewport_height,
            scroll_offset,
        }
    }

    /// A viewport already scrolled to the very bottom
    pub fn at_bottom(document_height: f64, viewport_height: f64) -> Self {
        Self::new(
            document_height,
            viewport_height,
            document_height - viewport_height,
        )
    }

    /// Space left to scroll before the bottom of the document
    pub fn remaining_scroll(&self) -> f64 {
        self.document_height - self.viewport_height - self.scroll_offset
    }
}

/// Re-entrancy guard for the scroll trigger
///
/// Flipped to `Busy` when a fetch is triggered so a burst of scroll events
/// dispatches one request, and re-armed coarsely after settlement once the
/// roster is non-empty. The re-enable signal is shared, not tied to the
/// specific request that caused the busy state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollGuard {
    /// A trigger may fire
    #[default]
    Ready,
    /// A triggered fetch has not re-armed yet
    Busy,
}

impl ScrollGuard {
    /// Check whether a trigger may fire
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Decide whether to request the next page
///
/// Fires iff the user has reached the bottom of the document, the guard is
/// ready, and a page exists after the current one.
pub fn should_fetch_next(
    viewport: Viewport,
    current_page: u32,
    total_pages: u32,
    guard: ScrollGuard,
) -> bool {
    guard.is_ready() && viewport.remaining_scroll() <= 0.0 && current_page < total_pages
}
