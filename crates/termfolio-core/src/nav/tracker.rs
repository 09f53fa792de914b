//! Active section tracking for the navigation panel

use tracing::trace;

/// Page offsets beyond this switch the navigation panel to its scrolled style
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Index of the latest section whose top has crossed the activation line.
///
/// The activation line sits one third of the way down the viewport. Sections
/// are scanned from last to first and the first match wins, so when several
/// tops are above the line the one furthest down the page is chosen.
pub fn active_section(section_tops: &[f64], scroll_y: f64, viewport_height: f64) -> Option<usize> {
    let line = scroll_y + viewport_height / 3.0;
    section_tops.iter().rposition(|&top| top <= line)
}

/// Tracks the active section and the scrolled flag across scroll events
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    active: usize,
    scrolled: bool,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn active(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Recompute from the current scroll position. Returns true when the
    /// active section changed. With no section above the line the previous
    /// value is kept.
    pub fn update(&mut self, section_tops: &[f64], scroll_y: f64, viewport_height: f64) -> bool {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD_PX;

        match active_section(section_tops, scroll_y, viewport_height) {
            Some(index) if index != self.active => {
                trace!(from = self.active, to = index, "active section changed");
                self.active = index;
                true
            }
            _ => false,
        }
    }

    /// Force the active section, e.g. when the user jumps via navigation
    pub fn set_active(&mut self, index: usize) {
        self.active = index;
    }
}
