use serde::{Deserialize, Serialize};

/// Progress below which revealed content is hidden again
pub const CONTENT_HIDE_THRESHOLD: f64 = 0.75;

/// Viewports narrower than this (in pixels) use the narrow geometry
pub const NARROW_BREAKPOINT_PX: f64 = 768.0;

/// Observable state of the hero transition
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExpansionState {
    /// Fraction of the transition completed, always within [0, 1]
    pub progress: f64,
    /// Set once forward input reaches 1.0; the page owns scrolling while set
    pub fully_expanded: bool,
    /// Gates the content below the hero. Shown at 1.0, hidden below 0.75.
    pub content_visible: bool,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Identity of the media shown in the hero. Changing it restarts the transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    pub fn toggled(self) -> Self {
        match self {
            MediaKind::Image => MediaKind::Video,
            MediaKind::Video => MediaKind::Image,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// Width classification of the viewport
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    #[default]
    Wide,
}

impl ViewportClass {
    pub fn from_width(width_px: f64) -> Self {
        if width_px < NARROW_BREAKPOINT_PX {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }
}
