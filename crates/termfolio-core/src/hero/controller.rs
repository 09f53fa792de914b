//! Input handling for the hero transition
//!
//! The controller has two regimes. While collapsed or expanding it owns all
//! vertical input: wheel and drag deltas move `progress`, and the page is held
//! at offset zero. Once `progress` reaches 1.0 it is fully expanded and input
//! passes through to the page, except for upward input at the very top of the
//! page, which drops back into the first regime.

use tracing::debug;

use super::geometry::HeroGeometry;
use super::state::{ExpansionState, MediaKind, ViewportClass, CONTENT_HIDE_THRESHOLD};

/// Progress per unit of wheel delta
pub const WHEEL_FACTOR: f64 = 0.0009;

/// Progress per unit of drag delta when dragging toward collapse (negative delta)
pub const TOUCH_COLLAPSE_FACTOR: f64 = 0.008;

/// Progress per unit of drag delta when dragging toward expansion (positive delta)
pub const TOUCH_EXPAND_FACTOR: f64 = 0.005;

/// Page offsets at or below this count as "at the top"
pub const TOP_TOLERANCE_PX: f64 = 5.0;

/// A drag must travel this far back before it re-enters the transition
pub const TOUCH_EXIT_DISTANCE_PX: f64 = 20.0;

/// What the host should do with the input that was just handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The controller used the input; the page must not scroll
    Consumed,
    /// The input belongs to the page
    PassThrough,
}

impl InputOutcome {
    pub fn is_consumed(self) -> bool {
        self == InputOutcome::Consumed
    }
}

/// Maps wheel, drag, scroll and resize signals onto an [`ExpansionState`]
#[derive(Debug, Clone, Default)]
pub struct ScrollExpansionController {
    state: ExpansionState,
    media: MediaKind,
    viewport: ViewportClass,
    /// Last drag coordinate; `None` when no drag is in progress
    touch_reference: Option<f64>,
}

impl ScrollExpansionController {
    pub fn new(media: MediaKind) -> Self {
        Self {
            media,
            ..Self::default()
        }
    }

    #[inline]
    pub fn state(&self) -> ExpansionState {
        self.state
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    #[inline]
    pub fn is_fully_expanded(&self) -> bool {
        self.state.fully_expanded
    }

    #[inline]
    pub fn is_content_visible(&self) -> bool {
        self.state.content_visible
    }

    pub fn media_kind(&self) -> MediaKind {
        self.media
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn geometry(&self) -> HeroGeometry {
        HeroGeometry::compute(self.state.progress, self.viewport)
    }

    /// Handle a wheel event. `page_offset` is the current vertical page scroll.
    pub fn on_wheel(&mut self, delta_y: f64, page_offset: f64) -> InputOutcome {
        if !delta_y.is_finite() {
            return InputOutcome::PassThrough;
        }

        if self.state.fully_expanded {
            if delta_y < 0.0 && page_offset <= TOP_TOLERANCE_PX {
                self.leave_expanded();
                return InputOutcome::Consumed;
            }
            return InputOutcome::PassThrough;
        }

        self.advance(delta_y * WHEEL_FACTOR);
        InputOutcome::Consumed
    }

    /// Start tracking a drag at vertical coordinate `y`
    pub fn on_touch_start(&mut self, y: f64) {
        if y.is_finite() {
            self.touch_reference = Some(y);
        }
    }

    /// Continue a drag. Without a preceding touch start this is a no-op.
    pub fn on_touch_move(&mut self, y: f64, page_offset: f64) -> InputOutcome {
        let Some(reference) = self.touch_reference else {
            return InputOutcome::PassThrough;
        };
        if !y.is_finite() {
            return InputOutcome::PassThrough;
        }

        let delta_y = reference - y;

        if self.state.fully_expanded {
            if delta_y < -TOUCH_EXIT_DISTANCE_PX && page_offset <= TOP_TOLERANCE_PX {
                self.leave_expanded();
                return InputOutcome::Consumed;
            }
            return InputOutcome::PassThrough;
        }

        let factor = if delta_y < 0.0 {
            TOUCH_COLLAPSE_FACTOR
        } else {
            TOUCH_EXPAND_FACTOR
        };
        self.advance(delta_y * factor);
        self.touch_reference = Some(y);
        InputOutcome::Consumed
    }

    pub fn on_touch_end(&mut self) {
        self.touch_reference = None;
    }

    /// React to a page scroll. Returns the offset the page must be moved back
    /// to, if any.
    pub fn on_scroll(&self, page_offset: f64) -> Option<f64> {
        if !self.state.fully_expanded && page_offset != 0.0 {
            Some(0.0)
        } else {
            None
        }
    }

    /// Reclassify the viewport after a resize
    pub fn on_resize(&mut self, viewport_width_px: f64) {
        let class = ViewportClass::from_width(viewport_width_px);
        if class != self.viewport {
            debug!(?class, width = viewport_width_px, "hero viewport reclassified");
            self.viewport = class;
        }
    }

    /// Switch the hero media. A different kind restarts the transition.
    pub fn set_media_kind(&mut self, media: MediaKind) {
        if media == self.media {
            return;
        }
        debug!(from = ?self.media, to = ?media, "hero media changed, resetting");
        self.media = media;
        self.reset();
    }

    /// Hard reset to the collapsed state
    pub fn reset(&mut self) {
        self.state = ExpansionState::new();
        self.touch_reference = None;
    }

    fn advance(&mut self, delta: f64) {
        let progress = (self.state.progress + delta).clamp(0.0, 1.0);
        self.state.progress = progress;

        if progress >= 1.0 {
            if !self.state.fully_expanded {
                debug!("hero fully expanded");
            }
            self.state.fully_expanded = true;
            self.state.content_visible = true;
        } else if progress < CONTENT_HIDE_THRESHOLD {
            if self.state.content_visible {
                debug!(progress, "hero content hidden");
            }
            self.state.content_visible = false;
        }
    }

    fn leave_expanded(&mut self) {
        debug!("hero re-entered from the top of the page");
        self.state.fully_expanded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn with_progress(progress: f64) -> ScrollExpansionController {
        let mut controller = ScrollExpansionController::default();
        controller.advance(progress);
        controller
    }

    fn expanded() -> ScrollExpansionController {
        let mut controller = ScrollExpansionController::default();
        controller.on_wheel(2000.0, 0.0);
        assert!(controller.is_fully_expanded());
        controller
    }

    #[test]
    fn test_wheel_moves_progress() {
        let mut controller = ScrollExpansionController::default();
        let outcome = controller.on_wheel(100.0, 0.0);
        assert_eq!(outcome, InputOutcome::Consumed);
        assert!(approx(controller.progress(), 0.09));
        assert!(!controller.is_fully_expanded());
        assert!(!controller.is_content_visible());
    }

    #[test]
    fn test_clamp_invariant_under_mixed_input() {
        let mut controller = ScrollExpansionController::default();
        let deltas = [
            500.0, -3000.0, 120.0, 9000.0, -40.0, -7000.0, 1.0, 333.0, -0.5, 2500.0,
        ];
        for (i, delta) in deltas.iter().enumerate() {
            if i % 2 == 0 {
                controller.on_wheel(*delta, 0.0);
            } else {
                controller.on_touch_start(400.0);
                controller.on_touch_move(400.0 - delta, 0.0);
                controller.on_touch_end();
            }
            let p = controller.progress();
            assert!((0.0..=1.0).contains(&p), "progress {} out of range", p);
        }
    }

    #[test]
    fn test_non_finite_delta_ignored() {
        let mut controller = with_progress(0.4);
        assert_eq!(controller.on_wheel(f64::NAN, 0.0), InputOutcome::PassThrough);
        assert_eq!(controller.on_wheel(f64::INFINITY, 0.0), InputOutcome::PassThrough);
        assert!(approx(controller.progress(), 0.4));
    }

    #[test]
    fn test_forward_completion() {
        let mut controller = with_progress(0.97);
        controller.on_wheel(500.0, 0.0);
        assert_eq!(controller.progress(), 1.0);
        assert!(controller.is_fully_expanded());
        assert!(controller.is_content_visible());
    }

    #[test]
    fn test_expanded_wheel_down_passes_through() {
        let mut controller = expanded();
        assert_eq!(controller.on_wheel(100.0, 0.0), InputOutcome::PassThrough);
        assert_eq!(controller.on_wheel(-100.0, 240.0), InputOutcome::PassThrough);
        assert!(controller.is_fully_expanded());
    }

    #[test]
    fn test_reverse_exit_keeps_progress() {
        let mut controller = expanded();
        let outcome = controller.on_wheel(-50.0, 0.0);
        assert_eq!(outcome, InputOutcome::Consumed);
        assert!(!controller.is_fully_expanded());
        assert_eq!(controller.progress(), 1.0);
        assert!(controller.is_content_visible());
    }

    #[test]
    fn test_reverse_exit_within_top_tolerance() {
        let mut controller = expanded();
        assert_eq!(controller.on_wheel(-50.0, 5.0), InputOutcome::Consumed);
        assert!(!controller.is_fully_expanded());

        let mut controller = expanded();
        assert_eq!(controller.on_wheel(-50.0, 5.5), InputOutcome::PassThrough);
        assert!(controller.is_fully_expanded());
    }

    #[test]
    fn test_hysteresis_band_on_reverse() {
        let mut controller = expanded();
        controller.on_wheel(-50.0, 0.0);

        // 1.0 -> 0.91 -> 0.82: inside the band, content stays
        controller.on_wheel(-100.0, 0.0);
        assert!(approx(controller.progress(), 0.91));
        assert!(controller.is_content_visible());
        controller.on_wheel(-100.0, 0.0);
        assert!(approx(controller.progress(), 0.82));
        assert!(controller.is_content_visible());

        // 0.73: below the hide threshold
        controller.on_wheel(-100.0, 0.0);
        assert!(approx(controller.progress(), 0.73));
        assert!(!controller.is_content_visible());

        // Climbing back into the band does not re-show content
        controller.on_wheel(100.0, 0.0);
        assert!(approx(controller.progress(), 0.82));
        assert!(!controller.is_content_visible());
    }

    #[test]
    fn test_large_reverse_wheel_hides_content() {
        let mut controller = expanded();
        controller.on_wheel(-50.0, 0.0);
        controller.on_wheel(-1200.0, 0.0);
        assert_eq!(controller.progress(), 0.0);
        assert!(!controller.is_content_visible());
        assert!(!controller.is_fully_expanded());
    }

    #[test]
    fn test_touch_asymmetry() {
        // Finger moving down: negative delta, collapse factor
        let mut controller = with_progress(1.0);
        controller.leave_expanded();
        controller.on_touch_start(100.0);
        controller.on_touch_move(200.0, 0.0);
        assert!(approx(controller.progress(), 1.0 - 100.0 * 0.008));

        // Finger moving up: positive delta, expand factor
        let mut controller = ScrollExpansionController::default();
        controller.on_touch_start(200.0);
        controller.on_touch_move(100.0, 0.0);
        assert!(approx(controller.progress(), 100.0 * 0.005));

        assert_ne!(TOUCH_COLLAPSE_FACTOR, TOUCH_EXPAND_FACTOR);
    }

    #[test]
    fn test_touch_tracks_incrementally() {
        let mut controller = ScrollExpansionController::default();
        controller.on_touch_start(300.0);
        controller.on_touch_move(280.0, 0.0);
        controller.on_touch_move(260.0, 0.0);
        // Two steps of 20 rather than 20 then 40
        assert!(approx(controller.progress(), 40.0 * 0.005));
    }

    #[test]
    fn test_touch_move_without_start_is_ignored() {
        let mut controller = ScrollExpansionController::default();
        assert_eq!(controller.on_touch_move(10.0, 0.0), InputOutcome::PassThrough);
        assert_eq!(controller.progress(), 0.0);

        controller.on_touch_start(50.0);
        controller.on_touch_end();
        assert_eq!(controller.on_touch_move(10.0, 0.0), InputOutcome::PassThrough);
        assert_eq!(controller.progress(), 0.0);
    }

    #[test]
    fn test_touch_reverse_exit_needs_distance() {
        let mut controller = expanded();
        controller.on_touch_start(100.0);
        assert_eq!(controller.on_touch_move(115.0, 0.0), InputOutcome::PassThrough);
        assert!(controller.is_fully_expanded());
        // Reference is not advanced while expanded, so the drag accumulates
        assert_eq!(controller.on_touch_move(125.0, 0.0), InputOutcome::Consumed);
        assert!(!controller.is_fully_expanded());
        assert_eq!(controller.progress(), 1.0);
    }

    #[test]
    fn test_touch_reverse_exit_only_at_top() {
        let mut controller = expanded();
        controller.on_touch_start(100.0);
        assert_eq!(controller.on_touch_move(200.0, 64.0), InputOutcome::PassThrough);
        assert!(controller.is_fully_expanded());
    }

    #[test]
    fn test_touch_completion_sets_flags() {
        let mut controller = with_progress(0.9);
        controller.on_touch_start(500.0);
        controller.on_touch_move(400.0, 0.0);
        assert_eq!(controller.progress(), 1.0);
        assert!(controller.is_fully_expanded());
        assert!(controller.is_content_visible());
    }

    #[test]
    fn test_scroll_forced_to_top_until_expanded() {
        let controller = with_progress(0.5);
        assert_eq!(controller.on_scroll(120.0), Some(0.0));
        assert_eq!(controller.on_scroll(0.0), None);

        let controller = expanded();
        assert_eq!(controller.on_scroll(120.0), None);
    }

    #[test]
    fn test_reset_on_media_change() {
        let mut controller = with_progress(0.6);
        controller.on_touch_start(10.0);
        controller.set_media_kind(MediaKind::Video);
        assert_eq!(controller.state(), ExpansionState::new());
        assert_eq!(controller.media_kind(), MediaKind::Video);
        assert_eq!(controller.on_touch_move(0.0, 0.0), InputOutcome::PassThrough);
    }

    #[test]
    fn test_same_media_does_not_reset() {
        let mut controller = with_progress(0.6);
        controller.set_media_kind(MediaKind::Image);
        assert!(approx(controller.progress(), 0.6));
    }

    #[test]
    fn test_idempotent_at_full_expansion() {
        let mut controller = expanded();
        for _ in 0..5 {
            assert_eq!(controller.on_wheel(500.0, 0.0), InputOutcome::PassThrough);
            assert_eq!(controller.progress(), 1.0);
            assert!(controller.is_content_visible());
            assert!(controller.is_fully_expanded());
        }
    }

    #[test]
    fn test_resize_changes_geometry_not_progress() {
        let mut controller = with_progress(0.5);
        controller.on_resize(1280.0);
        let wide = controller.geometry();
        controller.on_resize(640.0);
        let narrow = controller.geometry();
        assert_eq!(controller.viewport(), ViewportClass::Narrow);
        assert!(wide.media_width > narrow.media_width);
        assert!(approx(controller.progress(), 0.5));
    }
}
