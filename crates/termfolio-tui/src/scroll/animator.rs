use std::time::{Duration, Instant};

use super::easing::EasingTypeExt;
use super::{EasingType, ScrollConfig, ScrollConfigExt};

#[derive(Debug, Clone)]
struct Motion {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

impl Motion {
    fn position_at(&self, now: Instant) -> Option<u16> {
        let elapsed = now.saturating_duration_since(self.start);
        if elapsed >= self.duration {
            return None;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = self.easing.apply(t);
        let pos = self.from as f64 + (self.to as f64 - self.from as f64) * eased;
        Some(pos.round() as u16)
    }
}

/// Page scroll position in lines, with optional eased motion between targets
#[derive(Debug, Clone)]
pub struct PageScroller {
    config: ScrollConfig,
    smooth: bool,
    position: u16,
    motion: Option<Motion>,
}

impl Default for PageScroller {
    fn default() -> Self {
        Self::new(ScrollConfig::default(), false)
    }
}

impl PageScroller {
    pub fn new(config: ScrollConfig, reduced_motion: bool) -> Self {
        let smooth = config.is_smooth() && !reduced_motion;
        Self {
            config,
            smooth,
            position: 0,
            motion: None,
        }
    }

    #[inline]
    pub fn position(&self) -> u16 {
        self.position
    }

    /// Where the page will come to rest
    pub fn target(&self) -> u16 {
        self.motion.as_ref().map(|m| m.to).unwrap_or(self.position)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// Lines moved by one step key or wheel notch
    pub fn step_lines(&self) -> u16 {
        self.config.scroll_lines.max(1)
    }

    /// Jump without animation, cancelling any motion
    pub fn set_position(&mut self, position: u16) {
        self.motion = None;
        self.position = position;
    }

    pub fn scroll_to(&mut self, target: u16, max: u16) {
        self.scroll_to_at(target, max, Instant::now());
    }

    /// Move relative to the current target, so rapid presses accumulate
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        let target = (self.target() as i32 + delta).clamp(0, max as i32) as u16;
        self.scroll_to(target, max);
    }

    /// Advance the motion and return the current position
    pub fn update(&mut self, max: u16) -> u16 {
        self.update_at(max, Instant::now())
    }

    fn scroll_to_at(&mut self, target: u16, max: u16, now: Instant) {
        let target = target.min(max);
        if !self.smooth || target == self.position {
            self.set_position(target);
            return;
        }
        self.motion = Some(Motion {
            start: now,
            from: self.position,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    fn update_at(&mut self, max: u16, now: Instant) -> u16 {
        if let Some(motion) = &self.motion {
            match motion.position_at(now) {
                Some(pos) => self.position = pos,
                None => {
                    self.position = motion.to;
                    self.motion = None;
                }
            }
        }
        if self.position > max {
            self.set_position(max);
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth_config() -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 100,
            easing: EasingType::Linear,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_when_disabled() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut scroller = PageScroller::new(config, false);
        scroller.scroll_to(40, 100);
        assert_eq!(scroller.position(), 40);
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_reduced_motion_disables_animation() {
        let mut scroller = PageScroller::new(smooth_config(), true);
        scroller.scroll_by(10, 100);
        assert_eq!(scroller.position(), 10);
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_linear_motion_midpoint_and_finish() {
        let mut scroller = PageScroller::new(smooth_config(), false);
        let start = Instant::now();
        scroller.scroll_to_at(50, 100, start);
        assert!(scroller.is_animating());

        assert_eq!(scroller.update_at(100, start + Duration::from_millis(50)), 25);
        assert_eq!(scroller.update_at(100, start + Duration::from_millis(100)), 50);
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_scroll_by_accumulates_on_target() {
        let mut scroller = PageScroller::new(smooth_config(), false);
        scroller.scroll_by(10, 200);
        scroller.scroll_by(10, 200);
        scroller.scroll_by(10, 200);
        assert_eq!(scroller.target(), 30);
    }

    #[test]
    fn test_targets_clamped() {
        let mut scroller = PageScroller::new(smooth_config(), false);
        scroller.scroll_to(500, 80);
        assert_eq!(scroller.target(), 80);
        scroller.set_position(0);
        scroller.scroll_by(-5, 80);
        assert_eq!(scroller.target(), 0);
    }

    #[test]
    fn test_update_clamps_when_page_shrinks() {
        let mut scroller = PageScroller::default();
        scroller.set_position(60);
        assert_eq!(scroller.update(20), 20);
    }
}
