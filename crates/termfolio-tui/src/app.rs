use std::collections::HashMap;

use rand::Rng;
use termfolio_core::content::{Portfolio, SectionKind};
use termfolio_core::hero::ScrollExpansionController;
use termfolio_core::nav::SectionTracker;
use termfolio_core::reveal::Scramble;
use termfolio_core::AppConfig;
use tracing::{debug, info, warn};

use crate::event::PointerEvent;
use crate::page::{PageLayout, PageLink};
use crate::scroll::PageScroller;
use crate::theme::Theme;

/// Rows taken by the status bar below the page
pub const STATUS_BAR_HEIGHT: u16 = 1;

const EXPAND_HINT: &str = "Scroll down to open the hero first";

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    pub config: AppConfig,
    pub portfolio: Portfolio,
    pub theme: Theme,
    pub controller: ScrollExpansionController,
    pub tracker: SectionTracker,
    pub scroller: PageScroller,
    pub layout: PageLayout,
    pub mode: Mode,
    pub nav_visible: bool,
    /// Index into `layout.links`
    pub focused_link: Option<usize>,
    /// Section headers currently scrambling in
    pub headers: HashMap<SectionKind, Scramble>,
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    pub should_quit: bool,
    /// Page area size in cells (columns, rows), status bar excluded
    viewport: (u16, u16),
    /// Last terminal row of an active left-button drag
    drag_row: Option<u16>,
    /// Page position the tracker last saw
    synced_position: u16,
}

impl App {
    pub fn new(config: AppConfig, portfolio: Portfolio, theme: Theme) -> Self {
        let controller = ScrollExpansionController::new(config.ui.media);
        let scroller = PageScroller::new(config.ui.scroll.clone(), config.ui.reduced_motion);
        let mut app = Self {
            config,
            portfolio,
            theme,
            controller,
            tracker: SectionTracker::new(),
            scroller,
            layout: PageLayout::default(),
            mode: Mode::Normal,
            nav_visible: true,
            focused_link: None,
            headers: HashMap::new(),
            status_message: None,
            pending_key: None,
            should_quit: false,
            viewport: (0, 0),
            drag_row: None,
            synced_position: 0,
        };
        app.on_resize(80, 24);
        app
    }

    #[inline]
    fn cell_width(&self) -> f64 {
        self.config.ui.cell_width_px.max(1.0)
    }

    #[inline]
    fn cell_height(&self) -> f64 {
        self.config.ui.cell_height_px.max(1.0)
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    /// The hero fills the first viewport of the page
    pub fn hero_height(&self) -> u16 {
        self.viewport.1.max(1)
    }

    pub fn page_height(&self) -> usize {
        self.hero_height() as usize + self.layout.len()
    }

    pub fn max_scroll(&self) -> u16 {
        let max = self.page_height().saturating_sub(self.viewport.1 as usize);
        max.min(u16::MAX as usize) as u16
    }

    pub fn page_offset_px(&self) -> f64 {
        self.scroller.position() as f64 * self.cell_height()
    }

    /// Page row where a navigation entry starts
    pub fn section_top(&self, index: usize) -> u16 {
        match self.layout.section_starts.get(index).copied().flatten() {
            Some(start) => (self.hero_height() as usize + start).min(u16::MAX as usize) as u16,
            None => 0,
        }
    }

    fn section_tops_px(&self) -> Vec<f64> {
        let cell_h = self.cell_height();
        (0..self.layout.section_starts.len())
            .map(|i| self.section_top(i) as f64 * cell_h)
            .collect()
    }

    pub fn active_section(&self) -> Option<SectionKind> {
        self.portfolio
            .navigation
            .get(self.tracker.active())
            .map(|item| item.section)
    }

    pub fn focused(&self) -> Option<&PageLink> {
        self.focused_link.and_then(|i| self.layout.links.get(i))
    }

    /// Short name of the controller regime for the status bar
    pub fn regime(&self) -> &'static str {
        if self.controller.is_fully_expanded() {
            "page"
        } else if self.controller.progress() > 0.0 {
            "expanding"
        } else {
            "collapsed"
        }
    }

    /// Header title for a section, scrambled while its reveal runs
    pub fn header_text<R: Rng + ?Sized>(&self, section: SectionKind, rng: &mut R) -> String {
        match self.headers.get(&section) {
            Some(scramble) => scramble.render(rng),
            None => PageLayout::header_text(&self.portfolio, section),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.scroller.is_animating() || !self.headers.is_empty()
    }

    /// Wheel-like input in pixels. `page_lines` is how far the page moves if
    /// the controller lets the input through.
    pub fn wheel(&mut self, delta_px: f64, page_lines: u16) {
        let outcome = self.controller.on_wheel(delta_px, self.page_offset_px());
        if !outcome.is_consumed() {
            let lines = page_lines.max(1) as i32;
            let delta = if delta_px < 0.0 { -lines } else { lines };
            let max = self.max_scroll();
            self.scroller.scroll_by(delta, max);
        }
        self.sync_scroll(false);
    }

    pub fn scroll_step(&mut self, down: bool) {
        let delta = self.config.ui.wheel_delta_px;
        let lines = self.scroller.step_lines();
        self.wheel(if down { delta } else { -delta }, lines);
    }

    pub fn scroll_half_page(&mut self, down: bool) {
        let rows = (self.viewport.1 / 2).max(1);
        let delta = rows as f64 * self.cell_height();
        self.wheel(if down { delta } else { -delta }, rows);
    }

    pub fn scroll_page(&mut self, down: bool) {
        let rows = self.viewport.1.max(1);
        let delta = rows as f64 * self.cell_height();
        self.wheel(if down { delta } else { -delta }, rows);
    }

    pub fn pointer(&mut self, event: PointerEvent) {
        let cell_h = self.cell_height();
        match event {
            PointerEvent::WheelDown => self.scroll_step(true),
            PointerEvent::WheelUp => self.scroll_step(false),
            PointerEvent::DragStart(row) => {
                self.controller.on_touch_start(row as f64 * cell_h);
                self.drag_row = Some(row);
            }
            PointerEvent::DragMove(row) => {
                let outcome = self
                    .controller
                    .on_touch_move(row as f64 * cell_h, self.page_offset_px());
                if !outcome.is_consumed() {
                    if let Some(prev) = self.drag_row {
                        // Dragging up moves the page down
                        let delta = prev as i32 - row as i32;
                        let max = self.max_scroll() as i32;
                        let target = (self.scroller.position() as i32 + delta).clamp(0, max);
                        self.scroller.set_position(target as u16);
                    }
                }
                if self.drag_row.is_some() {
                    self.drag_row = Some(row);
                }
                self.sync_scroll(false);
            }
            PointerEvent::DragEnd => {
                self.controller.on_touch_end();
                self.drag_row = None;
            }
        }
    }

    /// Let the controller correct the page offset, then update the tracker
    /// if the page moved
    pub fn sync_scroll(&mut self, force: bool) {
        let cell_h = self.cell_height();
        if let Some(offset) = self.controller.on_scroll(self.page_offset_px()) {
            let line = (offset / cell_h).round().max(0.0) as u16;
            self.scroller.set_position(line);
        }

        let position = self.scroller.position();
        if !force && position == self.synced_position {
            return;
        }
        self.synced_position = position;

        let tops = self.section_tops_px();
        let viewport_px = self.viewport.1 as f64 * cell_h;
        if self.tracker.update(&tops, position as f64 * cell_h, viewport_px) {
            self.reveal_active_header();
        }
    }

    /// Advance page motion and header reveals by one frame
    pub fn update_animation(&mut self) {
        let max = self.max_scroll();
        self.scroller.update(max);
        self.sync_scroll(false);

        for scramble in self.headers.values_mut() {
            scramble.tick();
        }
        self.headers.retain(|_, scramble| !scramble.is_complete());
    }

    fn reveal_active_header(&mut self) {
        if self.config.ui.reduced_motion {
            return;
        }
        let Some(section) = self.active_section() else {
            return;
        };
        if section == SectionKind::Home {
            return;
        }
        let text = PageLayout::header_text(&self.portfolio, section);
        self.headers.insert(section, Scramble::new("", &text));
    }

    fn page_scroll_to(&mut self, line: u16) {
        if !self.controller.is_fully_expanded() && line > 0 {
            self.set_status(EXPAND_HINT);
        }
        let max = self.max_scroll();
        self.scroller.scroll_to(line, max);
        self.sync_scroll(false);
    }

    pub fn jump_to_top(&mut self) {
        self.page_scroll_to(0);
    }

    pub fn jump_to_bottom(&mut self) {
        let max = self.max_scroll();
        self.page_scroll_to(max);
    }

    /// Mark a navigation entry active and move the page to it. Before the
    /// hero is open the page is held at the top and only the highlight moves.
    pub fn scroll_to_section(&mut self, index: usize) {
        if index >= self.portfolio.navigation.len() {
            return;
        }
        debug!(index, "navigating to section");
        if index != self.tracker.active() {
            self.tracker.set_active(index);
            self.reveal_active_header();
        }
        let top = self.section_top(index);
        self.page_scroll_to(top);
    }

    pub fn next_section(&mut self) {
        let last = self.portfolio.navigation.len().saturating_sub(1);
        let index = (self.tracker.active() + 1).min(last);
        self.scroll_to_section(index);
    }

    pub fn prev_section(&mut self) {
        let index = self.tracker.active().saturating_sub(1);
        self.scroll_to_section(index);
    }

    pub fn next_link(&mut self) {
        self.focus_link(true);
    }

    pub fn prev_link(&mut self) {
        self.focus_link(false);
    }

    fn focus_link(&mut self, forward: bool) {
        let count = self.layout.links.len();
        if count == 0 {
            return;
        }
        if !self.controller.is_content_visible() {
            self.set_status(EXPAND_HINT);
            return;
        }
        let next = match (self.focused_link, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };
        self.focused_link = Some(next);
        self.reveal_link(next);
    }

    /// Scroll so the link sits in the upper part of the viewport if it is
    /// off screen
    fn reveal_link(&mut self, index: usize) {
        let Some(link) = self.layout.links.get(index) else {
            return;
        };
        let row = self.hero_height() as usize + link.line;
        let top = self.scroller.target() as usize;
        let rows = self.viewport.1 as usize;
        if row >= top && row < top + rows {
            return;
        }
        let line = row.saturating_sub(rows / 3).min(u16::MAX as usize) as u16;
        self.page_scroll_to(line);
    }

    /// Open the focused link with the system handler
    pub fn open_focused_link(&mut self) {
        let Some(link) = self.focused().cloned() else {
            self.set_status("No link selected (Tab to cycle links)");
            return;
        };
        match open::that(&link.url) {
            Ok(()) => {
                info!(url = %link.url, "opened link");
                self.set_status(format!("Opened {}", link.label));
            }
            Err(e) => {
                warn!("Failed to open {}: {}", link.url, e);
                self.set_status(format!("Could not open {}: {}", link.url, e));
            }
        }
    }

    /// Swap image and video. The hero starts over from collapsed.
    pub fn toggle_media(&mut self) {
        let next = self.controller.media_kind().toggled();
        self.controller.set_media_kind(next);
        self.scroller.set_position(0);
        self.focused_link = None;
        self.drag_row = None;
        self.sync_scroll(true);
        self.set_status(format!("Hero media: {}", next.label()));
    }

    pub fn toggle_nav(&mut self) {
        self.nav_visible = !self.nav_visible;
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            Mode::Help => Mode::Normal,
            Mode::Normal => Mode::Help,
        };
    }

    pub fn exit_mode(&mut self) {
        match self.mode {
            Mode::Help => self.mode = Mode::Normal,
            Mode::Normal => self.focused_link = None,
        }
    }

    /// Terminal resized to `cols` x `rows`
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.viewport = (cols, rows.saturating_sub(STATUS_BAR_HEIGHT));
        self.controller.on_resize(cols as f64 * self.cell_width());
        if self.layout.width != cols || self.layout.is_empty() {
            self.refresh_layout();
        }
        let max = self.max_scroll();
        if self.scroller.position() > max {
            self.scroller.set_position(max);
        }
        self.sync_scroll(true);
    }

    /// Rebuild the body for the current width and theme
    pub fn refresh_layout(&mut self) {
        self.layout = PageLayout::build(&self.portfolio, &self.theme, self.viewport.0);
        if let Some(i) = self.focused_link {
            if i >= self.layout.links.len() {
                self.focused_link = None;
            }
        }
        debug!(
            width = self.viewport.0,
            lines = self.layout.len(),
            "page layout rebuilt"
        );
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_core::hero::MediaKind;

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.ui.scroll.smooth_enabled = false;
        config
    }

    fn app() -> App {
        App::new(config(), Portfolio::sample().unwrap(), Theme::default())
    }

    fn expanded_app() -> App {
        let mut app = app();
        while !app.controller.is_fully_expanded() {
            app.scroll_step(true);
        }
        app
    }

    #[test]
    fn test_wheel_before_expansion_holds_page() {
        let mut app = app();
        app.scroll_step(true);
        assert!(app.controller.progress() > 0.0);
        assert_eq!(app.scroller.position(), 0);
        assert_eq!(app.regime(), "expanding");
    }

    #[test]
    fn test_wheel_after_expansion_scrolls_page() {
        let mut app = expanded_app();
        assert_eq!(app.scroller.position(), 0);
        app.scroll_step(true);
        assert_eq!(app.scroller.position(), app.scroller.step_lines());
        assert_eq!(app.controller.progress(), 1.0);
        assert_eq!(app.regime(), "page");
    }

    #[test]
    fn test_reverse_exit_at_top() {
        let mut app = expanded_app();
        app.scroll_step(false);
        assert!(!app.controller.is_fully_expanded());
        assert_eq!(app.controller.progress(), 1.0);
        app.scroll_step(false);
        assert!(app.controller.progress() < 1.0);
        assert_eq!(app.scroller.position(), 0);
    }

    #[test]
    fn test_scroll_up_away_from_top_scrolls_page() {
        let mut app = expanded_app();
        app.scroll_page(true);
        let pos = app.scroller.position();
        app.scroll_step(false);
        assert!(app.controller.is_fully_expanded());
        assert_eq!(app.scroller.position(), pos - app.scroller.step_lines());
    }

    #[test]
    fn test_scroll_to_section_when_expanded() {
        let mut app = expanded_app();
        app.scroll_to_section(2);
        assert_eq!(app.scroller.position(), app.section_top(2).min(app.max_scroll()));
        assert_eq!(app.tracker.active(), 2);
        assert_eq!(app.active_section(), Some(SectionKind::Experience));
        assert!(app.tracker.is_scrolled());
    }

    #[test]
    fn test_scroll_to_section_before_expansion_holds_page() {
        let mut app = app();
        app.scroll_to_section(3);
        assert_eq!(app.scroller.position(), 0);
        assert_eq!(app.tracker.active(), 3);
        assert_eq!(app.status_message.as_deref(), Some(EXPAND_HINT));
    }

    #[test]
    fn test_tracker_follows_page() {
        let mut app = expanded_app();
        let top = app.section_top(1);
        app.scroller.set_position(top);
        app.sync_scroll(false);
        assert_eq!(app.tracker.active(), 1);
        app.scroller.set_position(0);
        app.sync_scroll(false);
        assert_eq!(app.tracker.active(), 0);
        assert!(!app.tracker.is_scrolled());
    }

    #[test]
    fn test_section_change_starts_header_reveal() {
        let mut app = expanded_app();
        app.scroll_to_section(1);
        assert!(app.headers.contains_key(&SectionKind::About));
        for _ in 0..100 {
            app.update_animation();
        }
        assert!(app.headers.is_empty());
    }

    #[test]
    fn test_reduced_motion_skips_reveal() {
        let mut config = config();
        config.ui.reduced_motion = true;
        let mut app = App::new(config, Portfolio::sample().unwrap(), Theme::default());
        while !app.controller.is_fully_expanded() {
            app.scroll_step(true);
        }
        app.scroll_to_section(1);
        assert!(app.headers.is_empty());
        assert!(!app.is_animating());
    }

    #[test]
    fn test_toggle_media_resets() {
        let mut app = expanded_app();
        app.scroll_page(true);
        app.toggle_media();
        assert_eq!(app.controller.media_kind(), MediaKind::Video);
        assert_eq!(app.controller.progress(), 0.0);
        assert!(!app.controller.is_content_visible());
        assert_eq!(app.scroller.position(), 0);
        assert_eq!(app.tracker.active(), 0);
    }

    #[test]
    fn test_drag_expands_and_then_scrolls() {
        let mut app = app();
        app.pointer(PointerEvent::DragStart(20));
        for row in (0..20).rev() {
            app.pointer(PointerEvent::DragMove(row));
        }
        // 20 rows * 16px * 0.005 = 1.6
        assert!(app.controller.is_fully_expanded());
        app.pointer(PointerEvent::DragEnd);

        let before = app.scroller.position();
        app.pointer(PointerEvent::DragStart(20));
        app.pointer(PointerEvent::DragMove(15));
        assert_eq!(app.scroller.position(), before + 5);
        app.pointer(PointerEvent::DragEnd);
    }

    #[test]
    fn test_drag_down_at_top_leaves_page_regime() {
        let mut app = expanded_app();
        app.pointer(PointerEvent::DragStart(5));
        app.pointer(PointerEvent::DragMove(6));
        assert!(app.controller.is_fully_expanded());
        // Reference stays at row 5 while expanded: 2 rows = 32px > 20px
        app.pointer(PointerEvent::DragMove(7));
        assert!(!app.controller.is_fully_expanded());
        assert_eq!(app.scroller.position(), 0);
    }

    #[test]
    fn test_link_focus_requires_content() {
        let mut app = app();
        app.next_link();
        assert_eq!(app.focused_link, None);

        let mut app = expanded_app();
        app.next_link();
        assert_eq!(app.focused_link, Some(0));
        app.prev_link();
        assert_eq!(app.focused_link, Some(app.layout.links.len() - 1));
        let row = app.hero_height() as usize + app.layout.links[app.layout.links.len() - 1].line;
        let pos = app.scroller.position() as usize;
        assert!(row >= pos && row < pos + app.viewport().1 as usize);
    }

    #[test]
    fn test_resize_reclassifies_and_relayouts() {
        let mut app = app();
        app.on_resize(120, 40);
        assert_eq!(
            app.controller.viewport(),
            termfolio_core::hero::ViewportClass::Wide
        );
        let wide_lines = app.layout.len();
        app.on_resize(60, 30);
        assert_eq!(
            app.controller.viewport(),
            termfolio_core::hero::ViewportClass::Narrow
        );
        assert_eq!(app.viewport(), (60, 29));
        assert!(app.layout.len() > wide_lines);
        assert_eq!(app.hero_height(), 29);
    }

    #[test]
    fn test_resize_clamps_scroll() {
        let mut app = expanded_app();
        app.jump_to_bottom();
        app.on_resize(200, 60);
        assert!(app.scroller.position() <= app.max_scroll());
    }
}
