use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    /// Poll interval while a page or hero animation is running
    animation_tick: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64, animation_tick: Duration) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_tick,
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll with the animation interval so motion stays smooth
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_tick)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // crossterm reports release events on some platforms
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(PointerEvent::from_mouse(mouse).map(AppEvent::Pointer)),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse wheel or drag
    Pointer(PointerEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

/// Mouse input reduced to what the hero and the page react to.
/// Drags carry the terminal row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    WheelDown,
    WheelUp,
    DragStart(u16),
    DragMove(u16),
    DragEnd,
}

impl PointerEvent {
    pub fn from_mouse(mouse: MouseEvent) -> Option<Self> {
        match mouse.kind {
            MouseEventKind::ScrollDown => Some(PointerEvent::WheelDown),
            MouseEventKind::ScrollUp => Some(PointerEvent::WheelUp),
            MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::DragStart(mouse.row)),
            MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::DragMove(mouse.row)),
            MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::DragEnd),
            _ => None,
        }
    }
}
