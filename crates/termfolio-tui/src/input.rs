use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    NextSection,
    PrevSection,
    JumpToSection(usize), // digit keys, zero-based
    NextLink,
    PrevLink,
    OpenLink,
    ToggleMedia,
    ToggleNav,
    ToggleHelp,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if app.mode == Mode::Help {
        // Any key closes help
        return Action::ExitMode;
    }

    let binding = normalize(key);

    if keymap.is_g_prefix(&binding) {
        if app.pending_key == Some('g') {
            return keymap.double_g_action().unwrap_or(Action::None);
        }
        if keymap.get(&binding).is_none() {
            return Action::PendingG;
        }
    }

    if let Some(action) = keymap.get(&binding) {
        return *action;
    }

    match (binding.code, binding.modifiers) {
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::JumpToSection(c as usize - '1' as usize)
        }
        _ => Action::None,
    }
}

/// Terminals disagree on whether shifted punctuation carries SHIFT, so only
/// letters keep it. BackTab is reported for Shift+Tab.
fn normalize(key: KeyEvent) -> KeyBinding {
    let modifiers = key.modifiers & (KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    match key.code {
        KeyCode::BackTab => KeyBinding::shift(KeyCode::Tab),
        KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
            let mut modifiers = modifiers;
            modifiers.remove(KeyModifiers::SHIFT);
            KeyBinding::new(key.code, modifiers)
        }
        KeyCode::Char(c) if c.is_ascii_uppercase() => {
            KeyBinding::new(key.code, modifiers | KeyModifiers::SHIFT)
        }
        _ => KeyBinding::new(key.code, modifiers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use termfolio_core::{AppConfig, Portfolio};

    fn app() -> App {
        App::new(
            AppConfig::default(),
            Portfolio::sample().unwrap(),
            Theme::default(),
        )
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_basic_bindings() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('j'), KeyModifiers::NONE), &app, &keymap),
            Action::ScrollDown
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('d'), KeyModifiers::CONTROL), &app, &keymap),
            Action::ScrollHalfPageDown
        );
    }

    #[test]
    fn test_shifted_punctuation_matches() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('?'), KeyModifiers::SHIFT), &app, &keymap),
            Action::ToggleHelp
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('G'), KeyModifiers::NONE), &app, &keymap),
            Action::JumpToBottom
        );
        assert_eq!(
            handle_key_event(press(KeyCode::BackTab, KeyModifiers::SHIFT), &app, &keymap),
            Action::PrevLink
        );
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = app();
        let keymap = Keymap::default();
        let g = press(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(g, &app, &keymap), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(g, &app, &keymap), Action::JumpToTop);
    }

    #[test]
    fn test_digit_jumps_to_section() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('3'), KeyModifiers::NONE), &app, &keymap),
            Action::JumpToSection(2)
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('0'), KeyModifiers::NONE), &app, &keymap),
            Action::None
        );
    }

    #[test]
    fn test_help_mode_closes_on_any_key() {
        let mut app = app();
        app.mode = Mode::Help;
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('j'), KeyModifiers::NONE), &app, &keymap),
            Action::ExitMode
        );
    }
}
