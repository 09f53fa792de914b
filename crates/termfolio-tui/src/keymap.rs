use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use termfolio_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Notation for a double `g` press
const DOUBLE_G: &str = "gg";

/// A key code with its modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Keys that work whatever the config says. Ctrl-c and Esc always win,
/// the rest only fill gaps.
const FIXED: [(KeyCode, Action); 7] = [
    (KeyCode::Down, Action::ScrollDown),
    (KeyCode::Up, Action::ScrollUp),
    (KeyCode::PageDown, Action::ScrollPageDown),
    (KeyCode::PageUp, Action::ScrollPageUp),
    (KeyCode::Home, Action::JumpToTop),
    (KeyCode::End, Action::JumpToBottom),
    (KeyCode::Enter, Action::OpenLink),
];

/// Configured notation for every bindable action
fn configured(config: &KeymapConfig) -> [(&str, Action); 17] {
    [
        (config.quit.as_str(), Action::Quit),
        (config.scroll_down.as_str(), Action::ScrollDown),
        (config.scroll_up.as_str(), Action::ScrollUp),
        (config.scroll_half_down.as_str(), Action::ScrollHalfPageDown),
        (config.scroll_half_up.as_str(), Action::ScrollHalfPageUp),
        (config.scroll_page_down.as_str(), Action::ScrollPageDown),
        (config.scroll_page_up.as_str(), Action::ScrollPageUp),
        (config.jump_to_top.as_str(), Action::JumpToTop),
        (config.jump_to_bottom.as_str(), Action::JumpToBottom),
        (config.next_section.as_str(), Action::NextSection),
        (config.prev_section.as_str(), Action::PrevSection),
        (config.next_link.as_str(), Action::NextLink),
        (config.prev_link.as_str(), Action::PrevLink),
        (config.open_link.as_str(), Action::OpenLink),
        (config.toggle_media.as_str(), Action::ToggleMedia),
        (config.toggle_nav.as_str(), Action::ToggleNav),
        (config.help.as_str(), Action::ToggleHelp),
    ]
}

/// Key-to-action lookup built from the config
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
    double_g: Option<Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut keymap = Self {
            bindings: HashMap::new(),
            double_g: None,
        };

        for (notation, action) in configured(config) {
            keymap.bind(notation, action);
        }

        keymap
            .bindings
            .insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        keymap
            .bindings
            .insert(KeyBinding::simple(KeyCode::Esc), Action::ExitMode);
        for (code, action) in FIXED {
            keymap.bindings.entry(KeyBinding::simple(code)).or_insert(action);
        }
        keymap
    }

    /// First binding for a key wins; later ones are logged and dropped
    fn bind(&mut self, notation: &str, action: Action) {
        if notation.trim() == DOUBLE_G {
            self.double_g = Some(action);
            return;
        }
        let Some(binding) = parse_key_binding(notation) else {
            warn!(notation, ?action, "invalid key binding, ignoring");
            return;
        };
        if let Some(existing) = self.bindings.get(&binding) {
            warn!(
                notation,
                ?existing,
                ?action,
                "key already bound, ignoring later binding"
            );
            return;
        }
        self.bindings.insert(binding, action);
    }

    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    /// Action completed by a double `g` press, if configured
    pub fn double_g_action(&self) -> Option<Action> {
        self.double_g
    }

    /// Whether a bare `g` should wait for a second press
    pub fn is_g_prefix(&self, binding: &KeyBinding) -> bool {
        self.double_g.is_some() && *binding == KeyBinding::simple(KeyCode::Char('g'))
    }
}

/// Parse Vim-style notation.
///
/// `j`, `]` and `?` are plain keys; an uppercase letter implies Shift.
/// Angle brackets hold named keys with optional `C-` or `S-` prefixes:
/// `<C-d>`, `<S-Tab>`, `<CR>`, `<PageDown>`, `<F1>`.
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if let Some(inner) = s.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) {
        if inner.is_empty() {
            return None;
        }
        let (modifiers, name) = match inner.split_once('-') {
            Some(("C" | "c", name)) if !name.is_empty() => (KeyModifiers::CONTROL, name),
            Some(("S" | "s", name)) if !name.is_empty() => (KeyModifiers::SHIFT, name),
            _ => (KeyModifiers::NONE, inner),
        };
        return named_key(name).map(|code| KeyBinding::new(code, modifiers));
    }

    match single_char(s)? {
        c if c.is_ascii_uppercase() => Some(KeyBinding::shift(KeyCode::Char(c))),
        c => Some(KeyBinding::simple(KeyCode::Char(c))),
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

fn named_key(name: &str) -> Option<KeyCode> {
    let code = match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" | "spc" => KeyCode::Char(' '),
        "bs" | "backspace" => KeyCode::Backspace,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        lower => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                return (1..=12).contains(&n).then_some(KeyCode::F(n));
            }
            KeyCode::Char(single_char(lower)?)
        }
    };
    Some(code)
}
