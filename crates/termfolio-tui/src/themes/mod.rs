//! Theme registry and loader

pub(crate) mod dracula;
pub(crate) mod gruvbox;
pub(crate) mod nord;
pub(crate) mod orbit;

use ratatui::style::Color;
use termfolio_core::config::{ThemeColorOverrides, ThemeConfig};
use tracing::warn;

use crate::theme::Theme;

/// Built-in themes by name. The first entry is the fallback.
const THEMES: [(&str, fn() -> Theme); 5] = [
    ("orbit", orbit::default),
    ("gruvbox-dark", gruvbox::dark),
    ("gruvbox-light", gruvbox::light),
    ("nord", nord::default),
    ("dracula", dracula::default),
];

/// Parse `#RRGGBB` or `#RGB`, with or without the leading `#`
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let full: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let rgb = u32::from_str_radix(&full, 16).ok()?;
    Some(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

/// Resolve the configured theme and apply its color overrides
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let name = config.name.to_lowercase();
    let name = if name == "gruvbox" { "gruvbox-dark" } else { name.as_str() };
    let base = match THEMES.iter().find(|(n, _)| *n == name) {
        Some((_, build)) => build(),
        None => {
            warn!(theme = %config.name, "unknown theme, falling back to {}", THEMES[0].0);
            (THEMES[0].1)()
        }
    };

    apply_overrides(base, &config.colors)
}

fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 8] = [
        (&overrides.background, &mut theme.background),
        (&overrides.surface, &mut theme.surface),
        (&overrides.text, &mut theme.text),
        (&overrides.muted, &mut theme.muted),
        (&overrides.accent, &mut theme.accent),
        (&overrides.glow, &mut theme.glow),
        (&overrides.link, &mut theme.link),
        (&overrides.border, &mut theme.border),
    ];

    for (hex, slot) in slots {
        let Some(hex) = hex else { continue };
        match parse_hex_color(hex) {
            Some(color) => *slot = color,
            None => warn!(color = %hex, "ignoring invalid color override"),
        }
    }

    theme
}

pub fn available_themes() -> Vec<&'static str> {
    THEMES.iter().map(|(name, _)| *name).collect()
}
