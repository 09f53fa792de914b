use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Page background
    pub background: Color,
    /// Panels, status bar, popups
    pub surface: Color,
    /// Body text
    pub text: Color,
    /// Secondary text
    pub muted: Color,
    /// Titles, active navigation, card borders
    pub accent: Color,
    /// Hero backdrop tint, faded out as the hero expands
    pub glow: Color,
    /// Link text
    pub link: Color,
    /// Inactive borders
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::orbit::default()
    }
}

/// Mix `fg` over `bg` with the given opacity. Non-RGB colors snap to
/// whichever side dominates.
pub fn blend(fg: Color, bg: Color, opacity: f64) -> Color {
    let t = opacity.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (b as f64 + (f as f64 - b as f64) * t).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ if t >= 0.5 => fg,
        _ => bg,
    }
}
