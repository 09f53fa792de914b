//! Dracula
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x2a, 0x36),
        surface: Color::Rgb(0x44, 0x47, 0x5a),
        text: Color::Rgb(0xf8, 0xf8, 0xf2),
        muted: Color::Rgb(0x62, 0x72, 0xa4), // comment
        accent: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
        glow: Color::Rgb(0x3b, 0x2e, 0x4f),
        link: Color::Rgb(0x8b, 0xe9, 0xfd), // cyan
        border: Color::Rgb(0x62, 0x72, 0xa4),
    }
}
