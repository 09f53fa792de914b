//! Orbit: black space with a warm yellow accent

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x05, 0x05, 0x0a),
        surface: Color::Rgb(0x14, 0x14, 0x1c),
        text: Color::Rgb(0xe8, 0xe8, 0xee),
        muted: Color::Rgb(0x8a, 0x8a, 0x99),
        accent: Color::Rgb(0xf8, 0xe4, 0x5f),
        glow: Color::Rgb(0x2a, 0x26, 0x0c),
        link: Color::Rgb(0x7f, 0xc8, 0xf8),
        border: Color::Rgb(0x3a, 0x37, 0x22),
    }
}
