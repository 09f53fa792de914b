//! Nord
//! https://www.nordtheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x2e, 0x34, 0x40), // nord0
        surface: Color::Rgb(0x3b, 0x42, 0x52),    // nord1
        text: Color::Rgb(0xec, 0xef, 0xf4),       // nord6
        muted: Color::Rgb(0xd8, 0xde, 0xe9),      // nord4
        accent: Color::Rgb(0xeb, 0xcb, 0x8b),     // nord13
        glow: Color::Rgb(0x43, 0x4c, 0x5e),       // nord2
        link: Color::Rgb(0x88, 0xc0, 0xd0),       // nord8
        border: Color::Rgb(0x4c, 0x56, 0x6a),     // nord3
    }
}
