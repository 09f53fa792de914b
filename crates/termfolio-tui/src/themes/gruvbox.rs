//! Gruvbox Material
//! https://github.com/sainnhe/gruvbox-material

use ratatui::style::Color;
use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x28, 0x28),
        surface: Color::Rgb(0x32, 0x30, 0x2f),
        text: Color::Rgb(0xd4, 0xbe, 0x98),
        muted: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0xd8, 0xa6, 0x57), // yellow
        glow: Color::Rgb(0x45, 0x40, 0x3d),
        link: Color::Rgb(0x7d, 0xae, 0xa3), // blue
        border: Color::Rgb(0x50, 0x49, 0x45),
    }
}

pub fn light() -> Theme {
    Theme {
        background: Color::Rgb(0xfb, 0xf1, 0xc7),
        surface: Color::Rgb(0xf2, 0xe5, 0xbc),
        text: Color::Rgb(0x65, 0x47, 0x35),
        muted: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0xb4, 0x71, 0x09),
        glow: Color::Rgb(0xeb, 0xdb, 0xb2),
        link: Color::Rgb(0x45, 0x70, 0x7a),
        border: Color::Rgb(0xd5, 0xc4, 0xa1),
    }
}
