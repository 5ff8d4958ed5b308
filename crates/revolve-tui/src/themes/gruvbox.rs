//! Gruvbox Material theme
//! https://github.com/sainnhe/gruvbox-material

use ratatui::style::Color;
use crate::theme::Theme;

/// Gruvbox Material Dark (medium contrast)
pub fn dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x28, 0x28),
        bg1: Color::Rgb(0x32, 0x30, 0x2f),
        fg0: Color::Rgb(0xd4, 0xbe, 0x98),
        fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
        grey: Color::Rgb(0x92, 0x83, 0x74),
        card: Color::Rgb(0x32, 0x30, 0x2f),
        card_border: Color::Rgb(0x50, 0x49, 0x45),
        star: Color::Rgb(0xd8, 0xa6, 0x57),
        accent: Color::Rgb(0x89, 0xb4, 0x82),
        control: Color::Rgb(0xa8, 0x99, 0x84),
        control_focused: Color::Rgb(0xe7, 0x8a, 0x4e),
        error: Color::Rgb(0xea, 0x69, 0x62),
    }
}

/// Gruvbox Material Light (medium contrast)
pub fn light() -> Theme {
    Theme {
        bg0: Color::Rgb(0xfb, 0xf1, 0xc7),
        bg1: Color::Rgb(0xf4, 0xe8, 0xbe),
        fg0: Color::Rgb(0x65, 0x47, 0x35),
        fg1: Color::Rgb(0x4f, 0x38, 0x29),
        grey: Color::Rgb(0x92, 0x83, 0x74),
        card: Color::Rgb(0xf2, 0xe5, 0xbc),
        card_border: Color::Rgb(0xc9, 0xb9, 0x9a),
        star: Color::Rgb(0xb4, 0x71, 0x09),
        accent: Color::Rgb(0x4c, 0x7a, 0x5d),
        control: Color::Rgb(0x7c, 0x6f, 0x64),
        control_focused: Color::Rgb(0xc3, 0x5e, 0x0a),
        error: Color::Rgb(0xc1, 0x4a, 0x4a),
    }
}
