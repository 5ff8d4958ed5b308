//! Catppuccin theme
//! https://github.com/catppuccin/catppuccin

use ratatui::style::Color;
use crate::theme::Theme;

/// Mocha
pub fn dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x1e, 0x1e, 0x2e),         // base
        bg1: Color::Rgb(0x18, 0x18, 0x25),         // mantle
        fg0: Color::Rgb(0xcd, 0xd6, 0xf4),         // text
        fg1: Color::Rgb(0xba, 0xc2, 0xde),         // subtext1
        grey: Color::Rgb(0x6c, 0x70, 0x86),        // overlay0
        card: Color::Rgb(0x31, 0x32, 0x44),        // surface0
        card_border: Color::Rgb(0x45, 0x47, 0x5a), // surface1
        star: Color::Rgb(0xf9, 0xe2, 0xaf),        // yellow
        accent: Color::Rgb(0x94, 0xe2, 0xd5),      // teal
        control: Color::Rgb(0xa6, 0xad, 0xc8),     // subtext0
        control_focused: Color::Rgb(0xcb, 0xa6, 0xf7), // mauve
        error: Color::Rgb(0xf3, 0x8b, 0xa8),       // red
    }
}

/// Latte
pub fn light() -> Theme {
    Theme {
        bg0: Color::Rgb(0xef, 0xf1, 0xf5),
        bg1: Color::Rgb(0xe6, 0xe9, 0xef),
        fg0: Color::Rgb(0x4c, 0x4f, 0x69),
        fg1: Color::Rgb(0x5c, 0x5f, 0x77),
        grey: Color::Rgb(0x9c, 0xa0, 0xb0),
        card: Color::Rgb(0xcc, 0xd0, 0xda),
        card_border: Color::Rgb(0xbc, 0xc0, 0xcc),
        star: Color::Rgb(0xdf, 0x8e, 0x1d),
        accent: Color::Rgb(0x17, 0x92, 0x99),
        control: Color::Rgb(0x6c, 0x6f, 0x85),
        control_focused: Color::Rgb(0x88, 0x39, 0xef),
        error: Color::Rgb(0xd2, 0x0f, 0x39),
    }
}
