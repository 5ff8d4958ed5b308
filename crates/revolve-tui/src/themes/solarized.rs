//! Solarized theme
//! https://ethanschoonover.com/solarized/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x00, 0x2b, 0x36),         // base03
        bg1: Color::Rgb(0x07, 0x36, 0x42),         // base02
        fg0: Color::Rgb(0x93, 0xa1, 0xa1),         // base1
        fg1: Color::Rgb(0x83, 0x94, 0x96),         // base0
        grey: Color::Rgb(0x58, 0x6e, 0x75),        // base01
        card: Color::Rgb(0x07, 0x36, 0x42),
        card_border: Color::Rgb(0x58, 0x6e, 0x75),
        star: Color::Rgb(0xb5, 0x89, 0x00),        // yellow
        accent: Color::Rgb(0x2a, 0xa1, 0x98),      // cyan
        control: Color::Rgb(0x83, 0x94, 0x96),
        control_focused: Color::Rgb(0x26, 0x8b, 0xd2), // blue
        error: Color::Rgb(0xdc, 0x32, 0x2f),       // red
    }
}

pub fn light() -> Theme {
    Theme {
        bg0: Color::Rgb(0xfd, 0xf6, 0xe3),         // base3
        bg1: Color::Rgb(0xee, 0xe8, 0xd5),         // base2
        fg0: Color::Rgb(0x58, 0x6e, 0x75),         // base01
        fg1: Color::Rgb(0x65, 0x7b, 0x83),         // base00
        grey: Color::Rgb(0x93, 0xa1, 0xa1),        // base1
        card: Color::Rgb(0xee, 0xe8, 0xd5),
        card_border: Color::Rgb(0x93, 0xa1, 0xa1),
        star: Color::Rgb(0xb5, 0x89, 0x00),
        accent: Color::Rgb(0x2a, 0xa1, 0x98),
        control: Color::Rgb(0x65, 0x7b, 0x83),
        control_focused: Color::Rgb(0x26, 0x8b, 0xd2),
        error: Color::Rgb(0xdc, 0x32, 0x2f),
    }
}
