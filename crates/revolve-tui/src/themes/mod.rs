//! Theme registry and loader
//!
//! Every theme family ships a dark and a light variant; the visual mode
//! picks one and user overrides are applied on top.

pub mod catppuccin;
pub mod gruvbox;
pub mod solarized;

use ratatui::style::Color;
use revolve_core::config::{ThemeColorOverrides, ThemeConfig};
use revolve_core::VisualMode;
use tracing::warn;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load the variant of the configured theme family matching `mode`
pub fn load_theme(config: &ThemeConfig, mode: VisualMode) -> Theme {
    let family = config.name.to_lowercase();
    // Accept "gruvbox-dark" style names too; the mode still decides
    let family = family
        .strip_suffix("-dark")
        .or_else(|| family.strip_suffix("-light"))
        .unwrap_or(&family);

    let (dark, light): (fn() -> Theme, fn() -> Theme) = match family {
        "gruvbox" => (gruvbox::dark, gruvbox::light),
        "solarized" => (solarized::dark, solarized::light),
        "catppuccin" => (catppuccin::dark, catppuccin::light),
        other => {
            warn!("Unknown theme '{}', falling back to gruvbox", other);
            (gruvbox::dark, gruvbox::light)
        }
    };

    let base = if mode.is_dark() { dark() } else { light() };
    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 8] = [
        (&overrides.bg0, &mut theme.bg0),
        (&overrides.bg1, &mut theme.bg1),
        (&overrides.fg0, &mut theme.fg0),
        (&overrides.fg1, &mut theme.fg1),
        (&overrides.accent, &mut theme.accent),
        (&overrides.star, &mut theme.star),
        (&overrides.card, &mut theme.card),
        (&overrides.card_border, &mut theme.card_border),
    ];

    for (hex, target) in slots {
        let Some(hex) = hex else { continue };
        match parse_hex_color(hex) {
            Some(color) => *target = color,
            None => warn!("Ignoring invalid color override '{}'", hex),
        }
    }

    theme
}

/// Theme families accepted by `ui.theme`
pub fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox", "solarized", "catppuccin"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#ff5500").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        let color = parse_hex_color("#f50").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("#ééé").is_none());
    }

    #[test]
    fn test_mode_picks_variant() {
        let config = ThemeConfig::default();
        let dark = load_theme(&config, VisualMode::Dark);
        let light = load_theme(&config, VisualMode::Light);
        assert!(matches!(dark.bg0, Color::Rgb(0x28, 0x28, 0x28)));
        assert!(matches!(light.bg0, Color::Rgb(0xfb, 0xf1, 0xc7)));
    }

    #[test]
    fn test_variant_suffix_is_ignored() {
        let config = ThemeConfig {
            name: "Solarized-Dark".to_string(),
            ..Default::default()
        };
        let theme = load_theme(&config, VisualMode::Light);
        assert!(matches!(theme.bg0, Color::Rgb(0xfd, 0xf6, 0xe3)));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = ThemeConfig {
            name: "nope".to_string(),
            ..Default::default()
        };
        let theme = load_theme(&config, VisualMode::Dark);
        assert!(matches!(theme.bg0, Color::Rgb(0x28, 0x28, 0x28)));
    }

    #[test]
    fn test_overrides_apply_to_both_modes() {
        let config = ThemeConfig {
            name: "catppuccin".to_string(),
            colors: ThemeColorOverrides {
                star: Some("#ff0000".to_string()),
                card: Some("bogus".to_string()),
                ..Default::default()
            },
        };
        for mode in [VisualMode::Dark, VisualMode::Light] {
            let theme = load_theme(&config, mode);
            assert!(matches!(theme.star, Color::Rgb(255, 0, 0)));
        }
        let theme = load_theme(&config, VisualMode::Dark);
        assert!(matches!(theme.card, Color::Rgb(0x31, 0x32, 0x44)));
    }
}
