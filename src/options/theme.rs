//! Theme mode and title bar colours
//!
//! Colours are packed the way the Windows DWM and GDI expect them:
//! `0x00BBGGRR` (a COLORREF).

use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, Result};

/// Dark/Light or system default theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum Theme {
    /// Follow the system theme, including changes while running
    #[default]
    SystemDefault = 0,
    /// Dark mode
    Dark = 1,
    /// Light mode
    Light = 2,
}

impl Theme {
    /// Try to convert a raw value back into a Theme
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Theme::SystemDefault),
            1 => Some(Theme::Dark),
            2 => Some(Theme::Light),
            _ => None,
        }
    }

    /// Whether this theme renders dark, given the current system setting
    pub fn is_dark(self, system_is_dark: bool) -> bool {
        match self {
            Theme::SystemDefault => system_is_dark,
            Theme::Dark => true,
            Theme::Light => false,
        }
    }
}

/// Pack 8-bit channels into `0x00BBGGRR`
pub const fn rgb(r: u8, g: u8, b: u8) -> i32 {
    ((b as i32) << 16) | ((g as i32) << 8) | (r as i32)
}

/// Parse `#RGB` or `#RRGGBB` (one leading `#` optional) into `0x00BBGGRR`.
/// A raw `0xXXXXXXXX` value is taken as-is, which keeps DWM sentinels such
/// as `0xFFFFFFFF` (default colour) and `0xFFFFFFFE` (no colour).
pub fn parse_hex_color(hex: &str) -> Result<i32> {
    let trimmed = hex.trim();
    let invalid = || OptionsError::InvalidColor(hex.to_string());

    if let Some(raw) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        return u32::from_str_radix(raw, 16)
            .map(|v| v as i32)
            .map_err(|_| invalid());
    }

    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    match digits.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (channel, c) in channels.iter_mut().zip(digits.chars()) {
                // #RGB -> #RRGGBB
                *channel = c.to_digit(16).ok_or_else(invalid)? as u8 * 17;
            }
            Ok(rgb(channels[0], channels[1], channels[2]))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
            Ok(rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => Err(invalid()),
    }
}

/// Format a packed `0x00BBGGRR` colour as `#RRGGBB`. Values with any of
/// the top 8 bits set are written raw as `0xXXXXXXXX`.
pub fn format_hex_color(color: i32) -> String {
    if (color as u32) & 0xFF00_0000 != 0 {
        return format!("0x{:08X}", color as u32);
    }
    let r = color & 0xFF;
    let g = (color >> 8) & 0xFF;
    let b = (color >> 16) & 0xFF;
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Optional title bar colours per mode and focus state.
/// Values use the `0x00BBGGRR` layout produced by [`rgb`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeSettings {
    pub dark_mode_title_bar: i32,
    pub dark_mode_title_bar_inactive: i32,
    pub dark_mode_title_text: i32,
    pub dark_mode_title_text_inactive: i32,
    pub dark_mode_border: i32,
    pub dark_mode_border_inactive: i32,
    pub light_mode_title_bar: i32,
    pub light_mode_title_bar_inactive: i32,
    pub light_mode_title_text: i32,
    pub light_mode_title_text_inactive: i32,
    pub light_mode_border: i32,
    pub light_mode_border_inactive: i32,
}

/// The three colours applied to a window frame at one time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TitleBarColors {
    pub title_bar: i32,
    pub title_text: i32,
    pub border: i32,
}

impl ThemeSettings {
    /// Pick the colours for a mode and focus state
    pub fn colors_for(&self, dark: bool, active: bool) -> TitleBarColors {
        match (dark, active) {
            (true, true) => TitleBarColors {
                title_bar: self.dark_mode_title_bar,
                title_text: self.dark_mode_title_text,
                border: self.dark_mode_border,
            },
            (true, false) => TitleBarColors {
                title_bar: self.dark_mode_title_bar_inactive,
                title_text: self.dark_mode_title_text_inactive,
                border: self.dark_mode_border_inactive,
            },
            (false, true) => TitleBarColors {
                title_bar: self.light_mode_title_bar,
                title_text: self.light_mode_title_text,
                border: self.light_mode_border,
            },
            (false, false) => TitleBarColors {
                title_bar: self.light_mode_title_bar_inactive,
                title_text: self.light_mode_title_text_inactive,
                border: self.light_mode_border_inactive,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_packing() {
        assert_eq!(rgb(255, 0, 0), 0x000000FF);
        assert_eq!(rgb(0, 255, 0), 0x0000FF00);
        assert_eq!(rgb(0, 0, 255), 0x00FF0000);
        assert_eq!(rgb(16, 32, 48), 0x00302010);
        assert_eq!(rgb(255, 255, 255), 0x00FFFFFF);
        assert_eq!(rgb(0, 0, 0), 0);
    }

    #[test]
    fn test_rgb_matches_shift_formula() {
        for &(r, g, b) in &[(1u8, 2u8, 3u8), (128, 64, 200), (7, 255, 90)] {
            let expected = ((b as i32) << 16) | ((g as i32) << 8) | r as i32;
            assert_eq!(rgb(r, g, b), expected);
        }
    }

    #[test]
    fn test_theme_values_distinct() {
        assert_eq!(Theme::SystemDefault as i32, 0);
        assert_eq!(Theme::Dark as i32, 1);
        assert_eq!(Theme::Light as i32, 2);
        for theme in [Theme::SystemDefault, Theme::Dark, Theme::Light] {
            assert_eq!(Theme::from_i32(theme as i32), Some(theme));
        }
        assert_eq!(Theme::from_i32(3), None);
        assert_eq!(Theme::default(), Theme::SystemDefault);
    }

    #[test]
    fn test_theme_is_dark() {
        assert!(Theme::Dark.is_dark(false));
        assert!(!Theme::Light.is_dark(true));
        assert!(Theme::SystemDefault.is_dark(true));
        assert!(!Theme::SystemDefault.is_dark(false));
    }

    #[test]
    fn test_hex_color_parsing() {
        assert_eq!(parse_hex_color("#ff0000").unwrap(), rgb(255, 0, 0));
        assert_eq!(parse_hex_color("102030").unwrap(), rgb(0x10, 0x20, 0x30));
        assert_eq!(parse_hex_color("#fff").unwrap(), 0x00FFFFFF);
        assert_eq!(parse_hex_color("#0f0").unwrap(), rgb(0, 255, 0));

        assert!(matches!(
            parse_hex_color("#12345"),
            Err(OptionsError::InvalidColor(_))
        ));
        assert!(parse_hex_color("#gg0000").is_err());
        assert!(parse_hex_color("#éé").is_err());
        assert!(parse_hex_color("##fff").is_err());
        assert!(parse_hex_color("0x1FFFFFFFF").is_err());
    }

    #[test]
    fn test_hex_color_format() {
        assert_eq!(format_hex_color(rgb(16, 32, 48)), "#102030");
        assert_eq!(
            parse_hex_color(&format_hex_color(rgb(200, 100, 50))).unwrap(),
            rgb(200, 100, 50)
        );
    }

    #[test]
    fn test_dwm_sentinel_colors_are_kept() {
        // DWMWA_COLOR_DEFAULT and DWMWA_COLOR_NONE
        assert_eq!(format_hex_color(-1), "0xFFFFFFFF");
        assert_eq!(format_hex_color(-2), "0xFFFFFFFE");
        assert_eq!(parse_hex_color("0xFFFFFFFF").unwrap(), -1);
        assert_eq!(parse_hex_color("0xfffffffe").unwrap(), -2);
        assert_eq!(parse_hex_color(&format_hex_color(-2)).unwrap(), -2);
    }

    #[test]
    fn test_colors_for_selects_mode_and_focus() {
        let settings = ThemeSettings {
            dark_mode_title_bar: 1,
            dark_mode_title_bar_inactive: 2,
            dark_mode_title_text: 3,
            dark_mode_title_text_inactive: 4,
            dark_mode_border: 5,
            dark_mode_border_inactive: 6,
            light_mode_title_bar: 7,
            light_mode_title_bar_inactive: 8,
            light_mode_title_text: 9,
            light_mode_title_text_inactive: 10,
            light_mode_border: 11,
            light_mode_border_inactive: 12,
        };

        let dark = settings.colors_for(true, true);
        assert_eq!((dark.title_bar, dark.title_text, dark.border), (1, 3, 5));

        let dark_inactive = settings.colors_for(true, false);
        assert_eq!(
            (dark_inactive.title_bar, dark_inactive.title_text, dark_inactive.border),
            (2, 4, 6)
        );

        let light = settings.colors_for(false, true);
        assert_eq!((light.title_bar, light.title_text, light.border), (7, 9, 11));

        let light_inactive = settings.colors_for(false, false);
        assert_eq!(
            (light_inactive.title_bar, light_inactive.title_text, light_inactive.border),
            (8, 10, 12)
        );
    }
}
