//! CSS color value parsing for inline styles

use regex::Regex;
use std::sync::OnceLock;

/// Regex for matching 6-digit hex colors: #rrggbb
fn hex_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^#([0-9a-fA-F]{6})$").unwrap())
}

/// Regex for matching rgb(r, g, b) and rgba(r, g, b, a)
fn rgb_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)").unwrap())
}

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        RgbColor { r, g, b }
    }
}

/// Parse a CSS color value: #rrggbb hex, rgb()/rgba(), or a known color name.
///
/// Unrecognized values yield None; style parsing treats that as "no color",
/// never an error.
pub fn parse_css_color(value: &str) -> Option<RgbColor> {
    let value = value.trim();

    if let Some(captures) = hex_regex().captures(value) {
        let digits = &captures[1];
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        return Some(RgbColor::new(r, g, b));
    }

    if let Some(captures) = rgb_regex().captures(value) {
        let channel = |i: usize| -> u8 {
            captures[i].parse::<u32>().map(|v| v.min(255) as u8).unwrap_or(255)
        };
        return Some(RgbColor::new(channel(1), channel(2), channel(3)));
    }

    named_color(value)
}

/// The small fixed palette of recognized color names
fn named_color(name: &str) -> Option<RgbColor> {
    let color = match name.to_lowercase().as_str() {
        "red" => RgbColor::new(0xE5, 0x39, 0x35),
        "blue" => RgbColor::new(0x1E, 0x88, 0xE5),
        "green" => RgbColor::new(0x43, 0xA0, 0x47),
        "yellow" => RgbColor::new(0xFD, 0xD8, 0x35),
        "orange" => RgbColor::new(0xFB, 0x8C, 0x00),
        "purple" => RgbColor::new(0x8E, 0x24, 0xAA),
        "pink" => RgbColor::new(0xD8, 0x1B, 0x60),
        "black" => RgbColor::new(0x00, 0x00, 0x00),
        "white" => RgbColor::new(0xFF, 0xFF, 0xFF),
        "gray" | "grey" => RgbColor::new(0x9E, 0x9E, 0x9E),
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            parse_css_color("#ff8000"),
            Some(RgbColor::new(0xFF, 0x80, 0x00))
        );
        assert_eq!(
            parse_css_color("#AABBCC"),
            Some(RgbColor::new(0xAA, 0xBB, 0xCC))
        );
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(
            parse_css_color("rgb(255, 128, 0)"),
            Some(RgbColor::new(255, 128, 0))
        );
        assert_eq!(
            parse_css_color("rgba(10,20,30,0.5)"),
            Some(RgbColor::new(10, 20, 30))
        );
    }

    #[test]
    fn test_parse_rgb_clamps_channels() {
        assert_eq!(
            parse_css_color("rgb(300, 0, 0)"),
            Some(RgbColor::new(255, 0, 0))
        );
    }

    #[test]
    fn test_parse_named_colors() {
        assert!(parse_css_color("red").is_some());
        assert!(parse_css_color("Blue").is_some());
        assert_eq!(parse_css_color("gray"), parse_css_color("grey"));
    }

    #[test]
    fn test_unrecognized_values_are_none() {
        assert_eq!(parse_css_color("#fff"), None); // short hex not supported
        assert_eq!(parse_css_color("chartreuse"), None);
        assert_eq!(parse_css_color("hsl(120, 50%, 50%)"), None);
        assert_eq!(parse_css_color(""), None);
    }
}
