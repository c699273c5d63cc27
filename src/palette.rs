//! Country-code → display-color resolution.
//!
//! Codes present in the dataset resolve to their configured hex color; every
//! other code resolves to a neutral gray. Total and pure: there is no error
//! case.

use crate::data::COUNTRY_TABLE;
use ahash::AHashMap;
use std::sync::OnceLock;

/// Neutral gray used for countries without traffic data.
pub const FALLBACK_COLOR: &str = "#9ca3af";

/// An opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse a `#rrggbb` hex string. Returns `None` for malformed input.
pub fn parse_hex(s: &str) -> Option<Rgb8> {
    let s = s.strip_prefix('#')?;
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(Rgb8 { r, g, b })
}

fn color_index() -> &'static AHashMap<&'static str, &'static str> {
    static INDEX: OnceLock<AHashMap<&'static str, &'static str>> = OnceLock::new();
    INDEX.get_or_init(|| {
        COUNTRY_TABLE
            .iter()
            .map(|&(code, _, _, color)| (code, color))
            .collect()
    })
}

/// The configured color for a country code, if the dataset has one.
pub fn lookup(code: &str) -> Option<&'static str> {
    color_index().get(code).copied()
}

/// The display color for a country code; [`FALLBACK_COLOR`] when absent.
pub fn country_color(code: &str) -> &'static str {
    lookup(code).unwrap_or(FALLBACK_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve_exactly() {
        assert_eq!(country_color("US"), "#1e40af");
        assert_eq!(country_color("DE"), "#FFCE00");
        assert_eq!(country_color("TR"), "#b91c1c");
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(country_color("ZZ"), FALLBACK_COLOR);
        assert_eq!(country_color(""), FALLBACK_COLOR);
        // Lookup is case-sensitive, like the dataset keys.
        assert_eq!(country_color("us"), FALLBACK_COLOR);
    }

    #[test]
    fn resolution_is_idempotent() {
        assert_eq!(country_color("JP"), country_color("JP"));
        assert_eq!(country_color("??"), country_color("??"));
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(
            parse_hex("#1e40af"),
            Some(Rgb8 {
                r: 0x1e,
                g: 0x40,
                b: 0xaf
            })
        );
        assert_eq!(parse_hex("#FFCE00").unwrap().hex(), "#ffce00");
        assert_eq!(parse_hex("1e40af"), None);
        assert_eq!(parse_hex("#xyzxyz"), None);
        assert_eq!(parse_hex("#fff"), None);
    }
}
