//! Per-country dot-pattern fills.
//!
//! Every country shape is shaded with a tiled dot grid tinted by the resolved
//! country color. One pattern is pre-built per *unique* color present in the
//! dataset, plus a single shared default; shapes only ever look patterns up,
//! they never cause one to be built.

use crate::models::CountryStat;
use crate::palette::{self, FALLBACK_COLOR, Rgb8};
use ahash::AHashMap;

/// Tile edge length in pixels; one dot per tile.
pub const TILE_SIZE: f64 = 4.0;
/// Dot radius in pixels.
pub const DOT_RADIUS: f64 = 1.0;
/// Dot opacity for the shared default pattern.
pub const DEFAULT_OPACITY: f64 = 0.8;

/// A tiled dot fill: one dot of `color` centered in each `spacing`-sized tile.
#[derive(Debug, Clone, PartialEq)]
pub struct DotPattern {
    /// Stable identifier, e.g. `dots-1e40af` or `dots-default`.
    pub id: String,
    pub color: Rgb8,
    pub spacing: f64,
    pub radius: f64,
    pub opacity: f64,
}

impl DotPattern {
    fn for_color(hex: &str, opacity: f64) -> Self {
        let color = palette::parse_hex(hex).unwrap_or(Rgb8 {
            r: 0x9c,
            g: 0xa3,
            b: 0xaf,
        });
        let id = match hex.strip_prefix('#') {
            Some(rest) => format!("dots-{}", rest.to_ascii_lowercase()),
            None => "dots-default".to_string(),
        };
        Self {
            id,
            color,
            spacing: TILE_SIZE,
            radius: DOT_RADIUS,
            opacity,
        }
    }
}

/// The full set of fill patterns for a dataset, built once at initialization.
#[derive(Debug, Clone)]
pub struct PatternSet {
    by_color: AHashMap<String, DotPattern>,
    default: DotPattern,
}

impl PatternSet {
    /// Build one pattern per unique color in `stats`, plus the default.
    pub fn from_dataset(stats: &[CountryStat]) -> Self {
        let mut by_color = AHashMap::new();
        for stat in stats {
            let key = stat.color.to_ascii_lowercase();
            by_color
                .entry(key)
                .or_insert_with(|| DotPattern::for_color(&stat.color, 1.0));
        }
        let mut default = DotPattern::for_color(FALLBACK_COLOR, DEFAULT_OPACITY);
        default.id = "dots-default".to_string();
        Self { by_color, default }
    }

    /// Pattern set for the built-in dataset.
    pub fn builtin() -> Self {
        Self::from_dataset(&crate::data::country_stats())
    }

    /// The fill for a country shape: its color's pattern when the country has
    /// data, the shared default otherwise.
    pub fn for_country(&self, code: &str) -> &DotPattern {
        match palette::lookup(code) {
            Some(hex) => self
                .by_color
                .get(&hex.to_ascii_lowercase())
                .unwrap_or(&self.default),
            None => &self.default,
        }
    }

    /// The shared default pattern.
    pub fn default_pattern(&self) -> &DotPattern {
        &self.default
    }

    /// Number of color-keyed patterns (excludes the default).
    pub fn len(&self) -> usize {
        self.by_color.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_color.is_empty()
    }

    /// All color-keyed patterns, in unspecified order.
    pub fn patterns(&self) -> impl Iterator<Item = &DotPattern> {
        self.by_color.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::country_stats;
    use std::collections::BTreeSet;

    #[test]
    fn one_pattern_per_unique_color() {
        let stats = country_stats();
        let unique: BTreeSet<String> =
            stats.iter().map(|s| s.color.to_ascii_lowercase()).collect();
        let set = PatternSet::from_dataset(&stats);
        assert_eq!(set.len(), unique.len());
        // Several countries share colors, so this is a strict subset.
        assert!(set.len() < stats.len());
    }

    #[test]
    fn same_color_countries_share_one_pattern() {
        let set = PatternSet::builtin();
        // GB and SE are both #2563eb.
        assert!(std::ptr::eq(set.for_country("GB"), set.for_country("SE")));
        assert_eq!(set.for_country("GB").id, "dots-2563eb");
    }

    #[test]
    fn unknown_codes_share_the_default() {
        let set = PatternSet::builtin();
        let a = set.for_country("ZZ");
        let b = set.for_country("AQ");
        assert!(std::ptr::eq(a, b));
        assert!(std::ptr::eq(a, set.default_pattern()));
        assert_eq!(a.id, "dots-default");
        assert_eq!(a.opacity, DEFAULT_OPACITY);
    }

    #[test]
    fn known_pattern_matches_resolved_color() {
        let set = PatternSet::builtin();
        let us = set.for_country("US");
        assert_eq!(us.color.hex(), "#1e40af");
        assert_eq!(us.opacity, 1.0);
        assert_eq!(us.spacing, TILE_SIZE);
        assert_eq!(us.radius, DOT_RADIUS);
    }
}
