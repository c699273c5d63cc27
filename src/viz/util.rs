//! Small helpers shared by the snapshot renderer: color conversion, locale
//! mapping, and dot-grid geometry.

use crate::palette::Rgb8;
use num_format::Locale;
use plotters::prelude::*;

/// Convert a palette color to a plotters color.
#[inline]
pub fn to_rgb(c: Rgb8) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`,
/// `german`, `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en,
    }
}

/// Dot centers on the global tile grid within `[x0, x1] × [y0, y1]`.
///
/// Centers sit at `k·spacing + spacing/2`, aligned to the canvas origin
/// rather than to any one shape, so dots in adjacent countries line up.
pub fn grid_dots(x0: f64, y0: f64, x1: f64, y1: f64, spacing: f64) -> Vec<(f64, f64)> {
    let half = spacing / 2.0;
    let first = |lo: f64| ((lo - half) / spacing).ceil() as i64;
    let last = |hi: f64| ((hi - half) / spacing).floor() as i64;
    let mut out = Vec::new();
    for ky in first(y0)..=last(y1) {
        let y = ky as f64 * spacing + half;
        for kx in first(x0)..=last(x1) {
            out.push((kx as f64 * spacing + half, y));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_globally_aligned() {
        let a = grid_dots(0.0, 0.0, 10.0, 10.0, 4.0);
        assert!(a.contains(&(2.0, 2.0)));
        assert!(a.contains(&(6.0, 6.0)));
        // A shifted window yields the same absolute centers.
        let b = grid_dots(3.0, 3.0, 10.0, 10.0, 4.0);
        for dot in &b {
            assert!(a.contains(dot));
        }
    }

    #[test]
    fn empty_window_has_no_dots() {
        assert!(grid_dots(0.0, 0.0, 1.0, 1.0, 4.0).is_empty());
    }
}
