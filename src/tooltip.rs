//! Hover tooltip: a small label anchored above the hovered marker.
//!
//! The tooltip re-derives its position from the same [`ProjectionConfig`] the
//! base map uses, then converts to percent-of-canvas coordinates so it stays
//! aligned under container resizing. A marker whose projection falls outside
//! the canvas simply yields no tooltip.

use crate::overlay::HoverState;
use crate::projection::ProjectionConfig;

/// Fade/slide transition length in seconds. Cosmetic only; the underlying
/// hover-state update is never delayed by it.
pub const TRANSITION_SECS: f64 = 0.15;
/// Vertical slide distance during the transition, in pixels.
pub const SLIDE_PX: f64 = 5.0;

/// A positioned tooltip, ready for a renderer to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipBox {
    /// Marker label, e.g. "LHR".
    pub id: String,
    /// Marker display name, e.g. "London".
    pub name: String,
    /// Horizontal anchor as percent of canvas width.
    pub x_pct: f64,
    /// Vertical anchor as percent of canvas height. The label renders above
    /// this point.
    pub y_pct: f64,
}

impl TooltipBox {
    /// Single-line label: `▲ LHR · London`.
    pub fn label(&self) -> String {
        format!("▲ {} · {}", self.id, self.name)
    }
}

/// Derive the tooltip for the current hover state, if any.
///
/// Returns `None` when nothing is hovered or when the hovered marker projects
/// outside the canvas (silent suppression, not an error).
pub fn tooltip_for(hover: &HoverState, cfg: &ProjectionConfig) -> Option<TooltipBox> {
    let marker = hover.hovered()?;
    let p = cfg.project(marker.lon(), marker.lat())?;
    let (x_pct, y_pct) = cfg.to_percent(p);
    Some(TooltipBox {
        id: marker.id.clone(),
        name: marker.name.clone(),
        x_pct,
        y_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RegionMarker;

    #[test]
    fn no_hover_means_no_tooltip() {
        let hover = HoverState::default();
        assert_eq!(tooltip_for(&hover, &ProjectionConfig::default()), None);
    }

    #[test]
    fn position_matches_the_projection_in_percent() {
        let cfg = ProjectionConfig::default();
        let marker = RegionMarker::new("FRA", "Frankfurt", 8.6821, 50.1109);
        let mut hover = HoverState::default();
        hover.set(Some(&marker));

        let tip = tooltip_for(&hover, &cfg).unwrap();
        let p = cfg.project(8.6821, 50.1109).unwrap();
        assert_eq!(tip.x_pct, p.x / 1000.0 * 100.0);
        assert_eq!(tip.y_pct, p.y / 560.0 * 100.0);
        assert!((p.x - 484.5625).abs() < 1e-3);
        assert!((p.y - 201.2048).abs() < 1e-3);
    }

    #[test]
    fn out_of_range_marker_is_suppressed() {
        let cfg = ProjectionConfig::default();
        let marker = RegionMarker::new("NPL", "North Pole", 0.0, 89.9);
        let mut hover = HoverState::default();
        hover.set(Some(&marker));
        assert_eq!(tooltip_for(&hover, &cfg), None);
    }

    #[test]
    fn label_contains_id_and_name() {
        let tip = TooltipBox {
            id: "LHR".into(),
            name: "London".into(),
            x_pct: 50.0,
            y_pct: 50.0,
        };
        let label = tip.label();
        assert!(label.contains("LHR"));
        assert!(label.contains("London"));
    }
}
