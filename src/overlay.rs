//! Marker overlay: staggered entrance animation and hover interaction.
//!
//! Each marker runs a small per-marker state machine {entering, idle,
//! hovered}. The entrance transition is purely cosmetic and never gates
//! interactivity: pointer events are live from the first frame, so a marker
//! can be hovered before its animation completes.
//!
//! Hover state is a single slot with one writer (the overlay's pointer
//! handlers) and one reader (the tooltip). At most one marker is hovered at
//! any time; entering a second marker replaces the first.

use crate::models::RegionMarker;
use crate::projection::ProjectionConfig;

/// Per-index entrance delay increment, in seconds.
pub const STAGGER_STEP: f64 = 0.05;
/// Scale factor a marker settles at after its entrance transition.
pub const TARGET_SCALE: f64 = 1.5;

// Spring constants (stiffness 260, damping 20, unit mass): underdamped, so
// markers overshoot slightly and settle.
const SPRING_STIFFNESS: f64 = 260.0;
const SPRING_DAMPING: f64 = 20.0;
const SETTLE_EPS: f64 = 1e-3;

/// Entrance delay for the marker at `index` in the input sequence.
///
/// Reduced modulo one second regardless of marker count; collisions for large
/// counts are intentional (visual staggering, not precise timing).
#[inline]
pub fn entrance_delay(index: usize) -> f64 {
    (index as f64 * STAGGER_STEP) % 1.0
}

/// Underdamped spring response from 0 toward 1, evaluated `t` seconds in.
/// Overshoots slightly above 1 before settling.
pub fn spring_progress(t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    let omega0 = SPRING_STIFFNESS.sqrt();
    let decay = SPRING_DAMPING / 2.0;
    let zeta = decay / omega0;
    let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
    let envelope = (-decay * t).exp();
    1.0 - envelope * ((omega_d * t).cos() + (decay / omega_d) * (omega_d * t).sin())
}

/// Entrance progress for a marker with the given delay: 0 until the delay has
/// passed, then the spring response.
#[inline]
pub fn entrance_progress(elapsed: f64, delay: f64) -> f64 {
    spring_progress(elapsed - delay)
}

/// Whether the entrance transition has settled within tolerance.
pub fn is_settled(elapsed: f64, delay: f64) -> bool {
    let t = elapsed - delay;
    if t <= 0.0 {
        return false;
    }
    let omega0 = SPRING_STIFFNESS.sqrt();
    let decay = SPRING_DAMPING / 2.0;
    let zeta = decay / omega0;
    let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
    // Amplitude envelope of the oscillating term.
    (-decay * t).exp() * (1.0 + decay / omega_d) < SETTLE_EPS
}

/// Logical state of one marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerPhase {
    /// Entrance transition still running.
    Entering,
    /// Settled, not hovered.
    Idle,
    /// Pointer is over the marker.
    Hovered,
}

/// One marker plus its animation/interaction state.
#[derive(Debug, Clone)]
pub struct MarkerSprite {
    pub marker: RegionMarker,
    pub delay: f64,
    pub phase: MarkerPhase,
}

/// The currently hovered marker, or none.
///
/// Transient UI state with single-writer/single-reader semantics; dropped
/// (and thereby reset) together with the overlay that owns it.
#[derive(Debug, Clone, Default)]
pub struct HoverState {
    current: Option<RegionMarker>,
}

impl HoverState {
    pub fn set(&mut self, marker: Option<&RegionMarker>) {
        self.current = marker.cloned();
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn hovered(&self) -> Option<&RegionMarker> {
        self.current.as_ref()
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.current.as_ref().is_some_and(|m| m.id == id)
    }
}

/// The animated marker layer and its hover interaction.
#[derive(Debug, Clone)]
pub struct MarkerOverlay {
    sprites: Vec<MarkerSprite>,
    hover: HoverState,
    last_tick: f64,
}

impl MarkerOverlay {
    /// Build the overlay for a marker sequence; index order fixes the stagger.
    pub fn new(markers: Vec<RegionMarker>) -> Self {
        let sprites = markers
            .into_iter()
            .enumerate()
            .map(|(i, marker)| MarkerSprite {
                marker,
                delay: entrance_delay(i),
                phase: MarkerPhase::Entering,
            })
            .collect();
        Self {
            sprites,
            hover: HoverState::default(),
            last_tick: 0.0,
        }
    }

    /// Overlay for the built-in marker set.
    pub fn builtin() -> Self {
        Self::new(crate::data::region_markers())
    }

    pub fn sprites(&self) -> &[MarkerSprite] {
        &self.sprites
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// Advance the cosmetic animation clock; promotes settled sprites from
    /// `Entering` to `Idle`. Does not affect hover.
    pub fn tick(&mut self, elapsed: f64) {
        self.last_tick = elapsed;
        for s in &mut self.sprites {
            if s.phase == MarkerPhase::Entering && is_settled(elapsed, s.delay) {
                s.phase = MarkerPhase::Idle;
            }
        }
    }

    /// Pointer entered the marker with `id`. Hover is live even mid-entrance.
    pub fn pointer_enter(&mut self, id: &str) {
        if let Some(s) = self.sprites.iter_mut().find(|s| s.marker.id == id) {
            s.phase = MarkerPhase::Hovered;
            let marker = s.marker.clone();
            self.hover.set(Some(&marker));
        }
    }

    /// Pointer left the marker with `id`. Clears the hover slot only when it
    /// still holds this marker, so enter-B/leave-A event orderings keep B.
    pub fn pointer_leave(&mut self, id: &str) {
        if let Some(s) = self.sprites.iter_mut().find(|s| s.marker.id == id) {
            if s.phase == MarkerPhase::Hovered {
                s.phase = if is_settled(self.last_tick, s.delay) {
                    MarkerPhase::Idle
                } else {
                    MarkerPhase::Entering
                };
            }
            if self.hover.is_hovered(id) {
                self.hover.clear();
            }
        }
    }

    /// The sprite whose projected position lies within `radius` pixels of
    /// `(x, y)`, nearest first. Markers projecting outside the canvas are not
    /// hit-testable.
    pub fn hit_test(
        &self,
        cfg: &ProjectionConfig,
        x: f64,
        y: f64,
        radius: f64,
    ) -> Option<&MarkerSprite> {
        let mut best: Option<(&MarkerSprite, f64)> = None;
        for s in &self.sprites {
            let Some(p) = cfg.project(s.marker.lon(), s.marker.lat()) else {
                continue;
            };
            let d2 = (p.x - x).powi(2) + (p.y - y).powi(2);
            if d2 <= radius * radius && best.is_none_or(|(_, b)| d2 < b) {
                best = Some((s, d2));
            }
        }
        best.map(|(s, _)| s)
    }

    /// Restart the entrance animation and drop any hover.
    pub fn reset(&mut self) {
        for s in &mut self.sprites {
            s.phase = MarkerPhase::Entering;
        }
        self.hover.clear();
        self.last_tick = 0.0;
    }
}
