//! edgemap
//!
//! A lightweight Rust library for rendering a decorative "dotted" world map
//! of request traffic. Pairs with the `edgemap` CLI and the `edgemap-gui`
//! desktop viewer.
//!
//! ### Features
//! - Per-country dot-pattern fills tinted by request volume colors
//! - Fixed region markers with a staggered spring entrance animation
//! - Hover tooltip positioned in percent-of-canvas coordinates
//! - Boundary ingestion from GeoJSON; CSV/JSON export of the dataset
//!
//! ### Example
//! ```no_run
//! use edgemap::viz::{SnapshotOptions, render_snapshot};
//!
//! let shapes = edgemap::geo::load_geojson("countries.geojson")?;
//! let opts = SnapshotOptions {
//!     hover: Some("LHR".into()),
//!     legend: true,
//!     ..SnapshotOptions::default()
//! };
//! render_snapshot(&shapes, &edgemap::data::region_markers(), "map.svg", &opts)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod data;
pub mod geo;
pub mod models;
pub mod overlay;
pub mod palette;
pub mod pattern;
pub mod projection;
pub mod stats;
pub mod storage;
pub mod tooltip;
pub mod viz;

pub use models::{CountryStat, RegionMarker, TrafficTotals};
pub use overlay::{HoverState, MarkerOverlay, MarkerPhase};
pub use pattern::PatternSet;
pub use projection::{ProjectionConfig, ScreenPoint};
pub use tooltip::TooltipBox;
