//! Static snapshot renderer: the dotted map as an **SVG** file.
//!
//! - One dot grid per country shape, tinted by the resolved country color
//! - Markers drawn at a chosen point of the entrance animation
//! - Optional hover tooltip and top-countries legend
//!
//! The interactive (hover, live animation) rendition of the same scene lives
//! in the `edgemap-gui` binary; this module is for file output.

pub mod legend;
pub mod text;
pub mod util;

use crate::data;
use crate::geo::GeoShape;
use crate::models::RegionMarker;
use crate::overlay::{self, HoverState, TARGET_SCALE};
use crate::pattern::PatternSet;
use crate::projection::ProjectionConfig;
use crate::tooltip::tooltip_for;
use anyhow::{Result, anyhow, bail};
use geo::{BoundingRect, Contains, Point};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters_svg::SVGBackend;
use std::path::Path;

use legend::draw_legend;
use text::estimate_text_width_px;
use util::{grid_dots, to_rgb};

/// Marker glyph outline (a small triangle), in unscaled pixel offsets.
const MARKER_TRIANGLE: [(f64, f64); 3] = [(0.0, -2.3), (-2.0, 1.2), (2.0, 1.2)];
/// Marker fill, a near-black.
const MARKER_FILL: RGBColor = RGBColor(23, 23, 23);

const TOOLTIP_FONT_PX: u32 = 11;
const TOOLTIP_BOX_H: i32 = 22;

/// Everything configurable about a snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotOptions {
    pub width: u32,
    pub height: u32,
    /// Seconds into the entrance animation. The default is past the settle
    /// point, so all markers render at full size.
    pub elapsed: f64,
    /// Marker id to render as hovered (with its tooltip), if any.
    pub hover: Option<String>,
    /// Draw the top-countries legend panel.
    pub legend: bool,
    /// How many countries the legend lists.
    pub legend_entries: usize,
    /// Locale tag for legend number formatting, e.g. "en" or "de".
    pub locale: String,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            width: crate::projection::DEFAULT_WIDTH,
            height: crate::projection::DEFAULT_HEIGHT,
            elapsed: 3.0,
            hover: None,
            legend: false,
            legend_entries: 7,
            locale: "en".to_string(),
        }
    }
}

/// Convenience: render `shapes` with the built-in markers, settled animation,
/// no tooltip, no legend.
pub fn render_map<P: AsRef<Path>>(
    shapes: &[GeoShape],
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let opts = SnapshotOptions {
        width,
        height,
        ..SnapshotOptions::default()
    };
    render_snapshot(shapes, &data::region_markers(), out_path, &opts)
}

/// Fully-configurable snapshot entry point.
///
/// `shapes` may be empty (markers over a bare canvas); an output with neither
/// shapes nor markers is an error. Output format is SVG, selected by the
/// `.svg` extension.
pub fn render_snapshot<P: AsRef<Path>>(
    shapes: &[GeoShape],
    markers: &[RegionMarker],
    out_path: P,
    opts: &SnapshotOptions,
) -> Result<()> {
    if opts.width == 0 || opts.height == 0 {
        bail!("canvas dimensions must be positive");
    }
    if shapes.is_empty() && markers.is_empty() {
        bail!("nothing to render");
    }
    let out_path = out_path.as_ref();
    if out_path.extension().and_then(|s| s.to_str()) != Some("svg") {
        bail!("only .svg output is supported");
    }
    let path_string = out_path.to_string_lossy().into_owned();

    let root = SVGBackend::new(path_string.as_str(), (opts.width, opts.height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let cfg = ProjectionConfig::new(opts.width, opts.height);
    let patterns = PatternSet::builtin();

    draw_shapes(&root, shapes, &patterns, &cfg)?;
    draw_markers(&root, markers, opts.elapsed, &cfg)?;

    if let Some(id) = opts.hover.as_deref() {
        draw_tooltip(&root, markers, id, &cfg)?;
    }
    if opts.legend {
        draw_legend(&root, &data::top_countries(opts.legend_entries), &opts.locale)?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    log::debug!("wrote snapshot to {}", path_string);
    Ok(())
}

fn draw_shapes<DB>(
    root: &DrawingArea<DB, Shift>,
    shapes: &[GeoShape],
    patterns: &PatternSet,
    cfg: &ProjectionConfig,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let w = f64::from(cfg.width);
    let h = f64::from(cfg.height);
    for shape in shapes {
        let pattern = patterns.for_country(shape.iso2.as_deref().unwrap_or(""));
        let outline = shape.projected_outline(cfg);
        let Some(bbox) = outline.bounding_rect() else {
            continue;
        };
        let x0 = bbox.min().x.max(0.0);
        let y0 = bbox.min().y.max(0.0);
        let x1 = bbox.max().x.min(w);
        let y1 = bbox.max().y.min(h);
        if x1 <= x0 || y1 <= y0 {
            continue;
        }
        let style = to_rgb(pattern.color).mix(pattern.opacity).filled();
        for (x, y) in grid_dots(x0, y0, x1, y1, pattern.spacing) {
            if outline.contains(&Point::new(x, y)) {
                root.draw(&Circle::new(
                    (x.round() as i32, y.round() as i32),
                    pattern.radius.round() as i32,
                    style,
                ))
                .map_err(|e| anyhow!("{:?}", e))?;
            }
        }
    }
    Ok(())
}

fn draw_markers<DB>(
    root: &DrawingArea<DB, Shift>,
    markers: &[RegionMarker],
    elapsed: f64,
    cfg: &ProjectionConfig,
) -> Result<()>
where
    DB: DrawingBackend,
{
    for (i, marker) in markers.iter().enumerate() {
        let delay = overlay::entrance_delay(i);
        let progress = overlay::entrance_progress(elapsed, delay);
        if progress <= 0.0 {
            continue;
        }
        let Some(p) = cfg.project(marker.lon(), marker.lat()) else {
            continue;
        };
        let scale = TARGET_SCALE * progress;
        let opacity = progress.clamp(0.0, 1.0);
        let points: Vec<(i32, i32)> = MARKER_TRIANGLE
            .iter()
            .map(|&(dx, dy)| {
                (
                    (p.x + dx * scale).round() as i32,
                    (p.y + dy * scale).round() as i32,
                )
            })
            .collect();
        root.draw(&Polygon::new(points, MARKER_FILL.mix(opacity).filled()))
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}

fn draw_tooltip<DB>(
    root: &DrawingArea<DB, Shift>,
    markers: &[RegionMarker],
    hover_id: &str,
    cfg: &ProjectionConfig,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let mut hover = HoverState::default();
    hover.set(markers.iter().find(|m| m.id == hover_id));
    let Some(tip) = tooltip_for(&hover, cfg) else {
        // Unknown id or out-of-range projection: nothing to draw.
        return Ok(());
    };

    let px = tip.x_pct / 100.0 * f64::from(cfg.width);
    let py = tip.y_pct / 100.0 * f64::from(cfg.height);
    let label = tip.label();
    let box_w = estimate_text_width_px(&label, TOOLTIP_FONT_PX) as i32 + 16;
    let left = px.round() as i32 - box_w / 2;
    let top = py.round() as i32 - (f64::from(TOOLTIP_BOX_H) * 1.4).round() as i32;

    root.draw(&Rectangle::new(
        [(left, top), (left + box_w, top + TOOLTIP_BOX_H)],
        WHITE.mix(0.95).filled(),
    ))
    .map_err(|e| anyhow!("{:?}", e))?;
    root.draw(&Rectangle::new(
        [(left, top), (left + box_w, top + TOOLTIP_BOX_H)],
        BLACK.mix(0.3),
    ))
    .map_err(|e| anyhow!("{:?}", e))?;
    let style = TextStyle::from((FontFamily::Monospace, TOOLTIP_FONT_PX)).color(&MARKER_FILL);
    root.draw(&Text::new(
        label,
        (left + 8, top + (TOOLTIP_BOX_H - TOOLTIP_FONT_PX as i32) / 2),
        style,
    ))
    .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
