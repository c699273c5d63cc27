/*!
 * GUI viewer for edgemap - the dotted world-traffic map
 *
 * A cross-platform desktop application showing the live map:
 * - Staggered marker entrance animation
 * - Hover a marker to see its tooltip
 * - Load a GeoJSON boundary file, export SVG snapshots
 *
 * Platform support: Windows, macOS, Linux
 */

use eframe::egui;
use edgemap::geo::GeoShape;
use edgemap::overlay::{self, MarkerOverlay, TARGET_SCALE};
use edgemap::pattern::PatternSet;
use edgemap::projection::ProjectionConfig;
use edgemap::tooltip::{self, TooltipBox, tooltip_for};
use edgemap::viz::util::grid_dots;
use edgemap::data;
use edgemap::viz::{self, SnapshotOptions};
use geo::{BoundingRect, Contains, Point};
use std::path::PathBuf;

/// Pointer-to-marker hit radius in pixels.
const HIT_RADIUS: f64 = 8.0;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 640.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("edgemap"),
        ..Default::default()
    };

    eframe::run_native(
        "edgemap",
        options,
        Box::new(|_cc| Ok(Box::new(EdgeMapApp::new()))),
    )
}

/// Main application state
struct EdgeMapApp {
    shapes: Vec<GeoShape>,
    geography_path: Option<PathBuf>,
    patterns: PatternSet,
    overlay: MarkerOverlay,
    started_at: Option<f64>,

    // UI state
    show_legend: bool,
    status_message: String,
    error_message: String,

    // Cached dot positions, rebuilt on resize or geography change.
    dot_cache: Option<DotCache>,
    last_tip: Option<TooltipBox>,
}

struct DotCache {
    size: (u32, u32),
    shape_count: usize,
    dots: Vec<(egui::Pos2, egui::Color32, f32)>,
}

impl EdgeMapApp {
    fn new() -> Self {
        Self {
            shapes: Vec::new(),
            geography_path: None,
            patterns: PatternSet::builtin(),
            overlay: MarkerOverlay::builtin(),
            started_at: None,
            show_legend: false,
            status_message: String::new(),
            error_message: String::new(),
            dot_cache: None,
            last_tip: None,
        }
    }

    fn load_geography(&mut self) {
        let dialog = rfd::FileDialog::new()
            .add_filter("GeoJSON", &["geojson", "json"])
            .set_directory(dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        let Some(path) = dialog.pick_file() else {
            return;
        };
        match edgemap::geo::load_geojson(&path) {
            Ok(shapes) => {
                self.status_message = format!("Loaded {} shapes", shapes.len());
                self.error_message.clear();
                self.shapes = shapes;
                self.geography_path = Some(path);
                self.dot_cache = None;
            }
            Err(e) => {
                self.error_message = format!("Failed to load geography: {e}");
            }
        }
    }

    fn export_svg(&mut self) {
        let dialog = rfd::FileDialog::new()
            .add_filter("SVG", &["svg"])
            .set_directory(dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .set_file_name("map.svg");
        let Some(path) = dialog.save_file() else {
            return;
        };
        let opts = SnapshotOptions {
            hover: self.overlay.hover().hovered().map(|m| m.id.clone()),
            legend: self.show_legend,
            ..SnapshotOptions::default()
        };
        match viz::render_snapshot(&self.shapes, &data::region_markers(), &path, &opts) {
            Ok(()) => {
                self.status_message = format!("Exported {}", path.display());
                self.error_message.clear();
            }
            Err(e) => {
                self.error_message = format!("Export failed: {e}");
            }
        }
    }

    fn rebuild_dot_cache(&mut self, cfg: &ProjectionConfig) {
        let size = (cfg.width, cfg.height);
        if self
            .dot_cache
            .as_ref()
            .is_some_and(|c| c.size == size && c.shape_count == self.shapes.len())
        {
            return;
        }
        let mut dots = Vec::new();
        let w = f64::from(cfg.width);
        let h = f64::from(cfg.height);
        for shape in &self.shapes {
            let pattern = self.patterns.for_country(shape.iso2.as_deref().unwrap_or(""));
            let color = egui::Color32::from_rgba_unmultiplied(
                pattern.color.r,
                pattern.color.g,
                pattern.color.b,
                (pattern.opacity * 255.0) as u8,
            );
            let outline = shape.projected_outline(cfg);
            let Some(bbox) = outline.bounding_rect() else {
                continue;
            };
            let (x0, y0) = (bbox.min().x.max(0.0), bbox.min().y.max(0.0));
            let (x1, y1) = (bbox.max().x.min(w), bbox.max().y.min(h));
            if x1 <= x0 || y1 <= y0 {
                continue;
            }
            for (x, y) in grid_dots(x0, y0, x1, y1, pattern.spacing) {
                if outline.contains(&Point::new(x, y)) {
                    dots.push((
                        egui::pos2(x as f32, y as f32),
                        color,
                        pattern.radius as f32,
                    ));
                }
            }
        }
        log::debug!("dot cache rebuilt: {} dots at {:?}", dots.len(), size);
        self.dot_cache = Some(DotCache {
            size,
            shape_count: self.shapes.len(),
            dots,
        });
    }
}

impl eframe::App for EdgeMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Load geography…").clicked() {
                    self.load_geography();
                }
                if ui.button("Export SVG…").clicked() {
                    self.export_svg();
                }
                if ui.button("Replay intro").clicked() {
                    self.overlay.reset();
                    self.started_at = None;
                }
                ui.checkbox(&mut self.show_legend, "Legend");
                if let Some(path) = self.geography_path.as_ref() {
                    ui.label(
                        path.file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default(),
                    );
                }
                if !self.error_message.is_empty() {
                    ui.colored_label(egui::Color32::RED, &self.error_message);
                } else if !self.status_message.is_empty() {
                    ui.label(&self.status_message);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;
            let cfg = ProjectionConfig::new(
                rect.width().max(1.0) as u32,
                rect.height().max(1.0) as u32,
            );

            let now = ui.input(|i| i.time);
            let start = *self.started_at.get_or_insert(now);
            let elapsed = now - start;
            self.overlay.tick(elapsed);

            self.rebuild_dot_cache(&cfg);

            painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
            if let Some(cache) = self.dot_cache.as_ref() {
                for (pos, color, radius) in &cache.dots {
                    painter.circle_filled(rect.min + pos.to_vec2(), *radius, *color);
                }
            }

            // Pointer-driven hover transitions. Pointer events are always
            // live; the entrance animation never gates them.
            let hit_id = response
                .hover_pos()
                .and_then(|pos| {
                    self.overlay.hit_test(
                        &cfg,
                        f64::from(pos.x - rect.min.x),
                        f64::from(pos.y - rect.min.y),
                        HIT_RADIUS,
                    )
                })
                .map(|s| s.marker.id.clone());
            let current_id = self.overlay.hover().hovered().map(|m| m.id.clone());
            match (current_id, hit_id) {
                (Some(c), Some(h)) if c != h => {
                    self.overlay.pointer_enter(&h);
                    self.overlay.pointer_leave(&c);
                }
                (None, Some(h)) => self.overlay.pointer_enter(&h),
                (Some(c), None) => self.overlay.pointer_leave(&c),
                _ => {}
            }

            // Markers, scaled by their entrance spring.
            for sprite in self.overlay.sprites() {
                let progress = overlay::entrance_progress(elapsed, sprite.delay);
                if progress <= 0.0 {
                    continue;
                }
                let Some(p) = cfg.project(sprite.marker.lon(), sprite.marker.lat()) else {
                    continue;
                };
                let scale = (TARGET_SCALE * progress) as f32;
                let center = rect.min + egui::vec2(p.x as f32, p.y as f32);
                let points = vec![
                    center + egui::vec2(0.0, -2.3 * scale),
                    center + egui::vec2(-2.0 * scale, 1.2 * scale),
                    center + egui::vec2(2.0 * scale, 1.2 * scale),
                ];
                let alpha = progress.clamp(0.0, 1.0) as f32;
                let fill = egui::Color32::from_rgb(23, 23, 23).gamma_multiply(alpha);
                painter.add(egui::Shape::convex_polygon(
                    points,
                    fill,
                    egui::Stroke::NONE,
                ));
            }

            // Tooltip with fade/slide; the transition is cosmetic and never
            // delays the hover-state update above.
            let tip = tooltip_for(self.overlay.hover(), &cfg);
            if tip.is_some() {
                self.last_tip = tip.clone();
            }
            let t = ctx.animate_bool_with_time(
                egui::Id::new("tooltip"),
                tip.is_some(),
                tooltip::TRANSITION_SECS as f32,
            );
            if t > 0.0 {
                if let Some(tip) = self.last_tip.as_ref() {
                    let slide = tooltip::SLIDE_PX as f32 * (1.0 - t);
                    let px = (tip.x_pct / 100.0) as f32 * rect.width();
                    let py = (tip.y_pct / 100.0) as f32 * rect.height();
                    let anchor = rect.min + egui::vec2(px, py - 10.0 + slide);
                    let galley = painter.layout_no_wrap(
                        tip.label(),
                        egui::FontId::monospace(11.0),
                        egui::Color32::from_rgb(23, 23, 23).gamma_multiply(t),
                    );
                    let size = galley.size();
                    let box_rect = egui::Rect::from_min_size(
                        anchor - egui::vec2(size.x / 2.0 + 8.0, size.y + 10.0),
                        size + egui::vec2(16.0, 10.0),
                    );
                    painter.rect_filled(
                        box_rect,
                        3.0,
                        egui::Color32::from_white_alpha((242.0 * t) as u8),
                    );
                    painter.rect_stroke(
                        box_rect,
                        3.0,
                        egui::Stroke::new(
                            1.0,
                            egui::Color32::from_black_alpha((64.0 * t) as u8),
                        ),
                    );
                    painter.galley(
                        box_rect.min + egui::vec2(8.0, 5.0),
                        galley,
                        egui::Color32::PLACEHOLDER,
                    );
                }
            }

            if self.show_legend {
                draw_legend_overlay(&painter, rect);
            }

            // Keep repainting while the entrance animation or a tooltip
            // transition is running.
            if elapsed < 2.0 || (t > 0.0 && t < 1.0) {
                ctx.request_repaint();
            }
        });
    }
}

fn draw_legend_overlay(painter: &egui::Painter, rect: egui::Rect) {
    let entries = data::top_countries(7);
    let row_h = 18.0;
    let pad = 10.0;
    let panel = egui::Rect::from_min_size(
        egui::pos2(rect.min.x + pad, rect.max.y - pad - entries.len() as f32 * row_h - pad * 2.0),
        egui::vec2(230.0, entries.len() as f32 * row_h + pad * 2.0),
    );
    painter.rect_filled(panel, 3.0, egui::Color32::from_white_alpha(220));
    painter.rect_stroke(panel, 3.0, egui::Stroke::new(1.0, egui::Color32::from_black_alpha(48)));
    for (i, entry) in entries.iter().enumerate() {
        let cy = panel.min.y + pad + i as f32 * row_h + row_h / 2.0;
        let color = edgemap::palette::parse_hex(&entry.color)
            .map(|c| egui::Color32::from_rgb(c.r, c.g, c.b))
            .unwrap_or(egui::Color32::GRAY);
        painter.circle_filled(egui::pos2(panel.min.x + pad + 4.0, cy), 4.0, color);
        painter.text(
            egui::pos2(panel.min.x + pad + 14.0, cy),
            egui::Align2::LEFT_CENTER,
            format!(
                "{}  {}  {}",
                entry.code,
                entry.name,
                data::format_compact(entry.request_count)
            ),
            egui::FontId::proportional(12.0),
            egui::Color32::from_rgb(40, 40, 40),
        );
    }
}
