//! Geography ingestion: country boundary shapes from GeoJSON.
//!
//! Boundaries are an external collaborator — the crate never ships world
//! geometry. Features are expected to carry an ISO 3166-1 alpha-2 code under
//! `ISO_A2` (or the `iso_a2` / `ISO_A2_EH` variants some datasets use);
//! features without one still render, with the default fill.

use geo::{Coord, LineString, MultiPolygon, Polygon};
use geojson::{Feature, GeoJson};
use std::path::Path;
use thiserror::Error;

use crate::projection::ProjectionConfig;

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("failed to read geography file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse GeoJSON: {0}")]
    Parse(#[from] geojson::Error),
    #[error("geography input has no polygon features")]
    NoShapes,
}

/// One renderable geography shape: an ISO country code (when present) plus
/// its boundary rings in (lon, lat) degrees.
#[derive(Debug, Clone)]
pub struct GeoShape {
    pub iso2: Option<String>,
    pub name: Option<String>,
    pub outline: MultiPolygon<f64>,
}

impl GeoShape {
    /// The shape's outline mapped into canvas pixel space. Uses the raw
    /// (unclipped) projection so rings stay closed at the canvas edge.
    pub fn projected_outline(&self, cfg: &ProjectionConfig) -> MultiPolygon<f64> {
        let project_ring = |ring: &LineString<f64>| {
            LineString(
                ring.0
                    .iter()
                    .map(|c| {
                        let p = cfg.project_raw(c.x, c.y);
                        Coord { x: p.x, y: p.y }
                    })
                    .collect(),
            )
        };
        MultiPolygon(
            self.outline
                .0
                .iter()
                .map(|poly| {
                    Polygon::new(
                        project_ring(poly.exterior()),
                        poly.interiors().iter().map(project_ring).collect(),
                    )
                })
                .collect(),
        )
    }
}

const ISO_KEYS: [&str; 3] = ["ISO_A2", "iso_a2", "ISO_A2_EH"];
const NAME_KEYS: [&str; 3] = ["NAME", "ADMIN", "name"];

fn string_property(feature: &Feature, keys: &[&str]) -> Option<String> {
    let props = feature.properties.as_ref()?;
    for key in keys {
        if let Some(v) = props.get(*key).and_then(|v| v.as_str()) {
            // Natural Earth marks missing codes as "-99".
            if !v.is_empty() && v != "-99" {
                return Some(v.to_string());
            }
        }
    }
    None
}

fn shape_from_feature(feature: Feature) -> Option<GeoShape> {
    let iso2 = string_property(&feature, &ISO_KEYS);
    let name = string_property(&feature, &NAME_KEYS);
    let geometry = feature.geometry?;
    let geom: geo::Geometry<f64> = geometry.value.try_into().ok()?;
    let outline = match geom {
        geo::Geometry::Polygon(p) => MultiPolygon(vec![p]),
        geo::Geometry::MultiPolygon(mp) => mp,
        _ => return None,
    };
    Some(GeoShape {
        iso2,
        name,
        outline,
    })
}

/// Parse shapes from a GeoJSON string (a FeatureCollection, a single
/// Feature, or a bare geometry).
pub fn parse_geojson(input: &str) -> Result<Vec<GeoShape>, GeoError> {
    let gj: GeoJson = input.parse()?;
    let shapes: Vec<GeoShape> = match gj {
        GeoJson::FeatureCollection(fc) => {
            fc.features.into_iter().filter_map(shape_from_feature).collect()
        }
        GeoJson::Feature(f) => shape_from_feature(f).into_iter().collect(),
        GeoJson::Geometry(g) => {
            let geom: geo::Geometry<f64> = g.value.try_into()?;
            match geom {
                geo::Geometry::Polygon(p) => vec![GeoShape {
                    iso2: None,
                    name: None,
                    outline: MultiPolygon(vec![p]),
                }],
                geo::Geometry::MultiPolygon(mp) => vec![GeoShape {
                    iso2: None,
                    name: None,
                    outline: mp,
                }],
                _ => Vec::new(),
            }
        }
    };
    if shapes.is_empty() {
        return Err(GeoError::NoShapes);
    }
    Ok(shapes)
}

/// Read and parse a GeoJSON boundary file.
pub fn load_geojson<P: AsRef<Path>>(path: P) -> Result<Vec<GeoShape>, GeoError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let shapes = parse_geojson(&text)?;
    log::info!(
        "loaded {} geography shapes from {}",
        shapes.len(),
        path.as_ref().display()
    );
    Ok(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Contains;

    const FIXTURE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "ISO_A2": "US", "NAME": "United States" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-120, 30], [-80, 30], [-80, 48], [-120, 48], [-120, 30]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "iso_a2": "DE" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[6, 47], [15, 47], [15, 55], [6, 55], [6, 47]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "ISO_A2": "-99" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[100, -10], [110, -10], [110, 0], [100, 0], [100, -10]]]
                }
            }
        ]
    }"#;

    #[test]
    fn fixture_parses_with_codes() {
        let shapes = parse_geojson(FIXTURE).unwrap();
        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[0].iso2.as_deref(), Some("US"));
        assert_eq!(shapes[0].name.as_deref(), Some("United States"));
        assert_eq!(shapes[1].iso2.as_deref(), Some("DE"));
        // "-99" means no code.
        assert_eq!(shapes[2].iso2, None);
    }

    #[test]
    fn containment_in_geographic_space() {
        let shapes = parse_geojson(FIXTURE).unwrap();
        let us = &shapes[0].outline;
        assert!(us.contains(&geo::point!(x: -100.0, y: 40.0)));
        assert!(!us.contains(&geo::point!(x: 10.0, y: 50.0)));
    }

    #[test]
    fn projected_outline_lands_on_canvas() {
        let shapes = parse_geojson(FIXTURE).unwrap();
        let cfg = ProjectionConfig::default();
        let projected = shapes[1].projected_outline(&cfg);
        // Germany sits near the projection center.
        let exterior = projected.0[0].exterior();
        for c in &exterior.0 {
            assert!(c.x > 0.0 && c.x < 1000.0, "x out of canvas: {}", c.x);
            assert!(c.y > 0.0 && c.y < 560.0, "y out of canvas: {}", c.y);
        }
    }

    #[test]
    fn garbage_input_is_a_parse_error() {
        assert!(matches!(
            parse_geojson("not json"),
            Err(GeoError::Parse(_))
        ));
    }

    #[test]
    fn point_only_input_has_no_shapes() {
        let gj = r#"{"type": "Point", "coordinates": [0, 0]}"#;
        assert!(matches!(parse_geojson(gj), Err(GeoError::NoShapes)));
    }
}
