use edgemap::data;
use edgemap::geo::parse_geojson;
use edgemap::viz::{self, SnapshotOptions};
use std::path::PathBuf;

const FIXTURE: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": { "ISO_A2": "US" },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[-120, 30], [-80, 30], [-80, 48], [-120, 48], [-120, 30]]]
            }
        },
        {
            "type": "Feature",
            "properties": { "ISO_A2": "DE" },
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

fn render_to_string(opts: &SnapshotOptions, with_shapes: bool) -> String {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("map.svg");
    let shapes = if with_shapes {
        parse_geojson(FIXTURE).unwrap()
    } else {
        Vec::new()
    };
    viz::render_snapshot(&shapes, &data::region_markers(), &path, opts).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(!text.is_empty(), "svg has content");
    text
}

#[test]
fn snapshot_contains_country_tinted_dots() {
    let svg = render_to_string(&SnapshotOptions::default(), true).to_lowercase();
    assert!(svg.contains("<svg"));
    // US blue, DE gold, and the neutral gray of the no-data shape.
    assert!(svg.contains("1e40af"), "missing US dot color");
    assert!(svg.contains("ffce00"), "missing DE dot color");
    assert!(svg.contains("9ca3af"), "missing default dot color");
}

#[test]
fn markers_render_without_geography() {
    let svg = render_to_string(&SnapshotOptions::default(), false).to_lowercase();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("polygon"), "marker glyphs missing");
}

#[test]
fn hovered_snapshot_carries_the_tooltip_text() {
    let opts = SnapshotOptions {
        hover: Some("LHR".to_string()),
        ..SnapshotOptions::default()
    };
    let svg = render_to_string(&opts, false);
    assert!(svg.contains("LHR"));
    assert!(svg.contains("London"));
}

#[test]
fn unknown_hover_id_renders_no_tooltip() {
    let opts = SnapshotOptions {
        hover: Some("???".to_string()),
        ..SnapshotOptions::default()
    };
    let svg = render_to_string(&opts, false);
    assert!(!svg.contains("???"));
}

#[test]
fn legend_lists_top_countries() {
    let opts = SnapshotOptions {
        legend: true,
        ..SnapshotOptions::default()
    };
    let svg = render_to_string(&opts, true);
    assert!(svg.contains("United States"));
    assert!(svg.contains("45,000,000"));
}

#[test]
fn early_animation_time_hides_late_markers() {
    // At t=0.01 only the first marker (delay 0) has begun entering.
    let early = SnapshotOptions {
        elapsed: 0.01,
        ..SnapshotOptions::default()
    };
    let settled = SnapshotOptions::default();
    let svg_early = render_to_string(&early, false);
    let svg_settled = render_to_string(&settled, false);
    let count = |s: &str| s.matches("<polygon").count();
    assert!(count(&svg_early) < count(&svg_settled));
}

#[test]
fn bad_outputs_are_errors() {
    let dir = tempfile::tempdir().unwrap();
    let markers = data::region_markers();

    let e = viz::render_snapshot(&[], &markers, dir.path().join("map.png"), &SnapshotOptions::default());
    assert!(e.is_err(), "non-svg extension must fail");

    let e = viz::render_snapshot(&[], &[], dir.path().join("map.svg"), &SnapshotOptions::default());
    assert!(e.is_err(), "nothing to render must fail");

    let opts = SnapshotOptions {
        width: 0,
        ..SnapshotOptions::default()
    };
    let e = viz::render_snapshot(&[], &markers, dir.path().join("map.svg"), &opts);
    assert!(e.is_err(), "zero width must fail");
}
