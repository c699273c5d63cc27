use edgemap::data;
use edgemap::models::CountryStat;

#[test]
fn builtin_dataset_shape() {
    let stats = data::country_stats();
    assert_eq!(stats.len(), 20);

    // Codes are unique ISO2 keys.
    let mut codes: Vec<&str> = stats.iter().map(|s| s.code.as_str()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), 20);

    for s in &stats {
        assert_eq!(s.code.len(), 2, "bad code {:?}", s.code);
        assert!(s.color.starts_with('#'), "bad color {:?}", s.color);
        assert!(s.request_count > 0);
    }
}

#[test]
fn builtin_markers_shape() {
    let markers = data::region_markers();
    assert_eq!(markers.len(), 19);
    let lhr = markers.iter().find(|m| m.id == "LHR").unwrap();
    assert_eq!(lhr.name, "London");
    assert!((lhr.lon() - (-0.4543)).abs() < 1e-9);
    assert!((lhr.lat() - 51.47).abs() < 1e-9);
}

#[test]
fn top_countries_match_the_ranking() {
    let top: Vec<CountryStat> = data::top_countries(7);
    let codes: Vec<&str> = top.iter().map(|s| s.code.as_str()).collect();
    assert_eq!(codes, ["US", "DE", "GB", "IN", "BR", "JP", "FR"]);
    assert_eq!(top[0].request_count, 45_000_000);
    assert_eq!(top[0].color, "#1e40af");
}

#[test]
fn totals_are_consistent_with_themselves() {
    let t = data::network_totals();
    assert!(t.firewall_system_blocks < t.firewall_total);
    assert!(t.firewall_system_challenges < t.firewall_total);
    assert_eq!(data::format_compact(t.total_requests), "125.0M");
}
