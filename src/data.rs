//! Built-in dataset: per-country request volumes and colors, the fixed set of
//! region markers, and network-wide totals.
//!
//! The tables are static configuration, loaded once and never mutated at
//! runtime. Countries absent from the table render with the neutral fallback
//! color (see [`crate::palette`]).

use crate::models::{CountryStat, RegionMarker, TrafficTotals};

/// (code, name, request_count, color)
pub(crate) const COUNTRY_TABLE: [(&str, &str, u64, &str); 20] = [
    ("US", "United States", 45_000_000, "#1e40af"),
    ("DE", "Germany", 8_500_000, "#FFCE00"),
    ("GB", "United Kingdom", 6_800_000, "#2563eb"),
    ("IN", "India", 6_200_000, "#f59e0b"),
    ("BR", "Brazil", 5_500_000, "#FF0000"),
    ("SG", "Singapore", 4_800_000, "#f59e0b"),
    ("JP", "Japan", 5_200_000, "#dc143c"),
    ("FR", "France", 4_900_000, "#1d4ed8"),
    ("CA", "Canada", 4_200_000, "#b91c1c"),
    ("SE", "Sweden", 3_800_000, "#2563eb"),
    ("AU", "Australia", 3_500_000, "#3b82f6"),
    ("KR", "South Korea", 3_200_000, "#3b82f6"),
    ("NL", "Netherlands", 2_900_000, "#ea580c"),
    ("CN", "China", 2_600_000, "#991b1b"),
    ("RU", "Russia", 2_300_000, "#FF0000"),
    ("MX", "Mexico", 2_000_000, "#15803d"),
    ("ES", "Spain", 1_800_000, "#b91c1c"),
    ("IT", "Italy", 1_600_000, "#15803d"),
    ("PL", "Poland", 1_400_000, "#dc2626"),
    ("TR", "Turkey", 1_200_000, "#b91c1c"),
];

/// (id, name, lon, lat) — edge locations, in stagger order.
const MARKER_TABLE: [(&str, &str, f64, f64); 19] = [
    ("IAD", "Washington D.C.", -77.4875, 38.9445),
    ("FRA", "Frankfurt", 8.6821, 50.1109),
    ("LHR", "London", -0.4543, 51.4700),
    ("BOM", "Mumbai", 72.8777, 19.0760),
    ("GRU", "São Paulo", -46.6333, -23.5505),
    ("SIN", "Singapore", 103.9915, 1.3644),
    ("NRT", "Tokyo", 140.3929, 35.7720),
    ("CDG", "Paris", 2.5479, 49.0097),
    ("YYZ", "Toronto", -79.6306, 43.6777),
    ("ARN", "Stockholm", 17.9186, 59.6519),
    ("SYD", "Sydney", 151.1772, -33.9399),
    ("ICN", "Seoul", 126.4506, 37.4602),
    ("AMS", "Amsterdam", 4.7639, 52.3105),
    ("PVG", "Shanghai", 121.8050, 31.1443),
    ("SVO", "Moscow", 37.4146, 55.9726),
    ("MEX", "Mexico City", -99.0721, 19.4363),
    ("MAD", "Madrid", -3.5673, 40.4839),
    ("FCO", "Rome", 12.2388, 41.8003),
    ("WAW", "Warsaw", 20.9671, 52.1657),
];

/// All country rows, in table order.
pub fn country_stats() -> Vec<CountryStat> {
    COUNTRY_TABLE
        .iter()
        .map(|&(code, name, request_count, color)| CountryStat {
            code: code.to_string(),
            name: name.to_string(),
            request_count,
            color: color.to_string(),
        })
        .collect()
}

/// All region markers, in stagger order.
pub fn region_markers() -> Vec<RegionMarker> {
    MARKER_TABLE
        .iter()
        .map(|&(id, name, lon, lat)| RegionMarker::new(id, name, lon, lat))
        .collect()
}

/// The `n` highest-volume countries, descending by request count.
/// Ties keep table order.
pub fn top_countries(n: usize) -> Vec<CountryStat> {
    let mut rows = country_stats();
    rows.sort_by(|a, b| b.request_count.cmp(&a.request_count));
    rows.truncate(n);
    rows
}

/// Network-wide counters (static configuration, like the country table).
pub fn network_totals() -> TrafficTotals {
    TrafficTotals {
        total_requests: 125_000_000,
        total_deployments: 450_000,
        ai_gateway_requests: 2_500_000,
        firewall_total: 15_000_000,
        firewall_system_blocks: 2_850_000,
        firewall_system_challenges: 6_500_000,
        firewall_custom_waf_blocks: 670_000,
        bots_blocked: 850_000,
        humans_verified: 4_900_000,
        cache_hits: 16_000_000,
    }
}

/// Compact human-readable count: `1.2B`, `45.0M`, `3.5K`, `999`.
pub fn format_compact(n: u64) -> String {
    let n = n as f64;
    if n >= 1.0e9 {
        format!("{:.1}B", n / 1.0e9)
    } else if n >= 1.0e6 {
        format!("{:.1}M", n / 1.0e6)
    } else if n >= 1.0e3 {
        format!("{:.1}K", n / 1.0e3)
    } else {
        format!("{}", n as u64)
    }
}
