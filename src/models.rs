use serde::{Deserialize, Serialize};

/// One country's traffic entry (one row = one country).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryStat {
    /// ISO 3166-1 alpha-2 code, e.g. "US". Unique key within the dataset.
    pub code: String,
    pub name: String,
    pub request_count: u64,
    /// Display color as a `#rrggbb` hex string.
    pub color: String,
}

/// A fixed point of interest on the map, labelled by its IATA airport code.
///
/// Ordering within the marker sequence drives the entrance-animation stagger
/// only; it carries no display priority.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionMarker {
    /// Unique label, e.g. "LHR".
    pub id: String,
    /// Display name, e.g. "London".
    pub name: String,
    /// (longitude, latitude) in degrees.
    pub coordinates: (f64, f64),
}

impl RegionMarker {
    pub fn new(id: &str, name: &str, lon: f64, lat: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            coordinates: (lon, lat),
        }
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.coordinates.0
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.coordinates.1
    }
}

/// Network-wide counters shown alongside the map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrafficTotals {
    pub total_requests: u64,
    pub total_deployments: u64,
    pub ai_gateway_requests: u64,
    pub firewall_total: u64,
    pub firewall_system_blocks: u64,
    pub firewall_system_challenges: u64,
    pub firewall_custom_waf_blocks: u64,
    pub bots_blocked: u64,
    pub humans_verified: u64,
    pub cache_hits: u64,
}
