//! Quick summaries over the country dataset.

use crate::models::CountryStat;
use serde::{Deserialize, Serialize};

/// Aggregate view of the per-country table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetSummary {
    pub countries: usize,
    pub total_requests: u64,
    pub max: Option<u64>,
    pub min: Option<u64>,
    pub top_code: Option<String>,
}

/// One country's slice of the total, in percent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryShare {
    pub code: String,
    pub name: String,
    pub request_count: u64,
    pub share_pct: f64,
}

/// Summarize the dataset (totals and extremes).
pub fn dataset_summary(stats: &[CountryStat]) -> DatasetSummary {
    let total_requests: u64 = stats.iter().map(|s| s.request_count).sum();
    let top = stats.iter().max_by_key(|s| s.request_count);
    DatasetSummary {
        countries: stats.len(),
        total_requests,
        max: top.map(|s| s.request_count),
        min: stats.iter().map(|s| s.request_count).min(),
        top_code: top.map(|s| s.code.clone()),
    }
}

/// Per-country share of the dataset total, descending by volume (ties break
/// by code for deterministic output).
pub fn country_shares(stats: &[CountryStat]) -> Vec<CountryShare> {
    let total: u64 = stats.iter().map(|s| s.request_count).sum();
    let mut shares: Vec<CountryShare> = stats
        .iter()
        .map(|s| CountryShare {
            code: s.code.clone(),
            name: s.name.clone(),
            request_count: s.request_count,
            share_pct: if total == 0 {
                0.0
            } else {
                s.request_count as f64 / total as f64 * 100.0
            },
        })
        .collect();
    shares.sort_by(|a, b| {
        b.request_count
            .cmp(&a.request_count)
            .then_with(|| a.code.cmp(&b.code))
    });
    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::country_stats;

    #[test]
    fn summary_of_builtin_dataset() {
        let s = dataset_summary(&country_stats());
        assert_eq!(s.countries, 20);
        assert_eq!(s.top_code.as_deref(), Some("US"));
        assert_eq!(s.max, Some(45_000_000));
        assert_eq!(s.min, Some(1_200_000));
        assert_eq!(s.total_requests, 117_400_000);
    }

    #[test]
    fn shares_sum_to_one_hundred() {
        let shares = country_shares(&country_stats());
        let total: f64 = shares.iter().map(|s| s.share_pct).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(shares[0].code, "US");
        for pair in shares.windows(2) {
            assert!(pair[0].request_count >= pair[1].request_count);
        }
    }

    #[test]
    fn empty_dataset() {
        let s = dataset_summary(&[]);
        assert_eq!(s.countries, 0);
        assert_eq!(s.total_requests, 0);
        assert_eq!(s.max, None);
        assert!(country_shares(&[]).is_empty());
    }
}
