use crate::models::ViewRow;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionStats {
    pub region: String,
    pub bagged: usize,
    pub total: usize,
}

/// Aggregates over the unified view. Always computed fresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub bagged: usize,
    pub remaining: usize,
    pub percent: u32,
    /// Sum of the heights of bagged peaks, in metres.
    pub elevation: u64,
    /// Sorted by region name.
    pub regions: Vec<RegionStats>,
    pub highest: Option<(String, u32)>,
    pub latest: Option<(String, NaiveDate)>,
}

/// `bagged * 100 / total`, truncated; 0 for an empty checklist.
pub fn completion_percent(bagged: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((bagged * 100) / total) as u32
    }
}

impl Stats {
    pub fn compute(rows: &[ViewRow]) -> Self {
        let total = rows.len();
        let done: Vec<&ViewRow> = rows.iter().filter(|r| r.bagged).collect();
        let bagged = done.len();

        let elevation = done.iter().map(|r| u64::from(r.peak.height)).sum();

        let mut by_region: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for r in rows {
            let e = by_region.entry(r.peak.region.as_str()).or_default();
            e.1 += 1;
            if r.bagged {
                e.0 += 1;
            }
        }
        let regions = by_region
            .into_iter()
            .map(|(region, (bagged, total))| RegionStats {
                region: region.to_string(),
                bagged,
                total,
            })
            .collect();

        let highest = done
            .iter()
            .max_by_key(|r| r.peak.height)
            .map(|r| (r.peak.name.clone(), r.peak.height));

        let latest = done
            .iter()
            .filter_map(|r| r.date.map(|d| (r.peak.name.clone(), d)))
            .max_by_key(|(_, d)| *d);

        Self {
            total,
            bagged,
            remaining: total - bagged,
            percent: completion_percent(bagged, total),
            elevation,
            regions,
            highest,
            latest,
        }
    }
}
