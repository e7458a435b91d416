//! Peak catalog: the static, read-only list of target summits.

mod loader;
pub mod normalize;

pub use loader::{load_catalog, read_catalog};
pub(crate) use loader::find_column;

use crate::errors::{AppError, AppResult};
use crate::models::{Peak, ValidationWarning};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Peaks sorted by height (highest first) plus the warnings raised while loading.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub peaks: Vec<Peak>,
    pub warnings: Vec<ValidationWarning>,
    pub source: Option<PathBuf>,
}

impl Catalog {
    pub fn new(peaks: Vec<Peak>, warnings: Vec<ValidationWarning>) -> Self {
        Self {
            peaks,
            warnings,
            source: None,
        }
    }

    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    /// Exact (case-sensitive) lookup by name.
    pub fn get(&self, name: &str) -> Option<&Peak> {
        self.peaks.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Distinct regions, sorted. Empty region names are skipped.
    pub fn regions(&self) -> Vec<String> {
        self.peaks
            .iter()
            .filter(|p| !p.region.is_empty())
            .map(|p| p.region.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Find the peak a user means.
    ///
    /// Exact case-insensitive name first, then a unique case-insensitive
    /// substring match.
    pub fn resolve(&self, query: &str) -> AppResult<&Peak> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return Err(AppError::PeakNotFound(query.to_string()));
        }

        if let Some(p) = self.peaks.iter().find(|p| p.name.to_lowercase() == q) {
            return Ok(p);
        }

        let matches: Vec<&Peak> = self
            .peaks
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&q))
            .collect();

        match matches.as_slice() {
            [] => Err(AppError::PeakNotFound(query.to_string())),
            [one] => Ok(*one),
            many => Err(AppError::AmbiguousPeak {
                query: query.to_string(),
                candidates: many.iter().map(|p| p.name.clone()).collect(),
            }),
        }
    }
}
