use crate::catalog::{Catalog, load_catalog};
use crate::config::Config;
use crate::core::merge::{build_view, merge_row};
use crate::core::photo::PhotoStore;
use crate::core::stats::Stats;
use crate::errors::AppResult;
use crate::models::{Peak, ViewRow};
use crate::store::ProgressStore;
use std::path::Path;

/// Catalog, progress store and photo store loaded together.
///
/// Each command opens a fresh `Tracker`, so the view always reflects the
/// files on disk.
pub struct Tracker {
    pub catalog: Catalog,
    pub store: ProgressStore,
    pub photos: PhotoStore,
}

impl Tracker {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let photos = PhotoStore::new(cfg.photos_path(), cfg.max_photo_side);
        Self::from_paths(&cfg.catalog_path(), &cfg.progress_path(), photos)
    }

    pub fn from_paths(catalog: &Path, progress: &Path, photos: PhotoStore) -> AppResult<Self> {
        let catalog = load_catalog(catalog)?;
        let store = ProgressStore::load(progress, &catalog)?;
        Ok(Self {
            catalog,
            store,
            photos,
        })
    }

    pub fn view(&self) -> Vec<ViewRow> {
        build_view(&self.catalog, &self.store)
    }

    pub fn stats(&self) -> Stats {
        Stats::compute(&self.view())
    }

    /// Resolve a user-supplied name to a catalog peak (owned, so the store
    /// can be mutated afterwards).
    pub fn resolve(&self, query: &str) -> AppResult<Peak> {
        self.catalog.resolve(query).cloned()
    }

    /// The unified row of a single peak.
    pub fn row(&self, peak: &Peak) -> ViewRow {
        merge_row(peak, &self.store)
    }
}
