use crate::config::Config;
use crate::core::Tracker;
use crate::errors::AppResult;
use crate::store::ProgressStore;

/// Outcome of a reset.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ResetOutcome {
    pub progress_removed: bool,
    pub photos_removed: usize,
}

pub struct ResetLogic;

impl ResetLogic {
    /// Delete the progress file (and the stored photos when asked). The next
    /// load starts from an empty store.
    ///
    /// Only photos this tool wrote are purged: the canonical file of every
    /// catalog peak and the paths the progress file still references.
    pub fn apply(cfg: &Config, purge_photos: bool) -> AppResult<ResetOutcome> {
        let photos_removed = if purge_photos {
            let tracker = Tracker::open(cfg)?;
            let referenced = tracker
                .store
                .records()
                .iter()
                .filter_map(|r| r.photo.as_deref());
            tracker.photos.purge(&tracker.catalog.peaks, referenced)?
        } else {
            0
        };

        let progress_removed = ProgressStore::reset(&cfg.progress_path())?;

        Ok(ResetOutcome {
            progress_removed,
            photos_removed,
        })
    }
}
