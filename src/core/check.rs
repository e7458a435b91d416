use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::models::{FieldChanges, ValidationWarning, WarningSource};
use tracing::info;

/// Everything questionable found in the catalog, the progress file and the
/// photo references.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub warnings: Vec<ValidationWarning>,
    /// Peaks whose recorded photo file no longer exists.
    pub dangling_photos: Vec<String>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn count(&self, source: WarningSource) -> usize {
        self.warnings.iter().filter(|w| w.source == source).count()
    }
}

pub struct CheckLogic;

impl CheckLogic {
    pub fn run(tracker: &Tracker) -> CheckReport {
        let mut report = CheckReport::default();
        report.warnings.extend(tracker.catalog.warnings.iter().cloned());
        report.warnings.extend(tracker.store.warnings.iter().cloned());

        for orphan in tracker.store.orphans(&tracker.catalog) {
            report.warnings.push(ValidationWarning::new(
                WarningSource::Progress,
                0,
                &orphan.mountain,
                "Mountain",
                "",
                "is not in the catalog, record ignored",
            ));
        }

        // Records for unknown peaks are covered above; only look at the view.
        for row in tracker.view() {
            if let Some(photo) = &row.photo {
                let shown = photo.to_string_lossy();
                if row.has_dangling_photo() {
                    report.dangling_photos.push(row.peak.name.clone());
                    report.warnings.push(ValidationWarning::new(
                        WarningSource::Photos,
                        0,
                        &row.peak.name,
                        "Photo",
                        &shown,
                        "does not exist, treated as absent",
                    ));
                } else if !row.bagged {
                    report.warnings.push(ValidationWarning::new(
                        WarningSource::Photos,
                        0,
                        &row.peak.name,
                        "Photo",
                        &shown,
                        "belongs to a peak that is not marked as summited",
                    ));
                }
            }
        }

        report
    }

    /// Clear every dangling photo reference. Returns how many were cleared.
    pub fn fix(tracker: &mut Tracker, report: &CheckReport) -> AppResult<usize> {
        let clear = FieldChanges::new().photo(None);
        for name in &report.dangling_photos {
            tracker.store.commit(name, &clear)?;
        }
        if !report.dangling_photos.is_empty() {
            info!(cleared = report.dangling_photos.len(), "dangling photo references cleared");
        }
        Ok(report.dangling_photos.len())
    }
}
