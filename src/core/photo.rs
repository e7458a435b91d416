use crate::core::tracker::Tracker;
use crate::errors::{AppError, AppResult};
use crate::models::{FieldChanges, Peak, ProgressRecord};
use crate::ui::messages::warning;
use crate::utils::path::slugify;
use image::{ImageFormat, ImageReader, imageops::FilterType};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Directory of summit photos, each bounded to `max_side` pixels.
#[derive(Debug, Clone)]
pub struct PhotoStore {
    pub dir: PathBuf,
    pub max_side: u32,
}

impl PhotoStore {
    pub fn new(dir: PathBuf, max_side: u32) -> Self {
        Self {
            dir,
            max_side: max_side.max(1),
        }
    }

    /// `Pen_y_Fan_12.jpg`: slug of the name plus the catalog row id.
    pub fn file_name_for(peak: &Peak) -> String {
        format!("{}_{}.jpg", slugify(&peak.name), peak.id)
    }

    pub fn path_for(&self, peak: &Peak) -> PathBuf {
        self.dir.join(Self::file_name_for(peak))
    }

    /// Decode `source`, shrink it to fit the bounding box (aspect ratio kept,
    /// never enlarged) and save it as JPEG under the peak's file name.
    pub fn store_image(&self, peak: &Peak, source: &Path) -> AppResult<PathBuf> {
        let ext = source
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if !ACCEPTED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(AppError::Photo(format!(
                "unsupported file type '{}' (use .jpg or .png)",
                source.display()
            )));
        }
        if !source.is_file() {
            return Err(AppError::Photo(format!(
                "file not found: {}",
                source.display()
            )));
        }

        // the extension only filters uploads; the decoder is picked from the content
        let mut img = ImageReader::open(source)?
            .with_guessed_format()?
            .decode()?;
        if img.width() > self.max_side || img.height() > self.max_side {
            img = img.resize(self.max_side, self.max_side, FilterType::Lanczos3);
        }

        fs::create_dir_all(&self.dir)?;
        let dest = self.path_for(peak);
        img.to_rgb8().save_with_format(&dest, ImageFormat::Jpeg)?;

        debug!(
            dest = %dest.display(),
            width = img.width(),
            height = img.height(),
            "photo stored"
        );
        Ok(dest)
    }

    /// Remove a stored file. Returns `false` when it was already gone.
    pub fn delete_file(&self, path: &Path) -> AppResult<bool> {
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// Delete the photos this tool stored: the canonical file of every
    /// catalog peak plus any `referenced` path inside the photo directory.
    /// Other files are left alone. Returns how many files were removed.
    pub fn purge<'a>(
        &self,
        peaks: &[Peak],
        referenced: impl IntoIterator<Item = &'a Path>,
    ) -> AppResult<usize> {
        let candidates: BTreeSet<PathBuf> = peaks
            .iter()
            .map(|p| self.path_for(p))
            .chain(
                referenced
                    .into_iter()
                    .filter(|p| p.starts_with(&self.dir))
                    .map(Path::to_path_buf),
            )
            .collect();

        let mut removed = 0;
        for path in &candidates {
            if path.is_file() && self.delete_file(path)? {
                debug!(path = %path.display(), "photo purged");
                removed += 1;
            }
        }
        Ok(removed)
    }
}

/// High-level business logic for the `photo` command.
pub struct PhotoLogic;

impl PhotoLogic {
    /// Store a photo for a summited peak and record its path.
    pub fn attach(tracker: &mut Tracker, query: &str, source: &Path) -> AppResult<ProgressRecord> {
        let peak = tracker.resolve(query)?;
        if !tracker.row(&peak).bagged {
            return Err(AppError::NotBagged(peak.name));
        }

        let dest = tracker.photos.store_image(&peak, source)?;
        let rec = tracker
            .store
            .commit(&peak.name, &FieldChanges::new().photo(Some(dest)))?;

        info!(peak = %peak.name, "photo attached");
        Ok(rec)
    }

    /// Delete the photo file and clear the reference in one step, so the
    /// progress file never points at a removed file.
    pub fn remove(tracker: &mut Tracker, query: &str) -> AppResult<ProgressRecord> {
        let peak = tracker.resolve(query)?;
        let current = tracker
            .store
            .get(&peak.name)
            .and_then(|r| r.photo.clone())
            .ok_or_else(|| AppError::Photo(format!("no photo recorded for {}", peak.name)))?;

        if !tracker.photos.delete_file(&current)? {
            warning(format!(
                "Photo file {} was already missing; clearing the reference.",
                current.display()
            ));
        }

        let rec = tracker
            .store
            .commit(&peak.name, &FieldChanges::new().photo(None))?;

        info!(peak = %peak.name, "photo removed");
        Ok(rec)
    }
}
