use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::store::{ProgressStore, codec};
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Write the progress store, with the progress schema, to `dest_file`.
    ///
    /// Works before anything was recorded: the synthesized store is written.
    /// Returns the final path (the `.zip` when compressing), or `None`
    /// when the user declined to overwrite.
    pub fn backup(
        store: &ProgressStore,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let dest = expand_tilde(dest_file);

        // 1️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 2️⃣ If destination file exists → ask confirmation
        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.clone()
        };
        if !ensure_writable(&target, force)? {
            info("Backup cancelled by user.");
            return Ok(None);
        }

        if !store.exists_on_disk() {
            warning("No progress recorded yet: the backup contains an empty checklist.");
        }

        // 3️⃣ Plain CSV
        if !compress {
            let file = fs::File::create(&target)?;
            store.write_csv(BufWriter::new(file))?;
            success(format!("Backup created: {}", target.display()));
            return Ok(Some(target));
        }

        // 4️⃣ Zip written straight from memory: nothing is staged next to the destination
        let entry = target
            .with_extension("csv")
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "progress.csv".to_string());
        let data = codec::encode_to_vec(store.records())?;
        compress_backup(&target, &entry, &data)?;
        success(format!("Backup created: {}", target.display()));

        Ok(Some(target))
    }
}

/// Write `data` as the single entry `entry` of the archive `zip_path`.
fn compress_backup(zip_path: &Path, entry: &str, data: &[u8]) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry, options)?;
    zip.write_all(data)?;
    zip.finish()?;

    success(format!("Compressed: {}", zip_path.display()));
    Ok(())
}
