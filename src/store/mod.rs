//! Progress store: durable per-peak state backed by a CSV file.
//!
//! Every mutation goes through [`ProgressStore::commit`], which applies the
//! change in memory and rewrites the file before returning.

pub mod codec;
pub mod persist;
pub mod schema;

pub use schema::SchemaReport;

use crate::catalog::Catalog;
use crate::errors::AppResult;
use crate::models::{FieldChanges, ProgressRecord, ValidationWarning};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
    records: Vec<ProgressRecord>,
    index: HashMap<String, usize>,
    on_disk: bool,
    pub warnings: Vec<ValidationWarning>,
    pub schema: SchemaReport,
}

impl ProgressStore {
    fn build(path: &Path, records: Vec<ProgressRecord>, on_disk: bool) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.mountain.clone(), i))
            .collect();

        Self {
            path: path.to_path_buf(),
            records,
            index,
            on_disk,
            warnings: Vec::new(),
            schema: SchemaReport::default(),
        }
    }

    /// A store with one empty record per catalog peak, as if nothing was
    /// recorded yet. Nothing is written until the first commit.
    pub fn synthesize(path: &Path, catalog: &Catalog) -> Self {
        let records = catalog
            .peaks
            .iter()
            .map(|p| ProgressRecord::empty(&p.name))
            .collect();
        Self::build(path, records, false)
    }

    /// Load the store. A missing file is not an error: it means "no progress yet".
    pub fn load(path: &Path, catalog: &Catalog) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no progress file, starting empty");
            return Ok(Self::synthesize(path, catalog));
        }

        let decoded = codec::decode(fs::File::open(path)?)?;
        let mut store = Self::build(path, decoded.records, true);
        store.warnings = decoded.warnings;
        store.schema = decoded.schema;

        if !store.schema.is_current() {
            info!(
                path = %path.display(),
                added = ?store.schema.added,
                "progress file uses an older layout, missing columns defaulted"
            );
        }
        debug!(records = store.records.len(), "progress loaded");
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the store was read from an existing file.
    pub fn exists_on_disk(&self) -> bool {
        self.on_disk
    }

    pub fn records(&self) -> &[ProgressRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, mountain: &str) -> Option<&ProgressRecord> {
        self.index.get(mountain).map(|&i| &self.records[i])
    }

    /// Records whose peak is not in the catalog.
    pub fn orphans<'a>(&'a self, catalog: &Catalog) -> Vec<&'a ProgressRecord> {
        self.records
            .iter()
            .filter(|r| !catalog.contains(&r.mountain))
            .collect()
    }

    /// Create the record with defaults if needed, then apply only the
    /// fields present in `changes`. In memory only; see [`Self::commit`].
    pub fn upsert(&mut self, mountain: &str, changes: &FieldChanges) -> &ProgressRecord {
        let idx = match self.index.get(mountain) {
            Some(&i) => i,
            None => {
                self.records.push(ProgressRecord::empty(mountain));
                let i = self.records.len() - 1;
                self.index.insert(mountain.to_string(), i);
                i
            }
        };

        self.records[idx].apply(changes);
        &self.records[idx]
    }

    /// Rewrite the whole file atomically.
    pub fn save(&mut self) -> AppResult<()> {
        let data = codec::encode_to_vec(&self.records)?;
        persist::atomic_write(&self.path, &data)?;
        self.on_disk = true;
        info!(path = %self.path.display(), records = self.records.len(), "progress saved");
        Ok(())
    }

    /// Upsert followed by an immediate save.
    pub fn commit(&mut self, mountain: &str, changes: &FieldChanges) -> AppResult<ProgressRecord> {
        let updated = self.upsert(mountain, changes).clone();
        self.save()?;
        Ok(updated)
    }

    /// Serialize every record with the progress schema (backup format).
    pub fn write_csv<W: Write>(&self, writer: W) -> AppResult<()> {
        codec::encode(writer, &self.records)
    }

    /// Delete the backing file. Returns `true` if a file was removed.
    pub fn reset(path: &Path) -> AppResult<bool> {
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        warn!(path = %path.display(), "progress file deleted");
        Ok(true)
    }
}
