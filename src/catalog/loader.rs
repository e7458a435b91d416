use super::Catalog;
use super::normalize::{parse_coordinate, parse_height};
use crate::errors::{AppError, AppResult};
use crate::models::{Peak, ValidationWarning, WarningSource};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub const COL_MOUNTAIN: &str = "Mountain";
pub const COL_HEIGHT: &str = "Height";
pub const COL_LATITUDE: &str = "Latitude";
pub const COL_LONGITUDE: &str = "Longitude";
pub const COL_REGION: &str = "Region";

/// Column positions resolved from the header row.
struct Columns {
    mountain: usize,
    height: usize,
    latitude: Option<usize>,
    longitude: Option<usize>,
    region: Option<usize>,
}

pub(crate) fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
}

impl Columns {
    fn resolve(headers: &StringRecord) -> AppResult<Self> {
        let required = |name: &str| {
            find_column(headers, name)
                .ok_or_else(|| AppError::CatalogFormat(format!("missing '{}' column", name)))
        };

        Ok(Self {
            mountain: required(COL_MOUNTAIN)?,
            height: required(COL_HEIGHT)?,
            latitude: find_column(headers, COL_LATITUDE),
            longitude: find_column(headers, COL_LONGITUDE),
            region: find_column(headers, COL_REGION),
        })
    }
}

fn field<'a>(record: &'a StringRecord, idx: Option<usize>) -> &'a str {
    idx.and_then(|i| record.get(i)).unwrap_or("").trim()
}

/// Load the peak catalog from a CSV file.
///
/// A missing file is fatal. Malformed heights become 0 and malformed
/// coordinates become `None`; each coercion is recorded as a warning.
pub fn load_catalog(path: &Path) -> AppResult<Catalog> {
    if !path.is_file() {
        return Err(AppError::CatalogNotFound(path.display().to_string()));
    }

    let file = std::fs::File::open(path)?;
    let mut catalog = read_catalog(file)?;
    catalog.source = Some(path.to_path_buf());

    info!(
        path = %path.display(),
        peaks = catalog.peaks.len(),
        warnings = catalog.warnings.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Parse a catalog from any reader. Used by [`load_catalog`] and by tests.
pub fn read_catalog<R: Read>(reader: R) -> AppResult<Catalog> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let cols = Columns::resolve(&headers)?;

    let mut peaks: Vec<Peak> = Vec::new();
    let mut warnings: Vec<ValidationWarning> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let warn = |line: usize, peak: &str, field: &str, value: &str, msg: &str| {
        ValidationWarning::new(WarningSource::Catalog, line, peak, field, value, msg)
    };

    for (row_idx, result) in rdr.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row_idx + 2);

        let name = field(&record, Some(cols.mountain));
        if name.is_empty() {
            warnings.push(warn(line, "", COL_MOUNTAIN, "", "is empty, row skipped"));
            continue;
        }
        if !seen.insert(name.to_string()) {
            warnings.push(warn(line, name, COL_MOUNTAIN, name, "is duplicated, row skipped"));
            continue;
        }

        let height_raw = field(&record, Some(cols.height));
        let height = match parse_height(height_raw) {
            Some(h) => h,
            None => {
                warnings.push(warn(line, name, COL_HEIGHT, height_raw, "is not a height, using 0"));
                0
            }
        };

        let mut coordinate = |col: Option<usize>, label: &str| {
            let raw = field(&record, col);
            let parsed = parse_coordinate(raw);
            if parsed.is_none() && col.is_some() {
                warnings.push(warn(line, name, label, raw, "is not a number, left empty"));
            }
            parsed
        };
        let latitude = coordinate(cols.latitude, COL_LATITUDE);
        let longitude = coordinate(cols.longitude, COL_LONGITUDE);

        peaks.push(Peak {
            id: row_idx,
            name: name.to_string(),
            height,
            height_label: height_raw.to_string(),
            latitude,
            longitude,
            region: field(&record, cols.region).to_string(),
        });
    }

    // stable: equal heights keep file order
    peaks.sort_by(|a, b| b.height.cmp(&a.height));

    debug!(peaks = peaks.len(), "catalog parsed");
    Ok(Catalog::new(peaks, warnings))
}
