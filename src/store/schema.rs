//! Progress file schema and the forward-compatible column migrations.

use crate::catalog::find_column;
use csv::StringRecord;

pub const COL_MOUNTAIN: &str = "Mountain";
pub const COL_BAGGED: &str = "Bagged";
pub const COL_DATE: &str = "Date";
pub const COL_PHOTO: &str = "Photo";
pub const COL_LINK: &str = "ActivityLink";

/// Current header, in write order.
pub const HEADER: [&str; 5] = [COL_MOUNTAIN, COL_BAGGED, COL_DATE, COL_PHOTO, COL_LINK];

/// Column positions found in a progress file. `None` means the column is
/// missing and every record gets the default for it.
#[derive(Debug, Clone)]
pub(crate) struct ColumnMap {
    pub mountain: usize,
    pub bagged: Option<usize>,
    pub date: Option<usize>,
    pub photo: Option<usize>,
    pub link: Option<usize>,
}

/// What a load found and which columns had to be added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaReport {
    pub added: Vec<&'static str>,
}

impl SchemaReport {
    /// True when the file already had every current column.
    pub fn is_current(&self) -> bool {
        self.added.is_empty()
    }
}

/// Resolve the header row. Returns `None` when the key column is absent.
pub(crate) fn map_columns(headers: &StringRecord) -> Option<(ColumnMap, SchemaReport)> {
    let mountain = find_column(headers, COL_MOUNTAIN)?;
    let mut report = SchemaReport::default();

    let mut optional = |name: &'static str| {
        let idx = find_column(headers, name);
        if idx.is_none() {
            report.added.push(name);
        }
        idx
    };

    let map = ColumnMap {
        mountain,
        bagged: optional(COL_BAGGED),
        date: optional(COL_DATE),
        photo: optional(COL_PHOTO),
        link: optional(COL_LINK),
    };

    Some((map, report))
}
