//! CSV encoding of progress records.

use super::schema::{
    COL_BAGGED, COL_DATE, ColumnMap, HEADER, SchemaReport, map_columns,
};
use crate::errors::{AppError, AppResult};
use crate::models::{ProgressRecord, ValidationWarning, WarningSource};
use crate::utils::date::parse_stored_date;
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Everything read from a progress file.
#[derive(Debug, Default)]
pub struct Decoded {
    pub records: Vec<ProgressRecord>,
    pub warnings: Vec<ValidationWarning>,
    pub schema: SchemaReport,
}

/// Boolean-like tokens. Empty counts as false; unknown tokens give `None`.
pub fn parse_bagged(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "0" | "0.0" | "no" | "n" => Some(false),
        "true" | "1" | "1.0" | "yes" | "y" | "x" => Some(true),
        _ => None,
    }
}

pub fn format_bagged(bagged: bool) -> &'static str {
    if bagged { "True" } else { "False" }
}

fn cell<'a>(record: &'a StringRecord, idx: Option<usize>) -> &'a str {
    idx.and_then(|i| record.get(i)).unwrap_or("").trim()
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}

fn decode_record(
    record: &StringRecord,
    cols: &ColumnMap,
    line: usize,
    warnings: &mut Vec<ValidationWarning>,
) -> ProgressRecord {
    let mountain = cell(record, Some(cols.mountain)).to_string();

    let bagged_raw = cell(record, cols.bagged);
    let bagged = parse_bagged(bagged_raw).unwrap_or_else(|| {
        warnings.push(ValidationWarning::new(
            WarningSource::Progress,
            line,
            &mountain,
            COL_BAGGED,
            bagged_raw,
            "is not a yes/no value, treated as not summited",
        ));
        false
    });

    let date_raw = cell(record, cols.date);
    let date = if date_raw.is_empty() {
        None
    } else {
        let parsed = parse_stored_date(date_raw);
        if parsed.is_none() {
            warnings.push(ValidationWarning::new(
                WarningSource::Progress,
                line,
                &mountain,
                COL_DATE,
                date_raw,
                "is not a YYYY-MM-DD date, ignored",
            ));
        }
        parsed
    };

    ProgressRecord {
        bagged,
        date,
        photo: non_empty(cell(record, cols.photo)).map(PathBuf::from),
        link: non_empty(cell(record, cols.link)),
        mountain,
    }
}

/// Read a progress file. Duplicate peak names keep the last row.
pub fn decode<R: Read>(reader: R) -> AppResult<Decoded> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let (cols, schema) = map_columns(&headers)
        .ok_or_else(|| AppError::ProgressFormat("missing 'Mountain' column".into()))?;

    let mut warnings = Vec::new();
    let mut rows: Vec<(usize, ProgressRecord)> = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(i + 2);

        let rec = decode_record(&record, &cols, line, &mut warnings);
        if rec.mountain.is_empty() {
            warnings.push(ValidationWarning::new(
                WarningSource::Progress,
                line,
                "",
                "Mountain",
                "",
                "is empty, row skipped",
            ));
            continue;
        }
        rows.push((line, rec));
    }

    // last occurrence wins
    let mut last: HashMap<String, usize> = HashMap::new();
    for (i, (_, rec)) in rows.iter().enumerate() {
        last.insert(rec.mountain.clone(), i);
    }

    let mut records = Vec::with_capacity(last.len());
    for (i, (line, rec)) in rows.into_iter().enumerate() {
        if last.get(&rec.mountain) == Some(&i) {
            records.push(rec);
        } else {
            warnings.push(ValidationWarning::new(
                WarningSource::Progress,
                line,
                &rec.mountain,
                "Mountain",
                "",
                "appears again later in the file, earlier row dropped",
            ));
        }
    }

    Ok(Decoded {
        records,
        warnings,
        schema,
    })
}

/// Write records with the current header.
pub fn encode<W: Write>(writer: W, records: &[ProgressRecord]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(HEADER)?;

    for r in records {
        let photo = r
            .photo
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();

        wtr.write_record([
            r.mountain.as_str(),
            format_bagged(r.bagged),
            r.date_str().as_str(),
            photo.as_str(),
            r.link.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn encode_to_vec(records: &[ProgressRecord]) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();
    encode(&mut buf, records)?;
    Ok(buf)
}
