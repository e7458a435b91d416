use super::peak::Peak;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One row of the unified view: a catalog peak plus its progress fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewRow {
    pub peak: Peak,
    pub bagged: bool,
    pub date: Option<NaiveDate>,
    pub photo: Option<PathBuf>,
    pub link: Option<String>,
}

impl ViewRow {
    pub fn unbagged(peak: Peak) -> Self {
        Self {
            peak,
            bagged: false,
            date: None,
            photo: None,
            link: None,
        }
    }

    pub fn date_str(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// Photo path, only when the referenced file still exists.
    pub fn photo_on_disk(&self) -> Option<&Path> {
        self.photo.as_deref().filter(|p| p.is_file())
    }

    pub fn has_dangling_photo(&self) -> bool {
        self.photo.is_some() && self.photo_on_disk().is_none()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Todo,
    Done,
}

/// Checklist filter: status, case-insensitive name search, region.
#[derive(Debug, Clone, Default)]
pub struct ViewFilter {
    pub status: StatusFilter,
    pub search: Option<String>,
    pub region: Option<String>,
}

impl ViewFilter {
    pub fn matches(&self, row: &ViewRow) -> bool {
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Todo => !row.bagged,
            StatusFilter::Done => row.bagged,
        };

        let search_ok = match &self.search {
            Some(s) if !s.trim().is_empty() => row
                .peak
                .name
                .to_lowercase()
                .contains(&s.trim().to_lowercase()),
            _ => true,
        };

        let region_ok = match &self.region {
            Some(r) if !r.trim().is_empty() => row.peak.region.eq_ignore_ascii_case(r.trim()),
            _ => true,
        };

        status_ok && search_ok && region_ok
    }

    pub fn apply<'a>(&self, rows: &'a [ViewRow]) -> Vec<&'a ViewRow> {
        rows.iter().filter(|r| self.matches(r)).collect()
    }
}
