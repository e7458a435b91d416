use chrono::NaiveDate;
use std::path::PathBuf;

/// Per-peak user state, keyed by peak name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressRecord {
    pub mountain: String,
    pub bagged: bool,
    pub date: Option<NaiveDate>,
    pub photo: Option<PathBuf>,
    pub link: Option<String>,
}

impl ProgressRecord {
    /// Fresh record with every field unset.
    pub fn empty(mountain: &str) -> Self {
        Self {
            mountain: mountain.to_string(),
            ..Default::default()
        }
    }

    /// Apply only the fields present in `changes`.
    pub fn apply(&mut self, changes: &FieldChanges) {
        if let Some(b) = changes.bagged {
            self.bagged = b;
        }
        if let Some(d) = &changes.date {
            self.date = *d;
        }
        if let Some(p) = &changes.photo {
            self.photo = p.clone();
        }
        if let Some(l) = &changes.link {
            self.link = l.clone();
        }
    }

    pub fn date_str(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// A partial update of a [`ProgressRecord`].
///
/// Outer `None` leaves the field untouched; `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldChanges {
    pub bagged: Option<bool>,
    pub date: Option<Option<NaiveDate>>,
    pub photo: Option<Option<PathBuf>>,
    pub link: Option<Option<String>>,
}

impl FieldChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bagged(mut self, value: bool) -> Self {
        self.bagged = Some(value);
        self
    }

    pub fn date(mut self, value: Option<NaiveDate>) -> Self {
        self.date = Some(value);
        self
    }

    pub fn photo(mut self, value: Option<PathBuf>) -> Self {
        self.photo = Some(value);
        self
    }

    pub fn link(mut self, value: Option<String>) -> Self {
        self.link = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bagged.is_none() && self.date.is_none() && self.photo.is_none() && self.link.is_none()
    }
}
