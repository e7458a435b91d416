use crate::core::tracker::Tracker;
use crate::errors::{AppError, AppResult};
use crate::models::{FieldChanges, ProgressRecord};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use tracing::info;

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://\S+$").expect("link pattern is valid"));

/// Activity links must be http(s) URLs.
pub fn validate_link(raw: &str) -> AppResult<String> {
    let s = raw.trim();
    if LINK_RE.is_match(s) {
        Ok(s.to_string())
    } else {
        Err(AppError::InvalidLink(raw.to_string()))
    }
}

/// High-level business logic for `bag`, `unbag` and `edit`.
pub struct ProgressLogic;

impl ProgressLogic {
    /// Mark a peak as summited, optionally with date and activity link.
    pub fn bag(
        tracker: &mut Tracker,
        query: &str,
        date: Option<NaiveDate>,
        link: Option<&str>,
    ) -> AppResult<ProgressRecord> {
        let peak = tracker.resolve(query)?;

        let mut changes = FieldChanges::new().bagged(true);
        if let Some(d) = date {
            changes = changes.date(Some(d));
        }
        if let Some(l) = link {
            changes = changes.link(Some(validate_link(l)?));
        }

        let rec = tracker.store.commit(&peak.name, &changes)?;
        info!(peak = %peak.name, "peak bagged");
        Ok(rec)
    }

    /// Clear the bagged flag. Date, photo and link are kept.
    pub fn unbag(tracker: &mut Tracker, query: &str) -> AppResult<ProgressRecord> {
        let peak = tracker.resolve(query)?;
        let rec = tracker
            .store
            .commit(&peak.name, &FieldChanges::new().bagged(false))?;
        info!(peak = %peak.name, "peak unbagged");
        Ok(rec)
    }

    /// Change date and/or link. `Some(None)` clears a field.
    pub fn edit(
        tracker: &mut Tracker,
        query: &str,
        date: Option<Option<NaiveDate>>,
        link: Option<Option<&str>>,
    ) -> AppResult<ProgressRecord> {
        let peak = tracker.resolve(query)?;

        let mut changes = FieldChanges::new();
        if let Some(d) = date {
            changes = changes.date(d);
        }
        if let Some(l) = link {
            let validated = l.map(validate_link).transpose()?;
            changes = changes.link(validated);
        }

        if changes.is_empty() {
            // nothing to write
            return Ok(tracker
                .store
                .get(&peak.name)
                .cloned()
                .unwrap_or_else(|| ProgressRecord::empty(&peak.name)));
        }

        let rec = tracker.store.commit(&peak.name, &changes)?;
        info!(peak = %peak.name, "peak annotations updated");
        Ok(rec)
    }
}
