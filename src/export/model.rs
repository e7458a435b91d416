// src/export/model.rs

use crate::models::ViewRow;
use serde::Serialize;

/// Flat export row: one per catalog peak.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PeakExport {
    pub mountain: String,
    pub height: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub region: String,
    pub bagged: bool,
    pub date: String,
    pub photo: String,
    pub activity_link: String,
}

impl From<&ViewRow> for PeakExport {
    fn from(row: &ViewRow) -> Self {
        Self {
            mountain: row.peak.name.clone(),
            height: row.peak.height,
            latitude: row.peak.latitude,
            longitude: row.peak.longitude,
            region: row.peak.region.clone(),
            bagged: row.bagged,
            date: row.date_str(),
            photo: row
                .photo_on_disk()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_default(),
            activity_link: row.link.clone().unwrap_or_default(),
        }
    }
}
