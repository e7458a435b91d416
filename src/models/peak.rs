use serde::Serialize;

/// A summit from the catalog file. Read-only at runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Peak {
    pub id: usize,             // ⇔ zero-based row in the catalog file (before sorting)
    pub name: String,          // ⇔ Mountain
    pub height: u32,           // ⇔ Height, normalized to whole metres (0 if unreadable)
    pub height_label: String,  // ⇔ Height as written in the file
    pub latitude: Option<f64>, // ⇔ Latitude
    pub longitude: Option<f64>, // ⇔ Longitude
    pub region: String,        // ⇔ Region ("" when the column is absent)
}

impl Peak {
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// "52.0000, -3.0000" or "--" when either coordinate is missing.
    pub fn coordinates_str(&self) -> String {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => format!("{:.4}, {:.4}", lat, lon),
            _ => "--".to_string(),
        }
    }
}
