use crate::catalog::Catalog;
use crate::models::{Peak, ViewRow};
use crate::store::ProgressStore;

/// Left join of catalog and progress on peak name, in catalog order.
///
/// Exactly one row per catalog peak; peaks without a record get
/// bagged=false and empty annotations. Progress rows for unknown peaks are
/// not part of the view.
pub fn build_view(catalog: &Catalog, store: &ProgressStore) -> Vec<ViewRow> {
    catalog
        .peaks
        .iter()
        .map(|peak| merge_row(peak, store))
        .collect()
}

pub fn merge_row(peak: &Peak, store: &ProgressStore) -> ViewRow {
    match store.get(&peak.name) {
        Some(rec) => ViewRow {
            peak: peak.clone(),
            bagged: rec.bagged,
            date: rec.date,
            photo: rec.photo.clone(),
            link: rec.link.clone(),
        },
        None => ViewRow::unbagged(peak.clone()),
    }
}
