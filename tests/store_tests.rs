mod common;
use chrono::NaiveDate;
use common::{Sandbox, sample_catalog};
use rpeaklog::errors::AppError;
use rpeaklog::models::{FieldChanges, ProgressRecord, WarningSource};
use rpeaklog::store::ProgressStore;
use rpeaklog::store::codec::{decode, parse_bagged};
use rpeaklog::store::persist::tmp_path;
use std::path::PathBuf;

fn sorted(records: &[ProgressRecord]) -> Vec<ProgressRecord> {
    let mut v = records.to_vec();
    v.sort_by(|a, b| a.mountain.cmp(&b.mountain));
    v
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_missing_file_synthesizes_empty_store() {
    let sb = Sandbox::new();
    let catalog = sample_catalog();

    let store = ProgressStore::load(&sb.progress(), &catalog).expect("load");
    assert!(!store.exists_on_disk());
    assert_eq!(store.len(), catalog.len());
    for (rec, peak) in store.records().iter().zip(&catalog.peaks) {
        assert_eq!(rec, &ProgressRecord::empty(&peak.name));
    }
    // nothing written by a load
    assert!(!sb.progress().exists());
}

#[test]
fn test_save_load_is_a_fixed_point() {
    let sb = Sandbox::new();
    let catalog = sample_catalog();
    sb.write_progress(
        "Mountain,Bagged,Date,Photo,ActivityLink\n\
         Pen y Fan,True,2024-06-01,/tmp/pen.jpg,https://www.strava.com/activities/1\n\
         Corn Du,False,,,\n\
         \"Snowdon (Yr Wyddfa)\",True,,,\n",
    );

    let mut first = ProgressStore::load(&sb.progress(), &catalog).expect("load");
    first.save().expect("save");
    let second = ProgressStore::load(&sb.progress(), &catalog).expect("reload");

    assert_eq!(sorted(first.records()), sorted(second.records()));
    let pen = second.get("Pen y Fan").expect("record");
    assert!(pen.bagged);
    assert_eq!(pen.date, Some(ymd(2024, 6, 1)));
    assert_eq!(pen.photo, Some(PathBuf::from("/tmp/pen.jpg")));
    assert_eq!(pen.link.as_deref(), Some("https://www.strava.com/activities/1"));
}

#[test]
fn test_save_writes_current_header_and_bool_tokens() {
    let sb = Sandbox::new();
    let catalog = sample_catalog();
    let mut store = ProgressStore::load(&sb.progress(), &catalog).expect("load");
    store
        .commit("Pen y Fan", &FieldChanges::new().bagged(true))
        .expect("commit");

    let content = sb.read_progress();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("Mountain,Bagged,Date,Photo,ActivityLink"));
    assert!(content.contains("Pen y Fan,True,,,"));
    assert!(content.contains("Corn Du,False,,,"));
}

#[test]
fn test_upsert_twice_keeps_one_record() {
    let sb = Sandbox::new();
    let catalog = sample_catalog();
    sb.write_progress("Mountain,Bagged,Date,Photo,ActivityLink\n");

    let mut store = ProgressStore::load(&sb.progress(), &catalog).expect("load");
    assert!(store.is_empty());

    let change = FieldChanges::new().bagged(true).date(Some(ymd(2024, 7, 14)));
    store.commit("Tryfan", &change).expect("first");
    store.commit("Tryfan", &change).expect("second");
    assert_eq!(store.len(), 1);

    let reloaded = ProgressStore::load(&sb.progress(), &catalog).expect("reload");
    assert_eq!(reloaded.len(), 1);
    assert_eq!(sb.read_progress().matches("Tryfan").count(), 1);
}

#[test]
fn test_partial_changes_do_not_clobber_other_fields() {
    let sb = Sandbox::new();
    let catalog = sample_catalog();
    let mut store = ProgressStore::load(&sb.progress(), &catalog).expect("load");

    store.upsert(
        "Corn Du",
        &FieldChanges::new()
            .bagged(true)
            .date(Some(ymd(2023, 5, 2)))
            .photo(Some(PathBuf::from("photos/Corn_Du_3.jpg")))
            .link(Some("https://example.org/a".into())),
    );

    // link only
    let rec = store
        .upsert("Corn Du", &FieldChanges::new().link(Some("https://example.org/b".into())))
        .clone();
    assert!(rec.bagged);
    assert_eq!(rec.date, Some(ymd(2023, 5, 2)));
    assert_eq!(rec.photo, Some(PathBuf::from("photos/Corn_Du_3.jpg")));
    assert_eq!(rec.link.as_deref(), Some("https://example.org/b"));

    // bagged only
    let rec = store.upsert("Corn Du", &FieldChanges::new().bagged(false)).clone();
    assert!(!rec.bagged);
    assert_eq!(rec.date, Some(ymd(2023, 5, 2)));
    assert!(rec.photo.is_some());

    // clearing date leaves the rest
    let rec = store.upsert("Corn Du", &FieldChanges::new().date(None)).clone();
    assert_eq!(rec.date, None);
    assert_eq!(rec.link.as_deref(), Some("https://example.org/b"));
}

#[test]
fn test_duplicate_rows_keep_the_later_one() {
    let sb = Sandbox::new();
    let catalog = sample_catalog();
    sb.write_progress(
        "Mountain,Bagged,Date,Photo,ActivityLink\n\
         Pen y Fan,False,,,\n\
         Corn Du,True,,,\n\
         Pen y Fan,True,2024-08-09,,\n",
    );

    let store = ProgressStore::load(&sb.progress(), &catalog).expect("load");
    assert_eq!(store.len(), 2);

    let pen = store.get("Pen y Fan").expect("record");
    assert!(pen.bagged);
    assert_eq!(pen.date, Some(ymd(2024, 8, 9)));

    let dup = store
        .warnings
        .iter()
        .find(|w| w.peak == "Pen y Fan")
        .expect("duplicate reported");
    assert_eq!(dup.line, 2);
}

#[test]
fn test_file_without_activity_link_column_loads() {
    let sb = Sandbox::new();
    let catalog = sample_catalog();
    sb.write_progress(
        "Mountain,Bagged,Date,Photo\n\
         Pen y Fan,True,2024-06-01,\n\
         Corn Du,False,,\n",
    );

    let mut store = ProgressStore::load(&sb.progress(), &catalog).expect("load");
    assert_eq!(store.schema.added, vec!["ActivityLink"]);
    assert!(!store.schema.is_current());
    assert!(store.records().iter().all(|r| r.link.is_none()));
    assert!(store.get("Pen y Fan").expect("record").bagged);

    // next save upgrades the layout
    store
        .commit("Corn Du", &FieldChanges::new().link(Some("https://example.org/x".into())))
        .expect("commit");
    let upgraded = ProgressStore::load(&sb.progress(), &catalog).expect("reload");
    assert!(upgraded.schema.is_current());
    assert_eq!(
        upgraded.get("Corn Du").and_then(|r| r.link.clone()).as_deref(),
        Some("https://example.org/x")
    );
}

#[test]
fn test_minimal_file_defaults_every_missing_column() {
    let decoded = decode("Mountain\nPen y Fan\n".as_bytes()).expect("decode");
    assert_eq!(decoded.schema.added, vec!["Bagged", "Date", "Photo", "ActivityLink"]);
    assert_eq!(decoded.records, vec![ProgressRecord::empty("Pen y Fan")]);
}

#[test]
fn test_file_without_mountain_column_is_rejected() {
    let err = decode("Peak,Bagged\nPen y Fan,True\n".as_bytes()).unwrap_err();
    assert!(matches!(err, AppError::ProgressFormat(_)));
}

#[test]
fn test_bagged_tokens() {
    assert_eq!(parse_bagged("True"), Some(true));
    assert_eq!(parse_bagged("true"), Some(true));
    assert_eq!(parse_bagged("1"), Some(true));
    assert_eq!(parse_bagged("1.0"), Some(true));
    assert_eq!(parse_bagged("x"), Some(true));
    assert_eq!(parse_bagged("False"), Some(false));
    assert_eq!(parse_bagged(""), Some(false));
    assert_eq!(parse_bagged("0"), Some(false));
    assert_eq!(parse_bagged("maybe"), None);
}

#[test]
fn test_bad_bagged_and_date_values_become_warnings() {
    let decoded = decode(
        "Mountain,Bagged,Date,Photo,ActivityLink\n\
         Pen y Fan,maybe,2024-13-45,,\n\
         Corn Du,True,2024-06-01 10:30:00,,\n"
            .as_bytes(),
    )
    .expect("decode");

    let pen = &decoded.records[0];
    assert!(!pen.bagged);
    assert_eq!(pen.date, None);

    let corn = &decoded.records[1];
    assert!(corn.bagged);
    assert_eq!(corn.date, Some(ymd(2024, 6, 1)));

    let fields: Vec<&str> = decoded.warnings.iter().map(|w| w.field.as_str()).collect();
    assert_eq!(fields, vec!["Bagged", "Date"]);
    assert!(decoded.warnings.iter().all(|w| w.source == WarningSource::Progress));
}

#[test]
fn test_orphan_records_are_kept_but_listed() {
    let sb = Sandbox::new();
    let catalog = sample_catalog();
    sb.write_progress("Mountain,Bagged,Date,Photo,ActivityLink\nBen Nevis,True,,,\nCorn Du,True,,,\n");

    let mut store = ProgressStore::load(&sb.progress(), &catalog).expect("load");
    let orphans: Vec<&str> = store
        .orphans(&catalog)
        .iter()
        .map(|r| r.mountain.as_str())
        .collect();
    assert_eq!(orphans, vec!["Ben Nevis"]);

    store.save().expect("save");
    assert!(sb.read_progress().contains("Ben Nevis,True"));
}

#[test]
fn test_save_is_atomic_and_leaves_no_temp_file() {
    let sb = Sandbox::new();
    let catalog = sample_catalog();
    let nested = sb.path("data/nested/progress.csv");

    let mut store = ProgressStore::load(&nested, &catalog).expect("load");
    store
        .commit("Pen y Fan", &FieldChanges::new().bagged(true))
        .expect("commit creates parent dirs");

    assert!(nested.exists());
    assert!(!tmp_path(&nested).exists());
    assert_eq!(
        tmp_path(&nested).file_name().and_then(|n| n.to_str()),
        Some("progress.csv.tmp")
    );
    assert!(store.exists_on_disk());
}

#[test]
fn test_reset_returns_to_empty_state() {
    let sb = Sandbox::new();
    let catalog = sample_catalog();
    let pristine = ProgressStore::load(&sb.progress(), &catalog).expect("load");

    let mut store = ProgressStore::load(&sb.progress(), &catalog).expect("load");
    store
        .commit("Pen y Fan", &FieldChanges::new().bagged(true).link(Some("https://e.org/1".into())))
        .expect("commit");

    assert!(ProgressStore::reset(&sb.progress()).expect("reset"));
    assert!(!sb.progress().exists());
    // second reset has nothing to delete
    assert!(!ProgressStore::reset(&sb.progress()).expect("reset again"));

    let after = ProgressStore::load(&sb.progress(), &catalog).expect("reload");
    assert!(!after.exists_on_disk());
    assert_eq!(after.records(), pristine.records());
    assert!(after.records().iter().all(|r| !r.bagged && r.link.is_none()));
}

#[test]
fn test_write_csv_matches_file_schema() {
    let sb = Sandbox::new();
    let catalog = sample_catalog();
    let store = ProgressStore::load(&sb.progress(), &catalog).expect("load");

    let mut buf = Vec::new();
    store.write_csv(&mut buf).expect("write");
    let text = String::from_utf8(buf).expect("utf8");

    assert!(text.starts_with("Mountain,Bagged,Date,Photo,ActivityLink\n"));
    assert_eq!(text.lines().count(), catalog.len() + 1);
    assert!(text.contains("\"Snowdon (Yr Wyddfa)\",False") || text.contains("Snowdon (Yr Wyddfa),False"));
}
