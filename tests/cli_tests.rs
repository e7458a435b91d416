mod common;
use common::{Sandbox, rpl, write_png};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::io::Read;

#[test]
fn test_help_lists_commands() {
    rpl()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("bag"))
        .stdout(contains("stats"))
        .stdout(contains("backup"));
}

#[test]
fn test_missing_catalog_is_fatal() {
    let sb = Sandbox::empty();
    sb.cmd()
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Missing catalog file"));
    assert!(!sb.progress().exists());
}

#[test]
fn test_list_shows_every_peak_in_height_order() {
    let sb = Sandbox::new();
    let out = sb.cmd().arg("list").assert().success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).expect("utf8");

    let snowdon = stdout.find("Snowdon (Yr Wyddfa)").expect("snowdon listed");
    let pen = stdout.find("Pen y Fan").expect("pen listed");
    let mystery = stdout.find("Mystery Hill").expect("mystery listed");
    assert!(snowdon < pen && pen < mystery);
    assert!(stdout.contains("0/5 summited"));
    // listing never creates the progress file
    assert!(!sb.progress().exists());
}

#[test]
fn test_bag_then_show_and_list_done() {
    let sb = Sandbox::new();
    sb.cmd()
        .args([
            "bag",
            "Pen y Fan",
            "--date",
            "2024-06-01",
            "--link",
            "https://www.strava.com/activities/42",
        ])
        .assert()
        .success()
        .stdout(contains("Pen y Fan summited on 2024-06-01"));

    assert!(sb.read_progress().contains("Pen y Fan,True,2024-06-01,,https://www.strava.com/activities/42"));

    sb.cmd()
        .args(["show", "pen y fan"])
        .assert()
        .success()
        .stdout(contains("2024-06-01"))
        .stdout(contains("https://www.strava.com/activities/42"))
        .stdout(contains("Brecon Beacons"));

    sb.cmd()
        .args(["list", "--filter", "done"])
        .assert()
        .success()
        .stdout(contains("Pen y Fan"))
        .stdout(contains("Corn Du").not());
}

#[test]
fn test_bag_accepts_unique_partial_name() {
    let sb = Sandbox::new();
    sb.cmd().args(["bag", "wyddfa"]).assert().success();
    assert!(sb.read_progress().contains("Snowdon (Yr Wyddfa),True"));
}

#[test]
fn test_ambiguous_and_unknown_names_fail() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["bag", "pen"])
        .assert()
        .failure()
        .stderr(contains("matches several peaks"));

    sb.cmd()
        .args(["bag", "Ben Nevis"])
        .assert()
        .failure()
        .stderr(contains("No peak matches"));

    assert!(!sb.progress().exists());
}

#[test]
fn test_invalid_link_and_date_write_nothing() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["bag", "Corn Du", "--link", "ftp://example.org/x"])
        .assert()
        .failure()
        .stderr(contains("Invalid activity link"));

    sb.cmd()
        .args(["bag", "Corn Du", "--date", "01/06/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    assert!(!sb.progress().exists());
}

#[test]
fn test_unbag_keeps_date_and_edit_clears_it() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["bag", "Corn Du", "-d", "2023-04-05"])
        .assert()
        .success();
    sb.cmd().args(["unbag", "Corn Du"]).assert().success();
    assert!(sb.read_progress().contains("Corn Du,False,2023-04-05,,"));

    sb.cmd()
        .args(["edit", "Corn Du", "--clear-date", "--link", "https://example.org/run"])
        .assert()
        .success();
    assert!(sb.read_progress().contains("Corn Du,False,,,https://example.org/run"));
}

#[test]
fn test_edit_rejects_conflicting_flags() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["edit", "Corn Du", "--date", "2024-01-01", "--clear-date"])
        .assert()
        .failure();
}

#[test]
fn test_stats_reports_completion() {
    let sb = Sandbox::new();
    sb.cmd().args(["bag", "Pen y Fan"]).assert().success();

    sb.cmd()
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("1/5"))
        .stdout(contains("Completion:    20%"))
        .stdout(contains("886m"))
        .stdout(contains("Brecon Beacons"));
}

#[test]
fn test_photo_add_and_delete() {
    let sb = Sandbox::new();
    let src = sb.path("summit.png");
    write_png(&src, 1000, 500);

    sb.cmd()
        .args(["photo", "Corn Du", "--add"])
        .arg(&src)
        .assert()
        .failure()
        .stderr(contains("not marked as summited"));

    sb.cmd().args(["bag", "Corn Du"]).assert().success();
    sb.cmd()
        .args(["photo", "Corn Du", "--add"])
        .arg(&src)
        .assert()
        .success()
        .stdout(contains("Photo saved for Corn Du"));

    let stored = sb.photos().join("Corn_Du_3.jpg");
    assert_eq!(image::image_dimensions(&stored).expect("dims"), (800, 400));

    sb.cmd()
        .args(["photo", "Corn Du", "--delete"])
        .assert()
        .success();
    assert!(!stored.exists());
}

#[test]
fn test_photo_requires_an_action() {
    let sb = Sandbox::new();
    sb.cmd().args(["photo", "Corn Du"]).assert().failure();
}

#[test]
fn test_check_reports_coerced_catalog_values() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(contains("Catalog: 5 peaks, 2 warning(s)"))
        .stdout(contains("Progress: no file yet"))
        .stdout(contains("Mystery Hill"));
}

#[test]
fn test_check_fix_clears_missing_photo() {
    let sb = Sandbox::new();
    let ghost = sb.photos().join("ghost.jpg");
    sb.write_progress(&format!(
        "Mountain,Bagged,Date,Photo,ActivityLink\nPen y Fan,True,,{},\n",
        ghost.display()
    ));

    sb.cmd()
        .args(["check", "--fix"])
        .assert()
        .success()
        .stdout(contains("Cleared 1 dangling photo reference(s)"));
    assert!(!sb.read_progress().contains("ghost.jpg"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let sb = Sandbox::new();
    sb.cmd().args(["bag", "Corn Du"]).assert().success();

    let plain = sb.path("backups/progress_backup.csv");
    sb.cmd()
        .args(["backup", "--file"])
        .arg(&plain)
        .assert()
        .success()
        .stdout(contains("Backup created"));
    let content = fs::read_to_string(&plain).expect("backup");
    assert!(content.starts_with("Mountain,Bagged,Date,Photo,ActivityLink"));
    assert!(content.contains("Corn Du,True"));

    // existing file, --force skips the prompt
    sb.cmd()
        .args(["backup", "--force", "--file"])
        .arg(&plain)
        .assert()
        .success();

    let zipped = sb.path("backups/archive.zip");
    sb.cmd()
        .args(["backup", "--compress", "--file"])
        .arg(&zipped)
        .assert()
        .success()
        .stdout(contains("Compressed"));
    assert!(zipped.is_file());
    assert!(!sb.path("backups/archive.csv").exists());
}

#[test]
fn test_compressed_backup_never_touches_same_named_csv() {
    let sb = Sandbox::new();
    sb.cmd().args(["bag", "Pen y Fan"]).assert().success();

    let notes = sb.path("summits.csv");
    fs::write(&notes, "precious,user,data\n").expect("write");
    sb.cmd()
        .args(["backup", "--compress", "--file"])
        .arg(&notes)
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Compressed"));
    assert_eq!(
        fs::read_to_string(&notes).expect("still there"),
        "precious,user,data\n"
    );

    let archive = fs::File::open(sb.path("summits.zip")).expect("zip written");
    let mut zip = zip::ZipArchive::new(archive).expect("valid zip");
    let mut entry = String::new();
    zip.by_name("summits.csv")
        .expect("csv entry")
        .read_to_string(&mut entry)
        .expect("read entry");
    assert!(entry.starts_with("Mountain,Bagged,Date,Photo,ActivityLink"));
    assert!(entry.contains("Pen y Fan,True"));

    // naming the progress file itself must not lose any progress
    let before = sb.read_progress();
    sb.cmd()
        .args(["backup", "--compress", "--file"])
        .arg(sb.progress())
        .write_stdin("")
        .assert()
        .success();
    assert_eq!(sb.read_progress(), before);
    assert!(sb.path("my_progress.zip").is_file());
}

#[test]
fn test_reset_purge_keeps_foreign_photos() {
    let sb = Sandbox::new();
    let src = sb.path("summit.png");
    write_png(&src, 60, 40);
    sb.cmd().args(["bag", "Corn Du"]).assert().success();
    sb.cmd()
        .args(["photo", "Corn Du", "--add"])
        .arg(&src)
        .assert()
        .success();

    let personal = sb.photos().join("IMG_0001.jpg");
    fs::write(&personal, b"x").expect("write");

    sb.cmd()
        .args(["reset", "--yes", "--purge-photos"])
        .assert()
        .success()
        .stdout(contains("1 photo(s) deleted"));
    assert!(!sb.photos().join("Corn_Du_3.jpg").exists());
    assert!(personal.exists());
    assert!(!sb.progress().exists());
}

#[test]
fn test_backup_before_any_progress() {
    let sb = Sandbox::new();
    let dest = sb.path("empty_backup.csv");
    sb.cmd()
        .args(["backup", "--file"])
        .arg(&dest)
        .assert()
        .success()
        .stdout(contains("No progress recorded yet"));
    let content = fs::read_to_string(&dest).expect("backup");
    assert_eq!(content.lines().count(), 6);
    assert!(!sb.progress().exists());
}

#[test]
fn test_export_json_with_filter() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["bag", "Pen y Fan", "-d", "2024-06-01"])
        .assert()
        .success();

    let out = sb.path("done.json");
    sb.cmd()
        .args(["export", "--format", "json", "--filter", "done", "--file"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read")).expect("json");
    let rows = json.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["mountain"], "Pen y Fan");
    assert_eq!(rows[0]["height"], 886);
    assert_eq!(rows[0]["bagged"], true);
    assert_eq!(rows[0]["date"], "2024-06-01");
}

#[test]
fn test_export_csv_all() {
    let sb = Sandbox::new();
    let out = sb.path("all.csv");
    sb.cmd()
        .args(["export", "--file"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("mountain,height,latitude,longitude,region,bagged,date,photo,activity_link")
    );
    assert_eq!(lines.count(), 5);
}

#[test]
fn test_reset_yes_removes_progress() {
    let sb = Sandbox::new();
    sb.cmd().args(["bag", "Pen y Fan"]).assert().success();
    assert!(sb.progress().exists());

    sb.cmd()
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));
    assert!(!sb.progress().exists());

    sb.cmd()
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("0/5"));
}

#[test]
fn test_reset_declined_keeps_progress() {
    let sb = Sandbox::new();
    sb.cmd().args(["bag", "Pen y Fan"]).assert().success();

    sb.cmd()
        .arg("reset")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));
    assert!(sb.progress().exists());
}

#[test]
fn test_init_in_test_mode_creates_photo_dir() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["init", "--test"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(sb.photos().is_dir());
    assert!(!sb.home().join(".rpeaklog/rpeaklog.conf").exists());
}

#[test]
fn test_init_writes_config_file() {
    let sb = Sandbox::new();
    sb.cmd().arg("init").assert().success();

    let conf = sb.home().join(".rpeaklog/rpeaklog.conf");
    let content = fs::read_to_string(conf).expect("config written");
    assert!(content.contains("max_photo_side: 800"));

    sb.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("photos_dir"));
}
