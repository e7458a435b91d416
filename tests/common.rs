#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rpeaklog::catalog::{Catalog, read_catalog};
use rpeaklog::core::Tracker;
use rpeaklog::core::photo::PhotoStore;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Five peaks: heights with units and separators, one row with broken
/// height and latitude, two regions plus one peak without region.
pub const SAMPLE_CATALOG: &str = "\
Mountain,Height,Latitude,Longitude,Region
Pen y Fan,886m,51.8838,-3.4366,Brecon Beacons
Snowdon (Yr Wyddfa),\"1,085 m\",53.0685,-4.0763,Snowdonia
Cadair Idris (Penygadair),893m,52.6995,-3.9090,Snowdonia
Corn Du,873m,51.8848,-3.4432,Brecon Beacons
Mystery Hill,abc,not-a-lat,-3.5,
";

pub fn rpl() -> Command {
    cargo_bin_cmd!("rpeaklog")
}

pub fn sample_catalog() -> Catalog {
    read_catalog(SAMPLE_CATALOG.as_bytes()).expect("sample catalog parses")
}

/// An isolated data directory: catalog, progress file, photo dir and HOME.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join("welsh_100.csv"), SAMPLE_CATALOG).expect("write catalog");
        Self { dir }
    }

    /// Sandbox without a catalog file.
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn catalog(&self) -> PathBuf {
        self.dir.path().join("welsh_100.csv")
    }

    pub fn progress(&self) -> PathBuf {
        self.dir.path().join("my_progress.csv")
    }

    pub fn photos(&self) -> PathBuf {
        self.dir.path().join("photos")
    }

    pub fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_progress(&self, content: &str) {
        fs::write(self.progress(), content).expect("write progress");
    }

    pub fn read_progress(&self) -> String {
        fs::read_to_string(self.progress()).expect("read progress")
    }

    /// `rpeaklog` with every path pointing inside the sandbox.
    pub fn cmd(&self) -> Command {
        let mut c = rpl();
        c.env("HOME", self.home())
            .env_remove("RUST_LOG")
            .arg("--catalog")
            .arg(self.catalog())
            .arg("--progress")
            .arg(self.progress())
            .arg("--photos")
            .arg(self.photos());
        c
    }

    pub fn tracker(&self) -> Tracker {
        self.tracker_with_max_side(800)
    }

    pub fn tracker_with_max_side(&self, max_side: u32) -> Tracker {
        Tracker::from_paths(
            &self.catalog(),
            &self.progress(),
            PhotoStore::new(self.photos(), max_side),
        )
        .expect("open tracker")
    }
}

/// Write a solid-colour PNG of the given size.
pub fn write_png(path: &Path, width: u32, height: u32) {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([40, 120, 60]));
    img.save(path).expect("write png");
}
