use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Tracker;
use crate::core::check::CheckLogic;
use crate::errors::AppResult;
use crate::models::WarningSource;
use crate::ui::messages::{header, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { fix } = cmd {
        let mut tracker = Tracker::open(cfg)?;
        let report = CheckLogic::run(&tracker);

        header("Data check");
        println!(
            "Catalog: {} peaks, {} warning(s)",
            tracker.catalog.len(),
            report.count(WarningSource::Catalog)
        );
        if tracker.store.exists_on_disk() {
            println!(
                "Progress: {} record(s), {} warning(s)",
                tracker.store.len(),
                report.count(WarningSource::Progress)
            );
            if !tracker.store.schema.is_current() {
                info(format!(
                    "Progress file predates columns {}; they are filled with defaults on the next save.",
                    tracker.store.schema.added.join(", ")
                ));
            }
        } else {
            println!("Progress: no file yet");
        }
        println!("Photos: {} warning(s)\n", report.count(WarningSource::Photos));

        if report.is_clean() {
            success("No problems found.");
            return Ok(());
        }

        for w in &report.warnings {
            warning(w);
        }

        if *fix {
            let cleared = CheckLogic::fix(&mut tracker, &report)?;
            success(format!("Cleared {} dangling photo reference(s).", cleared));
        } else if !report.dangling_photos.is_empty() {
            info("Run `rpeaklog check --fix` to clear references to missing photos.");
        }
    }
    Ok(())
}
