use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Tracker;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats = cmd {
        let tracker = Tracker::open(cfg)?;
        header("Checklist progress");
        print!("{}", render::stats_summary(&tracker.stats()));
    }
    Ok(())
}
