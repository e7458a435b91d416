use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Tracker;
use crate::errors::AppResult;
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { peak } = cmd {
        let tracker = Tracker::open(cfg)?;
        let p = tracker.resolve(peak)?;
        print!("{}", render::peak_card(&tracker.row(&p)));
    }
    Ok(())
}
