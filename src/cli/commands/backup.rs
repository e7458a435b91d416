use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Tracker;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let tracker = Tracker::open(cfg)?;
        BackupLogic::backup(&tracker.store, file, *compress, *force)?;
    }

    Ok(())
}
