use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Tracker;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::ViewFilter;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let tracker = Tracker::open(cfg)?;
        let f = ViewFilter {
            status: *filter,
            ..Default::default()
        };
        ExportLogic::export(&tracker, *format, file, &f, *force)?;
    }
    Ok(())
}
