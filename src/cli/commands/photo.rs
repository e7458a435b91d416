use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Tracker;
use crate::core::photo::PhotoLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Photo { peak, add, delete } = cmd {
        let mut tracker = Tracker::open(cfg)?;

        if let Some(file) = add {
            let rec = PhotoLogic::attach(&mut tracker, peak, &expand_tilde(file))?;
            let stored = rec
                .photo
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            success(format!("📷 Photo saved for {}: {}", rec.mountain, stored));
        } else if *delete {
            let rec = PhotoLogic::remove(&mut tracker, peak)?;
            success(format!("🗑️  Photo removed for {}.", rec.mountain));
        }
    }
    Ok(())
}
