use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reset::ResetLogic;
use crate::errors::AppResult;
use crate::export::fs_utils::ask_confirmation;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes, purge_photos } = cmd {
        //
        // Confirmation prompt
        //
        if !*yes {
            let prompt = if *purge_photos {
                "Delete ALL recorded progress and stored photos? This action is irreversible."
            } else {
                "Delete ALL recorded progress? This action is irreversible."
            };
            if !ask_confirmation(prompt)? {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let outcome = ResetLogic::apply(cfg, *purge_photos)?;

        if outcome.progress_removed {
            success(format!(
                "Progress file {} deleted.",
                cfg.progress_path().display()
            ));
        } else {
            info("No progress file to delete.");
        }
        if *purge_photos {
            success(format!("{} photo(s) deleted.", outcome.photos_removed));
        }
    }
    Ok(())
}
