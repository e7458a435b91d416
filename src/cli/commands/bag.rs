use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Tracker;
use crate::core::progress::ProgressLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date::{parse_date_arg, parse_optional_date};

/// Handle `bag`, `unbag` and `edit`: every change is saved before returning.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Bag { peak, date, link } => {
            // parse input first: nothing is written on bad input
            let d = parse_optional_date(date.as_ref())?;

            let mut tracker = Tracker::open(cfg)?;
            let rec = ProgressLogic::bag(&mut tracker, peak, d, link.as_deref())?;

            let when = rec
                .date
                .map(|d| format!(" on {}", d.format("%Y-%m-%d")))
                .unwrap_or_default();
            success(format!("⛰️  {} summited{}.", rec.mountain, when));
        }

        Commands::Unbag { peak } => {
            let mut tracker = Tracker::open(cfg)?;
            let rec = ProgressLogic::unbag(&mut tracker, peak)?;
            success(format!("{} marked as not summited.", rec.mountain));
        }

        Commands::Edit {
            peak,
            date,
            link,
            clear_date,
            clear_link,
        } => {
            let date_change = if *clear_date {
                Some(None)
            } else {
                date.as_deref().map(parse_date_arg).transpose()?.map(Some)
            };
            let link_change = if *clear_link {
                Some(None)
            } else {
                link.as_deref().map(Some)
            };

            if date_change.is_none() && link_change.is_none() {
                info("Nothing to change: use --date, --link, --clear-date or --clear-link.");
                return Ok(());
            }

            let mut tracker = Tracker::open(cfg)?;
            let rec = ProgressLogic::edit(&mut tracker, peak, date_change, link_change)?;
            success(format!("✏️  {} updated.", rec.mountain));
        }

        _ => {}
    }

    Ok(())
}
