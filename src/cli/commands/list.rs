use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Tracker;
use crate::errors::AppResult;
use crate::models::ViewFilter;
use crate::ui::messages::info;
use crate::ui::render;
use crate::utils::colors::{GREY, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        filter,
        search,
        region,
    } = cmd
    {
        let tracker = Tracker::open(cfg)?;
        let view = tracker.view();

        let f = ViewFilter {
            status: *filter,
            search: search.clone(),
            region: region.clone(),
        };
        let rows = f.apply(&view);

        if rows.is_empty() {
            info("No peaks match the selected filter.");
            if region.is_some() {
                info(format!("Known regions: {}", tracker.catalog.regions().join(", ")));
            }
            return Ok(());
        }

        print!("{}", render::checklist(&rows, cfg.separator()));

        let stats = tracker.stats();
        println!(
            "\n{GREY}{} shown · {}/{} summited ({}%){RESET}",
            rows.len(),
            stats.bagged,
            stats.total,
            stats.percent
        );
    }
    Ok(())
}
