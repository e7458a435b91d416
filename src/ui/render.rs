//! Plain-text renderings of the unified view shared by several commands.

use crate::core::stats::Stats;
use crate::models::ViewRow;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW, colorize_optional};
use crate::utils::formatting::{pad_left, pad_right, status_mark};
use crate::utils::table::{Column, Table};
use crate::utils::{progress_bar, thousands};

const BAR_WIDTH: usize = 30;

/// Region label for display; peaks without region are grouped as "(none)".
pub fn region_label(region: &str) -> &str {
    if region.is_empty() { "(none)" } else { region }
}

/// The checklist table.
pub fn checklist(rows: &[&ViewRow], separator: char) -> String {
    let mut table = Table::new(vec![
        Column::new(""),
        Column::new("Mountain"),
        Column::new("Height"),
        Column::new("Region"),
        Column::new("Date"),
        Column::new("Photo"),
        Column::new("Link"),
    ])
    .with_separator(separator);

    for r in rows {
        table.add_row(vec![
            status_mark(r.bagged).to_string(),
            r.peak.name.clone(),
            format!("{}m", r.peak.height),
            region_label(&r.peak.region).to_string(),
            if r.date.is_some() { r.date_str() } else { "--".into() },
            if r.photo_on_disk().is_some() { "📷".into() } else { "--".into() },
            r.link.clone().unwrap_or_else(|| "--".into()),
        ]);
    }

    table.render()
}

/// Single peak detail card.
pub fn peak_card(row: &ViewRow) -> String {
    let photo = match (&row.photo, row.photo_on_disk()) {
        (_, Some(p)) => p.display().to_string(),
        (Some(p), None) => format!("{} {GREY}(missing file){RESET}", p.display()),
        (None, None) => String::new(),
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        status_mark(row.bagged),
        row.peak.name
    ));
    out.push_str(&format!(
        "{CYAN}• Height:{RESET}      {}m",
        row.peak.height
    ));
    if !row.peak.height_label.is_empty() && row.peak.height_label != row.peak.height.to_string() {
        out.push_str(&format!(" {GREY}({}){RESET}", row.peak.height_label));
    }
    out.push('\n');
    out.push_str(&format!(
        "{CYAN}• Region:{RESET}      {}\n",
        region_label(&row.peak.region)
    ));
    out.push_str(&format!(
        "{CYAN}• Coordinates:{RESET} {}\n",
        colorize_optional(&row.peak.coordinates_str())
    ));
    out.push_str(&format!(
        "{CYAN}• Summited:{RESET}    {}\n",
        if row.bagged { "yes" } else { "no" }
    ));
    out.push_str(&format!(
        "{CYAN}• Date:{RESET}        {}\n",
        colorize_optional(&row.date_str())
    ));
    out.push_str(&format!(
        "{CYAN}• Photo:{RESET}       {}\n",
        colorize_optional(&photo)
    ));
    out.push_str(&format!(
        "{CYAN}• Activity:{RESET}    {}\n",
        colorize_optional(row.link.as_deref().unwrap_or(""))
    ));
    out
}

/// Headline numbers plus one bar per region.
pub fn stats_summary(stats: &Stats) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Summited:      {GREEN}{}/{}{RESET}\n",
        stats.bagged, stats.total
    ));
    out.push_str(&format!("Completion:    {}%\n", stats.percent));
    out.push_str(&format!(
        "Elev. gained:  {YELLOW}{}m{RESET}\n",
        thousands(stats.elevation)
    ));
    out.push_str(&format!("Remaining:     {}\n", stats.remaining));
    out.push_str(&format!("{}\n", progress_bar(stats.percent, BAR_WIDTH)));

    if let Some((name, h)) = &stats.highest {
        out.push_str(&format!("Highest:       {} ({}m)\n", name, h));
    }
    if let Some((name, d)) = &stats.latest {
        out.push_str(&format!("Latest:        {} on {}\n", name, d.format("%Y-%m-%d")));
    }

    if !stats.regions.is_empty() {
        out.push_str("\nBy region:\n");
        let width = stats
            .regions
            .iter()
            .map(|r| unicode_width::UnicodeWidthStr::width(region_label(&r.region)))
            .max()
            .unwrap_or(0);

        for r in &stats.regions {
            let pct = crate::core::stats::completion_percent(r.bagged, r.total);
            out.push_str(&format!(
                "  {} {} {} {}\n",
                pad_right(region_label(&r.region), width),
                pad_left(&format!("{}/{}", r.bagged, r.total), 7),
                progress_bar(pct, BAR_WIDTH / 2),
                pad_left(&format!("{}%", pct), 4),
            ));
        }
    }

    out
}
