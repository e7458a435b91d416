use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the photo directory
///
/// The catalog is never created: it is external input and must be put in
/// place by the user.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rPeaklog…");

    cfg.init_all(cli.test)?;

    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗺️  Catalog    : {}", cfg.catalog_path().display());
    println!("📝 Progress   : {}", cfg.progress_path().display());
    println!("📷 Photos     : {}", cfg.photos_path().display());

    if !cfg.catalog_path().is_file() {
        warning(format!(
            "Catalog not found yet: copy your peak list (Mountain,Height,Latitude,Longitude,Region) to {}",
            cfg.catalog_path().display()
        ));
    }

    success("rPeaklog initialization completed!");
    Ok(())
}
