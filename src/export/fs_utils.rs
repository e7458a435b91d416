// src/export/fs_utils.rs

use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Ask a yes/no question on stdin. Anything but y/yes is a no.
pub(crate) fn ask_confirmation(prompt: &str) -> AppResult<bool> {
    warning(prompt);
    print!("Confirm [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Whether `path` may be written: true when it does not exist or `force`
/// is set, otherwise the user is asked.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<bool> {
    if !path.exists() || force {
        return Ok(true);
    }

    let ok = ask_confirmation(&format!(
        "The file '{}' already exists. Overwrite?",
        path.display()
    ))?;
    if ok {
        info("Existing file will be overwritten.");
    }
    Ok(ok)
}
