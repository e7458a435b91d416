//! rPeaklog main entrypoint.

use rpeaklog::run;
use rpeaklog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
