//! fraglog main entrypoint.

use fraglog::run;
use fraglog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
