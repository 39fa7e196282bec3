//! huskyhours main entrypoint.

use huskyhours::run;
use huskyhours::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
