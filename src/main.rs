//! rWorkCal main entrypoint.

use rworkcal::run;
use rworkcal::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
