//! tsreport main entrypoint.

use tsreport::run;
use tsreport::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
