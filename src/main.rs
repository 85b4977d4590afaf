//! rsessionize main entrypoint.

use rsessionize::run;
use rsessionize::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
