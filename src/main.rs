//! ludoview main entrypoint.

use ludoview::run;
use ludoview::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
