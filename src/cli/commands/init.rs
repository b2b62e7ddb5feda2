use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty filter session file
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.clone(), cli.test)?;

    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Snapshot    : {}", cfg.snapshot_path().display()));

    if !cfg.snapshot_path().exists() {
        info("Snapshot file not found yet: export it from the API before listing.");
    }

    success("ludoview initialization completed!");
    Ok(())
}
