use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, conf_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration ({}):\n", conf_path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            let missing = Config::check(conf_path)?;
            if missing.is_empty() {
                success("Configuration is complete.");
            } else {
                warning(format!(
                    "Missing fields (defaults apply): {}",
                    missing.join(", ")
                ));
            }
        }
    }

    Ok(())
}
