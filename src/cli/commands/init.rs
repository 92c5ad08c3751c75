use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli, conf_path: &Path) -> AppResult<()> {
    let cfg = Config::init_all(conf_path, cli.test)?;

    println!("⚙️  Initializing rShopTrace…");
    println!("📄 Config file : {}", conf_path.display());
    println!("📂 Input dir   : {}", cfg.input_dir);
    println!("💾 Output file : {}", cfg.output_file);

    success("rShopTrace initialization completed!");
    Ok(())
}
