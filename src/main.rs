use anyhow::Result;
use eventboard::config::Config;
use eventboard::logger::Logger;
use eventboard::ui;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("--generate-config") => {
            let path = match args.next() {
                Some(path) => PathBuf::from(path),
                None => Config::get_default_config_path()?,
            };
            return Config::generate_default_config(path);
        }
        Some("--help") | Some("-h") => {
            println!("Usage: eventboard [--generate-config [PATH]]");
            println!("\nConfiguration is read from ./eventboard.toml or the user config directory.");
            return Ok(());
        }
        Some(other) => {
            eprintln!("❌ Error: unknown argument '{}'", other);
            eprintln!("\n💡 Run with --help to see the available options");
            return Ok(());
        }
        None => {}
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;

    // Run the TUI application
    ui::run_app(config, logger).await?;

    Ok(())
}
