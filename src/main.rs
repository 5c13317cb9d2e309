use anyhow::Result;
use todoboard::config::Config;
use todoboard::logger::Logger;
use todoboard::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    if let Some(unknown) = args.first() {
        eprintln!("❌ Error: unknown argument '{}'", unknown);
        eprintln!("\n💡 Usage: todoboard [--generate-config]");
        return Ok(());
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            eprintln!("\n💡 Run `todoboard --generate-config` to write a fresh configuration file.");
            return Ok(());
        }
    };

    Logger::init(&config.logging)?;

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
