use barcode_names::utils::{logger, validation::Validate};
use barcode_names::{CliConfig, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    let file_config = match &config.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let log_level = file_config.as_ref().and_then(|f| f.log_level());
    logger::init_cli_logger(config.verbose, log_level);

    tracing::info!("Starting barcode-names service");

    if let Some(file) = &file_config {
        if let Err(e) = file.validate() {
            tracing::error!("❌ Configuration file validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
        config.merge_toml(file);
    }

    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    barcode_names::serve(&config).await?;

    Ok(())
}
