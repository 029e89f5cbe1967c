pub mod lambda;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HELP_URL: &str = "https://github.com/greentriangles/barcodes";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "barcode-names"))]
#[cfg_attr(
    feature = "cli",
    command(about = "HTTP service mapping barcode agent names to memorable given names")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, env = "HOST", default_value = DEFAULT_HOST))]
    pub host: String,

    #[cfg_attr(feature = "cli", arg(long, env = "PORT", default_value_t = DEFAULT_PORT))]
    pub port: u16,

    #[cfg_attr(feature = "cli", arg(long, env = "HELP_URL", default_value = DEFAULT_HELP_URL))]
    pub help_url: String,

    /// TOML file whose values replace the flags above
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            help_url: DEFAULT_HELP_URL.to_string(),
            config: None,
            verbose: false,
        }
    }
}

impl CliConfig {
    /// Overlays the values of a TOML file onto the command line settings.
    pub fn merge_toml(&mut self, file: &toml_config::TomlConfig) {
        if let Some(host) = &file.server.host {
            self.host = host.clone();
        }
        if let Some(port) = file.server.port {
            self.port = port;
        }
        if let Some(help_url) = file.service.as_ref().and_then(|s| s.help_url.as_ref()) {
            self.help_url = help_url.clone();
        }
    }
}

impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn help_url(&self) -> &str {
        &self.help_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        validate_url("help_url", &self.help_url)?;

        tracing::debug!("✅ Server configuration validation passed");
        Ok(())
    }
}
