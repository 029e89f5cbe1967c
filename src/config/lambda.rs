use crate::config::{DEFAULT_HELP_URL, DEFAULT_HOST, DEFAULT_PORT};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use std::env;

/// Settings for the Lambda entry point. Lambda owns the socket, so only the
/// service settings come from the environment.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub help_url: String,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            help_url: env::var("HELP_URL").unwrap_or_else(|_| DEFAULT_HELP_URL.to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for LambdaConfig {
    fn host(&self) -> &str {
        DEFAULT_HOST
    }

    fn port(&self) -> u16 {
        DEFAULT_PORT
    }

    fn help_url(&self) -> &str {
        &self.help_url
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_url("HELP_URL", &self.help_url)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
