#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::LogFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_address, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, SpellerArgs};

pub const DEFAULT_ADDRESS: &str = ":8080";

/// Settings after merging flags, the config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub address: String,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            log_format: LogFormat::default(),
            verbose: false,
        }
    }
}

impl Settings {
    /// Explicit values win over the file, the file wins over defaults.
    pub fn resolve(
        address: Option<String>,
        log_format: Option<LogFormat>,
        verbose: bool,
        file: Option<&TomlConfig>,
    ) -> Self {
        let defaults = Self::default();
        let file = file.cloned().unwrap_or_default();

        Self {
            address: address
                .or(file.server.address)
                .unwrap_or(defaults.address),
            log_format: log_format
                .or(file.logging.format)
                .unwrap_or(defaults.log_format),
            verbose: verbose || file.logging.verbose.unwrap_or(defaults.verbose),
        }
    }
}

impl ConfigProvider for Settings {
    fn address(&self) -> &str {
        &self.address
    }

    fn log_format(&self) -> LogFormat {
        self.log_format
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_address("address", &self.address)
    }
}
