use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::domain::model::LogFormat;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "extenso")]
#[command(about = "Spells integers between -99999 and 99999 in Portuguese over HTTP")]
pub struct CliConfig {
    #[arg(long, help = "The listening address of the server [default: :8080]")]
    pub address: Option<String>,

    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, help = "Log output format")]
    pub log_format: Option<LogFormat>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Arguments of the `extenso_cli` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "extenso_cli")]
#[command(about = "Spells integers between -99999 and 99999 in Portuguese")]
pub struct SpellerArgs {
    /// Integers between -99999 and 99999
    #[arg(required = true, allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    #[arg(long, help = "Print the same JSON payloads the server returns")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file, if any, and merges it under the flags.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let settings = Settings::resolve(
            self.address.clone(),
            self.log_format,
            self.verbose,
            file.as_ref(),
        );
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_flags() {
        let cli = CliConfig::parse_from(["extenso"]);
        let settings = cli.resolve().unwrap();
        assert_eq!(settings.address, ":8080");
        assert!(!settings.verbose);
    }

    #[test]
    fn test_address_flag() {
        let cli = CliConfig::parse_from(["extenso", "--address", "127.0.0.1:3000"]);
        assert_eq!(cli.resolve().unwrap().address, "127.0.0.1:3000");
    }

    #[test]
    fn test_log_format_flag() {
        let cli = CliConfig::parse_from(["extenso", "--log-format", "json"]);
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert!(CliConfig::try_parse_from(["extenso", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn test_config_file_under_flags() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\naddress = \":9090\"\n[logging]\nverbose = true\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from(["extenso", "--config", path.as_str()]);
        let settings = cli.resolve().unwrap();
        assert_eq!(settings.address, ":9090");
        assert!(settings.verbose);

        let cli = CliConfig::parse_from([
            "extenso",
            "--config",
            path.as_str(),
            "--address",
            ":7070",
        ]);
        assert_eq!(cli.resolve().unwrap().address, ":7070");
    }

    #[test]
    fn test_speller_flags_after_numbers() {
        let args = SpellerArgs::parse_from(["extenso_cli", "5", "--json", "-7", "--verbose"]);
        assert_eq!(args.numbers, vec!["5".to_string(), "-7".to_string()]);
        assert!(args.json);
        assert!(args.verbose);

        let args = SpellerArgs::parse_from(["extenso_cli", "--json", "-1042", "abc"]);
        assert_eq!(args.numbers, vec!["-1042".to_string(), "abc".to_string()]);
        assert!(args.json);
    }

    #[test]
    fn test_speller_requires_a_number() {
        assert!(SpellerArgs::try_parse_from(["extenso_cli"]).is_err());
        assert!(SpellerArgs::try_parse_from(["extenso_cli", "--json"]).is_err());
        assert!(SpellerArgs::try_parse_from(["extenso_cli", "5", "--xml"]).is_err());
    }

    #[test]
    fn test_invalid_address_is_rejected() {
        let cli = CliConfig::parse_from(["extenso", "--address", "8080"]);
        assert!(cli.resolve().is_err());
    }
}
