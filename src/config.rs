use clap::Parser;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "acctsim", about = "Savings and current account demonstration")]
pub struct CliArgs {
    /// Path to config file
    #[arg(short, long, default_value = "acctsim.toml")]
    pub config: String,

    /// Log level (overrides config file)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Print a balance table after the scenario
    #[arg(short, long)]
    pub summary: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit log records as JSON lines.
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ReportConfig {
    #[serde(default)]
    pub summary: bool,
}

fn default_logging() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        json: false,
    }
}

// stdout carries the scenario text, so only problems are logged by default
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            logging: default_logging(),
            report: ReportConfig::default(),
        }
    }
}

impl Config {
    pub fn load(cli: &CliArgs) -> Self {
        let config = match std::fs::read_to_string(&cli.config) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse config file: {}", e);
                Config::default()
            }),
            Err(_) => Config::default(),
        };

        config.with_overrides(cli)
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    fn with_overrides(mut self, cli: &CliArgs) -> Self {
        if let Some(ref level) = cli.log_level {
            self.logging.level = level.clone();
        }
        if cli.summary {
            self.report.summary = true;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("acctsim").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_without_file() {
        let config = Config::load(&cli(&["--config", "does-not-exist.toml"]));
        assert_eq!(config, Config::default());
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json);
        assert!(!config.report.summary);
    }

    #[test]
    fn test_parse_partial_file() {
        let config = Config::parse("[logging]\njson = true\n").unwrap();
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.json);
        assert!(!config.report.summary);

        let config = Config::parse("[report]\nsummary = true\n").unwrap();
        assert!(config.report.summary);
    }

    #[test]
    fn test_parse_rejects_bad_types() {
        assert!(Config::parse("[logging]\njson = \"yes\"\n").is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let config = Config::parse("[logging]\nlevel = \"info\"\n")
            .unwrap()
            .with_overrides(&cli(&["-l", "debug", "--summary"]));
        assert_eq!(config.logging.level, "debug");
        assert!(config.report.summary);
    }
}
