//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line flags.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (`GAUSS_*`)
//! 3. Config file
//! 4. Default values

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use sampler_core::{SamplerConfig, SkewPolicy};

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "GAUSS_LOG_LEVEL";
/// Environment variable overriding the skew policy.
pub const ENV_SKEW_POLICY: &str = "GAUSS_SKEW_POLICY";
/// Environment variable setting the bounded attempt cap (`0` = unbounded).
pub const ENV_MAX_ATTEMPTS: &str = "GAUSS_MAX_ATTEMPTS";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid skew policy: {0}. Must be one of: cubic, mean-flip")]
    InvalidSkewPolicy(String),

    #[error("Invalid attempt cap: {0}. Must be a non-negative integer")]
    InvalidMaxAttempts(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Sampler settings (`[sampler]` table)
    pub sampler: SamplerConfig,
    /// Number of draws for `histogram` when `--count` is omitted
    pub histogram_count: usize,
    /// Widest bar of the text histogram, in characters
    pub histogram_width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            sampler: SamplerConfig::default(),
            histogram_count: 100_000,
            histogram_width: 60,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `GAUSS_*` overrides using `lookup` to read variables
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(policy) = lookup(ENV_SKEW_POLICY) {
            self.sampler.skew_policy = parse_skew_policy(&policy)?;
        }
        if let Some(attempts) = lookup(ENV_MAX_ATTEMPTS) {
            let attempts: usize = attempts
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidMaxAttempts(attempts.clone()))?;
            self.set_max_attempts(attempts);
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(policy) = &cli.skew_policy {
            self.sampler.skew_policy = parse_skew_policy(policy)?;
        }
        if let Some(attempts) = cli.max_attempts {
            self.set_max_attempts(attempts);
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.histogram_width == 0 {
            return Err(ConfigError::FileError(
                "histogram_width must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    fn set_max_attempts(&mut self, attempts: usize) {
        self.sampler = match self.sampler.with_max_attempts(attempts) {
            Ok(capped) => capped,
            // 0 means no cap
            Err(_) => self.sampler.unbounded(),
        };
    }
}

fn parse_skew_policy(s: &str) -> Result<SkewPolicy, ConfigError> {
    SkewPolicy::from_str(s).map_err(|_| ConfigError::InvalidSkewPolicy(s.to_string()))
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Verbose output (forces debug logging)
    pub verbose: bool,
    /// Skew policy override
    pub skew_policy: Option<String>,
    /// Attempt cap override (`0` = unbounded)
    pub max_attempts: Option<usize>,
}

/// Build configuration from all sources
pub fn build_config(cli: &CliArgs) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    config.apply_env(|key| std::env::var(key).ok())?;
    config.merge_with_cli(cli)?;
    config.validate()?;
    Ok(config)
}
