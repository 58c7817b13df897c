//! Check command implementation
//!
//! Prints the configuration the other commands would run with.

use crate::config::AppConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &AppConfig) -> Result<()> {
    println!("{}", describe(config));
    Ok(())
}

fn describe(config: &AppConfig) -> String {
    let max_attempts = config
        .sampler
        .max_attempts
        .map(|n| n.to_string())
        .unwrap_or_else(|| "unbounded".to_string());
    format!(
        "log_level       = {}\n\
         skew_policy     = {}\n\
         max_attempts    = {}\n\
         histogram_count = {}\n\
         histogram_width = {}",
        config.log_level,
        config.sampler.skew_policy,
        max_attempts,
        config.histogram_count,
        config.histogram_width
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_defaults() {
        let text = describe(&AppConfig::default());
        assert!(text.contains("skew_policy     = cubic"));
        assert!(text.contains("max_attempts    = unbounded"));
        assert!(text.contains("histogram_count = 100000"));
    }

    #[test]
    fn test_describe_capped() {
        let mut config = AppConfig::default();
        config.sampler = config.sampler.with_max_attempts(250).unwrap();
        assert!(describe(&config).contains("max_attempts    = 250"));
    }
}
