//! Command-line argument parsing for the menu-aim demo.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::MenuAimConfig;
use crate::error::ConfigError;
use crate::geometry::ContentDirection;

pub const USAGE: &str = "\
Usage: menu-aim [OPTIONS]

Options:
  --direction <top|bottom|left|right>  Side the submenu content opens on
  --delay <MS>                         Retry interval while delaying
  --threshold <CELLS>                  Corner offset around the menu
  --config <PATH>                      JSON config file
  -V, --version                        Print version
  -h, --help                           Print this help";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI demo (default)
    Run(DemoOptions),
}

/// Overrides for the demo's menu configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DemoOptions {
    pub direction: Option<ContentDirection>,
    pub delay_ms: Option<u64>,
    pub threshold: Option<f64>,
    pub config_path: Option<PathBuf>,
}

impl DemoOptions {
    /// Load the config file (if any) and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<MenuAimConfig, ConfigError> {
        let mut config = match &self.config_path {
            Some(path) => MenuAimConfig::load(path)?,
            None => MenuAimConfig::default(),
        };
        if let Some(direction) = self.direction {
            config = config.with_content_direction(direction);
        }
        if let Some(delay_ms) = self.delay_ms {
            config = config.with_delay_ms(delay_ms);
        }
        if let Some(threshold) = self.threshold {
            config = config.with_threshold(threshold);
        }
        Ok(config.normalized())
    }
}

/// Argument parsing errors.
#[derive(Debug, Error, PartialEq)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown argument {0}")]
    Unknown(String),
}

/// Parse command-line arguments.
///
/// # Examples
///
/// ```
/// use menu_aim::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["menu-aim".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = DemoOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--direction" => {
                let value = next_value(&mut args, &arg)?;
                options.direction = Some(ContentDirection::from_str_lossy(&value));
            }
            "--delay" => {
                let value = next_value(&mut args, &arg)?;
                options.delay_ms = Some(parse_number(&arg, value)?);
            }
            "--threshold" => {
                let value = next_value(&mut args, &arg)?;
                options.threshold = Some(parse_number(&arg, value)?);
            }
            "--config" => {
                options.config_path = Some(PathBuf::from(next_value(&mut args, &arg)?));
            }
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }
    Ok(CliCommand::Run(options))
}

fn next_value<I>(args: &mut I, flag: &str) -> Result<String, ArgsError>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: String) -> Result<T, ArgsError> {
    value.parse().map_err(|_| ArgsError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        let mut all = vec!["menu-aim".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::Run(DemoOptions::default())));
    }

    #[test]
    fn test_parse_version_short_flag() {
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse(&["--help"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_all_options() {
        let command = parse(&[
            "--direction", "bottom", "--delay", "150", "--threshold", "3.5", "--config", "menu.json",
        ])
        .unwrap();
        let CliCommand::Run(options) = command else {
            panic!("expected run command");
        };
        assert_eq!(options.direction, Some(ContentDirection::Bottom));
        assert_eq!(options.delay_ms, Some(150));
        assert_eq!(options.threshold, Some(3.5));
        assert_eq!(options.config_path, Some(PathBuf::from("menu.json")));
    }

    #[test]
    fn test_parse_unknown_direction_means_right() {
        let Ok(CliCommand::Run(options)) = parse(&["--direction", "up"]) else {
            panic!("expected run command");
        };
        assert_eq!(options.direction, Some(ContentDirection::Right));
    }

    #[test]
    fn test_parse_missing_value() {
        assert_eq!(parse(&["--delay"]), Err(ArgsError::MissingValue("--delay".to_string())));
    }

    #[test]
    fn test_parse_invalid_number() {
        assert_eq!(
            parse(&["--threshold", "wide"]),
            Err(ArgsError::InvalidValue {
                flag: "--threshold".to_string(),
                value: "wide".to_string()
            })
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["--sync"]), Err(ArgsError::Unknown("--sync".to_string())));
    }

    #[test]
    fn test_resolve_config_applies_overrides() {
        let options = DemoOptions {
            direction: Some(ContentDirection::Left),
            delay_ms: Some(0),
            threshold: Some(8.0),
            config_path: None,
        };
        let config = options.resolve_config().unwrap();
        assert_eq!(config.content_direction, ContentDirection::Left);
        // Zero delay counts as unset.
        assert_eq!(config.delay_ms, 200);
        assert_eq!(config.threshold, 8.0);
    }
}
