//! Configuration loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a [`crate::config::MenuAimConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config document is not valid JSON for the expected shape.
    #[error("invalid menu-aim config{}: {source}", .path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "E_CFG_IO",
            ConfigError::Parse { .. } => "E_CFG_PARSE",
        }
    }

    /// User-facing explanation.
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::Io { path, .. } => {
                format!("Could not read config file {}. Check the path and permissions.", path.display())
            }
            ConfigError::Parse {
                path: Some(path),
                source,
            } => format!("Config file {} is not valid: {}", path.display(), source),
            ConfigError::Parse { path: None, source } => {
                format!("The config is not valid: {}", source)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_includes_path() {
        let source = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = ConfigError::Parse {
            path: Some(PathBuf::from("menu.json")),
            source,
        };
        assert!(err.to_string().starts_with("invalid menu-aim config in menu.json:"));
    }

    #[test]
    fn test_parse_error_display_without_path() {
        let source = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = ConfigError::Parse { path: None, source };
        assert!(err.to_string().starts_with("invalid menu-aim config:"));
    }
}
