//! Error handling for the configuration and terminal surfaces.
//!
//! The intent-prediction core is total: geometry tolerates degenerate input
//! through floating-point infinities and the state machine has no failing
//! transitions. Errors only arise around it, when configuration is loaded or
//! the demo terminal is set up.
//!
//! | Error | Source | User-actionable |
//! |-------|--------|-----------------|
//! | `ConfigError::Io` | reading a config file | Yes |
//! | `ConfigError::Parse` | malformed JSON | Yes |
//! | `MenuAimError::Terminal` | crossterm / stdout | No |

mod config;
mod menu_aim_error;
mod result;

pub use config::ConfigError;
pub use menu_aim_error::MenuAimError;
pub use result::MenuAimResult;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_config_error_converts_into_menu_aim_error() {
        let err: MenuAimError = ConfigError::Io {
            path: PathBuf::from("/nope.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        }
        .into();

        assert!(matches!(err, MenuAimError::Config(_)));
        assert_eq!(err.error_code(), "E_CFG_IO");
        assert!(err.user_message().contains("/nope.json"));
    }

    #[test]
    fn test_io_error_converts_to_terminal_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: MenuAimError = io_err.into();
        assert!(matches!(err, MenuAimError::Terminal(_)));
        assert_eq!(err.error_code(), "E_TERM");
        assert!(!err.is_user_actionable());
    }

    #[test]
    fn test_parse_error_is_user_actionable() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: MenuAimError = ConfigError::Parse {
            path: None,
            source: json_err,
        }
        .into();
        assert!(err.is_user_actionable());
        assert_eq!(err.error_code(), "E_CFG_PARSE");
    }
}
