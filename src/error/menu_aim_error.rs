//! Top-level error type.

use thiserror::Error;

use super::config::ConfigError;

/// Unified error for everything outside the intent-prediction core.
#[derive(Debug, Error)]
pub enum MenuAimError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Terminal setup, drawing or event reading failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl MenuAimError {
    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            MenuAimError::Config(err) => err.error_code(),
            MenuAimError::Terminal(_) => "E_TERM",
        }
    }

    /// User-facing explanation.
    pub fn user_message(&self) -> String {
        match self {
            MenuAimError::Config(err) => err.user_message(),
            MenuAimError::Terminal(_) => {
                "The terminal could not be driven. Try a different terminal emulator.".to_string()
            }
        }
    }

    /// Whether the user can fix this by changing their input.
    pub fn is_user_actionable(&self) -> bool {
        matches!(self, MenuAimError::Config(_))
    }
}
