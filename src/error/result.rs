//! Result type alias for menu-aim operations.

use super::menu_aim_error::MenuAimError;

/// Type alias for Results using [`MenuAimError`].
pub type MenuAimResult<T> = Result<T, MenuAimError>;
