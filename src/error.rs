//! Unified error types for the rove-tui application.

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Widget error: {0}")]
    Widget(#[from] WidgetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Tab widget and navigation errors.
///
/// These are construction defects, not user errors: they mean the widget model
/// handed to the controller is malformed. They fail loudly at construction or
/// activation time instead of degrading into silent no-ops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("No panel matches id '{0}'")]
    MissingPanel(String),

    #[error("No figure matches id '{0}'")]
    MissingFigure(String),

    #[error("Tab set must contain at least one tab")]
    EmptyTabSet,

    #[error("Tab index {index} out of range for {len} tabs")]
    TabOutOfRange { index: usize, len: usize },
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for widget operations
pub type WidgetResult<T> = std::result::Result<T, WidgetError>;
