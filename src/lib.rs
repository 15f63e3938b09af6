//! rove-tui: tabbed-panel browsing for the terminal
//!
//! This crate provides an accessible-style tabbed-panel widget with roving
//! focus (arrow keys move the focus stop, activation switches the shown
//! panel and figure) and a collapsible navigation drawer.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use app::App;
pub use config::AppConfig;
pub use error::{AppError, Result, WidgetError};
