//! Domain entities for rove-tui.
//!
//! This module contains the core widget model:
//! - TabController: roving focus and selection over an ordered tab set
//! - PanelDeck: the panels and figures the tabs switch between
//! - NavState: the collapsible navigation drawer

mod nav;
mod panels;
mod tabs;

pub use nav::{NavEntry, NavState};
pub use panels::{Figure, Panel, PanelDeck};
pub use tabs::{FigureId, PanelId, PanelSurface, TabController, TabDescriptor};
