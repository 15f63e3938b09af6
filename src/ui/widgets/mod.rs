//! Reusable UI widgets for rove-tui.

pub mod figure;
pub mod nav_drawer;
pub mod panel;
pub mod tab_bar;
