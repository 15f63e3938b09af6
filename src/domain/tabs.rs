//! Tab controller: roving focus and selection for a tabbed-panel widget.
//!
//! Focus and selection are deliberately decoupled, following the standard
//! accessible-tab pattern: arrow keys move the keyboard focus stop between
//! tabs without changing which panel is shown, and only an explicit
//! activation commits a tab as the selected one. The controller owns both
//! cursors, so multiple independent tab widgets never interfere with each
//! other.
//!
//! Content lookup happens through the [`PanelSurface`] capability trait
//! rather than against concrete panel storage, which keeps the focus and
//! selection logic testable without a rendering backend.

use crate::error::{WidgetError, WidgetResult};

/// Identifier of a content panel, referenced by a tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PanelId(String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a figure (the illustration shown alongside a panel).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FigureId(String);

impl FigureId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FigureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One tab: a label plus typed references to its panel and figure.
///
/// The associations are established once at construction and validated
/// against the surface, instead of being re-resolved by string lookup on
/// every activation.
#[derive(Debug, Clone)]
pub struct TabDescriptor {
    pub label: String,
    pub panel: PanelId,
    pub figure: FigureId,
}

impl TabDescriptor {
    pub fn new(
        label: impl Into<String>,
        panel: impl Into<String>,
        figure: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            panel: PanelId::new(panel),
            figure: FigureId::new(figure),
        }
    }
}

/// Capability interface the controller drives on activation.
///
/// An implementation hides all of its panels (or figures) and reveals exactly
/// the one matching the given id. `false` means no element matched; the
/// controller turns that into a hard error.
pub trait PanelSurface {
    /// Hide every panel, then reveal the one whose id matches.
    fn reveal_panel(&mut self, id: &PanelId) -> bool;

    /// Hide every figure, then reveal the one whose id matches.
    fn reveal_figure(&mut self, id: &FigureId) -> bool;
}

/// Focus and selection state for an ordered set of tabs.
#[derive(Debug)]
pub struct TabController {
    tabs: Vec<TabDescriptor>,
    /// Index of the sole selected tab (its panel and figure are shown).
    selected: usize,
    /// Index of the tab holding the roving focus stop.
    focus: usize,
}

impl TabController {
    /// Create a controller with the given initial selection.
    ///
    /// The focus stop starts on the selected tab. Fails on an empty tab set
    /// or an out-of-range initial selection.
    pub fn new(tabs: Vec<TabDescriptor>, selected: usize) -> WidgetResult<Self> {
        if tabs.is_empty() {
            return Err(WidgetError::EmptyTabSet);
        }
        if selected >= tabs.len() {
            return Err(WidgetError::TabOutOfRange {
                index: selected,
                len: tabs.len(),
            });
        }
        Ok(Self {
            tabs,
            selected,
            focus: selected,
        })
    }

    /// Check every tab's panel and figure association against a surface.
    ///
    /// Run once after construction so a dangling reference fails before the
    /// event loop starts rather than on the first activation.
    pub fn validate_against<S: PanelSurface>(&self, surface: &mut S) -> WidgetResult<()> {
        for tab in &self.tabs {
            if !surface.reveal_panel(&tab.panel) {
                return Err(WidgetError::MissingPanel(tab.panel.as_str().to_string()));
            }
            if !surface.reveal_figure(&tab.figure) {
                return Err(WidgetError::MissingFigure(tab.figure.as_str().to_string()));
            }
        }
        // Leave the surface showing the selected tab's content.
        let tab = &self.tabs[self.selected];
        surface.reveal_panel(&tab.panel);
        surface.reveal_figure(&tab.figure);
        Ok(())
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Index of the selected tab.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the tab holding the roving focus stop.
    pub fn focused(&self) -> usize {
        self.focus
    }

    pub fn selected_tab(&self) -> &TabDescriptor {
        &self.tabs[self.selected]
    }

    pub fn focused_tab(&self) -> &TabDescriptor {
        &self.tabs[self.focus]
    }

    /// Move the focus stop one tab to the right, wrapping past the end.
    ///
    /// Focus movement never changes the selection. A single-tab set wraps to
    /// itself.
    pub fn focus_next(&mut self) -> usize {
        self.focus = (self.focus + 1) % self.tabs.len();
        self.focus
    }

    /// Move the focus stop one tab to the left, wrapping past the start.
    pub fn focus_prev(&mut self) -> usize {
        self.focus = if self.focus == 0 {
            self.tabs.len() - 1
        } else {
            self.focus - 1
        };
        self.focus
    }

    /// Activate the tab at `index`: make it the sole selected tab and reveal
    /// its panel and figure on the surface, hiding all others.
    ///
    /// A reveal that matches nothing is a `MissingPanel`/`MissingFigure`
    /// error; the widget model is malformed and the failure should be loud.
    /// Re-activating the already-selected tab is a harmless re-reveal of the
    /// same content.
    pub fn activate<S: PanelSurface>(&mut self, index: usize, surface: &mut S) -> WidgetResult<()> {
        if index >= self.tabs.len() {
            return Err(WidgetError::TabOutOfRange {
                index,
                len: self.tabs.len(),
            });
        }

        self.selected = index;
        let tab = &self.tabs[index];

        if !surface.reveal_panel(&tab.panel) {
            return Err(WidgetError::MissingPanel(tab.panel.as_str().to_string()));
        }
        if !surface.reveal_figure(&tab.figure) {
            return Err(WidgetError::MissingFigure(tab.figure.as_str().to_string()));
        }

        tracing::debug!(
            tab = %tab.label,
            panel = %tab.panel,
            figure = %tab.figure,
            "tab selected"
        );

        Ok(())
    }

    /// Activate the tab currently holding the focus stop.
    pub fn activate_focused<S: PanelSurface>(&mut self, surface: &mut S) -> WidgetResult<()> {
        self.activate(self.focus, surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surface that accepts a fixed set of ids and records reveal calls.
    struct FakeSurface {
        panels: Vec<&'static str>,
        figures: Vec<&'static str>,
        revealed: Vec<String>,
    }

    impl FakeSurface {
        fn new(panels: Vec<&'static str>, figures: Vec<&'static str>) -> Self {
            Self {
                panels,
                figures,
                revealed: Vec::new(),
            }
        }
    }

    impl PanelSurface for FakeSurface {
        fn reveal_panel(&mut self, id: &PanelId) -> bool {
            self.revealed.push(format!("panel:{}", id));
            self.panels.contains(&id.as_str())
        }

        fn reveal_figure(&mut self, id: &FigureId) -> bool {
            self.revealed.push(format!("figure:{}", id));
            self.figures.contains(&id.as_str())
        }
    }

    fn three_tabs() -> Vec<TabDescriptor> {
        vec![
            TabDescriptor::new("Moon", "p0", "img0"),
            TabDescriptor::new("Mars", "p1", "img1"),
            TabDescriptor::new("Europa", "p2", "img2"),
        ]
    }

    fn full_surface() -> FakeSurface {
        FakeSurface::new(vec!["p0", "p1", "p2"], vec!["img0", "img1", "img2"])
    }

    #[test]
    fn test_empty_tab_set_rejected() {
        assert_eq!(
            TabController::new(vec![], 0).unwrap_err(),
            WidgetError::EmptyTabSet
        );
    }

    #[test]
    fn test_initial_selection_out_of_range_rejected() {
        let err = TabController::new(three_tabs(), 3).unwrap_err();
        assert_eq!(err, WidgetError::TabOutOfRange { index: 3, len: 3 });
    }

    #[test]
    fn test_focus_wraps_right() {
        let mut ctl = TabController::new(three_tabs(), 0).unwrap();
        assert_eq!(ctl.focus_next(), 1);
        assert_eq!(ctl.focus_next(), 2);
        assert_eq!(ctl.focus_next(), 0);
    }

    #[test]
    fn test_focus_wraps_left() {
        let mut ctl = TabController::new(three_tabs(), 0).unwrap();
        assert_eq!(ctl.focus_prev(), 2);
        assert_eq!(ctl.focus_prev(), 1);
    }

    #[test]
    fn test_n_rights_return_to_start() {
        let mut ctl = TabController::new(three_tabs(), 0).unwrap();
        let start = ctl.focused();
        for _ in 0..ctl.len() {
            ctl.focus_next();
        }
        assert_eq!(ctl.focused(), start);
    }

    #[test]
    fn test_inverse_moves_cancel() {
        let mut ctl = TabController::new(three_tabs(), 1).unwrap();
        let start = ctl.focused();
        ctl.focus_prev();
        ctl.focus_next();
        assert_eq!(ctl.focused(), start);
        ctl.focus_next();
        ctl.focus_prev();
        assert_eq!(ctl.focused(), start);
    }

    #[test]
    fn test_single_tab_wraps_to_itself() {
        let tabs = vec![TabDescriptor::new("Only", "p0", "img0")];
        let mut ctl = TabController::new(tabs, 0).unwrap();
        assert_eq!(ctl.focus_next(), 0);
        assert_eq!(ctl.focus_prev(), 0);
    }

    #[test]
    fn test_focus_does_not_change_selection() {
        let mut ctl = TabController::new(three_tabs(), 0).unwrap();
        ctl.focus_next();
        ctl.focus_next();
        assert_eq!(ctl.selected(), 0);
        assert_eq!(ctl.focused(), 2);
    }

    #[test]
    fn test_activate_switches_selection_and_reveals() {
        let mut ctl = TabController::new(three_tabs(), 0).unwrap();
        let mut surface = full_surface();

        ctl.activate(1, &mut surface).unwrap();

        assert_eq!(ctl.selected(), 1);
        assert_eq!(surface.revealed, vec!["panel:p1", "figure:img1"]);
    }

    #[test]
    fn test_activate_is_idempotent() {
        let mut ctl = TabController::new(three_tabs(), 0).unwrap();
        let mut surface = full_surface();

        ctl.activate(2, &mut surface).unwrap();
        let selected = ctl.selected();
        ctl.activate(2, &mut surface).unwrap();
        assert_eq!(ctl.selected(), selected);
    }

    #[test]
    fn test_activate_out_of_range() {
        let mut ctl = TabController::new(three_tabs(), 0).unwrap();
        let mut surface = full_surface();
        let err = ctl.activate(7, &mut surface).unwrap_err();
        assert_eq!(err, WidgetError::TabOutOfRange { index: 7, len: 3 });
    }

    #[test]
    fn test_activate_missing_panel_is_hard_error() {
        let tabs = vec![
            TabDescriptor::new("Moon", "p0", "img0"),
            TabDescriptor::new("Mars", "nope", "img1"),
        ];
        let mut ctl = TabController::new(tabs, 0).unwrap();
        let mut surface = FakeSurface::new(vec!["p0"], vec!["img0", "img1"]);

        let err = ctl.activate(1, &mut surface).unwrap_err();
        assert_eq!(err, WidgetError::MissingPanel("nope".to_string()));
    }

    #[test]
    fn test_activate_missing_figure_is_hard_error() {
        let tabs = vec![TabDescriptor::new("Moon", "p0", "gone")];
        let mut ctl = TabController::new(tabs, 0).unwrap();
        let mut surface = FakeSurface::new(vec!["p0"], vec![]);

        let err = ctl.activate(0, &mut surface).unwrap_err();
        assert_eq!(err, WidgetError::MissingFigure("gone".to_string()));
    }

    #[test]
    fn test_validate_catches_dangling_reference() {
        let tabs = vec![
            TabDescriptor::new("Moon", "p0", "img0"),
            TabDescriptor::new("Mars", "p1", "missing"),
        ];
        let ctl = TabController::new(tabs, 0).unwrap();
        let mut surface = FakeSurface::new(vec!["p0", "p1"], vec!["img0"]);

        let err = ctl.validate_against(&mut surface).unwrap_err();
        assert_eq!(err, WidgetError::MissingFigure("missing".to_string()));
    }

    #[test]
    fn test_validate_leaves_selected_content_revealed() {
        let ctl = TabController::new(three_tabs(), 1).unwrap();
        let mut surface = full_surface();

        ctl.validate_against(&mut surface).unwrap();

        let last_two: Vec<_> = surface.revealed.iter().rev().take(2).rev().collect();
        assert_eq!(last_two, vec!["panel:p1", "figure:img1"]);
    }

    #[test]
    fn test_activation_keyboard_scenario() {
        // Press right twice, cursor lands on 2; once more, wraps to 0.
        let mut ctl = TabController::new(three_tabs(), 0).unwrap();
        ctl.focus_next();
        ctl.focus_next();
        assert_eq!(ctl.focused(), 2);
        ctl.focus_next();
        assert_eq!(ctl.focused(), 0);
    }
}
