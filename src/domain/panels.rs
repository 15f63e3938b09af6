//! Concrete panel and figure storage behind the `PanelSurface` trait.

use crate::domain::tabs::{FigureId, PanelId, PanelSurface};

/// A content panel: a heading plus body text.
#[derive(Debug, Clone)]
pub struct Panel {
    pub id: PanelId,
    pub heading: String,
    pub body: String,
    hidden: bool,
}

impl Panel {
    pub fn new(id: impl Into<String>, heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: PanelId::new(id),
            heading: heading.into(),
            body: body.into(),
            hidden: true,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// An illustration shown alongside a panel, as a block of ASCII art.
#[derive(Debug, Clone)]
pub struct Figure {
    pub id: FigureId,
    pub art: String,
    hidden: bool,
}

impl Figure {
    pub fn new(id: impl Into<String>, art: impl Into<String>) -> Self {
        Self {
            id: FigureId::new(id),
            art: art.into(),
            hidden: true,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// The full set of panels and figures a tab widget switches between.
///
/// Invariant once driven by a validated controller: exactly one panel and
/// exactly one figure are unhidden at any time, and they belong to the
/// selected tab. Every reveal first hides the whole set, so a stale unhidden
/// element cannot survive a switch.
#[derive(Debug, Default)]
pub struct PanelDeck {
    panels: Vec<Panel>,
    figures: Vec<Figure>,
}

impl PanelDeck {
    pub fn new(panels: Vec<Panel>, figures: Vec<Figure>) -> Self {
        Self { panels, figures }
    }

    /// The single unhidden panel, if any.
    pub fn visible_panel(&self) -> Option<&Panel> {
        self.panels.iter().find(|p| !p.hidden)
    }

    /// The single unhidden figure, if any.
    pub fn visible_figure(&self) -> Option<&Figure> {
        self.figures.iter().find(|f| !f.hidden)
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// At most one panel and one figure unhidden.
    pub fn is_consistent(&self) -> bool {
        self.panels.iter().filter(|p| !p.hidden).count() <= 1
            && self.figures.iter().filter(|f| !f.hidden).count() <= 1
    }
}

impl PanelSurface for PanelDeck {
    fn reveal_panel(&mut self, id: &PanelId) -> bool {
        for panel in &mut self.panels {
            panel.hidden = true;
        }
        match self.panels.iter_mut().find(|p| &p.id == id) {
            Some(panel) => {
                panel.hidden = false;
                true
            }
            None => false,
        }
    }

    fn reveal_figure(&mut self, id: &FigureId) -> bool {
        for figure in &mut self.figures {
            figure.hidden = true;
        }
        match self.figures.iter_mut().find(|f| &f.id == id) {
            Some(figure) => {
                figure.hidden = false;
                true
            }
            None => false,
        }
    }
}
