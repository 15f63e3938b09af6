//! Navigation drawer widget and toggle indicator.

use crate::domain::NavState;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

/// Widget for displaying the navigation drawer when it is open
pub struct NavDrawerWidget<'a> {
    nav: &'a NavState,
}

impl<'a> NavDrawerWidget<'a> {
    pub fn new(nav: &'a NavState) -> Self {
        Self { nav }
    }

    /// Indicator shown in the header for the toggle control.
    /// Mirrors the drawer's expanded flag, not its visibility flag, so a
    /// disagreement between the redundant pair would be visible on screen.
    pub fn toggle_indicator(nav: &NavState) -> &'static str {
        if nav.is_expanded() {
            "[x] close"
        } else {
            "[=] menu"
        }
    }

    fn build_items(&self) -> Vec<ListItem<'a>> {
        self.nav
            .entries()
            .iter()
            .map(|entry| {
                let line = Line::from(vec![
                    Span::styled(
                        format!(" {} ", entry.badge),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(entry.label.clone()),
                ]);
                ListItem::new(line)
            })
            .collect()
    }
}

impl Widget for NavDrawerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items = self.build_items();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Navigation")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        Widget::render(list, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NavEntry;

    #[test]
    fn test_toggle_indicator_tracks_expanded_flag() {
        let mut nav = NavState::closed(vec![]);
        assert_eq!(NavDrawerWidget::toggle_indicator(&nav), "[=] menu");
        nav.toggle();
        assert_eq!(NavDrawerWidget::toggle_indicator(&nav), "[x] close");
    }

    #[test]
    fn test_items_match_entries() {
        let nav = NavState::open(vec![
            NavEntry::new("00", "Home"),
            NavEntry::new("01", "Destination"),
            NavEntry::new("02", "Crew"),
        ]);
        let widget = NavDrawerWidget::new(&nav);
        assert_eq!(widget.build_items().len(), 3);
    }
}
