//! Tab bar widget with distinct focused and selected styling.
//!
//! Selection decides which panel is shown; focus decides where arrow-key
//! input lands next. The two are rendered differently so both remain visible
//! when they diverge: the selected tab is underlined, the focused tab is
//! rendered reversed.

use crate::domain::TabDescriptor;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Widget for displaying the tab list
pub struct TabBarWidget<'a> {
    tabs: &'a [TabDescriptor],
    selected: usize,
    focused: usize,
}

impl<'a> TabBarWidget<'a> {
    /// Create a new tab bar widget
    pub fn new(tabs: &'a [TabDescriptor], selected: usize, focused: usize) -> Self {
        Self {
            tabs,
            selected,
            focused,
        }
    }

    fn tab_style(&self, idx: usize) -> Style {
        let mut style = Style::default().fg(Color::Gray);
        if idx == self.selected {
            style = style
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        if idx == self.focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }

    /// Build the tab bar line: numbered labels separated by a divider
    fn build_line(&self) -> Line<'a> {
        let mut spans = Vec::with_capacity(self.tabs.len() * 2);
        for (idx, tab) in self.tabs.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                format!(" {} {} ", idx + 1, tab.label),
                self.tab_style(idx),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for TabBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = self.build_line();
        let bar = Paragraph::new(line)
            .block(Block::default().borders(Borders::BOTTOM))
            .alignment(Alignment::Center);
        bar.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> Vec<TabDescriptor> {
        vec![
            TabDescriptor::new("Moon", "p0", "img0"),
            TabDescriptor::new("Mars", "p1", "img1"),
        ]
    }

    #[test]
    fn test_line_contains_all_labels() {
        let tabs = tabs();
        let widget = TabBarWidget::new(&tabs, 0, 0);
        let line = widget.build_line();
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("1 Moon"));
        assert!(text.contains("2 Mars"));
    }

    #[test]
    fn test_selected_and_focused_styles_differ() {
        let tabs = tabs();
        let widget = TabBarWidget::new(&tabs, 0, 1);
        let selected = widget.tab_style(0);
        let focused = widget.tab_style(1);
        assert!(selected.add_modifier.contains(Modifier::UNDERLINED));
        assert!(!selected.add_modifier.contains(Modifier::REVERSED));
        assert!(focused.add_modifier.contains(Modifier::REVERSED));
        assert!(!focused.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_same_tab_selected_and_focused() {
        let tabs = tabs();
        let widget = TabBarWidget::new(&tabs, 1, 1);
        let style = widget.tab_style(1);
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }
}
