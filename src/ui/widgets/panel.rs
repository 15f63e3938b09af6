//! Panel widget showing the selected tab's content.

use crate::domain::Panel;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Widget for displaying the visible content panel
pub struct PanelWidget<'a> {
    panel: Option<&'a Panel>,
}

impl<'a> PanelWidget<'a> {
    pub fn new(panel: Option<&'a Panel>) -> Self {
        Self { panel }
    }

    fn build_text(&self) -> Text<'a> {
        match self.panel {
            Some(panel) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        panel.heading.clone(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::default(),
                ];
                lines.extend(panel.body.lines().map(|l| Line::from(l.to_string())));
                Text::from(lines)
            }
            None => Text::from(Span::styled(
                "No panel visible",
                Style::default().fg(Color::DarkGray),
            )),
        }
    }
}

impl Widget for PanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(self.build_text())
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Panel"));
        paragraph.render(area, buf);
    }
}
