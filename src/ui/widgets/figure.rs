//! Figure widget showing the selected tab's illustration.

use crate::domain::Figure;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Widget for displaying the visible figure (ASCII art block)
pub struct FigureWidget<'a> {
    figure: Option<&'a Figure>,
}

impl<'a> FigureWidget<'a> {
    pub fn new(figure: Option<&'a Figure>) -> Self {
        Self { figure }
    }

    fn build_text(&self) -> Text<'a> {
        match self.figure {
            Some(figure) => Text::from(
                figure
                    .art
                    .lines()
                    .map(|l| Line::from(l.to_string()))
                    .collect::<Vec<_>>(),
            ),
            None => Text::from(Span::styled(
                "No figure visible",
                Style::default().fg(Color::DarkGray),
            )),
        }
    }
}

impl Widget for FigureWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(self.build_text())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Figure"));
        paragraph.render(area, buf);
    }
}
