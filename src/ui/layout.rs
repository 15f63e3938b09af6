//! Main layout rendering for the TUI.

use crate::app::{App, AppView};
use crate::ui::widgets::figure::FigureWidget;
use crate::ui::widgets::nav_drawer::NavDrawerWidget;
use crate::ui::widgets::panel::PanelWidget;
use crate::ui::widgets::tab_bar::TabBarWidget;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Draw the main application UI
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.view {
        AppView::Browse => draw_browse(frame, app, area),
        AppView::Help => draw_help(frame, area),
    }

    // Draw navigation drawer overlay if open
    if app.nav.is_open() {
        draw_nav_drawer(frame, app, area);
    }

    // Draw error message overlay if present
    if let Some(ref error) = app.error_message {
        draw_error_overlay(frame, error, area);
    }
}

/// Draw the main browse view: header, tab bar, figure + panel, footer
fn draw_browse(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(2), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(2), // Footer
        ])
        .split(area);

    // Header with the nav toggle indicator on the right
    let header = Line::from(vec![
        Span::styled(
            "rove-tui",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            NavDrawerWidget::toggle_indicator(&app.nav),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(header).block(Block::default().borders(Borders::BOTTOM)),
        chunks[0],
    );

    // Tab bar
    let tab_bar = TabBarWidget::new(app.tabs.tabs(), app.tabs.selected(), app.tabs.focused());
    frame.render_widget(tab_bar, chunks[1]);

    // Content: figure on the left, panel on the right
    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);

    frame.render_widget(FigureWidget::new(app.deck.visible_figure()), content[0]);
    frame.render_widget(PanelWidget::new(app.deck.visible_panel()), content[1]);

    // Footer with keybinding hints
    let footer_text =
        " ←/→: Move focus | Enter: Activate | 1-9: Activate tab | m: Menu | ?: Help | q: Quit ";
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[3]);
}

/// Draw the navigation drawer over the left edge of the screen
fn draw_nav_drawer(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width.min(28);
    let drawer_area = Rect {
        x: area.x,
        y: area.y,
        width,
        height: area.height,
    };

    frame.render_widget(Clear, drawer_area);
    frame.render_widget(NavDrawerWidget::new(&app.nav), drawer_area);
}

/// Draw the help overlay with keybindings
fn draw_help(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("Keybindings"),
        Line::default(),
        Line::from("  ←/h        Move focus to the previous tab"),
        Line::from("  →/l        Move focus to the next tab"),
        Line::from("  Enter/Space  Activate the focused tab"),
        Line::from("  1-9        Activate a tab directly"),
        Line::from("  m          Toggle the navigation drawer"),
        Line::from("  Esc        Close overlay / dismiss error"),
        Line::from("  q          Quit"),
        Line::default(),
        Line::from("Moving focus never changes the shown panel;"),
        Line::from("only activation does."),
    ];

    let help = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Help"));
    frame.render_widget(help, centered_rect(area, 52, 16));
}

/// Draw an error overlay near the bottom of the screen
fn draw_error_overlay(frame: &mut Frame, error: &str, area: Rect) {
    let msg_area = Rect {
        x: area.x + 2,
        y: area.y + area.height.saturating_sub(5),
        width: area.width.saturating_sub(4),
        height: 3,
    };

    frame.render_widget(Clear, msg_area);

    let overlay = Paragraph::new(error)
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Error (Esc to dismiss)")
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(overlay, msg_area);
}

/// Center a fixed-size rect inside `area`, clamped to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
