//! Success panel shown after a valid submission

use crate::app::App;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the success view with its Back button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let accent = app.config.accent();
    let area = centered(area, 44, 11);

    let block = Block::default()
        .title(" Success ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1), // Headline
            Constraint::Length(1), // Detail
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1), // Help text
        ])
        .split(inner);

    let headline = Paragraph::new("Registration complete!")
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(headline, chunks[1]);

    let detail = Paragraph::new("Thank you for signing up.").alignment(Alignment::Center);
    frame.render_widget(detail, chunks[2]);

    let button_area = centered(chunks[4], 12, BUTTON_HEIGHT);
    render_button(frame, button_area, "Back", true, accent);

    if app.config.help_visible() {
        let help = Paragraph::new("Enter: back to the form")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[5]);
    }
}
