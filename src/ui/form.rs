//! Registration form rendering

use crate::app::App;
use crate::state::Field;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FORM_WIDTH: u16 = 60;
/// Five inputs at 4 rows each (bordered field + error line), the
/// submit button, the help line, and the outer border
const FORM_HEIGHT: u16 = 4 * 5 + BUTTON_HEIGHT + 1 + 2;

/// Draw the registration form view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let accent = app.config.accent();
    let area = centered(area, FORM_WIDTH, FORM_HEIGHT);

    let block = Block::default()
        .title(" User Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Name
            Constraint::Length(4), // Email
            Constraint::Length(4), // Phone
            Constraint::Length(4), // Password
            Constraint::Length(4), // Confirm Password
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1), // Help text
        ])
        .split(inner);

    for (i, field) in Field::ALL.iter().enumerate() {
        draw_field(frame, chunks[i], app, *field, accent);
    }

    let button_area = centered(chunks[5], 14, BUTTON_HEIGHT);
    render_button(
        frame,
        button_area,
        "Submit",
        app.state.form.on_submit_row(),
        accent,
    );

    if app.config.help_visible() {
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab", Style::default().fg(accent)),
            Span::raw(": next field  "),
            Span::styled("Enter", Style::default().fg(accent)),
            Span::raw(": submit  "),
            Span::styled("Esc", Style::default().fg(accent)),
            Span::raw(": reset"),
        ]))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[6]);
    }
}

/// Draw one labeled input with its inline error line underneath
fn draw_field(frame: &mut Frame, area: Rect, app: &App, field: Field, accent: Color) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let form_field = app.state.form.field(field);
    let is_active = app.state.form.active_field() == Some(field);
    let error = app.state.errors.get(&field);

    let border_style = if is_active {
        Style::default().fg(accent)
    } else if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(accent)
    } else {
        Style::default()
    };

    let display_value = form_field.display_value();
    let cursor = if is_active { "▌" } else { "" };

    // The phone field shows its mask template while empty
    let content = if display_value.is_empty() && field == Field::Phone {
        Paragraph::new(Line::from(vec![
            Span::styled(cursor, Style::default().fg(accent)),
            Span::styled("(00) 00000-0000", Style::default().fg(Color::DarkGray)),
        ]))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, value_style),
            Span::styled(cursor, Style::default().fg(accent)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(content.block(block), rows[0]);

    if let Some(message) = error {
        let line = Paragraph::new(format!(" {message}")).style(Style::default().fg(Color::Red));
        frame.render_widget(line, rows[1]);
    }
}
