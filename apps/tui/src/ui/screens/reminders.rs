use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Control};
use crate::ui::widgets::fields::{render_button, render_text_field};

pub fn render(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Time field
            Constraint::Length(3), // Enable button
            Constraint::Min(3),    // State note
        ])
        .split(area);

    render_text_field(
        app,
        f,
        chunks[0],
        Control::ReminderTime,
        "Daily Reminder Time",
        &app.reminder_time,
        "HH:MM",
    );

    let label = if app.reminder_enabled {
        "Active"
    } else {
        "Enable Reminder"
    };
    render_button(app, f, chunks[1], Control::EnableReminder, label);

    let note = if app.reminder_enabled {
        format!("Daily reminder active at {}.", app.reminder_time)
    } else {
        "Enabling asks the desktop for notification permission; nothing \
         changes unless it is granted."
            .to_string()
    };
    let paragraph = Paragraph::new(note)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(paragraph, chunks[2]);
}
