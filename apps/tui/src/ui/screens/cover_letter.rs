use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Control};
use crate::ui::widgets::fields::render_button;

pub fn render(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(area);

    let resume_state = if app.resume_buffer.trim().is_empty() {
        "missing"
    } else {
        "ready"
    };
    let jd_state = if app.job_description.trim().is_empty() {
        "missing"
    } else {
        "ready"
    };

    let info = Paragraph::new(format!(
        "Uses the resume and job description from the Resume panel.\n\n\
         Base resume: {resume_state}\nJob description: {jd_state}"
    ))
    .wrap(Wrap { trim: true })
    .style(Style::default().fg(Color::Gray))
    .block(
        Block::default()
            .title(" Cover Letter ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(info, chunks[0]);

    render_button(
        app,
        f,
        chunks[1],
        Control::GenerateCoverLetter,
        "Generate Cover Letter (.docx)",
    );
}
