use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::{App, Control};
use crate::ui::widgets::fields::{field_block, render_button};

pub fn render(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    render_job_picker(app, f, chunks[0]);
    render_button(
        app,
        f,
        chunks[1],
        Control::GenerateStudyGuide,
        "Generate Study Guide (.docx)",
    );
}

fn render_job_picker(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = field_block(app, Control::StudyJobList, "Select Job");

    if app.jobs.is_empty() {
        let paragraph = Paragraph::new("Track a job first on the Job Tracker panel.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(ratatui::layout::Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem<'_>> = app
        .jobs
        .iter()
        .enumerate()
        .map(|(i, job)| {
            let marker = if app.study_job_index == Some(i) {
                "(•) "
            } else {
                "( ) "
            };
            let mut item = ListItem::new(format!("{marker}{} at {}", job.title, job.company));
            if app.study_job_index == Some(i) && app.focus == Control::StudyJobList {
                item = item.style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                );
            }
            item
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
