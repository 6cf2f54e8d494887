use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::{App, Control};
use crate::domain::JobStatus;
use crate::ui::widgets::fields::{field_block, render_button, render_text_field};
use crate::ui::widgets::tables::{scroll_offset, status_color};

pub fn render(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Add form
            Constraint::Min(5),    // Job table
            Constraint::Length(5), // Quick links
        ])
        .split(area);

    render_add_form(app, f, chunks[0]);
    render_job_table(app, f, chunks[1]);
    render_quick_links(f, chunks[2]);
}

fn render_add_form(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(18),
            Constraint::Percentage(12),
        ])
        .split(area);

    render_text_field(
        app,
        f,
        columns[0],
        Control::JobTitle,
        "Job Title",
        &app.new_job_title,
        "Title",
    );
    render_text_field(
        app,
        f,
        columns[1],
        Control::JobCompany,
        "Company",
        &app.new_job_company,
        "Company",
    );
    render_status_select(app, f, columns[2]);
    render_text_field(
        app,
        f,
        columns[3],
        Control::JobDate,
        "Date",
        &app.new_job_date,
        "today",
    );
    render_button(app, f, columns[4], Control::AddJob, "Add");
}

fn render_status_select(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status =
        JobStatus::from_index(app.new_job_status_index).unwrap_or(JobStatus::Applied);
    let paragraph = Paragraph::new(TextLine::from(vec![
        Span::raw("< "),
        Span::styled(
            status.label(),
            Style::default().fg(status_color(status)),
        ),
        Span::raw(" >"),
    ]))
    .alignment(ratatui::layout::Alignment::Center)
    .block(field_block(app, Control::JobStatusField, "Status"));
    f.render_widget(paragraph, area);
}

fn render_job_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = field_block(app, Control::JobList, "Applications");

    if app.jobs.is_empty() {
        let paragraph = Paragraph::new("No tracked applications yet.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(ratatui::layout::Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Title"),
        Cell::from("Company"),
        Cell::from("Status"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let visible = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(app.jobs.len(), visible, app.job_list_index);

    let rows = app
        .jobs
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, job)| {
            let style = if i == app.job_list_index && app.focus == Control::JobList {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(status_color(job.status))
            };
            Row::new(vec![
                Cell::from(job.date.format("%Y-%m-%d").to_string()),
                Cell::from(job.title.clone()),
                Cell::from(job.company.clone()),
                Cell::from(job.status.label()),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(12),
        Constraint::Min(16),
        Constraint::Min(14),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

fn render_quick_links(f: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        TextLine::from(vec![
            Span::raw("LinkedIn   "),
            Span::styled(
                "https://www.linkedin.com/jobs",
                Style::default().fg(Color::Cyan),
            ),
        ]),
        TextLine::from(vec![
            Span::raw("Indeed     "),
            Span::styled("https://www.indeed.com", Style::default().fg(Color::Cyan)),
        ]),
        TextLine::from(vec![
            Span::raw("Glassdoor  "),
            Span::styled(
                "https://www.glassdoor.com",
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Quick Job Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(paragraph, area);
}
