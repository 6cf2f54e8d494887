use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{List, ListItem};
use ratatui::Frame;

use crate::app::{App, Control};
use crate::domain::MAX_RESUMES;
use crate::ui::widgets::fields::{field_block, render_button, render_text_field};
use crate::ui::widgets::tables::scroll_offset;

pub fn render(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Saved resumes
            Constraint::Length(3), // Import path
            Constraint::Min(6),    // Resume buffer
        ])
        .split(columns[0]);

    render_saved_list(app, f, left[0]);
    render_text_field(
        app,
        f,
        left[1],
        Control::ImportPath,
        "Import (.txt or .docx)",
        &app.import_path,
        "Path to a resume file, Enter to load",
    );
    render_text_field(
        app,
        f,
        left[2],
        Control::ResumeBuffer,
        "Base Resume",
        &app.resume_buffer,
        "Import a file or paste resume text...",
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(3)])
        .split(columns[1]);

    render_text_field(
        app,
        f,
        right[0],
        Control::JobDescription,
        "Job Description",
        &app.job_description,
        "Paste the job description here...",
    );
    render_button(
        app,
        f,
        right[1],
        Control::GenerateResume,
        "Generate Resume (.docx)",
    );
}

fn render_saved_list(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = format!("Saved Resumes ({}/{MAX_RESUMES})", app.resumes.len());
    let block = field_block(app, Control::SavedResumes, &title);

    let visible = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(app.resumes.len(), visible, app.resume_list_index);

    let items: Vec<ListItem<'_>> = app
        .resumes
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, profile)| {
            let selected_mark = if app.selected_resume == Some(profile.id) {
                "● "
            } else {
                "  "
            };
            let mut item = ListItem::new(format!("{selected_mark}{}", profile.name));
            if i == app.resume_list_index && app.focus == Control::SavedResumes {
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

    if items.is_empty() {
        let empty = List::new([ListItem::new("No saved resumes yet")])
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
    } else {
        f.render_widget(List::new(items).block(block), area);
    }
}
