// UI module for jobease-tui
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Margin};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use crate::app::{App, AppScreen, Control, Modal, Tab};

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    if app.screen == AppScreen::ApiKeySetup {
        screens::api_key::render(app, f);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(8),    // Panel content
            Constraint::Length(3), // Status line
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)))
        .to_vec();

    render_tab_bar(app, f, chunks[0]);

    match app.active_tab {
        Tab::Resume => screens::resume::render(app, f, chunks[1]),
        Tab::CoverLetter => screens::cover_letter::render(app, f, chunks[1]),
        Tab::Tracker => screens::tracker::render(app, f, chunks[1]),
        Tab::Interview => screens::interview::render(app, f, chunks[1]),
        Tab::Reminders => screens::reminders::render(app, f, chunks[1]),
        Tab::StudyGuide => screens::study_guide::render(app, f, chunks[1]),
    }

    render_status_line(app, f, chunks[2]);
    render_shortcuts(app, f, chunks[3]);

    match app.modal.clone() {
        Some(Modal::ConfirmDeleteResume(_)) => {
            widgets::popup::render_confirm(f, "Delete this resume?");
        }
        Some(Modal::ConfirmDeleteJob(_)) => {
            widgets::popup::render_confirm(f, "Delete this job entry?");
        }
        Some(Modal::PromptResumeName) => {
            widgets::popup::render_prompt(f, "Resume name", &app.prompt_input);
        }
        Some(Modal::Help) => widgets::popup::render_help(f),
        None => {}
    }
}

fn render_tab_bar(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let titles: Vec<TextLine<'_>> = Tab::ALL
        .iter()
        .map(|tab| TextLine::from(tab.label()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" JobEase Suite ")
                .title_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(tabs, area);
}

fn render_status_line(app: &mut App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let block = Block::default()
        .title(" Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if let Some(kind) = app.generating {
        let inner = area.inner(Margin::new(1, 1));
        f.render_widget(block, area);
        let throbber = throbber_widgets_tui::Throbber::default()
            .label(format!("Generating {}...", kind.label().to_lowercase()))
            .style(Style::default().fg(Color::Cyan));
        f.render_stateful_widget(throbber, inner, &mut app.throbber_state);
        return;
    }

    let paragraph = Paragraph::new(app.status_message.as_str())
        .style(Style::default().fg(Color::Gray))
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let mut spans = vec![
        Span::styled("Tab", key_style()),
        Span::raw(": panel  "),
        Span::styled("↑/↓", key_style()),
        Span::raw(": focus  "),
        Span::styled("Enter", key_style()),
        Span::raw(if app.editing {
            ": done  "
        } else {
            ": edit/activate  "
        }),
    ];

    match app.focus {
        Control::SavedResumes | Control::JobList => {
            spans.push(Span::styled("d", key_style()));
            spans.push(Span::raw(": delete  "));
        }
        Control::JobStatusField => {
            spans.push(Span::styled("←/→", key_style()));
            spans.push(Span::raw(": status  "));
        }
        _ => {}
    }
    if app.active_tab == Tab::Resume {
        spans.push(Span::styled("s", key_style()));
        spans.push(Span::raw(": save resume  "));
    }
    spans.push(Span::styled("F1", key_style()));
    spans.push(Span::raw(": help  "));
    spans.push(Span::styled("q", key_style()));
    spans.push(Span::raw(": quit"));

    f.render_widget(Paragraph::new(TextLine::from(spans)), area);
}

fn key_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}
