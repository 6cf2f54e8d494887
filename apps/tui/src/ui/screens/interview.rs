use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Control};
use crate::ui::widgets::fields::{render_button, render_text_field};

pub fn render(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Job role
            Constraint::Min(4),    // Custom questions
            Constraint::Length(3), // Generate button
        ])
        .split(columns[0]);

    render_text_field(
        app,
        f,
        left[0],
        Control::JobRole,
        "Job Role",
        &app.job_role,
        "e.g. Project Manager",
    );
    render_text_field(
        app,
        f,
        left[1],
        Control::CustomQuestions,
        "Custom Questions",
        &app.custom_questions,
        "Your own questions, one per line",
    );
    render_button(
        app,
        f,
        left[2],
        Control::GenerateQuestions,
        "Generate Questions",
    );

    render_question_list(app, f, columns[1]);
}

fn render_question_list(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(" Questions ({}) ", app.generated_questions.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.generated_questions.is_empty() {
        let paragraph = Paragraph::new("No generated questions yet.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(ratatui::layout::Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let mut lines = Vec::with_capacity(app.generated_questions.len() * 2);
    for (i, question) in app.generated_questions.iter().enumerate() {
        lines.push(TextLine::from(Span::styled(
            question.category.clone(),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(TextLine::from(format!("{}. {}", i + 1, question.question)));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    f.render_widget(paragraph, area);
}
