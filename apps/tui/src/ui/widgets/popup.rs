use ratatui::layout::Rect;
use ratatui::prelude::Buffer;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use ratatui::Frame;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
            ratatui::layout::Constraint::Percentage(percent_y),
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
            ratatui::layout::Constraint::Percentage(percent_x),
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    horizontal_layout[1]
}

pub struct ClearWidget;

impl Widget for ClearWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ratatui::widgets::Clear.render(area, buf);
    }
}

/// Yes/no confirmation dialog for destructive actions.
pub fn render_confirm(f: &mut Frame<'_>, message: &str) {
    let area = centered_rect(40, 20, f.area());
    f.render_widget(ClearWidget, area);

    let lines = vec![
        TextLine::from(message.to_string()),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled("y", key_style()),
            Span::raw(": confirm   "),
            Span::styled("n", key_style()),
            Span::raw(": cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .title(" Confirm ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(paragraph, area);
}

/// Single-line text prompt, used for naming a saved resume.
pub fn render_prompt(f: &mut Frame<'_>, title: &str, value: &str) {
    let area = centered_rect(50, 20, f.area());
    f.render_widget(ClearWidget, area);

    let lines = vec![
        TextLine::from(format!("{value}\u{2588}")),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled("Enter", key_style()),
            Span::raw(": save   "),
            Span::styled("Esc", key_style()),
            Span::raw(": cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(paragraph, area);
}

/// Key reference overlay toggled with F1.
pub fn render_help(f: &mut Frame<'_>) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(ClearWidget, area);

    let entries = [
        ("Tab / Shift+Tab", "switch panel"),
        ("Up / Down", "move focus, navigate lists"),
        ("Enter", "edit a field, press a button, pick a list entry"),
        ("Esc", "stop editing, dismiss a dialog"),
        ("s", "save the resume buffer (Resume panel)"),
        ("d", "delete the highlighted resume or job"),
        ("Left / Right", "cycle the job status select"),
        ("q", "quit"),
    ];

    let mut lines = Vec::with_capacity(entries.len());
    for (keys, action) in entries {
        lines.push(TextLine::from(vec![
            Span::styled(format!("{keys:<18}"), key_style()),
            Span::raw(action),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(paragraph, area);
}

fn key_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}
