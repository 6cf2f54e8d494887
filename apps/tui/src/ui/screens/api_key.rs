use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::popup::centered_rect;

/// Credential gate shown before the suite. The key is rendered masked and
/// never leaves memory.
pub fn render(app: &App, f: &mut Frame<'_>) {
    let area = centered_rect(60, 40, f.area());

    let masked = "*".repeat(app.api_key.chars().count());
    let lines = vec![
        TextLine::from(Span::styled(
            "Welcome to JobEase Suite",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("Enter your Anthropic API key to get started."),
        TextLine::from(""),
        TextLine::from(Span::styled(
            format!("sk> {masked}\u{2588}"),
            Style::default().fg(Color::Cyan),
        )),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(": continue   "),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(": quit"),
        ]),
        TextLine::from(""),
        TextLine::from(Span::styled(
            app.status_message.clone(),
            Style::default().fg(Color::Red),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" JobEase ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(paragraph, area);
}
