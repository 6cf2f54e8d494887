//! Form field rendering shared by the panel screens.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Control};

/// Border treatment for a focusable control: yellow when focused, cyan while
/// its text is being edited.
pub fn field_block(app: &App, control: Control, title: &str) -> Block<'static> {
    let style = if app.focus == control && app.editing {
        Style::default().fg(Color::Cyan)
    } else if app.focus == control {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(style)
}

/// A single- or multi-line text field with a trailing cursor mark while the
/// field is being edited.
pub fn render_text_field(
    app: &App,
    f: &mut Frame<'_>,
    area: Rect,
    control: Control,
    title: &str,
    value: &str,
    placeholder: &str,
) {
    let editing_here = app.focus == control && app.editing;
    let text = if value.is_empty() && !editing_here {
        Paragraph::new(placeholder.to_string()).style(Style::default().fg(Color::DarkGray))
    } else if editing_here {
        Paragraph::new(format!("{value}\u{2588}"))
    } else {
        Paragraph::new(value.to_string())
    };

    f.render_widget(
        text.wrap(Wrap { trim: false })
            .block(field_block(app, control, title)),
        area,
    );
}

/// A button-style control activated with Enter.
pub fn render_button(app: &App, f: &mut Frame<'_>, area: Rect, control: Control, label: &str) {
    let focused = app.focus == control;
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let paragraph = Paragraph::new(label.to_string())
        .style(style)
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if focused {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        );
    f.render_widget(paragraph, area);
}
