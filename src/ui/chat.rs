//! Chat panel: transcript, starter prompts and the message input.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::helpers::{input_viewport, line_count, spinner, wrap_text};
use crate::app::App;
use crate::models::{Origin, SUGGESTIONS};

/// Transcript lines for a content width of `width` columns.
pub fn transcript_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let palette = &app.palette;
    let text_width = width.saturating_sub(2).max(1);
    let mut lines = Vec::new();

    if app.chat.suggestions_visible() {
        lines.push(Line::from(Span::styled(
            "Welcome to MindWell. This is a safe space to share how you feel.",
            Style::default().fg(palette.title),
        )));
        lines.push(Line::from(Span::styled(
            "Pick a starter with ↑/↓ or type your own message.",
            Style::default().fg(palette.dim),
        )));
        lines.push(Line::default());
        for (idx, suggestion) in SUGGESTIONS.iter().enumerate() {
            let selected = app.chat.selected_suggestion() == Some(idx);
            let (marker, style) = if selected {
                (
                    "▶ ",
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(palette.text))
            };
            lines.push(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(suggestion.to_string(), style),
            ]));
        }
        return lines;
    }

    for message in app.chat.messages() {
        let (label, color) = match message.origin {
            Origin::User => ("You", palette.user_message),
            Origin::Assistant => ("MindWell", palette.accent),
        };
        lines.push(Line::from(vec![
            Span::styled(
                label,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", message.timestamp.with_timezone(&chrono::Local).format("%H:%M")),
                Style::default().fg(palette.dim),
            ),
        ]));
        let body_color = match message.origin {
            Origin::User => palette.user_message,
            Origin::Assistant => palette.assistant_message,
        };
        for row in wrap_text(&message.text, text_width) {
            lines.push(Line::from(Span::styled(
                format!("  {}", row),
                Style::default().fg(body_color),
            )));
        }
        lines.push(Line::default());
    }

    if app.chat.is_busy() {
        lines.push(Line::from(Span::styled(
            format!("{} MindWell is typing…", spinner(app.tick_count)),
            Style::default().fg(palette.dim),
        )));
    }
    lines
}

pub fn render_chat(frame: &mut Frame, area: Rect, app: &mut App) {
    let [transcript_area, input_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(area);

    let block = Block::default()
        .title(" Conversation ")
        .borders(Borders::ALL)
        .border_type(app.palette.border_type)
        .border_style(Style::default().fg(app.palette.border));
    let inner = block.inner(transcript_area);

    let lines = transcript_lines(app, inner.width as usize);
    let max_scroll = line_count(lines.len()).saturating_sub(inner.height);
    app.chat.clamp_scroll(max_scroll);
    let top = max_scroll - app.chat.scroll_offset();

    frame.render_widget(Paragraph::new(lines).block(block).scroll((top, 0)), transcript_area);

    render_input(frame, input_area, app);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let palette = &app.palette;
    let busy = app.chat.is_busy();
    let title = if busy {
        " Waiting for a reply… "
    } else {
        " Message · Enter to send "
    };
    let border = if busy {
        palette.border
    } else {
        palette.border_focused
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(palette.border_type)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    let (visible, cursor_x) = input_viewport(
        app.chat.input.content(),
        app.chat.input.cursor_column(),
        inner.width as usize,
    );
    let text_style = if busy {
        Style::default().fg(palette.dim)
    } else {
        Style::default().fg(palette.text)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(visible, text_style)).block(block),
        area,
    );

    if !busy && app.alert.is_none() && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((inner.x + cursor_x, inner.y));
    }
}
