//! Crisis support panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::helpers::{line_count, wrap_text};
use super::theme::COLOR_CRISIS;
use crate::app::App;
use crate::models::{COPING_STRATEGIES, EMERGENCY_NUMBERS};

fn heading(text: &str, color: ratatui::style::Color) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn wrapped(text: &str, indent: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width.saturating_sub(indent.len()).max(1))
        .into_iter()
        .map(|row| Line::from(Span::styled(format!("{}{}", indent, row), style)))
        .collect()
}

/// All crisis panel lines for a content width of `width` columns.
pub fn crisis_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let palette = &app.palette;
    let text = Style::default().fg(palette.text);
    let dim = Style::default().fg(palette.dim);
    let mut lines = vec![heading("⚠ If you are in immediate danger", COLOR_CRISIS)];

    let numbers: Vec<Span> = EMERGENCY_NUMBERS
        .iter()
        .flat_map(|(label, number)| {
            [
                Span::styled(
                    format!("  {} ", label),
                    Style::default().fg(COLOR_CRISIS).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("(tel:{})", number), dim),
            ]
        })
        .collect();
    lines.push(Line::from(numbers));
    lines.push(Line::default());

    lines.push(heading("Crisis Hotlines", palette.accent));
    for contact in app.crisis.contacts() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", contact.name),
                Style::default()
                    .fg(palette.title)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", contact.phone), Style::default().fg(palette.success)),
        ]));
        let dial = contact.dial_string();
        if !dial.is_empty() && dial != contact.phone {
            lines.push(Line::from(Span::styled(format!("    dial {}", dial), dim)));
        }
        if !contact.description.is_empty() {
            lines.extend(wrapped(&contact.description, "    ", width, dim));
        }
    }
    lines.push(Line::default());

    lines.push(heading("Immediate Steps", palette.accent));
    for (idx, step) in app.crisis.steps().iter().enumerate() {
        let rows = wrap_text(step, width.saturating_sub(6).max(1));
        for (row_idx, row) in rows.into_iter().enumerate() {
            let prefix = if row_idx == 0 {
                format!("  {}. ", idx + 1)
            } else {
                "     ".to_string()
            };
            lines.push(Line::from(Span::styled(format!("{}{}", prefix, row), text)));
        }
    }
    lines.push(Line::default());

    lines.push(heading("Coping Strategies", palette.accent));
    for strategy in COPING_STRATEGIES.iter() {
        lines.push(Line::from(Span::styled(
            format!("  • {}", strategy.title),
            Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(wrapped(strategy.description, "    ", width, dim));
    }
    lines.push(Line::default());
    lines.extend(wrapped(
        "You are not alone. Reaching out is a sign of strength.",
        "",
        width,
        Style::default().fg(palette.accent),
    ));
    lines
}

pub fn render_crisis(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .title(" Crisis Support · ↑/↓ scroll ")
        .borders(Borders::ALL)
        .border_type(app.palette.border_type)
        .border_style(Style::default().fg(COLOR_CRISIS));
    let inner = block.inner(area);

    let lines = crisis_lines(app, inner.width as usize);
    let max_scroll = line_count(lines.len()).saturating_sub(inner.height);
    app.crisis.clamp_scroll(max_scroll);

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .scroll((app.crisis.scroll(), 0)),
        area,
    );
}
