//! Mood panel: level picker, notes and recent history.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::helpers::{format_entry_time, input_viewport, spinner, truncate_to_width};
use super::layout::LayoutContext;
use super::theme::band_color;
use crate::app::App;
use crate::models::MoodLevel;

/// The 1-10 scale with the chosen level filled in.
pub fn level_scale(level: MoodLevel) -> Vec<Span<'static>> {
    let color = band_color(level.band());
    (MoodLevel::MIN..=MoodLevel::MAX)
        .map(|v| {
            if v <= level.value() {
                Span::styled("● ", Style::default().fg(color))
            } else {
                Span::styled("· ", Style::default().fg(ratatui::style::Color::DarkGray))
            }
        })
        .collect()
}

pub fn render_mood(frame: &mut Frame, area: Rect, app: &App) {
    let ctx = LayoutContext::from_rect(area);
    let [form_area, history_area] = if ctx.should_stack_panels() {
        Layout::vertical([Constraint::Length(11), Constraint::Min(3)]).areas(area)
    } else {
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area)
    };
    render_form(frame, form_area, app);
    render_history(frame, history_area, app);
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let palette = &app.palette;
    let block = Block::default()
        .title(" How are you feeling today? ")
        .borders(Borders::ALL)
        .border_type(palette.border_type)
        .border_style(Style::default().fg(palette.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [level_area, notes_area, hint_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Min(1),
    ])
    .areas(inner);

    let level = app.mood.level();
    let level_color = band_color(level.band());
    let mut scale = vec![Span::raw(" ")];
    scale.extend(level_scale(level));
    let level_lines = vec![
        Line::from(vec![
            Span::raw(format!(" {}  ", level.emoji())),
            Span::styled(
                level.to_string(),
                Style::default()
                    .fg(level_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(scale),
        Line::from(Span::styled(
            " ←/→ adjust level",
            Style::default().fg(palette.dim),
        )),
    ];
    frame.render_widget(Paragraph::new(level_lines), level_area);

    let notes_block = Block::default()
        .title(" Notes (optional) ")
        .borders(Borders::ALL)
        .border_type(palette.border_type)
        .border_style(Style::default().fg(palette.border));
    let notes_inner = notes_block.inner(notes_area);
    let (visible, cursor_x) = input_viewport(
        app.mood.notes.content(),
        app.mood.notes.cursor_column(),
        notes_inner.width as usize,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(visible, Style::default().fg(palette.text))).block(notes_block),
        notes_area,
    );
    if app.alert.is_none() && notes_inner.width > 0 && notes_inner.height > 0 {
        frame.set_cursor_position((notes_inner.x + cursor_x, notes_inner.y));
    }

    let hint = if app.mood.is_submitting() {
        Span::styled(
            format!(" {} Logging mood…", spinner(app.tick_count)),
            Style::default().fg(palette.dim),
        )
    } else {
        Span::styled(
            " Enter: Log Mood",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(hint)), hint_area);
}

fn render_history(frame: &mut Frame, area: Rect, app: &App) {
    let palette = &app.palette;
    let block = Block::default()
        .title(" Recent Mood History ")
        .borders(Borders::ALL)
        .border_type(palette.border_type)
        .border_style(Style::default().fg(palette.border));

    let entries = app.mood.recent_history(app.config.history_display_limit);
    if entries.is_empty() {
        let text = if app.mood.history_loaded() {
            "No mood entries yet. Log your first one!"
        } else {
            "Loading history…"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(palette.dim))).block(block),
            area,
        );
        return;
    }

    let notes_width = (area.width as usize).saturating_sub(30).max(8);
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let level = entry.mood_level;
            let mut spans = vec![
                Span::raw(format!("{} ", level.emoji())),
                Span::styled(
                    format!("{:>5}", level.to_string()),
                    Style::default().fg(band_color(level.band())),
                ),
                Span::styled(
                    format!("  {}", format_entry_time(entry)),
                    Style::default().fg(palette.dim),
                ),
            ];
            if let Some(notes) = entry.notes() {
                spans.push(Span::styled(
                    format!("  {}", truncate_to_width(notes, notes_width)),
                    Style::default().fg(palette.text),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
