//! UI rendering for the MindWell client.
//!
//! One frame is a header, the tab bar, the active panel and a status bar.
//! A blocking alert, when present, is drawn over everything else.

mod chat;
mod components;
mod crisis;
pub mod helpers;
pub mod layout;
mod mood;
mod resources;
pub mod theme;

pub use chat::transcript_lines;
pub use crisis::crisis_lines;
pub use layout::LayoutContext;
pub use mood::level_scale;
pub use resources::{category_line, detail_lines};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{AlertKind, App, Tab};
use components::{render_dialog_frame, render_tab_selector, DialogFrameConfig};

/// Draw the whole UI.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);

    let [header_area, tabs_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area, app);
    frame.render_widget(
        Paragraph::new(render_tab_selector(app.tab, &app.palette, &ctx)),
        tabs_area,
    );

    match app.tab {
        Tab::Chat => chat::render_chat(frame, body_area, app),
        Tab::Mood => mood::render_mood(frame, body_area, app),
        Tab::Resources => resources::render_resources(frame, body_area, app),
        Tab::Crisis => crisis::render_crisis(frame, body_area, app),
    }

    render_status_bar(frame, status_area, app);
    render_alert(frame, area, &ctx, app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let palette = &app.palette;
    let title = Line::from(vec![
        Span::styled(
            " 🧠 MindWell",
            Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Your mental health companion",
            Style::default().fg(palette.dim),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);

    let (dot, label, color) = match app.connection_status {
        Some(true) => ("●", "connected", palette.success),
        Some(false) => ("●", "offline", palette.error),
        None => ("○", "connecting", palette.dim),
    };
    let status = Line::from(vec![
        Span::styled(format!("{} ", dot), Style::default().fg(color)),
        Span::styled(format!("{} ", label), Style::default().fg(palette.dim)),
    ]);
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Right), area);
}

/// Key hints for the active tab.
pub fn key_hints(tab: Tab) -> &'static str {
    match tab {
        Tab::Chat => "Enter send · ↑/↓ starters · PgUp/PgDn scroll",
        Tab::Mood => "←/→ level · type notes · Enter log",
        Tab::Resources => "←/→ category · ↑/↓ select · o open link",
        Tab::Crisis => "↑/↓ scroll",
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let palette = &app.palette;
    let left = match &app.notice {
        Some(notice) => {
            let (mark, color) = match notice.kind {
                AlertKind::Info => ("✓", palette.success),
                AlertKind::Error => ("!", palette.error),
            };
            Span::styled(
                format!(" {} {}", mark, notice.message),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => Span::styled(
            format!(" {} · Tab switch · Ctrl+C quit", key_hints(app.tab)),
            Style::default().fg(palette.dim),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(left)), area);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{} ", app.config.skin),
            Style::default().fg(palette.dim),
        ))
        .alignment(Alignment::Right),
        area,
    );
}

fn render_alert(frame: &mut Frame, area: Rect, ctx: &LayoutContext, app: &App) {
    let Some(alert) = &app.alert else {
        return;
    };
    let palette = &app.palette;
    let (title, color) = match alert.kind {
        AlertKind::Error => ("Error", palette.error),
        AlertKind::Info => ("Notice", palette.accent),
    };
    let config = DialogFrameConfig::new(title, 4);
    let inner = render_dialog_frame(frame, area, ctx, &config, color, palette);

    let lines = vec![
        Line::from(Span::styled(
            alert.message.clone(),
            Style::default().fg(palette.title),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Enter/Esc to dismiss",
            Style::default().fg(palette.dim),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
