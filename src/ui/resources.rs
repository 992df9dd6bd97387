//! Resource library panel: category filter, list and detail view.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::helpers::spinner;
use super::layout::LayoutContext;
use crate::app::App;
use crate::models::Resource;

/// Category filter line with the selected filter highlighted.
pub fn category_line(app: &App) -> Line<'static> {
    let palette = &app.palette;
    let selected = app.resources.selected_category();
    let mut spans = vec![Span::styled("◀ ", Style::default().fg(palette.dim))];
    for category in app.resources.categories() {
        let style = if category == selected {
            Style::default()
                .fg(palette.title)
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.dim)
        };
        spans.push(Span::styled(format!(" {} ", category.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("▶", Style::default().fg(palette.dim)));
    if app.resources.is_loading() {
        spans.push(Span::styled(
            format!("  {}", spinner(app.tick_count)),
            Style::default().fg(palette.accent),
        ));
    }
    Line::from(spans)
}

/// Detail lines for one resource.
pub fn detail_lines(resource: &Resource, app: &App) -> Vec<Line<'static>> {
    let palette = &app.palette;
    let mut lines = vec![
        Line::from(Span::styled(
            resource.title.clone(),
            Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("[{}]", resource.category_badge()),
            Style::default().fg(palette.accent),
        )),
        Line::default(),
    ];
    if !resource.description.is_empty() {
        lines.push(Line::from(Span::styled(
            resource.description.clone(),
            Style::default().fg(palette.text),
        )));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        resource.content_preview(),
        Style::default().fg(palette.dim),
    )));
    if let Some(url) = resource.link() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(
                "o: Learn more → ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(url.to_string(), Style::default().fg(palette.text)),
        ]));
    }
    lines
}

pub fn render_resources(frame: &mut Frame, area: Rect, app: &App) {
    let palette = &app.palette;
    let [filter_area, body_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(area);

    let filter_block = Block::default()
        .title(" Categories · ←/→ ")
        .borders(Borders::ALL)
        .border_type(palette.border_type)
        .border_style(Style::default().fg(palette.border));
    frame.render_widget(Paragraph::new(category_line(app)).block(filter_block), filter_area);

    let ctx = LayoutContext::from_rect(area);
    let [list_area, detail_area] = if ctx.should_stack_panels() {
        Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(body_area)
    } else {
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(body_area)
    };

    let list_block = Block::default()
        .title(format!(" Resources ({}) ", app.resources.resources().len()))
        .borders(Borders::ALL)
        .border_type(palette.border_type)
        .border_style(Style::default().fg(palette.border_focused));

    if app.resources.resources().is_empty() {
        let text = if app.resources.is_loading() {
            "Loading resources…"
        } else {
            "No resources in this category."
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(palette.dim))).block(list_block),
            list_area,
        );
    } else {
        let items: Vec<ListItem> = app
            .resources
            .resources()
            .iter()
            .map(|r| ListItem::new(r.title.clone()))
            .collect();
        let list = List::new(items)
            .block(list_block)
            .style(Style::default().fg(palette.text))
            .highlight_style(
                Style::default()
                    .bg(palette.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        let mut state = ListState::default().with_selected(Some(app.resources.selected_index()));
        frame.render_stateful_widget(list, list_area, &mut state);
    }

    let detail_block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_type(palette.border_type)
        .border_style(Style::default().fg(palette.border));
    let detail = match app.resources.selected_resource() {
        Some(resource) => Paragraph::new(detail_lines(resource, app)),
        None => Paragraph::new(Span::styled(
            "Select a resource with ↑/↓.",
            Style::default().fg(palette.dim),
        )),
    };
    frame.render_widget(
        detail.block(detail_block).wrap(Wrap { trim: false }),
        detail_area,
    );
}
