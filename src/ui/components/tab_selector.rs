//! Tab bar.
//!
//! Uses a `▶` marker for the selected tab and short labels on compact
//! terminals.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::Tab;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

fn short_label(tab: Tab) -> &'static str {
    match tab {
        Tab::Chat => "Chat",
        Tab::Mood => "Mood",
        Tab::Resources => "Library",
        Tab::Crisis => "Crisis",
    }
}

/// Build the tab bar line with `selected` highlighted. Each tab shows its
/// function-key shortcut.
pub fn render_tab_selector(selected: Tab, palette: &Palette, ctx: &LayoutContext) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    for (idx, tab) in Tab::ALL.iter().enumerate() {
        let label = if ctx.is_compact() {
            short_label(*tab)
        } else {
            tab.label()
        };
        let key = format!("F{} ", idx + 1);

        if *tab == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            if !ctx.is_extra_small() {
                spans.push(Span::styled(key, Style::default().fg(palette.dim)));
            }
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(palette.title)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw("  "));
            if !ctx.is_extra_small() {
                spans.push(Span::styled(key, Style::default().fg(palette.dim)));
            }
            spans.push(Span::styled(label, Style::default().fg(palette.dim)));
        }

        if idx < Tab::ALL.len() - 1 {
            let spacing = if ctx.is_extra_small() { " " } else { "   " };
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}
