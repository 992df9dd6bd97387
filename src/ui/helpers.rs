//! Helper functions for UI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::MoodEntry;

/// Spinner frames for pending requests
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for the given tick (advances every 6 ticks).
pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[((tick / 6) % SPINNER_FRAMES.len() as u64) as usize]
}

/// Word-wrap `text` to `width` display columns. Explicit newlines are kept
/// and words longer than a line are broken.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if current_width > 0 && current_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if word_width > width {
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current_width > 0 && current_width + ch_width > width {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
                continue;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
        lines.push(current);
    }
    lines
}

/// Truncate to `max_width` display columns, ending with "…" when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push('…');
    out
}

/// Slice of a single-line input that fits `width` columns with the cursor
/// visible. Returns the visible text and the cursor column within it.
pub fn input_viewport(content: &str, cursor_column: usize, width: usize) -> (String, u16) {
    if width == 0 {
        return (String::new(), 0);
    }
    let skip = cursor_column.saturating_sub(width - 1);
    let mut visible = String::new();
    let mut column = 0;
    for ch in content.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if column < skip {
            column += ch_width;
            continue;
        }
        if column + ch_width > skip + width {
            break;
        }
        visible.push(ch);
        column += ch_width;
    }
    (visible, (cursor_column - skip) as u16)
}

/// Short timestamp for a mood history row.
pub fn format_entry_time(entry: &MoodEntry) -> String {
    entry
        .parsed_timestamp()
        .map(|dt| dt.format("%b %d, %H:%M").to_string())
        .unwrap_or_else(|| "unknown time".to_string())
}

/// Line count as a terminal row count, saturating at `u16::MAX`.
pub fn line_count(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX)
}
