//! Keyboard handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::warn;

use super::{App, Tab};

const PAGE_LINES: u16 = 5;

impl App {
    /// Route a terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Paste(text) => self.handle_paste(&text),
            Event::Resize(_, _) => self.mark_dirty(),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        self.mark_dirty();

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.alert = None;
            }
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.switch_tab(self.tab.next());
                return;
            }
            KeyCode::BackTab => {
                self.switch_tab(self.tab.prev());
                return;
            }
            KeyCode::F(n @ 1..=4) => {
                if let Some(tab) = Tab::from_index(n as usize - 1) {
                    self.switch_tab(tab);
                }
                return;
            }
            _ => {}
        }

        if ctrl {
            return;
        }

        match self.tab {
            Tab::Chat => self.handle_chat_key(key),
            Tab::Mood => self.handle_mood_key(key),
            Tab::Resources => self.handle_resources_key(key),
            Tab::Crisis => self.handle_crisis_key(key),
        }
    }

    /// Show `tab`. Only changes which panel renders.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.mark_dirty();
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.submit_chat();
            }
            KeyCode::PageUp => self.chat.scroll_up(PAGE_LINES),
            KeyCode::PageDown => self.chat.scroll_down(PAGE_LINES),
            KeyCode::Up if self.chat.suggestions_visible() => self.chat.prev_suggestion(),
            KeyCode::Down if self.chat.suggestions_visible() => self.chat.next_suggestion(),
            KeyCode::Up => self.chat.scroll_up(1),
            KeyCode::Down => self.chat.scroll_down(1),
            _ if self.chat.is_busy() => {}
            KeyCode::Char(c) => self.chat.input.insert_char(c),
            KeyCode::Backspace => self.chat.input.backspace(),
            KeyCode::Delete => self.chat.input.delete_char(),
            KeyCode::Left => self.chat.input.move_cursor_left(),
            KeyCode::Right => self.chat.input.move_cursor_right(),
            KeyCode::Home => self.chat.input.move_cursor_home(),
            KeyCode::End => self.chat.input.move_cursor_end(),
            _ => {}
        }
    }

    fn handle_mood_key(&mut self, key: KeyEvent) {
        let notes_empty = self.mood.notes.is_empty();
        match key.code {
            KeyCode::Left => self.mood.lower_level(),
            KeyCode::Right => self.mood.raise_level(),
            KeyCode::Char('-') if notes_empty => self.mood.lower_level(),
            KeyCode::Char('+') if notes_empty => self.mood.raise_level(),
            KeyCode::Enter => {
                self.submit_mood();
            }
            KeyCode::Char(c) => self.mood.notes.insert_char(c),
            KeyCode::Backspace => self.mood.notes.backspace(),
            KeyCode::Delete => self.mood.notes.delete_char(),
            KeyCode::Home => self.mood.notes.move_cursor_home(),
            KeyCode::End => self.mood.notes.move_cursor_end(),
            _ => {}
        }
    }

    fn handle_resources_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                if let Some((category, token)) = self.resources.prev_category() {
                    self.spawn_resources_fetch(category, token);
                }
            }
            KeyCode::Right => {
                if let Some((category, token)) = self.resources.next_category() {
                    self.spawn_resources_fetch(category, token);
                }
            }
            KeyCode::Up => self.resources.select_prev_resource(),
            KeyCode::Down => self.resources.select_next_resource(),
            KeyCode::Char('o') | KeyCode::Char('O') => self.open_selected_resource(),
            _ => {}
        }
    }

    fn handle_crisis_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.crisis.scroll_up(1),
            KeyCode::Down => self.crisis.scroll_down(1),
            KeyCode::PageUp => self.crisis.scroll_up(PAGE_LINES),
            KeyCode::PageDown => self.crisis.scroll_down(PAGE_LINES),
            KeyCode::Home => self.crisis.scroll_up(u16::MAX),
            _ => {}
        }
    }

    fn handle_paste(&mut self, text: &str) {
        if self.alert.is_some() {
            return;
        }
        self.mark_dirty();
        match self.tab {
            Tab::Chat if !self.chat.is_busy() => self.chat.input.insert_str(text),
            Tab::Mood => self.mood.notes.insert_str(text),
            _ => {}
        }
    }

    /// Open the selected resource's link in the system browser. Failures
    /// are logged and otherwise ignored.
    pub fn open_selected_resource(&self) {
        let Some(url) = self.resources.selected_resource().and_then(|r| r.link()) else {
            return;
        };
        if let Err(e) = open::that_detached(url) {
            warn!("could not open {}: {}", url, e);
        }
    }
}
