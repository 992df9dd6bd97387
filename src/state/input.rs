//! Single-line text input with a character-indexed cursor.

use unicode_width::UnicodeWidthStr;

/// Editable text buffer backing the chat box and the mood notes field.
///
/// The cursor counts characters, not bytes, so multi-byte input such as
/// accented letters or emoji edits cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    content: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a string at the cursor, dropping line breaks.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.insert_char(c);
        }
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character under the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width of the text before the cursor.
    pub fn cursor_column(&self) -> usize {
        let at = self.byte_index(self.cursor);
        self.content[..at].width()
    }

    /// Replace the content and move the cursor to the end.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Take the content, leaving the input empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// True when the content is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "helo".chars() {
            input.insert_char(c);
        }
        input.move_cursor_left();
        input.insert_char('l');
        assert_eq!(input.content(), "hello");
        assert_eq!(input.cursor(), 4);

        input.move_cursor_end();
        input.backspace();
        assert_eq!(input.content(), "hell");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new();
        input.insert_str("café");
        input.move_cursor_left();
        input.insert_char('ñ');
        assert_eq!(input.content(), "cafñé");
        input.move_cursor_end();
        input.backspace();
        input.backspace();
        assert_eq!(input.content(), "caf");
        assert_eq!(input.len(), 3);
    }

    #[test]
    fn test_delete_and_home() {
        let mut input = TextInput::new();
        input.set_content("abc");
        input.move_cursor_home();
        input.delete_char();
        assert_eq!(input.content(), "bc");
        input.move_cursor_left();
        assert_eq!(input.cursor(), 0);
        input.backspace();
        assert_eq!(input.content(), "bc");
    }

    #[test]
    fn test_cursor_column_uses_display_width() {
        let mut input = TextInput::new();
        input.set_content("日本");
        assert_eq!(input.cursor(), 2);
        assert_eq!(input.cursor_column(), 4);
    }

    #[test]
    fn test_take_and_blank() {
        let mut input = TextInput::new();
        input.set_content("   ");
        assert!(input.is_blank());
        assert!(!input.is_empty());
        assert_eq!(input.take(), "   ");
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_insert_str_drops_newlines() {
        let mut input = TextInput::new();
        input.insert_str("one\ntwo\r\n");
        assert_eq!(input.content(), "onetwo");
    }
}
