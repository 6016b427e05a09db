use crate::input::{Input, InputBase, KeyResult};
use crate::span::Span;
use crate::terminal::{KeyCode, KeyModifiers};
use crate::theme::Theme;
use unicode_width::UnicodeWidthChar;

pub struct TextInput {
    base: InputBase,
    value: String,
    cursor_pos: usize,
}

impl TextInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id),
            value: String::new(),
            cursor_pos: 0,
        }
    }

    pub fn with_min_width(mut self, width: usize) -> Self {
        self.base = self.base.with_min_width(width);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.base = self.base.with_placeholder(placeholder);
        self
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn handle_char(&mut self, ch: char) {
        let byte_pos = self.byte_index(self.cursor_pos);
        self.value.insert(byte_pos, ch);
        self.cursor_pos += 1;
    }

    fn handle_backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let byte_pos = self.byte_index(self.cursor_pos - 1);
        self.value.remove(byte_pos);
        self.cursor_pos -= 1;
    }

    fn handle_delete(&mut self) {
        if self.cursor_pos >= self.char_count() {
            return;
        }
        let byte_pos = self.byte_index(self.cursor_pos);
        self.value.remove(byte_pos);
    }

    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@')
    }

    fn word_start_before(&self, from: usize) -> usize {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = from;

        while pos > 0 && Self::is_separator(chars[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && !Self::is_separator(chars[pos - 1]) {
            pos -= 1;
        }
        pos
    }

    fn word_end_after(&self, from: usize) -> usize {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = from;

        while pos < chars.len() && Self::is_separator(chars[pos]) {
            pos += 1;
        }
        while pos < chars.len() && !Self::is_separator(chars[pos]) {
            pos += 1;
        }
        pos
    }

    fn delete_word_impl(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let start = self.word_start_before(self.cursor_pos);
        let start_byte = self.byte_index(start);
        let end_byte = self.byte_index(self.cursor_pos);
        self.value.replace_range(start_byte..end_byte, "");
        self.cursor_pos = start;
    }
}

impl Input for TextInput {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.cursor_pos = value.chars().count();
        self.value = value;
    }

    fn placeholder(&self) -> Option<&str> {
        self.base.placeholder.as_deref()
    }

    fn min_width(&self) -> usize {
        self.base.min_width
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(ch) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.handle_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.handle_backspace();
                KeyResult::Handled
            }
            KeyCode::Delete => {
                self.handle_delete();
                KeyResult::Handled
            }
            KeyCode::Left => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.cursor_pos = self.word_start_before(self.cursor_pos);
                } else {
                    self.cursor_pos = self.cursor_pos.saturating_sub(1);
                }
                KeyResult::Handled
            }
            KeyCode::Right => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.cursor_pos = self.word_end_after(self.cursor_pos);
                } else if self.cursor_pos < self.char_count() {
                    self.cursor_pos += 1;
                }
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor_pos = self.char_count();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, _theme: &Theme) -> Vec<Span> {
        vec![Span::new(&self.value)]
    }

    fn cursor_offset_in_content(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor_pos)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    fn delete_word(&mut self) {
        self.delete_word_impl();
    }
}

#[cfg(test)]
mod tests {
    use super::TextInput;
    use crate::input::{Input, KeyResult};
    use crate::terminal::{KeyCode, KeyModifiers};

    fn type_text(input: &mut TextInput, text: &str) {
        for ch in text.chars() {
            input.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn inserts_at_cursor() {
        let mut input = TextInput::new("name");
        type_text(&mut input, "Aa");
        input.handle_key(KeyCode::Left, KeyModifiers::NONE);
        type_text(&mut input, "d");
        assert_eq!(input.value(), "Ada");
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn backspace_and_delete_handle_multibyte_chars() {
        let mut input = TextInput::new("name");
        type_text(&mut input, "Zoë!");
        input.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(input.value(), "Zoë");
        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        input.handle_key(KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(input.value(), "oë");
    }

    #[test]
    fn delete_word_removes_previous_word_only() {
        let mut input = TextInput::new("email");
        type_text(&mut input, "ada@example.com");
        input.delete_word();
        assert_eq!(input.value(), "ada@example.");
        input.delete_word();
        assert_eq!(input.value(), "ada@");
    }

    #[test]
    fn enter_requests_submit() {
        let mut input = TextInput::new("name");
        assert_eq!(
            input.handle_key(KeyCode::Enter, KeyModifiers::NONE),
            KeyResult::Submit
        );
    }

    #[test]
    fn control_chars_are_not_inserted() {
        let mut input = TextInput::new("name");
        let result = input.handle_key(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(result, KeyResult::NotHandled);
        assert!(input.value().is_empty());
    }
}
