use crate::input::{Input, KeyResult};
use crate::span::Span;
use crate::terminal::{KeyCode, KeyModifiers};
use crate::text_input::TextInput;
use crate::theme::Theme;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordRender {
    #[default]
    Stars,
    Hidden,
}

impl PasswordRender {
    pub fn mask(&self, value: &str) -> String {
        let len = value.chars().count();
        match self {
            PasswordRender::Stars => "*".repeat(len),
            PasswordRender::Hidden => String::new(),
        }
    }
}

pub struct PasswordInput {
    inner: TextInput,
    render_mode: PasswordRender,
}

impl PasswordInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            inner: TextInput::new(id),
            render_mode: PasswordRender::Stars,
        }
    }

    pub fn with_min_width(mut self, width: usize) -> Self {
        self.inner = self.inner.with_min_width(width);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.inner = self.inner.with_placeholder(placeholder);
        self
    }

    pub fn with_render_mode(mut self, mode: PasswordRender) -> Self {
        self.render_mode = mode;
        self
    }
}

impl Input for PasswordInput {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn value(&self) -> String {
        self.inner.value()
    }

    fn set_value(&mut self, value: String) {
        self.inner.set_value(value);
    }

    fn placeholder(&self) -> Option<&str> {
        self.inner.placeholder()
    }

    fn min_width(&self) -> usize {
        self.inner.min_width()
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        // No word motions on masked input.
        if modifiers.contains(KeyModifiers::CONTROL)
            && matches!(code, KeyCode::Left | KeyCode::Right)
        {
            return KeyResult::Handled;
        }
        self.inner.handle_key(code, modifiers)
    }

    fn render_content(&self, _theme: &Theme) -> Vec<Span> {
        vec![Span::new(self.render_mode.mask(&self.inner.value()))]
    }

    fn cursor_offset_in_content(&self) -> usize {
        match self.render_mode {
            PasswordRender::Stars => self.inner.cursor_pos(),
            PasswordRender::Hidden => 0,
        }
    }

    fn delete_word(&mut self) {
        // Drops everything before the cursor.
        let value = self.inner.value();
        let tail: String = value.chars().skip(self.inner.cursor_pos()).collect();
        self.inner.set_value(tail);
        self.inner.handle_key(KeyCode::Home, KeyModifiers::NONE);
    }
}

#[cfg(test)]
mod tests {
    use super::{PasswordInput, PasswordRender};
    use crate::input::Input;
    use crate::terminal::{KeyCode, KeyModifiers};
    use crate::theme::Theme;

    #[test]
    fn renders_stars_for_each_char() {
        let mut input = PasswordInput::new("password");
        input.set_value("abcdef".to_string());
        let spans = input.render_content(&Theme::default_theme());
        assert_eq!(spans[0].text(), "******");
        assert_eq!(input.cursor_offset_in_content(), 6);
    }

    #[test]
    fn hidden_mode_renders_nothing() {
        let mut input = PasswordInput::new("password").with_render_mode(PasswordRender::Hidden);
        input.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
        let spans = input.render_content(&Theme::default_theme());
        assert_eq!(spans[0].text(), "");
        assert_eq!(input.value(), "x");
        assert_eq!(input.cursor_offset_in_content(), 0);
    }

    #[test]
    fn delete_word_clears_before_cursor() {
        let mut input = PasswordInput::new("password");
        input.set_value("hunter 22".to_string());
        input.delete_word();
        assert!(input.value().is_empty());
    }
}
