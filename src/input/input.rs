use crate::span::Span;
use crate::terminal::{KeyCode, KeyModifiers};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
    Submit,
}

/// A single-line editing widget bound to one wizard field.
pub trait Input: Send {
    fn id(&self) -> &str;
    fn value(&self) -> String;
    fn set_value(&mut self, value: String);

    fn placeholder(&self) -> Option<&str>;
    fn min_width(&self) -> usize;

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult;

    fn render_content(&self, theme: &Theme) -> Vec<Span>;

    fn cursor_offset_in_content(&self) -> usize;

    fn delete_word(&mut self) {}
}

pub struct InputBase {
    pub id: String,
    pub placeholder: Option<String>,
    pub min_width: usize,
}

impl InputBase {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            placeholder: None,
            min_width: 1,
        }
    }

    pub fn with_min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}
