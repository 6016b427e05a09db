#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    DarkGrey,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    color: Option<Color>,
    bold: bool,
    reverse: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    pub fn reverse(&self) -> bool {
        self.reverse
    }

    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }
}
