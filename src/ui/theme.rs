use crate::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub heading: Style,
    pub hint: Style,
    pub error: Style,
    pub placeholder: Style,
    pub focused: Style,
    pub button: Style,
    pub button_focused: Style,
    pub success: Style,
    pub summary_label: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            heading: Style::new().with_bold(),
            hint: Style::new().with_color(Color::DarkGrey),
            error: Style::new().with_color(Color::Red).with_bold(),
            placeholder: Style::new().with_color(Color::DarkGrey),
            focused: Style::new().with_color(Color::Cyan),
            button: Style::new().with_color(Color::White),
            button_focused: Style::new().with_color(Color::Cyan).with_reverse(),
            success: Style::new().with_color(Color::Green).with_bold(),
            summary_label: Style::new().with_bold(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
