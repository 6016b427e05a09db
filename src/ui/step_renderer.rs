use crate::form_data::Field;
use crate::frame::{Frame, Line};
use crate::input::Input;
use crate::options::RenderOptions;
use crate::password_input::PasswordRender;
use crate::span::Span;
use crate::state::{AppState, Focus};
use crate::theme::Theme;
use crate::wizard::Phase;

const HINT: &str = "Enter: confirm  Tab: focus  Ctrl+B: back  Esc: quit";

const SUMMARY_ROWS: [(&str, Field); 4] = [
    ("Name", Field::Name),
    ("Email", Field::Email),
    ("DOB", Field::Dob),
    ("Password", Field::Password),
];

pub struct StepRenderer;

impl StepRenderer {
    pub fn render(state: &AppState, theme: &Theme, options: &RenderOptions) -> Frame {
        match state.wizard.phase() {
            Phase::Step(index) => Self::render_step(state, index, theme, options),
            Phase::Submitted => Self::render_success(state, theme, options),
        }
    }

    fn render_step(
        state: &AppState,
        index: usize,
        theme: &Theme,
        options: &RenderOptions,
    ) -> Frame {
        let mut frame = Frame::new();
        let step = state.wizard.current_step();

        frame.push_line(Line::from_spans([Span::styled(
            format!("Step {}: {}", index + 1, step.label),
            theme.heading,
        )]));

        let input_focused = state.focus == Focus::Input;
        let input_row = frame.lines().len();
        frame.push_line(Self::input_line(state.active_input(), input_focused, theme));
        if input_focused {
            frame.set_cursor(1 + state.active_input().cursor_offset_in_content(), input_row);
        }

        if let Some(error) = state.wizard.error_message() {
            frame.push_line(Line::from_spans([Span::styled(error, theme.error)]));
        }

        frame.push_line(Self::button_line(state, theme));

        if options.show_hints {
            frame.push_line(Line::from_spans([Span::styled(HINT, theme.hint)]));
        }

        frame
    }

    fn input_line(input: &dyn Input, focused: bool, theme: &Theme) -> Line {
        let bracket_style = if focused { theme.focused } else { theme.hint };
        let mut spans = vec![Span::styled("[", bracket_style)];

        let mut content = input.render_content(theme);
        let content_empty = content.iter().all(|span| span.text().is_empty());
        if content_empty && input.value().is_empty() {
            if let Some(placeholder) = input.placeholder() {
                content = vec![Span::styled(placeholder, theme.placeholder)];
            }
        }

        let content_width: usize = content.iter().map(Span::width).sum();
        spans.extend(content);
        if content_width < input.min_width() {
            spans.push(Span::new(" ".repeat(input.min_width() - content_width)));
        }
        spans.push(Span::styled("]", bracket_style));

        Line::from_spans(spans)
    }

    fn button_line(state: &AppState, theme: &Theme) -> Line {
        let mut line = Line::new();
        for (idx, button) in state.buttons().into_iter().enumerate() {
            if idx > 0 {
                line.push(Span::new("  "));
            }
            let style = if state.focus == Focus::Button(button) {
                theme.button_focused
            } else {
                theme.button
            };
            line.push(Span::styled(format!("[ {} ]", button.label()), style));
        }
        line
    }

    fn render_success(state: &AppState, theme: &Theme, options: &RenderOptions) -> Frame {
        let mut frame = Frame::new();
        let data = state.wizard.form_data();

        frame.push_line(Line::from_spans([Span::styled("Success!", theme.success)]));
        for (label, field) in SUMMARY_ROWS {
            let value = match field {
                Field::Password if options.mask_summary_password => {
                    PasswordRender::Stars.mask(data.get(field))
                }
                _ => data.get(field).to_string(),
            };
            frame.push_line(Line::from_spans([
                Span::styled(format!("{label}:"), theme.summary_label),
                Span::new(format!(" {value}")),
            ]));
        }

        frame
    }
}
