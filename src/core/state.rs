use crate::date_input::DateInput;
use crate::form_data::Field;
use crate::input::Input;
use crate::password_input::{PasswordInput, PasswordRender};
use crate::step::{InputKind, STEPS, StepDefinition};
use crate::text_input::TextInput;
use crate::wizard::FormWizard;

const INPUT_MIN_WIDTH: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Back,
    Next,
    Submit,
}

impl Button {
    pub fn label(&self) -> &'static str {
        match self {
            Button::Back => "Back",
            Button::Next => "Next",
            Button::Submit => "Submit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Button(Button),
}

pub struct AppState {
    pub wizard: FormWizard,
    pub inputs: Vec<Box<dyn Input>>,
    pub focus: Focus,
    pub should_exit: bool,
}

impl AppState {
    pub fn new(password_render: PasswordRender) -> Self {
        let inputs = STEPS
            .iter()
            .map(|step| build_input(step, password_render))
            .collect();

        Self {
            wizard: FormWizard::new(),
            inputs,
            focus: Focus::Input,
            should_exit: false,
        }
    }

    pub fn active_input(&self) -> &dyn Input {
        self.inputs[self.wizard.current_index()].as_ref()
    }

    pub fn active_input_mut(&mut self) -> &mut dyn Input {
        let idx = self.wizard.current_index();
        self.inputs[idx].as_mut()
    }

    pub fn active_field(&self) -> Field {
        self.wizard.current_step().field
    }

    /// Visible buttons, left to right.
    pub fn buttons(&self) -> Vec<Button> {
        let controls = self.wizard.controls();
        let mut buttons = Vec::with_capacity(2);
        if controls.back {
            buttons.push(Button::Back);
        }
        if controls.next {
            buttons.push(Button::Next);
        }
        if controls.submit {
            buttons.push(Button::Submit);
        }
        buttons
    }

    /// Focus targets in tab order.
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Input];
        order.extend(self.buttons().into_iter().map(Focus::Button));
        order
    }

    pub fn move_focus(&mut self, delta: isize) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let len = order.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.focus = order[next];
    }
}

fn build_input(step: &StepDefinition, password_render: PasswordRender) -> Box<dyn Input> {
    let id = step.field.key();
    match step.input_kind {
        InputKind::Text | InputKind::Email => {
            let mut input = TextInput::new(id).with_min_width(INPUT_MIN_WIDTH);
            if let Some(placeholder) = step.placeholder {
                input = input.with_placeholder(placeholder);
            }
            Box::new(input)
        }
        InputKind::Password => {
            let mut input = PasswordInput::new(id)
                .with_min_width(INPUT_MIN_WIDTH)
                .with_render_mode(password_render);
            if let Some(placeholder) = step.placeholder {
                input = input.with_placeholder(placeholder);
            }
            Box::new(input)
        }
        InputKind::Date => Box::new(DateInput::new(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::{AppState, Button, Focus};
    use crate::form_data::Field;
    use crate::password_input::PasswordRender;

    #[test]
    fn one_input_per_step() {
        let state = AppState::new(PasswordRender::Stars);
        let ids: Vec<&str> = state.inputs.iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec!["name", "email", "dob", "password"]);
        assert_eq!(state.active_input().placeholder(), Some("Enter your name"));
    }

    #[test]
    fn focus_wraps_through_visible_buttons() {
        let mut state = AppState::new(PasswordRender::Stars);
        assert_eq!(state.buttons(), vec![Button::Next]);
        state.move_focus(1);
        assert_eq!(state.focus, Focus::Button(Button::Next));
        state.move_focus(1);
        assert_eq!(state.focus, Focus::Input);
        state.move_focus(-1);
        assert_eq!(state.focus, Focus::Button(Button::Next));
    }

    #[test]
    fn last_step_offers_back_and_submit() {
        let mut state = AppState::new(PasswordRender::Stars);
        for (field, value) in [
            (Field::Name, "Ada"),
            (Field::Email, "a@b.com"),
            (Field::Dob, "2000-01-01"),
        ] {
            state.wizard.on_field_change(field, value);
            state.wizard.on_next();
        }
        assert_eq!(state.active_field(), Field::Password);
        assert_eq!(state.buttons(), vec![Button::Back, Button::Submit]);
    }
}
