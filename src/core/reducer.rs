use crate::event::Action;
use crate::form_data::Field;
use crate::input::{Input, KeyResult};
use crate::state::{AppState, Button, Focus};
use crate::terminal::KeyEvent;
use crate::wizard::Outcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FieldEdited { field: Field },
    StepChanged { from: usize, to: usize },
    ValidationFailed { step: usize, message: String },
    Submitted,
    Exited,
}

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, action: Action) -> Vec<Effect> {
        if state.wizard.is_submitted() {
            return match action {
                Action::Exit => Self::exit(state),
                _ => vec![],
            };
        }

        match action {
            Action::Exit => Self::exit(state),
            Action::Confirm => Self::confirm(state),
            Action::Back => {
                let outcome = state.wizard.on_back();
                Self::outcome_to_effects(state, outcome)
            }
            Action::FocusNext => {
                state.move_focus(1);
                vec![]
            }
            Action::FocusPrev => {
                state.move_focus(-1);
                vec![]
            }
            Action::DeleteWord => {
                state.focus = Focus::Input;
                Self::edit_active(state, |input| input.delete_word())
            }
            Action::InputKey(key_event) => Self::input_key(state, key_event),
        }
    }

    fn exit(state: &mut AppState) -> Vec<Effect> {
        state.should_exit = true;
        vec![Effect::Exited]
    }

    fn confirm(state: &mut AppState) -> Vec<Effect> {
        let outcome = match state.focus {
            Focus::Input => {
                if state.wizard.controls().next {
                    state.wizard.on_next()
                } else {
                    state.wizard.on_submit()
                }
            }
            Focus::Button(Button::Back) => state.wizard.on_back(),
            Focus::Button(Button::Next) => state.wizard.on_next(),
            Focus::Button(Button::Submit) => state.wizard.on_submit(),
        };
        Self::outcome_to_effects(state, outcome)
    }

    fn input_key(state: &mut AppState, key_event: KeyEvent) -> Vec<Effect> {
        state.focus = Focus::Input;
        let mut submit = false;
        let mut effects = Self::edit_active(state, |input| {
            let result = input.handle_key(key_event.code, key_event.modifiers);
            submit = result == KeyResult::Submit;
        });
        if submit {
            effects.extend(Self::confirm(state));
        }
        effects
    }

    /// Runs `edit` on the active input and syncs the value into the form when
    /// it changed.
    fn edit_active<F>(state: &mut AppState, edit: F) -> Vec<Effect>
    where
        F: FnOnce(&mut dyn Input),
    {
        let field = state.active_field();
        let before = state.active_input().value();
        let input = state.active_input_mut();
        edit(&mut *input);
        let after = input.value();
        if before == after {
            return vec![];
        }
        state.wizard.on_field_change(field, after);
        vec![Effect::FieldEdited { field }]
    }

    fn outcome_to_effects(state: &mut AppState, outcome: Outcome) -> Vec<Effect> {
        match outcome {
            Outcome::Advanced { from, to } | Outcome::Retreated { from, to } => {
                state.focus = Focus::Input;
                vec![Effect::StepChanged { from, to }]
            }
            Outcome::Rejected(err) => vec![Effect::ValidationFailed {
                step: state.wizard.current_index(),
                message: err.to_string(),
            }],
            Outcome::Submitted => {
                state.should_exit = true;
                vec![Effect::Submitted]
            }
            Outcome::Edited | Outcome::Ignored => vec![],
        }
    }
}
