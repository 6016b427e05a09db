use crate::form_data::{Field, FormData};
use crate::step::{LAST_STEP, STEPS, StepDefinition};
use crate::validation::{self, ValidationError};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    pub current_step: usize,
    pub form_data: FormData,
    pub submitted: bool,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Step(usize),
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Edited,
    Advanced { from: usize, to: usize },
    Retreated { from: usize, to: usize },
    Submitted,
    Rejected(ValidationError),
    Ignored,
}

/// Which navigation buttons the current state offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub back: bool,
    pub next: bool,
    pub submit: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FormWizard {
    state: WizardState,
}

impl FormWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn form_data(&self) -> &FormData {
        &self.state.form_data
    }

    pub fn current_index(&self) -> usize {
        self.state.current_step
    }

    pub fn current_step(&self) -> &'static StepDefinition {
        &STEPS[self.state.current_step]
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message.as_deref()
    }

    pub fn is_submitted(&self) -> bool {
        self.state.submitted
    }

    pub fn phase(&self) -> Phase {
        if self.state.submitted {
            Phase::Submitted
        } else {
            Phase::Step(self.state.current_step)
        }
    }

    pub fn controls(&self) -> Controls {
        if self.state.submitted {
            return Controls::default();
        }
        let step = self.state.current_step;
        Controls {
            back: step > 0,
            next: step < LAST_STEP,
            submit: step == LAST_STEP,
        }
    }

    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) -> Outcome {
        if self.state.submitted {
            return Outcome::Ignored;
        }
        let value = value.into();
        debug!(field = %field, len = value.chars().count(), "field changed");
        self.state.form_data.set(field, value);
        self.state.error_message = None;
        Outcome::Edited
    }

    pub fn on_next(&mut self) -> Outcome {
        if !self.controls().next {
            return Outcome::Ignored;
        }
        if let Err(err) = self.validate_current() {
            return self.reject(err);
        }
        let from = self.state.current_step;
        self.state.current_step += 1;
        self.state.error_message = None;
        info!(from, to = from + 1, "advanced to next step");
        Outcome::Advanced { from, to: from + 1 }
    }

    pub fn on_back(&mut self) -> Outcome {
        if !self.controls().back {
            return Outcome::Ignored;
        }
        let from = self.state.current_step;
        self.state.current_step -= 1;
        self.state.error_message = None;
        info!(from, to = from - 1, "went back a step");
        Outcome::Retreated { from, to: from - 1 }
    }

    pub fn on_submit(&mut self) -> Outcome {
        if !self.controls().submit {
            return Outcome::Ignored;
        }
        if let Err(err) = self.validate_current() {
            return self.reject(err);
        }
        self.state.error_message = None;
        self.state.submitted = true;
        info!("wizard submitted");
        Outcome::Submitted
    }

    fn validate_current(&self) -> Result<(), ValidationError> {
        validation::validate_step(self.current_step(), &self.state.form_data)
    }

    fn reject(&mut self, err: ValidationError) -> Outcome {
        debug!(step = self.state.current_step, error = %err, "validation failed");
        self.state.error_message = Some(err.to_string());
        Outcome::Rejected(err)
    }
}
