use crate::form_data::{Field, FormData};
use crate::validation::ValidationError;
use crate::validators;

pub type StepValidator = fn(&FormData) -> Result<(), ValidationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Date,
    Password,
}

#[derive(Clone, Copy)]
pub struct StepDefinition {
    pub label: &'static str,
    pub field: Field,
    pub input_kind: InputKind,
    pub placeholder: Option<&'static str>,
    pub validator: StepValidator,
}

pub const PASSWORD_MIN_LENGTH: usize = 6;

pub const STEP_COUNT: usize = 4;

pub const LAST_STEP: usize = STEP_COUNT - 1;

pub static STEPS: [StepDefinition; STEP_COUNT] = [
    StepDefinition {
        label: "Name",
        field: Field::Name,
        input_kind: InputKind::Text,
        placeholder: Some("Enter your name"),
        validator: validate_name,
    },
    StepDefinition {
        label: "Email",
        field: Field::Email,
        input_kind: InputKind::Email,
        placeholder: Some("Enter your email"),
        validator: validate_email,
    },
    StepDefinition {
        label: "Date of Birth",
        field: Field::Dob,
        input_kind: InputKind::Date,
        placeholder: None,
        validator: validate_dob,
    },
    StepDefinition {
        label: "Password",
        field: Field::Password,
        input_kind: InputKind::Password,
        placeholder: Some("Enter your password"),
        validator: validate_password,
    },
];

fn validate_name(data: &FormData) -> Result<(), ValidationError> {
    validators::required(&data.name, "Name")
}

fn validate_email(data: &FormData) -> Result<(), ValidationError> {
    validators::email(&data.email)
}

fn validate_dob(data: &FormData) -> Result<(), ValidationError> {
    validators::required(&data.dob, "Date of birth")
}

fn validate_password(data: &FormData) -> Result<(), ValidationError> {
    validators::min_length(&data.password, "Password", PASSWORD_MIN_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::{InputKind, STEPS};
    use crate::form_data::{Field, FormData};

    #[test]
    fn steps_cover_every_field_in_order() {
        let fields: Vec<Field> = STEPS.iter().map(|s| s.field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
        assert_eq!(STEPS[2].input_kind, InputKind::Date);
    }

    #[test]
    fn validators_only_look_at_their_own_field() {
        let mut data = FormData::new();
        data.set(Field::Name, "Ada");
        assert!((STEPS[0].validator)(&data).is_ok());
        assert!((STEPS[1].validator)(&data).is_err());
        assert!((STEPS[2].validator)(&data).is_err());
        assert!((STEPS[3].validator)(&data).is_err());
    }
}
