use crate::form_data::FormData;
use crate::step::StepDefinition;
use thiserror::Error;

/// A failed step validation. The `Display` text is what the wizard shows
/// under the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{label} is required.")]
    EmptyField { label: &'static str },

    #[error("Enter a valid {expected}.")]
    InvalidFormat { expected: &'static str },

    #[error("{label} must be at least {min} characters.")]
    TooShort { label: &'static str, min: usize },
}

pub fn validate_step(step: &StepDefinition, data: &FormData) -> Result<(), ValidationError> {
    (step.validator)(data)
}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn messages_match_inline_error_text() {
        assert_eq!(
            ValidationError::EmptyField { label: "Name" }.to_string(),
            "Name is required."
        );
        assert_eq!(
            ValidationError::InvalidFormat {
                expected: "email address"
            }
            .to_string(),
            "Enter a valid email address."
        );
        assert_eq!(
            ValidationError::TooShort {
                label: "Password",
                min: 6
            }
            .to_string(),
            "Password must be at least 6 characters."
        );
    }
}
