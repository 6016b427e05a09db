use crate::validation::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern"));

pub fn required(value: &str, label: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField { label })
    } else {
        Ok(())
    }
}

/// Length is measured in UTF-16 code units, as browser form fields count it.
pub fn min_length(value: &str, label: &'static str, min: usize) -> Result<(), ValidationError> {
    if value.encode_utf16().count() < min {
        Err(ValidationError::TooShort { label, min })
    } else {
        Ok(())
    }
}

pub fn email(value: &str) -> Result<(), ValidationError> {
    if EMAIL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat {
            expected: "email address",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{email, min_length, required};
    use crate::validation::ValidationError;

    #[test]
    fn required_trims_whitespace() {
        assert!(required("Ada", "Name").is_ok());
        assert_eq!(
            required("   \t", "Name"),
            Err(ValidationError::EmptyField { label: "Name" })
        );
    }

    #[test]
    fn email_accepts_simple_addresses() {
        for ok in ["a@b.com", "first.last@sub.example.org", "x+tag@d.io"] {
            assert!(email(ok).is_ok(), "{ok} should pass");
        }
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in ["bad", "a@b", "@b.com", "a@.com.", "a b@c.com", "a@b@c.com", " a@b.com"] {
            assert!(email(bad).is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn min_length_counts_utf16_units() {
        assert!(min_length("ééééé", "Password", 6).is_err());
        assert!(min_length("éééééé", "Password", 6).is_ok());
        assert!(min_length("😀😀😀", "Password", 6).is_ok());
        assert!(min_length("😀😀", "Password", 6).is_err());
    }
}
