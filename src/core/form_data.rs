use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Dob,
    Password,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Dob, Field::Password];

    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Dob => "dob",
            Field::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// The four wizard values, plain text as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub dob: String,
    pub password: String,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Dob => &self.dob,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Dob => &mut self.dob,
            Field::Password => &mut self.password,
        };
        *slot = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, FormData};

    #[test]
    fn field_parses_from_key() {
        for field in Field::ALL {
            assert_eq!(field.key().parse::<Field>(), Ok(field));
        }
        assert!("phone".parse::<Field>().is_err());
    }

    #[test]
    fn set_and_get_address_the_same_slot() {
        let mut data = FormData::new();
        data.set(Field::Dob, "2000-01-01");
        assert_eq!(data.get(Field::Dob), "2000-01-01");
        assert_eq!(data.dob, "2000-01-01");
        assert!(data.name.is_empty());
    }

    #[test]
    fn serializes_with_field_keys() {
        let mut data = FormData::new();
        data.set(Field::Name, "Ada");
        let json = serde_json::to_value(&data).expect("serialize");
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["password"], "");
    }
}
