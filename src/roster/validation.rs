//! Input validation shared by the add form and the edit modal.

use thiserror::Error;

/// Reasons a name/age pair is rejected
///
/// The display strings are shown verbatim in the error notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name or age is empty after trimming
    #[error("Please fill in all fields")]
    MissingField,
    /// Age is not a whole number greater than zero
    #[error("Age must be a valid number greater than 0")]
    InvalidAge,
}

/// A name/age pair that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidStudent {
    pub name: String,
    pub age: u32,
}

/// Validates raw text from an input pair
///
/// Both fields are trimmed first. An empty field is reported before a bad age,
/// so `("", "abc")` yields [`ValidationError::MissingField`].
pub fn validate(name: &str, age: &str) -> Result<ValidStudent, ValidationError> {
    let name = name.trim();
    let age = age.trim();

    if name.is_empty() || age.is_empty() {
        return Err(ValidationError::MissingField);
    }

    Ok(ValidStudent {
        name: name.to_string(),
        age: parse_age(age)?,
    })
}

/// Parses a trimmed age. Only plain ASCII digits are accepted: no sign, no
/// decimal point, no inner whitespace.
fn parse_age(text: &str) -> Result<u32, ValidationError> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidAge);
    }

    match text.parse::<u32>() {
        Ok(0) | Err(_) => Err(ValidationError::InvalidAge),
        Ok(age) => Ok(age),
    }
}
