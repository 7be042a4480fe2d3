//! Registration schema validation
//!
//! Pure per-field validators composed into a record validator that
//! walks the fields in schema-declaration order and collects every
//! failure instead of stopping at the first.

use crate::state::{Field, RegistrationForm};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));

/// Two-digit area code, 4-or-5 digit prefix, 4 digit suffix
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{2}\) \d{4,5}-\d{4}$").expect("phone pattern"));

/// A single field rule failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid phone number")]
    InvalidPhone,
    #[error("Password must be at least {0} characters")]
    TooShort(usize),
    #[error("Passwords do not match")]
    Mismatch,
}

/// Every rule failure from one submit attempt, in schema order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<(Field, FieldError)>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &(Field, FieldError)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fold into one message per field. If a field failed several
    /// rules, the failure declared last wins.
    pub fn into_messages(self) -> BTreeMap<Field, String> {
        let mut messages = BTreeMap::new();
        for (field, error) in self.0 {
            messages.insert(field, error.to_string());
        }
        messages
    }
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required("Name"));
    }
    Ok(())
}

/// Format rules are skipped for empty values: the required rule
/// already covers them, so a field never reports both.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required("Email"));
    }
    if !EMAIL_RE.is_match(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required("Phone"));
    }
    if !PHONE_RE.is_match(value) {
        return Err(FieldError::InvalidPhone);
    }
    Ok(())
}

pub fn validate_password(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required("Password"));
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(FieldError::TooShort(MIN_PASSWORD_LEN));
    }
    Ok(())
}

pub fn validate_password_confirmation(value: &str, password: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required("Password confirmation"));
    }
    if value != password {
        return Err(FieldError::Mismatch);
    }
    Ok(())
}

/// Run the whole schema against the form, collecting all failures
pub fn validate(form: &RegistrationForm) -> Result<(), ValidationErrors> {
    let mut failures = Vec::new();

    for field in Field::ALL {
        let value = form.value(field);
        let result = match field {
            Field::Name => validate_name(value),
            Field::Email => validate_email(value),
            Field::Phone => validate_phone(value),
            Field::Password => validate_password(value),
            Field::PasswordConfirmation => {
                validate_password_confirmation(value, form.value(Field::Password))
            }
        };
        if let Err(error) = result {
            failures.push((field, error));
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(failures))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.field_mut(Field::Name).set_value("Ana Souza");
        form.field_mut(Field::Email).set_value("ana@example.com");
        form.field_mut(Field::Phone).set_value("(11) 98765-4321");
        form.field_mut(Field::Password).set_value("correct horse");
        form.field_mut(Field::PasswordConfirmation)
            .set_value("correct horse");
        form
    }

    #[test]
    fn test_empty_form_requires_every_field() {
        let form = RegistrationForm::new();
        let errors = validate(&form).unwrap_err();
        assert!(!errors.is_empty());
        assert_eq!(errors.len(), Field::ALL.len());

        let messages = errors.into_messages();
        assert_eq!(
            messages.get(&Field::Name).map(String::as_str),
            Some("Name is required")
        );
        assert_eq!(
            messages.get(&Field::Email).map(String::as_str),
            Some("Email is required")
        );
        assert_eq!(
            messages.get(&Field::Phone).map(String::as_str),
            Some("Phone is required")
        );
        assert_eq!(
            messages.get(&Field::Password).map(String::as_str),
            Some("Password is required")
        );
        assert_eq!(
            messages.get(&Field::PasswordConfirmation).map(String::as_str),
            Some("Password confirmation is required")
        );
    }

    #[test]
    fn test_failures_come_in_schema_order() {
        let form = RegistrationForm::new();
        let errors = validate(&form).unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate(&filled_form()), Ok(()));
    }

    #[test]
    fn test_email_format() {
        assert_eq!(validate_email("not-an-email"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("a@b"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("a b@c.com"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("a@b.com"), Ok(()));
        assert_eq!(validate_email("first.last@sub.domain.org"), Ok(()));
    }

    #[test]
    fn test_email_required_beats_format() {
        assert_eq!(validate_email(""), Err(FieldError::Required("Email")));
    }

    #[test]
    fn test_phone_format() {
        assert_eq!(validate_phone("11987654321"), Err(FieldError::InvalidPhone));
        assert_eq!(
            validate_phone("(11)98765-4321"),
            Err(FieldError::InvalidPhone)
        );
        assert_eq!(validate_phone("(11) 98765-4321"), Ok(()));
        // Landline shape: four-digit prefix
        assert_eq!(validate_phone("(11) 3456-7890"), Ok(()));
    }

    #[test]
    fn test_password_length() {
        assert_eq!(validate_password("short"), Err(FieldError::TooShort(8)));
        assert_eq!(validate_password("12345678"), Ok(()));
    }

    #[test]
    fn test_password_confirmation_mismatch() {
        assert_eq!(
            validate_password_confirmation("different", "hunter42"),
            Err(FieldError::Mismatch)
        );
        assert_eq!(validate_password_confirmation("hunter42", "hunter42"), Ok(()));
    }

    #[test]
    fn test_single_bad_field_reports_only_that_field() {
        let mut form = filled_form();
        form.field_mut(Field::Email).set_value("not-an-email");

        let messages = validate(&form).unwrap_err().into_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages.get(&Field::Email).map(String::as_str),
            Some("Invalid email address")
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FieldError::TooShort(MIN_PASSWORD_LEN).to_string(),
            "Password must be at least 8 characters"
        );
        assert_eq!(FieldError::Mismatch.to_string(), "Passwords do not match");
    }
}
