//! Application state definitions

use super::forms::{Field, RegistrationForm};
use std::collections::BTreeMap;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The registration form
    #[default]
    Form,
    /// Success panel shown after a valid submission
    Success,
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: RegistrationForm,
    /// One message per failing field, replaced wholesale on each
    /// submit attempt and cleared per-field on edit
    pub errors: BTreeMap<Field, String>,
}

impl AppState {
    /// True once a valid submission has been accepted
    pub fn submitted(&self) -> bool {
        matches!(self.current_view, View::Success)
    }

    /// Route a typed character to the active field.
    ///
    /// Editing a field clears that field's error only; no validation
    /// runs until submit.
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.form.active_field() {
            self.form.field_mut(field).push_char(c);
            self.errors.remove(&field);
        }
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        if let Some(field) = self.form.active_field() {
            self.form.field_mut(field).pop_char();
            self.errors.remove(&field);
        }
    }

    /// Replace all error messages after a failed submit
    pub fn set_errors(&mut self, errors: BTreeMap<Field, String>) {
        self.errors = errors;
    }

    /// Return to a fresh, not-submitted form
    pub fn reset(&mut self) {
        self.form.clear();
        self.errors.clear();
        self.current_view = View::Form;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_unsubmitted_form() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Form);
        assert!(!state.submitted());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_input_char_goes_to_active_field() {
        let mut state = AppState::default();
        state.input_char('A');
        assert_eq!(state.form.value(Field::Name), "A");

        state.form.next_stop();
        state.input_char('a');
        assert_eq!(state.form.value(Field::Email), "a");
        assert_eq!(state.form.value(Field::Name), "A");
    }

    #[test]
    fn test_input_char_on_submit_row_is_noop() {
        let mut state = AppState::default();
        state.form.active_stop = Field::ALL.len();
        state.input_char('x');
        for field in Field::ALL {
            assert_eq!(state.form.value(field), "");
        }
    }

    #[test]
    fn test_editing_clears_only_that_fields_error() {
        let mut state = AppState::default();
        state.set_errors(BTreeMap::from([
            (Field::Name, "Name is required".to_string()),
            (Field::Email, "Email is required".to_string()),
        ]));

        state.input_char('A');

        assert!(!state.errors.contains_key(&Field::Name));
        assert_eq!(
            state.errors.get(&Field::Email).map(String::as_str),
            Some("Email is required")
        );
    }

    #[test]
    fn test_backspace_clears_only_that_fields_error() {
        let mut state = AppState::default();
        state.form.field_mut(Field::Name).set_value("An");
        state.set_errors(BTreeMap::from([
            (Field::Name, "Name is required".to_string()),
            (Field::Phone, "Phone is required".to_string()),
        ]));

        state.backspace();

        assert_eq!(state.form.value(Field::Name), "A");
        assert!(!state.errors.contains_key(&Field::Name));
        assert!(state.errors.contains_key(&Field::Phone));
    }

    #[test]
    fn test_reset_returns_to_empty_unsubmitted_state() {
        let mut state = AppState::default();
        state.input_char('A');
        state.current_view = View::Success;

        state.reset();

        assert_eq!(state.current_view, View::Form);
        assert!(!state.submitted());
        assert_eq!(state.form.value(Field::Name), "");
        assert!(state.errors.is_empty());
        assert_eq!(state.form.active_stop, 0);
    }
}
