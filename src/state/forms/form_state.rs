//! Registration form state

use super::field::{Field, FormField};

/// Tab stops: the five fields plus the submit button row
pub const FORM_STOPS: usize = Field::ALL.len() + 1;

/// The registration form: five inputs and the active tab stop
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub password: FormField,
    pub password_confirmation: FormField,
    /// Index into the tab stops; `Field::ALL.len()` is the submit row
    pub active_stop: usize,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text(Field::Name),
            email: FormField::text(Field::Email),
            phone: FormField::phone(Field::Phone),
            password: FormField::secret(Field::Password),
            password_confirmation: FormField::secret(Field::PasswordConfirmation),
            active_stop: 0,
        }
    }

    pub fn field(&self, field: Field) -> &FormField {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Password => &self.password,
            Field::PasswordConfirmation => &self.password_confirmation,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut FormField {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Password => &mut self.password,
            Field::PasswordConfirmation => &mut self.password_confirmation,
        }
    }

    /// Raw value of a field
    pub fn value(&self, field: Field) -> &str {
        self.field(field).value()
    }

    /// The focused input, or `None` when the submit row is active
    pub fn active_field(&self) -> Option<Field> {
        Field::ALL.get(self.active_stop).copied()
    }

    pub fn on_submit_row(&self) -> bool {
        self.active_stop == Field::ALL.len()
    }

    /// Move focus to the next tab stop (wraps around)
    pub fn next_stop(&mut self) {
        self.active_stop = (self.active_stop + 1) % FORM_STOPS;
    }

    /// Move focus to the previous tab stop (wraps around)
    pub fn prev_stop(&mut self) {
        if self.active_stop == 0 {
            self.active_stop = FORM_STOPS - 1;
        } else {
            self.active_stop -= 1;
        }
    }

    /// Reset every field to the empty string and focus the first field
    pub fn clear(&mut self) {
        for field in Field::ALL {
            self.field_mut(field).clear();
        }
        self.active_stop = 0;
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}
