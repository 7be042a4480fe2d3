//! Form field value objects

use super::mask;

/// Identity of a registration field, in schema-declaration order.
///
/// The derived `Ord` follows declaration order, which is also the
/// order the validation schema is evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Password,
    PasswordConfirmation,
}

impl Field {
    /// All fields in schema-declaration order
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Password,
        Field::PasswordConfirmation,
    ];

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Password => "Password",
            Field::PasswordConfirmation => "Confirm Password",
        }
    }

    /// Stable identifier used in log output
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Password => "password",
            Field::PasswordConfirmation => "password_confirmation",
        }
    }
}

/// How keystrokes and rendering treat a field's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
    /// Plain text, rendered as typed
    Text,
    /// Plain text, rendered as asterisks
    Secret,
    /// Digits only, display value kept in the phone mask template
    MaskedPhone,
}

/// A single text input with its current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub field: Field,
    value: String,
    kind: InputKind,
}

impl FormField {
    /// Create a plain text field
    pub fn text(field: Field) -> Self {
        Self {
            field,
            value: String::new(),
            kind: InputKind::Text,
        }
    }

    /// Create a password-style field (value rendered masked)
    pub fn secret(field: Field) -> Self {
        Self {
            field,
            value: String::new(),
            kind: InputKind::Secret,
        }
    }

    /// Create a phone field with the input mask applied on every edit
    pub fn phone(field: Field) -> Self {
        Self {
            field,
            value: String::new(),
            kind: InputKind::MaskedPhone,
        }
    }

    /// Raw value as validated on submit
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Overwrite the value directly, bypassing the keystroke path
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Apply a keystroke to the field value
    pub fn push_char(&mut self, c: char) {
        match self.kind {
            InputKind::MaskedPhone => self.value = mask::push(&self.value, c),
            InputKind::Text | InputKind::Secret => self.value.push(c),
        }
    }

    /// Remove the last character (last digit for masked fields)
    pub fn pop_char(&mut self) {
        match self.kind {
            InputKind::MaskedPhone => self.value = mask::pop(&self.value),
            InputKind::Text | InputKind::Secret => {
                self.value.pop();
            }
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Value as shown in the UI (asterisks for secret fields)
    pub fn display_value(&self) -> String {
        match self.kind {
            InputKind::Secret => "*".repeat(self.value.chars().count()),
            InputKind::Text | InputKind::MaskedPhone => self.value.clone(),
        }
    }
}
