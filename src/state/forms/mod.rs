//! Form domain layer
//!
//! Field identity, per-field input behavior (including the phone
//! mask), and the registration form itself.

mod field;
mod form_state;
pub mod mask;

pub use field::{Field, FormField};
pub use form_state::RegistrationForm;
