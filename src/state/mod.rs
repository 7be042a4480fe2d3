//! Application state

mod app_state;
mod forms;

pub use app_state::{AppState, View};
pub use forms::{Field, FormField, RegistrationForm};
