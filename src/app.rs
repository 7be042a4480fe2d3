//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, Field, View};
use crate::validation;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration (cosmetic options)
    pub config: TuiConfig,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Self {
        let config = TuiConfig::load().unwrap_or_else(|err| {
            tracing::warn!("Failed to load config, using defaults: {err:#}");
            TuiConfig::default()
        });

        Self {
            state: AppState::default(),
            config,
        }
    }

    /// Handle a key event for the current view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Form => self.handle_form_key(key).await?,
            View::Success => self.handle_success_key(key),
        }
        Ok(())
    }

    /// Handle keys on the registration form
    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_stop(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_stop(),
            // Enter submits from anywhere in the form
            KeyCode::Enter => self.submit().await,
            KeyCode::Esc => self.state.reset(),
            KeyCode::Char(c) => self.state.input_char(c),
            KeyCode::Backspace => self.state.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys on the success panel (Back button)
    fn handle_success_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.state.reset();
        }
    }

    /// Validate the form; register on success, surface inline errors
    /// otherwise. Errors from a previous attempt are replaced wholesale.
    async fn submit(&mut self) {
        match validation::validate(&self.state.form) {
            Ok(()) => {
                self.register().await;
                self.state.errors.clear();
                self.state.current_view = View::Success;
            }
            Err(errors) => {
                tracing::debug!(failures = errors.len(), "registration rejected");
                for (field, error) in errors.iter() {
                    tracing::debug!(field = field.name(), %error, "field rejected");
                }
                self.state.set_errors(errors.into_messages());
            }
        }
    }

    /// Simulated registration call; nothing leaves the process
    async fn register(&mut self) {
        tracing::info!(
            name = self.state.form.value(Field::Name),
            email = self.state.form.value(Field::Email),
            "registration accepted"
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
