//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
///
/// Cosmetic options only; form data is never written here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Accent color for the active field and buttons
    pub accent_color: Option<String>,
    /// Show the key-binding help line under the form
    pub show_help: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Accent color for focused elements; unknown names fall back to cyan
    pub fn accent(&self) -> Color {
        match self.accent_color.as_deref() {
            Some("blue") => Color::Blue,
            Some("green") => Color::Green,
            Some("magenta") => Color::Magenta,
            Some("yellow") => Color::Yellow,
            Some("red") => Color::Red,
            Some("white") => Color::White,
            _ => Color::Cyan,
        }
    }

    /// Whether to render the help line (defaults to on)
    pub fn help_visible(&self) -> bool {
        self.show_help.unwrap_or(true)
    }
}
