//! Configuration for interactive play.

use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

/// Settings for the terminal front end.
///
/// # Examples
///
/// ```
/// use noughts::config::PlayConfig;
///
/// let config = PlayConfig::default()
///     .with_exit_delay_ms(0)
///     .with_show_stats(true);
/// assert!(config.show_stats);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Pause after the final status line, in milliseconds
    pub exit_delay_ms: u64,
    /// Print search statistics after every engine move
    pub show_stats: bool,
}

impl PlayConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Set the exit delay.
    pub fn with_exit_delay_ms(mut self, millis: u64) -> Self {
        self.exit_delay_ms = millis;
        self
    }

    /// Set whether search statistics are printed.
    pub fn with_show_stats(mut self, show: bool) -> Self {
        self.show_stats = show;
        self
    }

    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            exit_delay_ms: 2000,
            show_stats: false,
        }
    }
}
