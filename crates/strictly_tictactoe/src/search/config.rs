//! Search configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Switches controlling how the solver explores the game tree.
///
/// Neither switch changes which move is chosen or its value; they only
/// change how much of the tree is visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Stop exploring siblings once a branch falls outside the alpha-beta window.
    pruning: bool,

    /// Return a root action as soon as it is proven to win outright.
    early_exit: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pruning: true,
            early_exit: true,
        }
    }
}

impl SearchConfig {
    /// Plain minimax: no cutoffs and every root action examined.
    pub fn exhaustive() -> Self {
        Self {
            pruning: false,
            early_exit: false,
        }
    }

    /// Returns a copy with pruning switched on or off.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Returns a copy with the root early exit switched on or off.
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    /// Loads configuration from TOML file.
    ///
    /// Keys missing from the file keep their default values.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading search config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(pruning = config.pruning, early_exit = config.early_exit, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
