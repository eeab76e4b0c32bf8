//! Error types for the welcome screen client.

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Failure to hand a request over to the router
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The routing side is gone and accepts no more requests
    #[error("Router is closed, cannot navigate to '{0}'")]
    RouterClosed(String),
}

/// Invalid welcome screen configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A timer interval was configured as zero
    #[error("Interval '{0}' must be greater than zero")]
    ZeroInterval(&'static str),

    /// No default server URL to fall back to
    #[error("Default server URL must not be empty")]
    EmptyDefaultServerUrl,
}

/// Errors of the interactive welcome screen
#[derive(Debug, Error)]
pub enum WelcomeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// The line editor could not be started
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),

    /// The line editor thread ended before reporting whether it started
    #[error("Prompt thread exited before starting")]
    PromptClosed,
}
