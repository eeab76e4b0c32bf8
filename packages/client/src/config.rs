//! Welcome screen configuration.

use std::time::Duration;

use crate::error::ConfigError;

/// Server used when the user enters only a room name
pub const DEFAULT_SERVER_URL: &str = "https://meet.jit.si";
/// Delay between two revealed placeholder characters
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(70);
/// Delay between two generated room names
pub const DEFAULT_REGENERATION_INTERVAL: Duration = Duration::from_millis(10_000);

/// Timers driving the placeholder animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    pub reveal_interval: Duration,
    pub regeneration_interval: Duration,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
            regeneration_interval: DEFAULT_REGENERATION_INTERVAL,
        }
    }
}

/// Welcome screen settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeConfig {
    /// Server hosting rooms entered without a server URL
    pub default_server_url: String,
    pub timing: AnimationTiming,
    /// Whether random room names are generated and offered as placeholder
    pub generate_room_names: bool,
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            default_server_url: DEFAULT_SERVER_URL.to_string(),
            timing: AnimationTiming::default(),
            generate_room_names: true,
        }
    }
}

impl WelcomeConfig {
    /// Check the configuration before starting the welcome screen
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.reveal_interval.is_zero() {
            return Err(ConfigError::ZeroInterval("reveal_interval"));
        }
        if self.timing.regeneration_interval.is_zero() {
            return Err(ConfigError::ZeroInterval("regeneration_interval"));
        }
        if self.default_server_url.trim().is_empty() {
            return Err(ConfigError::EmptyDefaultServerUrl);
        }
        Ok(())
    }
}
