//! Navigation payloads produced and consumed by the welcome screen.

use serde::{Deserialize, Serialize};

/// Resolved destination of a join: the room and the server hosting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTarget {
    /// Room name (never empty once a navigation is emitted)
    pub room: String,
    /// Normalized server URL, `None` when the input named only a room
    #[serde(rename = "serverURL", skip_serializing_if = "Option::is_none", default)]
    pub server_url: Option<String>,
}

impl SessionTarget {
    /// Create a target for `room`, optionally hosted on `server_url`
    pub fn new(room: impl Into<String>, server_url: Option<String>) -> Self {
        Self {
            room: room.into(),
            server_url,
        }
    }

    /// Build the full conference URL, using `default_server_url` when the
    /// target does not carry a server of its own.
    ///
    /// An empty server URL (the input started with `/`) counts as absent.
    pub fn conference_url(&self, default_server_url: &str) -> String {
        let server_url = self
            .server_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(default_server_url);

        format!("{}/{}", server_url.trim_end_matches('/'), self.room)
    }
}

/// Navigation state handed to the welcome screen when it is entered, e.g.
/// after leaving a conference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    #[serde(default)]
    pub room: Option<String>,
    #[serde(rename = "serverURL", default)]
    pub server_url: Option<String>,
}

impl NavigationState {
    /// The value the input field starts with.
    ///
    /// Only a state carrying both `room` and `serverURL` pre-fills the
    /// input; anything else is ignored.
    pub fn initial_url(&self) -> Option<String> {
        match (&self.server_url, &self.room) {
            (Some(server_url), Some(room)) => Some(format!("{}/{}", server_url, room)),
            _ => None,
        }
    }
}
