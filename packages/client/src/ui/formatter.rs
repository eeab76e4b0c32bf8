//! Message formatting utilities for the terminal welcome screen.

use crate::domain::NavigationRequest;

/// Hint shown while no room name is being generated
pub const STATIC_PLACEHOLDER: &str = "room name or server URL/room";

/// Message formatter for the welcome screen
pub struct WelcomeFormatter;

impl WelcomeFormatter {
    /// Format the greeting printed when the welcome screen opens
    ///
    /// # Arguments
    ///
    /// * `default_server_url` - Server used for rooms entered without a server URL
    /// * `generate_room_names` - Whether an empty submission joins a generated room
    pub fn format_greeting(default_server_url: &str, generate_room_names: bool) -> String {
        let mut output = String::new();
        output.push_str("\n============================================================\n");
        output.push_str("Start a meeting\n");
        output.push_str(&format!(
            "Enter a room name (hosted on {}) or a full URL such as meet.example.com/room.\n",
            default_server_url
        ));
        if generate_room_names {
            output.push_str("Press Enter on an empty line to join the suggested room.\n");
        }
        output.push_str("Press Ctrl+C to exit.\n");
        output.push_str("============================================================\n");
        output
    }

    /// Format the notice printed when a submission resolved to no room
    pub fn format_missing_room() -> String {
        "\nA room name is required, e.g. myroom or meet.example.com/myroom\n".to_string()
    }

    /// Format the summary of a navigation into a conference
    ///
    /// # Arguments
    ///
    /// * `request` - The navigation request emitted by the welcome screen
    /// * `default_server_url` - Server used when the request carries none
    pub fn format_navigation(request: &NavigationRequest, default_server_url: &str) -> String {
        format!(
            "\nJoining {} ({})\n",
            request.target.conference_url(default_server_url),
            request.route
        )
    }

    /// Text shown in the input field while it is empty
    pub fn format_placeholder(room_placeholder: &str) -> String {
        if room_placeholder.is_empty() {
            STATIC_PLACEHOLDER.to_string()
        } else {
            room_placeholder.to_string()
        }
    }
}
