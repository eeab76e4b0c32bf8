//! Resolution of the welcome screen input into a join destination.
//!
//! This module contains pure functions that implement business logic
//! without side effects, making them easy to test.

use super::{ServerUrlNormalizer, SessionTarget};

/// Pick the text to resolve: the user's input, or the generated room name
/// when the input is empty.
///
/// Whitespace-only input counts as input.
pub fn select_input<'a>(raw_input: &'a str, fallback: &'a str) -> &'a str {
    if raw_input.is_empty() {
        fallback
    } else {
        raw_input
    }
}

/// Resolve the welcome screen input into a [`SessionTarget`].
///
/// Everything after the last `/` is the room; everything before it is a
/// server URL, normalized once with `normalizer`. Input without `/` is a bare
/// room name and the normalizer is not called.
///
/// # Arguments
///
/// * `raw_input` - The text typed by the user
/// * `fallback` - The generated room name used when `raw_input` is empty
/// * `normalizer` - Server URL normalization
///
/// # Returns
///
/// `None` when the resolved room name is empty, in which case the caller
/// must not navigate.
pub fn resolve(
    raw_input: &str,
    fallback: &str,
    normalizer: &dyn ServerUrlNormalizer,
) -> Option<SessionTarget> {
    let input = select_input(raw_input, fallback);

    let (room, server_url) = match input.rfind('/') {
        Some(index) => (&input[index + 1..], Some(&input[..index])),
        None => (input, None),
    };

    if room.is_empty() {
        return None;
    }

    let server_url = server_url.map(|server_url| normalizer.normalize(server_url));
    Some(SessionTarget::new(room, server_url))
}
