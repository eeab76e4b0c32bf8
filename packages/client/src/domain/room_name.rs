//! RoomNameGenerator trait 定義

/// Source of random room names shown as the input placeholder.
///
/// Generated names are non-empty and made of lowercase ASCII letters and
/// digits only. Two consecutive names are not required to differ.
#[cfg_attr(test, mockall::automock)]
pub trait RoomNameGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Check that `name` follows the generated room name format
pub fn is_generated_room_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}
