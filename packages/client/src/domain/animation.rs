//! Typewriter state of the room name placeholder.
//!
//! The state is a pure value: the animator task owns the timers and calls
//! [`AnimationState::regenerate`] and [`AnimationState::reveal_next`] when they
//! fire. `placeholder` is always a prefix of `generated_room_name`.

/// Generated room name and the part of it revealed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationState {
    generated_room_name: String,
    placeholder: String,
}

impl AnimationState {
    /// Start a state whose placeholder is still empty
    pub fn new(generated_room_name: impl Into<String>) -> Self {
        Self {
            generated_room_name: generated_room_name.into(),
            placeholder: String::new(),
        }
    }

    /// Replace the generated name and reset the placeholder to empty
    pub fn regenerate(&mut self, generated_room_name: impl Into<String>) {
        self.generated_room_name = generated_room_name.into();
        self.placeholder.clear();
    }

    /// Reveal one more character of the generated name.
    ///
    /// Returns `false` when the whole name is already shown.
    pub fn reveal_next(&mut self) -> bool {
        let revealed = self.placeholder.len();
        match self.generated_room_name[revealed..].chars().next() {
            Some(next) => {
                self.placeholder.push(next);
                true
            }
            None => false,
        }
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.placeholder.len() == self.generated_room_name.len()
    }

    pub fn generated_room_name(&self) -> &str {
        &self.generated_room_name
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}
