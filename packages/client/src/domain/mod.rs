//! Domain layer of the welcome screen.
//!
//! Pure values and functions plus the traits the welcome screen needs from
//! its collaborators. Implementations of the traits live in the
//! infrastructure layer.

mod animation;
mod navigator;
mod normalizer;
mod resolver;
mod room_name;
mod session_target;

pub use animation::AnimationState;
pub use navigator::{CONFERENCE_ROUTE, NavigationRequest, Navigator};
pub use normalizer::ServerUrlNormalizer;
pub use resolver::{resolve, select_input};
pub use room_name::{RoomNameGenerator, is_generated_room_name};
pub use session_target::{NavigationState, SessionTarget};

#[cfg(test)]
pub use navigator::MockNavigator;
#[cfg(test)]
pub use normalizer::MockServerUrlNormalizer;
#[cfg(test)]
pub use room_name::MockRoomNameGenerator;
