//! UI layer: placeholder animation, welcome screen state and the terminal
//! front-end.

mod animator;
mod formatter;
mod prompt;
mod runner;
mod welcome;

pub use animator::AnimatorHandle;
pub use formatter::{STATIC_PLACEHOLDER, WelcomeFormatter};
pub use prompt::{PlaceholderHinter, PromptReply};
pub use runner::run_welcome;
pub use welcome::{SubmitEvent, WelcomeScreen};
