//! UseCase layer of the welcome screen.

mod join_conference;

pub use join_conference::{JoinConferenceUseCase, JoinOutcome};
