//! Welcome screen state.
//!
//! Holds the input field value and the placeholder animation, and exposes
//! what the rendering side needs: `url`, `room_placeholder`, `on_url_change`
//! and `on_submit`.

use std::sync::Arc;

use tokio::sync::watch;

use crate::{
    config::WelcomeConfig,
    domain::{AnimationState, NavigationState, RoomNameGenerator},
    error::{ConfigError, NavigationError},
    usecase::{JoinConferenceUseCase, JoinOutcome},
};

use super::animator::AnimatorHandle;

/// Submission of the join form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the default action of the submission
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Welcome screen
pub struct WelcomeScreen {
    /// Raw input, changed only through `on_url_change`
    url: String,
    /// `None` when room name generation is disabled
    animator: Option<AnimatorHandle>,
    join_usecase: JoinConferenceUseCase,
}

impl WelcomeScreen {
    /// Create the welcome screen
    ///
    /// # Arguments
    ///
    /// * `join_usecase` - UseCase handling submissions
    /// * `animator` - Running placeholder animation, if any
    /// * `seed` - Navigation state the screen was entered with
    pub fn new(
        join_usecase: JoinConferenceUseCase,
        animator: Option<AnimatorHandle>,
        seed: Option<&NavigationState>,
    ) -> Self {
        let url = seed
            .and_then(NavigationState::initial_url)
            .unwrap_or_default();

        Self {
            url,
            animator,
            join_usecase,
        }
    }

    /// Validate `config` and activate the screen, starting the placeholder
    /// animation when room name generation is enabled.
    ///
    /// Must be called from within a tokio runtime.
    pub fn activate(
        config: &WelcomeConfig,
        generator: Arc<dyn RoomNameGenerator>,
        join_usecase: JoinConferenceUseCase,
        seed: Option<&NavigationState>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let animator = config
            .generate_room_names
            .then(|| AnimatorHandle::spawn(generator, config.timing));

        Ok(Self::new(join_usecase, animator, seed))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Placeholder shown while the input is empty
    pub fn room_placeholder(&self) -> String {
        self.animator
            .as_ref()
            .map(AnimatorHandle::placeholder)
            .unwrap_or_default()
    }

    /// Room joined when the input is submitted empty
    pub fn generated_room_name(&self) -> String {
        self.animator
            .as_ref()
            .map(AnimatorHandle::generated_room_name)
            .unwrap_or_default()
    }

    /// Receiver notified whenever the placeholder changes
    pub fn placeholder_updates(&self) -> Option<watch::Receiver<AnimationState>> {
        self.animator.as_ref().map(AnimatorHandle::subscribe)
    }

    /// Ask for a new generated room name
    pub fn regenerate_room_name(&self) {
        if let Some(animator) = &self.animator {
            animator.regenerate();
        }
    }

    pub fn on_url_change(&mut self, value: impl Into<String>) {
        self.url = value.into();
    }

    /// Handle a submission of the join form.
    ///
    /// The default action of `event` is always prevented; navigation only
    /// happens through the join usecase.
    pub fn on_submit(&self, event: &mut SubmitEvent) -> Result<JoinOutcome, NavigationError> {
        event.prevent_default();

        let fallback = self.generated_room_name();
        self.join_usecase.execute(&self.url, &fallback)
    }

    /// Tear the screen down, stopping the placeholder animation.
    ///
    /// Once this returns the placeholder no longer changes. Dropping the
    /// screen instead only requests the animation to stop.
    pub async fn dispose(self) {
        if let Some(animator) = self.animator {
            animator.shutdown().await;
        }
    }
}
