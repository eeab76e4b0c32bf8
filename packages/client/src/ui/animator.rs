//! Placeholder animation task.
//!
//! A single task owns both timers of the animation:
//!
//! - the regeneration timer, firing every `regeneration_interval`, which
//!   replaces the generated room name
//! - the reveal timer, firing every `reveal_interval` while part of the name
//!   is still hidden
//!
//! Every regeneration resets both timers before anything else runs, so a tick
//! scheduled for an old name can never touch a newer one.
//!
//! [`AnimatorHandle::shutdown`] is the teardown path: once it returns, the
//! task is gone and no state update can follow. Dropping the handle only
//! requests an abort, so on a multi-thread runtime a poll already in progress
//! may still publish one last update after `drop` returns.

use std::sync::Arc;

use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::{self, Instant},
};

use crate::{
    config::AnimationTiming,
    domain::{AnimationState, RoomNameGenerator, is_generated_room_name},
};

#[derive(Debug)]
enum AnimatorCommand {
    Regenerate,
}

/// Owner of a running placeholder animation
#[derive(Debug)]
pub struct AnimatorHandle {
    task: JoinHandle<()>,
    commands: mpsc::UnboundedSender<AnimatorCommand>,
    state: watch::Receiver<AnimationState>,
}

impl AnimatorHandle {
    /// Generate the first room name and start animating it.
    ///
    /// The first character is revealed before this returns. Must be called
    /// from within a tokio runtime.
    pub fn spawn(generator: Arc<dyn RoomNameGenerator>, timing: AnimationTiming) -> Self {
        let mut state = AnimationState::new(generate_room_name(generator.as_ref()));
        state.reveal_next();

        let (state_tx, state_rx) = watch::channel(state);
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_animation(generator, timing, state_tx, commands_rx));

        Self {
            task,
            commands: commands_tx,
            state: state_rx,
        }
    }

    /// The part of the generated name revealed so far
    pub fn placeholder(&self) -> String {
        self.state.borrow().placeholder().to_string()
    }

    pub fn generated_room_name(&self) -> String {
        self.state.borrow().generated_room_name().to_string()
    }

    /// Receiver notified on every change of the animation state
    pub fn subscribe(&self) -> watch::Receiver<AnimationState> {
        self.state.clone()
    }

    /// Replace the generated name now and restart both timers
    pub fn regenerate(&self) {
        if self.commands.send(AnimatorCommand::Regenerate).is_err() {
            tracing::warn!("Placeholder animation is not running, regenerate ignored");
        }
    }

    /// Stop the animation and wait until the task is gone.
    ///
    /// No timer fires and no state is published after this returns.
    pub async fn shutdown(mut self) {
        self.task.abort();
        if let Err(e) = (&mut self.task).await
            && !e.is_cancelled()
        {
            tracing::error!("Placeholder animation task failed: {}", e);
        }
    }
}

/// Fallback for handles that are never shut down. The abort is not awaited.
impl Drop for AnimatorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn generate_room_name(generator: &dyn RoomNameGenerator) -> String {
    let generated_room_name = generator.generate();
    if is_generated_room_name(&generated_room_name) {
        tracing::debug!(room = %generated_room_name, "Generated placeholder room name");
    } else {
        tracing::warn!(
            room = %generated_room_name,
            "Generated room name is not lowercase alphanumeric"
        );
    }
    generated_room_name
}

async fn run_animation(
    generator: Arc<dyn RoomNameGenerator>,
    timing: AnimationTiming,
    state: watch::Sender<AnimationState>,
    mut commands: mpsc::UnboundedReceiver<AnimatorCommand>,
) {
    let regeneration = time::sleep(timing.regeneration_interval);
    let reveal = time::sleep(timing.reveal_interval);
    tokio::pin!(regeneration, reveal);

    loop {
        let fully_revealed = state.borrow().is_fully_revealed();

        let regenerate = tokio::select! {
            () = &mut regeneration => true,
            () = &mut reveal, if !fully_revealed => false,
            command = commands.recv() => match command {
                Some(AnimatorCommand::Regenerate) => true,
                None => break,
            },
        };

        let now = Instant::now();
        if regenerate {
            let generated_room_name = generate_room_name(generator.as_ref());
            regeneration
                .as_mut()
                .reset(now + timing.regeneration_interval);
            state.send_modify(|state| {
                state.regenerate(generated_room_name);
                state.reveal_next();
            });
        } else {
            state.send_modify(|state| {
                state.reveal_next();
            });
        }
        reveal.as_mut().reset(now + timing.reveal_interval);
    }
}
