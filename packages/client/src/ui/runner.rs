//! Interactive welcome screen execution logic.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::{
    config::WelcomeConfig,
    domain::{NavigationRequest, NavigationState},
    error::WelcomeError,
    infrastructure::{
        navigator::ChannelNavigator, normalizer::HttpsServerUrlNormalizer,
        room_name::WordListRoomNameGenerator,
    },
    usecase::{JoinConferenceUseCase, JoinOutcome},
};

use super::{
    formatter::WelcomeFormatter,
    prompt::{PromptReply, spawn_prompt},
    welcome::{SubmitEvent, WelcomeScreen},
};

/// Run the welcome screen on the terminal until the user joins a room or
/// leaves.
///
/// # Returns
///
/// * `Ok(Some(NavigationRequest))` - The user joined a conference
/// * `Ok(None)` - The user left without joining (Ctrl+C / Ctrl+D)
/// * `Err(WelcomeError)` - The screen could not be run
pub async fn run_welcome(
    config: WelcomeConfig,
    seed: Option<NavigationState>,
) -> Result<Option<NavigationRequest>, WelcomeError> {
    let (navigator, mut navigation_rx) = ChannelNavigator::new();
    let join_usecase =
        JoinConferenceUseCase::new(Arc::new(HttpsServerUrlNormalizer), Arc::new(navigator));
    let mut screen = WelcomeScreen::activate(
        &config,
        Arc::new(WordListRoomNameGenerator::new()),
        join_usecase,
        seed.as_ref(),
    )?;

    print!(
        "{}",
        WelcomeFormatter::format_greeting(&config.default_server_url, config.generate_room_names)
    );

    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();
    let (reply_tx, reply_rx) = mpsc::unbounded_channel::<PromptReply>();
    let (ready_tx, ready_rx) = oneshot::channel();
    let _prompt_handle = spawn_prompt(
        screen.url().to_string(),
        screen.placeholder_updates(),
        line_tx,
        reply_rx,
        ready_tx,
    );

    let ready = match ready_rx.await {
        Ok(ready) => ready.map_err(WelcomeError::from),
        Err(_) => Err(WelcomeError::PromptClosed),
    };
    if let Err(e) = ready {
        screen.dispose().await;
        return Err(e);
    }

    let result = loop {
        let Some(line) = line_rx.recv().await else {
            tracing::info!("Welcome screen closed without joining");
            break Ok(None);
        };

        screen.on_url_change(line);
        let mut event = SubmitEvent::new();
        match screen.on_submit(&mut event) {
            Ok(JoinOutcome::Navigated(_)) => {
                reply_tx.send(PromptReply::Stop).ok();
                break Ok(navigation_rx.recv().await);
            }
            Ok(JoinOutcome::Ignored) => {
                print!("{}", WelcomeFormatter::format_missing_room());
                if reply_tx
                    .send(PromptReply::Continue(screen.url().to_string()))
                    .is_err()
                {
                    break Ok(None);
                }
            }
            Err(e) => {
                tracing::error!("Failed to join conference: {}", e);
                break Err(e.into());
            }
        }
    };

    screen.dispose().await;
    result
}
