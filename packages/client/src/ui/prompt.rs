//! Line editor front-end of the welcome screen.
//!
//! rustyline is synchronous, so the editor runs on its own thread and hands
//! every submitted line to the async side. After each line the thread waits
//! for a [`PromptReply`] before prompting again, so messages printed by the
//! welcome screen do not interleave with the prompt.

use rustyline::{
    Context, Editor, Helper, completion::Completer, error::ReadlineError,
    highlight::Highlighter, hint::Hinter, history::DefaultHistory, validate::Validator,
};
use tokio::sync::{mpsc, oneshot, watch};

use crate::domain::AnimationState;

use super::formatter::WelcomeFormatter;

const PROMPT: &str = "room> ";

/// Answer of the welcome screen to a submitted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    /// Prompt again, pre-filled with the given input
    Continue(String),
    /// The screen is done, stop prompting
    Stop,
}

/// rustyline helper hinting, on an empty line, the whole generated room name.
///
/// The hint always names the room an empty submission joins. rustyline only
/// redraws on key events, so the revealed prefix is not used here.
pub struct PlaceholderHinter {
    updates: Option<watch::Receiver<AnimationState>>,
}

impl PlaceholderHinter {
    pub fn new(updates: Option<watch::Receiver<AnimationState>>) -> Self {
        Self { updates }
    }

    fn fallback_room_name(&self) -> String {
        let room = self
            .updates
            .as_ref()
            .map(|updates| updates.borrow().generated_room_name().to_string())
            .unwrap_or_default();
        WelcomeFormatter::format_placeholder(&room)
    }
}

impl Hinter for PlaceholderHinter {
    type Hint = String;

    fn hint(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        line.is_empty().then(|| self.fallback_room_name())
    }
}

impl Completer for PlaceholderHinter {
    type Candidate = String;
}

impl Highlighter for PlaceholderHinter {}

impl Validator for PlaceholderHinter {}

impl Helper for PlaceholderHinter {}

/// Spawn the blocking thread running the line editor
///
/// # Arguments
///
/// * `initial_url` - Input the first prompt is pre-filled with
/// * `placeholder_updates` - Source of the hinted room name
/// * `line_tx` - Receives every submitted line
/// * `reply_rx` - Answers to submitted lines
/// * `ready_tx` - Reports whether the editor could be started
pub fn spawn_prompt(
    initial_url: String,
    placeholder_updates: Option<watch::Receiver<AnimationState>>,
    line_tx: mpsc::UnboundedSender<String>,
    mut reply_rx: mpsc::UnboundedReceiver<PromptReply>,
    ready_tx: oneshot::Sender<Result<(), ReadlineError>>,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let mut rl = match Editor::<PlaceholderHinter, DefaultHistory>::new() {
            Ok(rl) => rl,
            Err(e) => {
                ready_tx.send(Err(e)).ok();
                return;
            }
        };
        rl.set_helper(Some(PlaceholderHinter::new(placeholder_updates)));
        ready_tx.send(Ok(())).ok();

        let mut initial_url = initial_url;
        loop {
            match rl.readline_with_initial(PROMPT, (initial_url.as_str(), "")) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str()).ok();
                    }
                    if line_tx.send(line).is_err() {
                        // Channel closed, exit thread
                        break;
                    }
                    match reply_rx.blocking_recv() {
                        Some(PromptReply::Continue(url)) => initial_url = url,
                        Some(PromptReply::Stop) | None => break,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::formatter::STATIC_PLACEHOLDER;

    #[test]
    fn test_hint_shows_generated_room_on_empty_line() {
        // テスト項目: 入力が空の場合は表示途中でも生成済みのルーム名全体がヒントに表示される
        // given (前提条件):
        let mut state = AnimationState::new("happyblueturtle");
        state.reveal_next();
        state.reveal_next();
        let (_tx, rx) = watch::channel(state);
        let hinter = PlaceholderHinter::new(Some(rx));
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        // when (操作):
        let hint = hinter.hint("", 0, &ctx);

        // then (期待する結果):
        assert_eq!(hint, Some("happyblueturtle".to_string()));
    }

    #[test]
    fn test_hint_follows_regeneration() {
        // テスト項目: ルーム名の再生成がヒントに反映される
        // given (前提条件):
        let mut state = AnimationState::new("abc");
        state.reveal_next();
        let (tx, rx) = watch::channel(state);
        let hinter = PlaceholderHinter::new(Some(rx));
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        // when (操作):
        tx.send_modify(|state| {
            state.regenerate("xyz");
            state.reveal_next();
        });

        // then (期待する結果):
        assert_eq!(hinter.hint("", 0, &ctx), Some("xyz".to_string()));
    }

    #[test]
    fn test_hint_is_hidden_while_typing() {
        // テスト項目: 入力中はヒントを表示しない
        // given (前提条件):
        let (_tx, rx) = watch::channel(AnimationState::new("abc"));
        let hinter = PlaceholderHinter::new(Some(rx));
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        // when (操作):
        let hint = hinter.hint("my", 2, &ctx);

        // then (期待する結果):
        assert_eq!(hint, None);
    }

    #[test]
    fn test_hint_without_animation_uses_static_text() {
        // テスト項目: ルーム名生成が無効な場合は固定の案内文がヒントになる
        // given (前提条件):
        let hinter = PlaceholderHinter::new(None);
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        // when (操作):
        let hint = hinter.hint("", 0, &ctx);

        // then (期待する結果):
        assert_eq!(hint, Some(STATIC_PLACEHOLDER.to_string()));
    }
}
