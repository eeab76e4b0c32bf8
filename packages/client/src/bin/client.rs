//! Terminal welcome screen of the genkan video-conferencing client.
//!
//! Shows an animated room name suggestion and resolves the entered room name
//! or `server/room` URL into the conference to join.
//! An empty line joins the suggested room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin genkan-client
//! cargo run --bin genkan-client -- --server-url https://meet.example --room standup
//! cargo run --bin genkan-client -- --no-room-name-generation
//! ```

use std::time::Duration;

use clap::Parser;

use genkan_client::{
    config::{AnimationTiming, DEFAULT_SERVER_URL, WelcomeConfig},
    domain::NavigationState,
    ui::{WelcomeFormatter, run_welcome},
};
use genkan_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "genkan-client")]
#[command(about = "Welcome screen of the genkan video-conferencing client", long_about = None)]
struct Args {
    /// Room to pre-fill (used together with --server-url)
    #[arg(short = 'r', long)]
    room: Option<String>,

    /// Server URL to pre-fill (used together with --room)
    #[arg(short = 's', long)]
    server_url: Option<String>,

    /// Server hosting rooms entered without a server URL
    #[arg(short = 'd', long, default_value = DEFAULT_SERVER_URL)]
    default_server_url: String,

    /// Delay between two revealed placeholder characters, in milliseconds
    #[arg(long, default_value_t = 70)]
    reveal_interval_ms: u64,

    /// Delay between two generated room names, in milliseconds
    #[arg(long, default_value_t = 10_000)]
    regeneration_interval_ms: u64,

    /// Do not generate room name suggestions
    #[arg(long)]
    no_room_name_generation: bool,
}

impl Args {
    fn config(&self) -> WelcomeConfig {
        WelcomeConfig {
            default_server_url: self.default_server_url.clone(),
            timing: AnimationTiming {
                reveal_interval: Duration::from_millis(self.reveal_interval_ms),
                regeneration_interval: Duration::from_millis(self.regeneration_interval_ms),
            },
            generate_room_names: !self.no_room_name_generation,
        }
    }

    fn seed(&self) -> NavigationState {
        NavigationState {
            room: self.room.clone(),
            server_url: self.server_url.clone(),
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();
    let config = args.config();

    // Run the welcome screen
    let request = match run_welcome(config.clone(), Some(args.seed())).await {
        Ok(Some(request)) => request,
        Ok(None) => return,
        Err(e) => {
            tracing::error!("Welcome screen error: {}", e);
            std::process::exit(1);
        }
    };

    print!(
        "{}",
        WelcomeFormatter::format_navigation(&request, &config.default_server_url)
    );
    match serde_json::to_string(&request) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!("Failed to serialize navigation request: {}", e);
            std::process::exit(1);
        }
    }
}
