//! Logging setup utilities for the genkan binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Library crates whose spans and events are enabled alongside the binary.
const LIBRARY_TARGETS: &[&str] = &["genkan_shared", "genkan_client"];

/// Initialize the tracing subscriber with the specified default log level.
///
/// This function sets up logging for the genkan library crates and the binary.
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "genkan-client")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use genkan_shared::logger::setup_logger;
///
/// setup_logger("genkan-client", "info");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!(binary = binary_name, "logger initialized");
}

/// Build the filter directives used when `RUST_LOG` is not set.
///
/// Binary names use `-` while tracing targets use `_`, so the binary name is
/// converted before being added. A binary whose target is already a library
/// target is not listed twice.
pub fn default_directives(binary_name: &str, default_log_level: &str) -> String {
    let binary_target = binary_name.replace('-', "_");
    let mut targets: Vec<&str> = LIBRARY_TARGETS.to_vec();
    if !targets.contains(&binary_target.as_str()) {
        targets.push(&binary_target);
    }

    targets
        .iter()
        .map(|target| format!("{}={}", target, default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}
