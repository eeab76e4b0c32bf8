//! Server URL normalization.

pub mod server_url;

pub use server_url::{HttpsServerUrlNormalizer, normalize_server_url};
