//! Syntactic normalization of server URLs typed on the welcome screen.
//!
//! Nothing here checks whether the server exists. The input is parsed with
//! [`url::Url`] and serialized back:
//!
//! - surrounding whitespace is removed
//! - a missing scheme becomes `https`
//! - scheme and host are canonicalized by the parser (default ports dropped)
//! - trailing `/`, `?` and `#` after the authority are stripped
//!
//! Input the parser rejects is returned trimmed, so normalization never fails.

use std::borrow::Cow;

use url::{Position, Url};

use crate::domain::ServerUrlNormalizer;

const DEFAULT_SCHEME: &str = "https";

/// Normalizer adding `https://` to server URLs without a scheme
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpsServerUrlNormalizer;

impl ServerUrlNormalizer for HttpsServerUrlNormalizer {
    fn normalize(&self, server_url: &str) -> String {
        normalize_server_url(server_url)
    }
}

/// Normalize `server_url`. Empty (or blank) input stays empty.
pub fn normalize_server_url(server_url: &str) -> String {
    let trimmed = server_url.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match Url::parse(&with_scheme(trimmed)) {
        Ok(url) => {
            let authority = &url[..Position::BeforePath];
            let rest = url[Position::BeforePath..].trim_end_matches(['/', '?', '#']);
            format!("{authority}{rest}")
        }
        Err(e) => {
            tracing::debug!(server_url = trimmed, "Server URL kept as typed: {}", e);
            trimmed.to_string()
        }
    }
}

/// Prefix the default scheme unless `url` starts with `scheme://`.
/// A protocol-relative `//host` only gets the scheme name.
fn with_scheme(url: &str) -> Cow<'_, str> {
    if url.starts_with("//") {
        return Cow::Owned(format!("{DEFAULT_SCHEME}:{url}"));
    }

    match url.split_once("://") {
        Some((scheme, _)) if is_scheme(scheme) => Cow::Borrowed(url),
        _ => Cow::Owned(format!("{DEFAULT_SCHEME}://{url}")),
    }
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}
