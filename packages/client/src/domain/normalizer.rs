//! ServerUrlNormalizer trait 定義

/// Syntactic normalization of a server URL.
///
/// Implementations must be pure: the same input always yields the same
/// output, and normalizing an already normalized URL changes nothing.
#[cfg_attr(test, mockall::automock)]
pub trait ServerUrlNormalizer: Send + Sync {
    fn normalize(&self, server_url: &str) -> String;
}
