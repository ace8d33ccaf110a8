//! Session configuration.

/// Configuration for channel sessions.
///
/// Sensible defaults are provided; override just the fields you care about:
///
/// ```rust
/// use talkline_session::SessionConfig;
///
/// let config = SessionConfig {
///     first_msg_id: 1000,
///     ..SessionConfig::default()
/// };
/// assert_eq!(config.first_msg_id, 1000);
/// ```
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The first `msgId` a new channel session draws.
    ///
    /// Default: 1.
    pub first_msg_id: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { first_msg_id: 1 }
    }
}
