//! Unified error type for Talkline.

use talkline_protocol::ProtocolError;
use talkline_session::SessionError;
use talkline_transport::TransportError;

/// Any failure surfaced by the `talkline` crate.
///
/// Errors from the member crates convert with `?`.
#[derive(Debug, thiserror::Error)]
pub enum TalkError {
    /// A transport-level error (connect, send, timeout, closed).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode, decode, invalid message).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A session-level error from a channel command.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A global tracing subscriber was already installed.
    #[error("logging init failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_transport_error() {
        let err = TransportError::ConnectionClosed("gone".into());
        let talk_err: TalkError = err.into();
        assert!(matches!(talk_err, TalkError::Transport(_)));
        assert!(talk_err.to_string().contains("gone"));
    }

    #[test]
    fn test_from_protocol_error() {
        let err = ProtocolError::InvalidMessage("bad".into());
        let talk_err: TalkError = err.into();
        assert!(matches!(talk_err, TalkError::Protocol(_)));
    }

    #[test]
    fn test_from_session_error() {
        let err = SessionError::NotImplemented("open channel info");
        let talk_err: TalkError = err.into();
        assert!(matches!(talk_err, TalkError::Session(_)));
        assert_eq!(talk_err.to_string(), "open channel info is not implemented");
    }
}
