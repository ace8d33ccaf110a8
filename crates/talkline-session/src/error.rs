//! Error types for the session layer.

use talkline_protocol::ProtocolError;
use talkline_transport::TransportError;

/// Errors a channel command can fail with.
///
/// A response with a non-success status is NOT one of these: it comes back
/// as a [`CommandResult`](talkline_protocol::CommandResult) with
/// `success() == false` and the original status, so callers can branch on
/// the exact code.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The transport failed before a response arrived (closed connection,
    /// timeout, undecodable frame).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A request body could not be built, or a response field had the
    /// wrong shape.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The operation has no implementation yet. Nothing was sent.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}
