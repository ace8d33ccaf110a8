use talkline_protocol::ProtocolError;

/// Errors that can occur in the transport layer.
///
/// Any of these means the request never produced a status. A response that
/// did arrive with a failure status is not an error at this level.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Opening the connection failed.
    #[error("connect failed: {0}")]
    ConnectFailed(#[source] std::io::Error),

    /// The connection was closed before the response arrived.
    #[error("connection closed: {0}")]
    ConnectionClosed(String),

    /// Sending data failed.
    #[error("send failed: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Receiving data failed.
    #[error("receive failed: {0}")]
    ReceiveFailed(#[source] std::io::Error),

    /// The request could not be encoded.
    #[error("encode failed: {0}")]
    Encode(#[source] ProtocolError),

    /// A response arrived for the request but could not be read.
    #[error("malformed response: {0}")]
    MalformedResponse(#[source] ProtocolError),

    /// No response arrived within the configured request timeout.
    #[error("{method} timed out")]
    Timeout { method: String },
}
