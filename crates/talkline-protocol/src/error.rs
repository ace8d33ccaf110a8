//! Protocol-layer errors.

/// Failure to turn a value into a record or frame, or to read one back.
///
/// Never raised for a non-success status: that is a normal response.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// A request body or packet could not be serialized.
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// A frame or response field did not match the expected shape.
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// Well-formed JSON that breaks a protocol rule, e.g. a response with
    /// no `status` or a body that is not an object.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}
