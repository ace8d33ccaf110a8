//! Byte encoding for [`Packet`](crate::Packet)s.
//!
//! The WebSocket transport is generic over [`Codec`], so the frame format
//! can change without touching the façades. [`JsonCodec`] is the only
//! format shipped.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Turns values into frame bytes and back.
///
/// `Send + Sync + 'static` because the transport moves its codec into a
/// reader task that outlives any one request.
pub trait Codec: Send + Sync + 'static {
    /// # Errors
    /// [`ProtocolError::Encode`] if `value` can't be serialized.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// # Errors
    /// [`ProtocolError::Decode`] if `data` is not a valid `T`.
    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// JSON frames via `serde_json`.
///
/// # Example
///
/// ```rust
/// use talkline_protocol::{Codec, DataMap, JsonCodec, Packet};
///
/// let codec = JsonCodec;
///
/// let packet = Packet {
///     packet_id: 1,
///     method: "CHATINFO".into(),
///     body: DataMap::new(),
/// };
///
/// let bytes = codec.encode(&packet).unwrap();
/// let decoded: Packet = codec.decode(&bytes).unwrap();
/// assert_eq!(packet, decoded);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}
