//! The structured record a command carries, and the response to it.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{ProtocolError, StatusCode};

/// A command body or response body: string keys to structured values.
pub type DataMap = serde_json::Map<String, Value>;

/// Serializes a typed request body into a [`DataMap`].
///
/// # Errors
/// - `ProtocolError::Encode` if the value can't be serialized.
/// - `ProtocolError::InvalidMessage` if it serializes to something other
///   than a map (a number, a list, ...).
pub fn to_data_map<T: Serialize>(value: &T) -> Result<DataMap, ProtocolError> {
    match serde_json::to_value(value).map_err(ProtocolError::Encode)? {
        Value::Object(map) => Ok(map),
        other => Err(ProtocolError::InvalidMessage(format!(
            "command body must be a map, got {other}"
        ))),
    }
}

// ---------------------------------------------------------------------------
// DataResponse
// ---------------------------------------------------------------------------

/// A response as resolved by the transport: its status plus the full body.
///
/// The body still contains `status` and every other field the server sent,
/// so operations that return the raw response lose nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct DataResponse {
    status: StatusCode,
    body: DataMap,
}

impl DataResponse {
    pub fn new(status: StatusCode, body: DataMap) -> Self {
        Self { status, body }
    }

    /// Reads the `status` field out of a response body.
    ///
    /// # Errors
    /// - `ProtocolError::InvalidMessage` if there is no `status` field.
    /// - `ProtocolError::Decode` if `status` is not an integer.
    pub fn from_body(body: DataMap) -> Result<Self, ProtocolError> {
        let status = body.get("status").cloned().ok_or_else(|| {
            ProtocolError::InvalidMessage("response has no status".into())
        })?;
        let status: StatusCode =
            serde_json::from_value(status).map_err(ProtocolError::Decode)?;
        Ok(Self { status, body })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &DataMap {
        &self.body
    }

    pub fn into_body(self) -> DataMap {
        self.body
    }

    /// Decodes one field of the body.
    ///
    /// A missing field and an explicit `null` both read as `Ok(None)`.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the field is present but has the
    /// wrong shape for `T`.
    pub fn get<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, ProtocolError> {
        match self.body.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(ProtocolError::Decode),
        }
    }
}

// ---------------------------------------------------------------------------
// Packet
// ---------------------------------------------------------------------------

/// One command frame on the wire.
///
/// Requests and responses share the shape. The transport stamps each
/// request with a fresh `packet_id`; the server answers with the same id,
/// which is how concurrent requests are told apart.
///
/// ```text
/// { "packetId": 7, "method": "WRITE", "body": { "chatId": 42, ... } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Packet {
    pub packet_id: u32,
    pub method: String,
    #[serde(default)]
    pub body: DataMap,
}
