//! Identity and channel types.
//!
//! Only the identifying fields the command layer reads are modeled here.
//! Everything else the server knows about a channel stays in the raw
//! response body.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DataResponse, ProtocolError};

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// Identifies a channel (a conversation) within the service.
///
/// Newtype over the server's 64-bit id so a `ChannelId` can never be passed
/// where a `LogId` or `UserId` is expected. `#[serde(transparent)]` keeps it
/// a plain number on the wire: `ChannelId(42)` serializes as `42`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub i64);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The second identifier an open (public, joinable) channel carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(pub i64);

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies one logged chat within a channel's history.
///
/// Used to address deletions and as the read watermark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LogId(pub i64);

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a user of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

/// A normal channel, addressed by its id alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Channel {
    pub channel_id: ChannelId,
}

impl Channel {
    pub fn new(channel_id: ChannelId) -> Self {
        Self { channel_id }
    }
}

/// An open channel: a channel id plus the link id of the open link it
/// was joined through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpenChannel {
    pub channel_id: ChannelId,
    pub link_id: LinkId,
}

impl OpenChannel {
    pub fn new(channel_id: ChannelId, link_id: LinkId) -> Self {
        Self {
            channel_id,
            link_id,
        }
    }

    /// The plain channel view, for operations that only need the id
    /// (e.g. leaving).
    pub fn as_channel(&self) -> Channel {
        Channel::new(self.channel_id)
    }
}

/// A user to invite when creating a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelUser {
    pub user_id: UserId,
}

/// What a new channel should look like.
///
/// `name` and `profile_url` are optional; empty strings are treated the
/// same as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelTemplate {
    /// Users to add as members.
    pub user_list: Vec<ChannelUser>,
    /// Display name of the channel.
    pub name: Option<String>,
    /// Profile image URL of the channel.
    pub profile_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Channel info
// ---------------------------------------------------------------------------

/// Channel metadata returned by a `CHATINFO` command.
///
/// `channel_id` is always the channel the request was made for. The rest is
/// filled in from the response's `chatInfo` object when the server sent one;
/// fields it did not send stay `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub channel_id: ChannelId,
    /// Server-side channel kind (`"DirectChat"`, `"MultiChat"`, `"MemoChat"`, ...).
    pub channel_type: Option<String>,
    pub active_user_count: Option<i64>,
    pub new_chat_count: Option<i64>,
    pub last_chat_log_id: Option<LogId>,
    pub last_seen_log_id: Option<LogId>,
}

impl ChannelInfo {
    /// Info carrying only the channel id.
    pub fn minimal(channel_id: ChannelId) -> Self {
        Self {
            channel_id,
            channel_type: None,
            active_user_count: None,
            new_chat_count: None,
            last_chat_log_id: None,
            last_seen_log_id: None,
        }
    }

    /// Builds the info for `channel_id` from a `CHATINFO` response.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if `chatInfo` is present but is not
    /// an object of the expected shape.
    pub fn from_response(
        channel_id: ChannelId,
        res: &DataResponse,
    ) -> Result<Self, ProtocolError> {
        let Some(raw) = res.get::<ChannelInfoStruct>("chatInfo")? else {
            return Ok(Self::minimal(channel_id));
        };

        Ok(Self {
            channel_id,
            channel_type: raw.channel_type,
            active_user_count: raw.active_members_count,
            new_chat_count: raw.new_message_count,
            last_chat_log_id: raw.last_chat_log_id,
            last_seen_log_id: raw.last_seen_log_id,
        })
    }
}

/// Wire shape of `chatInfo`. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ChannelInfoStruct {
    #[serde(rename = "type")]
    channel_type: Option<String>,
    active_members_count: Option<i64>,
    new_message_count: Option<i64>,
    last_chat_log_id: Option<LogId>,
    last_seen_log_id: Option<LogId>,
}

/// Open channel metadata. Declared as the result type of the open channel
/// info fetch; the server schema for it is not decoded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenChannelInfo {
    pub info: ChannelInfo,
    pub link_id: LinkId,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{DataMap, StatusCode};

    fn response(body: serde_json::Value) -> DataResponse {
        let serde_json::Value::Object(map) = body else {
            panic!("test body must be an object");
        };
        DataResponse::new(StatusCode::SUCCESS, map)
    }

    #[test]
    fn test_channel_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&ChannelId(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_log_id_orders_numerically() {
        assert!(LogId(100) < LogId(101));
    }

    #[test]
    fn test_open_channel_as_channel_keeps_channel_id() {
        let open = OpenChannel::new(ChannelId(5), LinkId(9));
        assert_eq!(open.as_channel(), Channel::new(ChannelId(5)));
    }

    #[test]
    fn test_channel_info_from_response_without_chat_info_is_minimal() {
        let res = DataResponse::new(StatusCode::SUCCESS, DataMap::new());

        let info = ChannelInfo::from_response(ChannelId(42), &res).unwrap();

        assert_eq!(info, ChannelInfo::minimal(ChannelId(42)));
    }

    #[test]
    fn test_channel_info_from_response_reads_chat_info_fields() {
        let res = response(json!({
            "status": 0,
            "chatInfo": {
                "chatId": 42,
                "type": "MultiChat",
                "activeMembersCount": 3,
                "newMessageCount": 7,
                "lastChatLogId": 900,
                "lastSeenLogId": 880,
                "pushAlert": true
            }
        }));

        let info = ChannelInfo::from_response(ChannelId(42), &res).unwrap();

        assert_eq!(info.channel_id, ChannelId(42));
        assert_eq!(info.channel_type.as_deref(), Some("MultiChat"));
        assert_eq!(info.active_user_count, Some(3));
        assert_eq!(info.new_chat_count, Some(7));
        assert_eq!(info.last_chat_log_id, Some(LogId(900)));
        assert_eq!(info.last_seen_log_id, Some(LogId(880)));
    }

    #[test]
    fn test_channel_info_from_response_keeps_own_channel_id() {
        // The façade's channel id wins over whatever the body echoes.
        let res = response(json!({ "chatInfo": { "chatId": 1 } }));

        let info = ChannelInfo::from_response(ChannelId(42), &res).unwrap();

        assert_eq!(info.channel_id, ChannelId(42));
    }

    #[test]
    fn test_channel_info_from_response_wrong_shape_returns_error() {
        let res = response(json!({ "chatInfo": "nope" }));

        let result = ChannelInfo::from_response(ChannelId(42), &res);

        assert!(matches!(result, Err(ProtocolError::Decode(_))));
    }
}
