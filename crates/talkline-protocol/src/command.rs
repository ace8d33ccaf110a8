//! Command names and their request bodies.
//!
//! The field names here are the wire contract: `#[serde(rename_all =
//! "camelCase")]` turns `chat_id` into `chatId`, and so on. Optional fields
//! carry `skip_serializing_if`, so a body is always the required record
//! with each optional field merged in only when its source value exists.
//! An absent optional field is missing from the map, never `null`.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::{Chat, ChatType, ChannelId, ChannelTemplate, LinkId, LogId, UserId};

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// The commands the session layer issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Send a chat.
    Write,
    /// Forward a chat. Same body as `Write`; the server skips the local
    /// delivery shortcuts it applies to writes.
    Forward,
    /// Delete a logged chat.
    DeleteMsg,
    /// Move the read watermark.
    NotiRead,
    /// Fetch channel metadata.
    ChatInfo,
    /// Create a channel.
    Create,
    /// Leave a channel.
    Leave,
}

impl Command {
    /// The command name as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Write => "WRITE",
            Self::Forward => "FORWARD",
            Self::DeleteMsg => "DELETEMSG",
            Self::NotiRead => "NOTIREAD",
            Self::ChatInfo => "CHATINFO",
            Self::Create => "CREATE",
            Self::Leave => "LEAVE",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Chat bodies
// ---------------------------------------------------------------------------

/// Body of `WRITE` and `FORWARD`.
///
/// ```text
/// { "chatId": 42, "msgId": 1, "msg": "hello", "type": 1, "noSeen": true, "extra"?: {...} }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatWriteBody {
    pub chat_id: ChannelId,
    pub msg_id: u64,
    pub msg: String,
    #[serde(rename = "type")]
    pub chat_type: ChatType,
    /// Always `true`: the sender's own copy is not echoed back as unread.
    pub no_seen: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

impl ChatWriteBody {
    /// Builds the body for `chat` under correlation id `msg_id`.
    ///
    /// The attachment becomes `extra` verbatim. A `null` attachment counts
    /// as no attachment.
    pub fn new(chat_id: ChannelId, msg_id: u64, chat: &Chat) -> Self {
        Self {
            chat_id,
            msg_id,
            msg: chat.text.clone(),
            chat_type: chat.chat_type,
            no_seen: true,
            extra: chat.attachment.clone().filter(|extra| !extra.is_null()),
        }
    }
}

/// Body of `DELETEMSG`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteChatBody {
    pub chat_id: ChannelId,
    pub log_id: LogId,
}

/// Body of `NOTIREAD`. `li` is only sent for open channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotiReadBody {
    pub chat_id: ChannelId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub li: Option<LinkId>,
    pub watermark: LogId,
}

/// Body of `CHATINFO`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatInfoBody {
    pub chat_id: ChannelId,
}

// ---------------------------------------------------------------------------
// Channel lifecycle bodies
// ---------------------------------------------------------------------------

/// Body of `CREATE` for a regular channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChannelBody {
    pub member_ids: Vec<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

impl CreateChannelBody {
    /// Members come from the template's user list in order. An empty name
    /// or profile URL is left out, same as a missing one.
    pub fn from_template(template: &ChannelTemplate) -> Self {
        Self {
            member_ids: template.user_list.iter().map(|user| user.user_id).collect(),
            nickname: non_empty(template.name.as_deref()),
            profile_image_url: non_empty(template.profile_url.as_deref()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Body of `CREATE` for a self-memo channel: `{ "memoChat": true }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemoBody {
    pub memo_chat: bool,
}

impl Default for CreateMemoBody {
    fn default() -> Self {
        Self { memo_chat: true }
    }
}

/// Body of `LEAVE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBody {
    pub chat_id: ChannelId,
    pub block: bool,
}
