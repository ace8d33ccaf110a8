//! Chat messages: what callers send, and references to what was logged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{LogId, UserId};

// ---------------------------------------------------------------------------
// ChatType
// ---------------------------------------------------------------------------

/// The type tag of a chat message.
///
/// A newtype rather than an enum: the server adds types over time and this
/// layer passes unknown tags through untouched. The known tags are provided
/// as associated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatType(pub i32);

impl ChatType {
    pub const FEED: Self = Self(0);
    pub const TEXT: Self = Self(1);
    pub const PHOTO: Self = Self(2);
    pub const VIDEO: Self = Self(3);
    pub const CONTACT: Self = Self(4);
    pub const AUDIO: Self = Self(5);
    pub const DITEMEMOTICON: Self = Self(6);
    pub const DITEMGIFT: Self = Self(7);
    pub const DITEMIMG: Self = Self(8);
    pub const KAKAOLINKV1: Self = Self(9);
    pub const AVATAR: Self = Self(11);
    pub const STICKER: Self = Self(12);
    pub const SCHEDULE: Self = Self(13);
    pub const VOTE: Self = Self(14);
    pub const LOTTERY: Self = Self(15);
    pub const MAP: Self = Self(16);
    pub const PROFILE: Self = Self(17);
    pub const FILE: Self = Self(18);
    pub const STICKERANI: Self = Self(20);
    pub const NUDGE: Self = Self(21);
    pub const ACTIONCON: Self = Self(22);
    pub const SEARCH: Self = Self(23);
    pub const POST: Self = Self(24);
    pub const STICKERGIF: Self = Self(25);
    pub const REPLY: Self = Self(26);
    pub const MULTIPHOTO: Self = Self(27);
    pub const VOIP: Self = Self(51);
    pub const LIVETALK: Self = Self(52);
    pub const CUSTOM: Self = Self(71);
    pub const ALIM: Self = Self(72);
    pub const PLUSFRIEND: Self = Self(81);
    pub const PLUSEVENT: Self = Self(82);
    pub const PLUSFRIENDVIRAL: Self = Self(83);
    pub const OPEN_SCHEDULE: Self = Self(96);
    pub const OPEN_VOTE: Self = Self(97);
    pub const OPEN_POST: Self = Self(98);
}

impl Default for ChatType {
    fn default() -> Self {
        Self::TEXT
    }
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// A chat message as the caller wants it sent.
///
/// `attachment` is opaque structured data (media descriptors, mentions,
/// reply targets, ...). This layer never looks inside it; it is copied into
/// the `extra` field of the request as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chat {
    pub chat_type: ChatType,
    pub text: String,
    pub attachment: Option<Value>,
}

impl Chat {
    /// A plain text chat with no attachment.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            chat_type: ChatType::TEXT,
            text: text.into(),
            attachment: None,
        }
    }

    pub fn new(chat_type: ChatType, text: impl Into<String>) -> Self {
        Self {
            chat_type,
            text: text.into(),
            attachment: None,
        }
    }

    pub fn with_attachment(mut self, attachment: Value) -> Self {
        self.attachment = Some(attachment);
        self
    }
}

/// What `send_chat` accepts: either bare text or a full [`Chat`].
///
/// Normalized to a [`Chat`] by [`ChatInput::into_chat`] before any request
/// body is built, so nothing further down has to care which one it got.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatInput {
    Text(String),
    Chat(Chat),
}

impl ChatInput {
    pub fn into_chat(self) -> Chat {
        match self {
            Self::Text(text) => Chat::text(text),
            Self::Chat(chat) => chat,
        }
    }
}

impl From<&str> for ChatInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ChatInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Chat> for ChatInput {
    fn from(chat: Chat) -> Self {
        Self::Chat(chat)
    }
}

// ---------------------------------------------------------------------------
// Logged chats
// ---------------------------------------------------------------------------

/// Anything that points at a logged chat.
///
/// Deletion and read receipts only need the log id, so they accept either a
/// full [`ChatLogged`] or a bare [`LogId`].
pub trait ChatLogRef {
    fn log_id(&self) -> LogId;
}

impl ChatLogRef for LogId {
    fn log_id(&self) -> LogId {
        *self
    }
}

/// A chat as recorded in a channel's history.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatLogged {
    pub log_id: LogId,
    pub prev_log_id: Option<LogId>,
    pub sender_id: UserId,
    /// Unix time in seconds.
    pub send_at: i64,
    pub chat: Chat,
}

impl ChatLogRef for ChatLogged {
    fn log_id(&self) -> LogId {
        self.log_id
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_into_chat_plain_text_becomes_text_type_without_attachment() {
        let chat = ChatInput::from("hello").into_chat();

        assert_eq!(chat.chat_type, ChatType::TEXT);
        assert_eq!(chat.text, "hello");
        assert!(chat.attachment.is_none());
    }

    #[test]
    fn test_into_chat_structured_passes_through_unchanged() {
        let original = Chat::new(ChatType::PHOTO, "")
            .with_attachment(json!({ "url": "https://example.com/a.jpg" }));

        let chat = ChatInput::from(original.clone()).into_chat();

        assert_eq!(chat, original);
    }

    #[test]
    fn test_chat_type_unknown_tag_round_trips() {
        let json = serde_json::to_string(&ChatType(4242)).unwrap();
        assert_eq!(json, "4242");
        let decoded: ChatType = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, ChatType(4242));
    }

    #[test]
    fn test_chat_log_ref_for_chat_logged_returns_log_id() {
        let logged = ChatLogged {
            log_id: LogId(777),
            prev_log_id: Some(LogId(776)),
            sender_id: UserId(1),
            send_at: 1_611_300_000,
            chat: Chat::text("hi"),
        };

        assert_eq!(logged.log_id(), LogId(777));
        assert_eq!(LogId(5).log_id(), LogId(5));
    }
}
