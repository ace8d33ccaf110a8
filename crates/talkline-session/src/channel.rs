//! Command session for a normal channel.

use std::sync::Arc;

use talkline_protocol::{
    Channel, ChannelInfo, Chat, ChatInfoBody, ChatInput, ChatLogRef,
    ChatWriteBody, Command, CommandResult, DataResponse, DeleteChatBody,
    NotiReadBody,
};
use talkline_transport::CommandSession;

use crate::{IdGenerator, SessionConfig, SessionError, issue};

/// Chat operations on one normal channel.
///
/// Bound at construction to one channel, one shared transport handle, and
/// its own private [`IdGenerator`]. The channel never changes for the life
/// of the session.
///
/// ```text
/// send_chat / forward_chat  → draws one msgId each
/// delete_chat / mark_read / channel_info  → draw nothing
/// ```
pub struct TalkChannelSession<S> {
    channel: Channel,
    session: Arc<S>,
    id_gen: IdGenerator,
}

impl<S: CommandSession> TalkChannelSession<S> {
    pub fn new(channel: Channel, session: Arc<S>) -> Self {
        Self::with_config(channel, session, &SessionConfig::default())
    }

    pub fn with_config(
        channel: Channel,
        session: Arc<S>,
        config: &SessionConfig,
    ) -> Self {
        Self {
            channel,
            session,
            id_gen: IdGenerator::starting_at(config.first_msg_id),
        }
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    /// Sends a chat with `WRITE`.
    ///
    /// Accepts plain text (sent as a text chat with no attachment) or a
    /// full [`Chat`]. Returns the raw response: the status is not
    /// interpreted here, and the body carries the server's log entry for
    /// the new chat when it succeeded.
    pub async fn send_chat(
        &self,
        chat: impl Into<ChatInput>,
    ) -> Result<DataResponse, SessionError> {
        let chat = chat.into().into_chat();
        let body = self.write_body(&chat);

        tracing::debug!(
            channel_id = %self.channel.channel_id,
            msg_id = body.msg_id,
            "writing chat"
        );
        issue(&*self.session, Command::Write, &body).await
    }

    /// Forwards a chat with `FORWARD`.
    pub async fn forward_chat(
        &self,
        chat: &Chat,
    ) -> Result<CommandResult, SessionError> {
        let body = self.write_body(chat);

        tracing::debug!(
            channel_id = %self.channel.channel_id,
            msg_id = body.msg_id,
            "forwarding chat"
        );
        let res = issue(&*self.session, Command::Forward, &body).await?;
        Ok(CommandResult::from_status(res.status()))
    }

    /// Deletes a logged chat with `DELETEMSG`.
    pub async fn delete_chat(
        &self,
        chat: &impl ChatLogRef,
    ) -> Result<CommandResult, SessionError> {
        let body = DeleteChatBody {
            chat_id: self.channel.channel_id,
            log_id: chat.log_id(),
        };

        tracing::debug!(
            channel_id = %self.channel.channel_id,
            log_id = %body.log_id,
            "deleting chat"
        );
        let res = issue(&*self.session, Command::DeleteMsg, &body).await?;
        Ok(CommandResult::from_status(res.status()))
    }

    /// Moves the read watermark to `chat` with `NOTIREAD`.
    pub async fn mark_read(
        &self,
        chat: &impl ChatLogRef,
    ) -> Result<CommandResult, SessionError> {
        let body = NotiReadBody {
            chat_id: self.channel.channel_id,
            li: None,
            watermark: chat.log_id(),
        };

        tracing::trace!(
            channel_id = %self.channel.channel_id,
            watermark = %body.watermark,
            "marking read"
        );
        let res = issue(&*self.session, Command::NotiRead, &body).await?;
        Ok(CommandResult::from_status(res.status()))
    }

    /// Fetches channel metadata with `CHATINFO`.
    ///
    /// The result is always present and always carries this session's
    /// channel id. On success it is filled in from the response's
    /// `chatInfo`; on a failure status it is the id alone.
    ///
    /// # Errors
    /// [`SessionError::Protocol`] if a successful response carries a
    /// `chatInfo` that can't be decoded.
    pub async fn channel_info(
        &self,
    ) -> Result<CommandResult<ChannelInfo>, SessionError> {
        let channel_id = self.channel.channel_id;
        let res = issue(
            &*self.session,
            Command::ChatInfo,
            &ChatInfoBody {
                chat_id: channel_id,
            },
        )
        .await?;

        let info = if res.status().is_success() {
            ChannelInfo::from_response(channel_id, &res)?
        } else {
            ChannelInfo::minimal(channel_id)
        };
        Ok(CommandResult::with_result(res.status(), Some(info)))
    }

    /// `WRITE` and `FORWARD` share this body; only the command differs.
    fn write_body(&self, chat: &Chat) -> ChatWriteBody {
        ChatWriteBody::new(self.channel.channel_id, self.id_gen.next(), chat)
    }
}
