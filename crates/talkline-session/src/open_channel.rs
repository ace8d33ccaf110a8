//! Command session for an open channel.

use std::sync::Arc;

use talkline_protocol::{
    ChatLogRef, Command, CommandResult, NotiReadBody, OpenChannel,
    OpenChannelInfo,
};
use talkline_transport::CommandSession;

use crate::{SessionError, issue};

/// Operations on one open channel.
///
/// Open channels carry a link id next to the channel id, and the commands
/// here send it along. There is no msg id generator: chats on open
/// channels are not written through this session.
pub struct TalkOpenChannelSession<S> {
    channel: OpenChannel,
    session: Arc<S>,
}

impl<S: CommandSession> TalkOpenChannelSession<S> {
    pub fn new(channel: OpenChannel, session: Arc<S>) -> Self {
        Self { channel, session }
    }

    pub fn channel(&self) -> &OpenChannel {
        &self.channel
    }

    /// Moves the read watermark to `chat` with `NOTIREAD`, tagged with the
    /// channel's link id.
    pub async fn mark_read(
        &self,
        chat: &impl ChatLogRef,
    ) -> Result<CommandResult, SessionError> {
        let body = NotiReadBody {
            chat_id: self.channel.channel_id,
            li: Some(self.channel.link_id),
            watermark: chat.log_id(),
        };

        tracing::trace!(
            channel_id = %self.channel.channel_id,
            link_id = %self.channel.link_id,
            watermark = %body.watermark,
            "marking read"
        );
        let res = issue(&*self.session, Command::NotiRead, &body).await?;
        Ok(CommandResult::from_status(res.status()))
    }

    /// Fetching open channel metadata is not supported yet.
    ///
    /// # Errors
    /// Always [`SessionError::NotImplemented`]. No request is sent, so this
    /// can never be mistaken for a server rejection.
    pub async fn channel_info(
        &self,
    ) -> Result<CommandResult<OpenChannelInfo>, SessionError> {
        Err(SessionError::NotImplemented("open channel info"))
    }
}
