//! Channel lifecycle commands: create and leave.

use std::sync::Arc;

use talkline_protocol::{
    Channel, ChannelTemplate, Command, CommandResult, CreateChannelBody,
    CreateMemoBody, DataResponse, LeaveBody,
};
use talkline_transport::CommandSession;

use crate::{SessionError, issue};

/// Creates and leaves channels.
///
/// Bound to the transport only. Channels are passed per call because these
/// commands start or end membership rather than act inside a channel.
pub struct TalkChannelManageSession<S> {
    session: Arc<S>,
}

impl<S: CommandSession> TalkChannelManageSession<S> {
    pub fn new(session: Arc<S>) -> Self {
        Self { session }
    }

    /// Creates a channel from `template` with `CREATE`.
    ///
    /// Returns the raw response. A successful creation carries the new
    /// channel's id and info in fields this layer does not normalize.
    pub async fn create_channel(
        &self,
        template: &ChannelTemplate,
    ) -> Result<DataResponse, SessionError> {
        let body = CreateChannelBody::from_template(template);

        tracing::debug!(members = body.member_ids.len(), "creating channel");
        issue(&*self.session, Command::Create, &body).await
    }

    /// Creates the user's self-memo channel with `CREATE`.
    ///
    /// Returns the raw response, like [`create_channel`](Self::create_channel).
    pub async fn create_memo_channel(&self) -> Result<DataResponse, SessionError> {
        tracing::debug!("creating memo channel");
        issue(&*self.session, Command::Create, &CreateMemoBody::default()).await
    }

    /// Leaves `channel` with `LEAVE`.
    ///
    /// `block` also blocks the other party; pass `false` for a plain leave.
    /// The result is the server's `lastTokenId`, marking where the user's
    /// history in the channel ends (`None` when the response has none, and
    /// always `None` on a failure status).
    ///
    /// There is no check that the channel was not already left: the status
    /// the server returns for that is passed through unchanged.
    ///
    /// # Errors
    /// [`SessionError::Protocol`] if a successful response carries a
    /// `lastTokenId` that is not an integer.
    pub async fn leave_channel(
        &self,
        channel: &Channel,
        block: bool,
    ) -> Result<CommandResult<i64>, SessionError> {
        let body = LeaveBody {
            chat_id: channel.channel_id,
            block,
        };

        tracing::debug!(channel_id = %channel.channel_id, block, "leaving channel");
        let res = issue(&*self.session, Command::Leave, &body).await?;
        let last_token_id = if res.status().is_success() {
            res.get::<i64>("lastTokenId")?
        } else {
            None
        };
        Ok(CommandResult::with_result(res.status(), last_token_id))
    }
}
