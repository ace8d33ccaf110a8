//! Channel command sessions for Talkline.
//!
//! This crate turns channel operations into commands on a
//! [`CommandSession`] and turns the responses back into typed outcomes:
//!
//! 1. **Normal channels**: [`TalkChannelSession`]: write, forward, delete,
//!    mark read, fetch info. Owns the channel's [`IdGenerator`].
//! 2. **Open channels**: [`TalkOpenChannelSession`]: mark read with the
//!    link id attached.
//! 3. **Channel lifecycle**: [`TalkChannelManageSession`]: create and
//!    leave channels. Not tied to any one channel.
//!
//! # How it fits in the stack
//!
//! ```text
//! Caller (above)  ← gets DataResponse or CommandResult back
//!     ↕
//! Session Layer (this crate)  ← builds bodies, draws msg ids, reads status
//!     ↕
//! Transport (below)  ← CommandSession: one request, one response
//! ```
//!
//! # Two return shapes
//!
//! `send_chat`, `create_channel` and `create_memo_channel` return the raw
//! [`DataResponse`](talkline_protocol::DataResponse): the caller reads the
//! status and any command-specific fields itself. Every other operation
//! returns a [`CommandResult`](talkline_protocol::CommandResult) whose
//! `success` is derived from the status. The split is deliberate and kept
//! as-is.
//!
//! No operation retries, queues, or reorders. Each call is exactly one
//! round trip.

mod channel;
mod config;
mod error;
mod id_gen;
mod manage;
mod open_channel;

pub use channel::TalkChannelSession;
pub use config::SessionConfig;
pub use error::SessionError;
pub use id_gen::IdGenerator;
pub use manage::TalkChannelManageSession;
pub use open_channel::TalkOpenChannelSession;

use serde::Serialize;
use talkline_protocol::{Command, DataResponse, to_data_map};
use talkline_transport::CommandSession;

/// Serializes `body` and issues it as `command`.
///
/// Failure statuses are logged and returned like any other response.
pub(crate) async fn issue<S, B>(
    session: &S,
    command: Command,
    body: &B,
) -> Result<DataResponse, SessionError>
where
    S: CommandSession,
    B: Serialize + Sync,
{
    let body = to_data_map(body)?;
    let res = session.request(command.as_str(), body).await?;

    if !res.status().is_success() {
        tracing::debug!(%command, status = %res.status(), "command returned failure status");
    }
    Ok(res)
}
