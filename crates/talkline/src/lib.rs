//! # Talkline
//!
//! Channel command client for the Talk chat service.
//!
//! Talkline turns channel operations (send, forward and delete chats, mark
//! read, fetch channel info, create and leave channels) into command
//! round trips on one shared transport, and turns the status codes that
//! come back into typed outcomes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use talkline::prelude::*;
//!
//! # async fn run() -> Result<(), TalkError> {
//! talkline::init_logging("info")?;
//!
//! let client = TalkClient::builder()
//!     .url("wss://talk.example.com/command")
//!     .connect()
//!     .await?;
//!
//! let channel = client.channel(Channel::new(ChannelId(42)));
//! let res = channel.send_chat("hello").await?;
//! if !res.status().is_success() {
//!     tracing::warn!(status = %res.status(), "send rejected");
//! }
//!
//! let outcome = client
//!     .manage()
//!     .leave_channel(channel.channel(), false)
//!     .await?;
//! println!("left at token {:?}", outcome.result());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod logging;

pub use client::{TalkClient, TalkClientBuilder};
pub use error::TalkError;
pub use logging::init_logging;

/// Everything a typical caller needs, in one import.
pub mod prelude {
    pub use crate::{TalkClient, TalkClientBuilder, TalkError};
    pub use talkline_protocol::{
        Channel, ChannelId, ChannelInfo, ChannelTemplate, ChannelUser, Chat,
        ChatInput, ChatLogRef, ChatLogged, ChatType, CommandResult,
        DataResponse, LinkId, LogId, OpenChannel, StatusCode, UserId,
    };
    pub use talkline_session::{
        SessionConfig, SessionError, TalkChannelManageSession,
        TalkChannelSession, TalkOpenChannelSession,
    };
    pub use talkline_transport::{
        CommandSession, TransportConfig, TransportError,
        WebSocketCommandSession,
    };
}
