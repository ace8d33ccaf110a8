//! Wire vocabulary for Talkline.
//!
//! This crate defines the "language" the chat client and the command
//! server speak:
//!
//! - **Identifiers** ([`ChannelId`], [`LinkId`], [`LogId`], [`UserId`]):
//!   opaque numeric ids that address channels, links, chat logs and users.
//! - **Models** ([`Chat`], [`Channel`], [`OpenChannel`], [`ChannelTemplate`],
//!   [`ChannelInfo`]): the minimal shapes the command layer reads from.
//! - **Status** ([`StatusCode`], [`CommandResult`]): the protocol result
//!   code every response carries and the typed outcome built from it.
//! - **Commands** ([`Command`] and the request bodies): the command names
//!   and the exact field names each one puts on the wire.
//! - **Data** ([`DataMap`], [`DataResponse`], [`Packet`]): the structured
//!   record a command carries and the response the transport resolves.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how packets are
//!   converted to/from bytes.
//!
//! # Architecture
//!
//! ```text
//! Session (façades) → Protocol (bodies, outcomes) → Transport (request/response)
//! ```
//!
//! Nothing in here performs I/O. The session layer builds bodies from these
//! types, hands them to a transport, and turns the response back into a
//! [`CommandResult`].

mod chat;
mod codec;
mod command;
mod data;
mod error;
mod status;
mod types;

pub use chat::{Chat, ChatInput, ChatLogRef, ChatLogged, ChatType};
pub use codec::{Codec, JsonCodec};
pub use command::{
    ChatInfoBody, ChatWriteBody, Command, CreateChannelBody, CreateMemoBody,
    DeleteChatBody, LeaveBody, NotiReadBody,
};
pub use data::{DataMap, DataResponse, Packet, to_data_map};
pub use error::ProtocolError;
pub use status::{CommandResult, StatusCode};
pub use types::{
    Channel, ChannelId, ChannelInfo, ChannelTemplate, ChannelUser, LinkId,
    LogId, OpenChannel, OpenChannelInfo, UserId,
};
