//! `TalkClient` builder and channel session factory.
//!
//! A client owns one transport handle. Every façade it hands out shares
//! that handle; each [`TalkChannelSession`] additionally gets its own msg id
//! sequence.

use std::sync::Arc;

use talkline_protocol::{Channel, OpenChannel};
use talkline_session::{
    SessionConfig, TalkChannelManageSession, TalkChannelSession,
    TalkOpenChannelSession,
};
use talkline_transport::{
    CommandSession, TransportConfig, WebSocketCommandSession,
};

use crate::TalkError;

/// Builder for connecting a [`TalkClient`] over WebSocket.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use talkline::prelude::*;
///
/// # async fn run() -> Result<(), TalkError> {
/// let client = TalkClient::builder()
///     .url("wss://talk.example.com/command")
///     .transport_config(TransportConfig {
///         request_timeout: Some(Duration::from_secs(10)),
///     })
///     .connect()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TalkClientBuilder {
    url: String,
    transport_config: TransportConfig,
    session_config: SessionConfig,
}

impl TalkClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: "ws://127.0.0.1:8080".to_string(),
            transport_config: TransportConfig::default(),
            session_config: SessionConfig::default(),
        }
    }

    /// Sets the command endpoint to connect to.
    pub fn url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    /// Sets the transport configuration.
    pub fn transport_config(mut self, config: TransportConfig) -> Self {
        self.transport_config = config;
        self
    }

    /// Sets the configuration applied to every channel session.
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Connects and returns a client bound to the new connection.
    pub async fn connect(
        self,
    ) -> Result<TalkClient<WebSocketCommandSession>, TalkError> {
        tracing::debug!(url = %self.url, "connecting talk client");
        let session =
            WebSocketCommandSession::connect(&self.url, self.transport_config)
                .await?;
        Ok(TalkClient::with_config(session, self.session_config))
    }
}

impl Default for TalkClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Hands out channel façades bound to one shared transport.
pub struct TalkClient<S> {
    session: Arc<S>,
    session_config: SessionConfig,
}

impl TalkClient<WebSocketCommandSession> {
    /// Creates a new builder.
    pub fn builder() -> TalkClientBuilder {
        TalkClientBuilder::new()
    }
}

impl<S: CommandSession> TalkClient<S> {
    /// Wraps any transport, e.g. a custom one or a test double.
    pub fn from_session(session: S) -> Self {
        Self::with_config(session, SessionConfig::default())
    }

    pub fn with_config(session: S, session_config: SessionConfig) -> Self {
        Self {
            session: Arc::new(session),
            session_config,
        }
    }

    /// The shared transport handle.
    pub fn session(&self) -> &Arc<S> {
        &self.session
    }

    /// A session for a normal channel, with a fresh msg id sequence.
    ///
    /// Keep the returned session for as long as you use the channel:
    /// calling this again for the same channel starts a new sequence.
    pub fn channel(&self, channel: Channel) -> TalkChannelSession<S> {
        TalkChannelSession::with_config(
            channel,
            Arc::clone(&self.session),
            &self.session_config,
        )
    }

    /// A session for an open channel.
    pub fn open_channel(&self, channel: OpenChannel) -> TalkOpenChannelSession<S> {
        TalkOpenChannelSession::new(channel, Arc::clone(&self.session))
    }

    /// The channel lifecycle session.
    pub fn manage(&self) -> TalkChannelManageSession<S> {
        TalkChannelManageSession::new(Arc::clone(&self.session))
    }
}
