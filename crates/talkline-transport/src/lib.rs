//! Command transport for Talkline.
//!
//! Provides the [`CommandSession`] trait: send one named command with a
//! structured body, get back exactly one response. The session layer is
//! written against this trait only, so any transport (or a test double)
//! can sit underneath it.
//!
//! Demultiplexing concurrent responses back to their requests, timeouts,
//! and connection handling all live here, never in the session layer.
//!
//! # Feature Flags
//!
//! - `websocket` (default): [`WebSocketCommandSession`] via `tokio-tungstenite`

mod error;
#[cfg(feature = "websocket")]
mod websocket;

pub use error::TransportError;
#[cfg(feature = "websocket")]
pub use websocket::WebSocketCommandSession;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use talkline_protocol::{DataMap, DataResponse};

/// Issues commands and resolves their responses.
///
/// ## Trait bounds
///
/// - `Send + Sync + 'static` → one transport handle is shared (behind an
///   `Arc`) by every façade of a client, possibly across tasks.
/// - The returned future is `Send` so façade calls can be spawned onto a
///   multi-threaded runtime.
pub trait CommandSession: Send + Sync + 'static {
    /// Sends `method` with `body` and waits for its response.
    ///
    /// Resolves with the response whatever its status is. Only failures
    /// that leave the request without a response (closed connection,
    /// timeout, undecodable frame) are errors.
    fn request(
        &self,
        method: &str,
        body: DataMap,
    ) -> impl Future<Output = Result<DataResponse, TransportError>> + Send;
}

/// A shared handle issues commands on the session it points to.
impl<S: CommandSession> CommandSession for Arc<S> {
    fn request(
        &self,
        method: &str,
        body: DataMap,
    ) -> impl Future<Output = Result<DataResponse, TransportError>> + Send {
        S::request(self, method, body)
    }
}

/// Transport settings.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// How long a request waits for its response before failing with
    /// [`TransportError::Timeout`]. `None` waits indefinitely.
    ///
    /// Default: 30 seconds.
    pub request_timeout: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(30)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Answers every request with `status: 0` and remembers the methods.
    #[derive(Default)]
    struct Recorder {
        methods: Mutex<Vec<String>>,
    }

    impl CommandSession for Recorder {
        async fn request(
            &self,
            method: &str,
            _body: DataMap,
        ) -> Result<DataResponse, TransportError> {
            self.methods.lock().unwrap().push(method.to_string());
            let mut body = DataMap::new();
            body.insert("status".into(), 0.into());
            Ok(DataResponse::from_body(body).unwrap())
        }
    }

    async fn issue_through<S: CommandSession>(session: &S, method: &str) {
        session.request(method, DataMap::new()).await.unwrap();
    }

    #[tokio::test]
    async fn test_arc_session_forwards_to_inner() {
        let inner = Arc::new(Recorder::default());
        let shared = Arc::clone(&inner);

        issue_through(&shared, "WRITE").await;
        issue_through(&Arc::new(shared), "LEAVE").await;

        assert_eq!(*inner.methods.lock().unwrap(), ["WRITE", "LEAVE"]);
    }

    #[test]
    fn test_transport_config_default_timeout() {
        let config = TransportConfig::default();
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_timeout_error_names_method() {
        let err = TransportError::Timeout {
            method: "WRITE".into(),
        };
        assert_eq!(err.to_string(), "WRITE timed out");
    }
}
