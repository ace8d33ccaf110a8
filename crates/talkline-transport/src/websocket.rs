//! WebSocket command transport using `tokio-tungstenite`.
//!
//! Every request is stamped with a fresh packet id and registered in a
//! pending table before it is sent. A background reader task decodes each
//! inbound [`Packet`] and completes the pending request with the same id,
//! so any number of requests can be in flight on one connection.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use talkline_protocol::{Codec, DataMap, DataResponse, JsonCodec, Packet};
use tokio::sync::{Mutex, oneshot};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;

use crate::{CommandSession, TransportConfig, TransportError};

type WsStream = tokio_tungstenite::WebSocketStream<
    tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
>;

type Reply = Result<DataResponse, TransportError>;

/// Requests waiting for their response, keyed by packet id.
///
/// `closed` is set by the reader, under the same lock, before it gives up
/// on the waiters, so nothing can register after the last drain.
#[derive(Default)]
struct PendingTable {
    waiting: HashMap<u32, oneshot::Sender<Reply>>,
    closed: bool,
}

type PendingMap = Arc<Mutex<PendingTable>>;

/// A [`CommandSession`] over one client WebSocket connection.
pub struct WebSocketCommandSession<C: Codec = JsonCodec> {
    sink: Mutex<SplitSink<WsStream, Message>>,
    pending: PendingMap,
    next_packet_id: AtomicU32,
    config: TransportConfig,
    codec: C,
    reader: JoinHandle<()>,
}

impl WebSocketCommandSession<JsonCodec> {
    /// Connects to `url` and frames packets as JSON.
    pub async fn connect(
        url: &str,
        config: TransportConfig,
    ) -> Result<Self, TransportError> {
        Self::connect_with_codec(url, config, JsonCodec).await
    }
}

impl<C: Codec + Clone> WebSocketCommandSession<C> {
    /// Connects to `url` and frames packets with `codec`.
    pub async fn connect_with_codec(
        url: &str,
        config: TransportConfig,
        codec: C,
    ) -> Result<Self, TransportError> {
        let (ws, _) = tokio_tungstenite::connect_async(url).await.map_err(|e| {
            TransportError::ConnectFailed(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                e,
            ))
        })?;
        tracing::info!(url, "command session connected");

        let (sink, stream) = ws.split();
        let pending: PendingMap = Arc::new(Mutex::new(PendingTable::default()));
        let reader = tokio::spawn(read_loop(
            stream,
            Arc::clone(&pending),
            codec.clone(),
        ));

        Ok(Self {
            sink: Mutex::new(sink),
            pending,
            next_packet_id: AtomicU32::new(1),
            config,
            codec,
            reader,
        })
    }
}

impl<C: Codec> WebSocketCommandSession<C> {
    /// Number of requests still waiting for a response.
    pub async fn in_flight(&self) -> usize {
        self.pending.lock().await.waiting.len()
    }

    /// Sends a close frame. Requests still in flight fail with
    /// [`TransportError::ConnectionClosed`] once the server acknowledges.
    pub async fn close(&self) -> Result<(), TransportError> {
        self.sink.lock().await.close().await.map_err(|e| {
            TransportError::SendFailed(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                e,
            ))
        })
    }

    async fn send(&self, data: Vec<u8>) -> Result<(), TransportError> {
        self.sink
            .lock()
            .await
            .send(Message::Binary(data.into()))
            .await
            .map_err(|e| {
                TransportError::SendFailed(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    e,
                ))
            })
    }
}

impl<C: Codec> CommandSession for WebSocketCommandSession<C> {
    async fn request(
        &self,
        method: &str,
        body: DataMap,
    ) -> Result<DataResponse, TransportError> {
        let packet_id = self.next_packet_id.fetch_add(1, Ordering::Relaxed);
        let packet = Packet {
            packet_id,
            method: method.to_string(),
            body,
        };
        let data = self.codec.encode(&packet).map_err(TransportError::Encode)?;

        let (tx, rx) = oneshot::channel();
        {
            let mut pending = self.pending.lock().await;
            if pending.closed {
                return Err(TransportError::ConnectionClosed(
                    "reader stopped".into(),
                ));
            }
            pending.waiting.insert(packet_id, tx);
        }

        tracing::trace!(packet_id, method, "sending command");
        if let Err(e) = self.send(data).await {
            self.pending.lock().await.waiting.remove(&packet_id);
            return Err(e);
        }

        let reply = match self.config.request_timeout {
            Some(limit) => match tokio::time::timeout(limit, rx).await {
                Ok(reply) => reply,
                Err(_) => {
                    self.pending.lock().await.waiting.remove(&packet_id);
                    tracing::debug!(packet_id, method, "command timed out");
                    return Err(TransportError::Timeout {
                        method: method.to_string(),
                    });
                }
            },
            None => rx.await,
        };

        reply.map_err(|_| {
            TransportError::ConnectionClosed(format!("no response to {method}"))
        })?
    }
}

impl<C: Codec> Drop for WebSocketCommandSession<C> {
    fn drop(&mut self) {
        self.reader.abort();
    }
}

/// Completes pending requests from inbound packets until the stream ends.
///
/// On exit every request still waiting fails: with
/// [`TransportError::ReceiveFailed`] after a read error, otherwise with
/// [`TransportError::ConnectionClosed`] when its sender is dropped.
async fn read_loop<C: Codec>(
    mut stream: SplitStream<WsStream>,
    pending: PendingMap,
    codec: C,
) {
    let mut read_error = None;
    while let Some(msg) = stream.next().await {
        let data = match msg {
            Ok(Message::Binary(data)) => data.to_vec(),
            Ok(Message::Text(text)) => text.as_bytes().to_vec(),
            Ok(Message::Close(_)) => break,
            Ok(_) => continue, // skip ping/pong/frame
            Err(e) => {
                tracing::warn!(error = %e, "command session read failed");
                read_error = Some(e.to_string());
                break;
            }
        };

        let packet: Packet = match codec.decode(&data) {
            Ok(packet) => packet,
            Err(e) => {
                tracing::debug!(error = %e, "failed to decode packet");
                continue;
            }
        };

        let Some(tx) = pending.lock().await.waiting.remove(&packet.packet_id)
        else {
            tracing::debug!(
                packet_id = packet.packet_id,
                method = %packet.method,
                "dropping unsolicited packet"
            );
            continue;
        };

        let reply = DataResponse::from_body(packet.body)
            .map_err(TransportError::MalformedResponse);
        // The requester may have timed out and gone away.
        let _ = tx.send(reply);
    }

    let mut pending = pending.lock().await;
    pending.closed = true;
    if !pending.waiting.is_empty() {
        tracing::debug!(count = pending.waiting.len(), "failing pending commands");
    }
    for (_, tx) in pending.waiting.drain() {
        if let Some(reason) = &read_error {
            let _ = tx.send(Err(TransportError::ReceiveFailed(
                std::io::Error::other(reason.clone()),
            )));
        }
    }
}
