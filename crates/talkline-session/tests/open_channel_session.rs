//! Integration tests for `TalkOpenChannelSession`.

mod common;

use std::sync::Arc;

use common::RecordingSession;
use serde_json::json;
use talkline_protocol::{ChannelId, LinkId, LogId, OpenChannel, StatusCode};
use talkline_session::{SessionError, TalkOpenChannelSession};

fn open_session() -> (TalkOpenChannelSession<RecordingSession>, Arc<RecordingSession>) {
    let transport = RecordingSession::new();
    let channel = OpenChannel::new(ChannelId(5), LinkId(9));
    (TalkOpenChannelSession::new(channel, Arc::clone(&transport)), transport)
}

#[tokio::test]
async fn test_mark_read_includes_link_id() {
    let (session, transport) = open_session();

    let outcome = session.mark_read(&LogId(100)).await.unwrap();

    assert_eq!(
        transport.last(),
        ("NOTIREAD".to_string(), json!({ "chatId": 5, "li": 9, "watermark": 100 }))
    );
    assert!(outcome.success());
}

#[tokio::test]
async fn test_mark_read_failure_status_is_preserved() {
    let (session, transport) = open_session();
    transport.reply(json!({ "status": -815 }));

    let outcome = session.mark_read(&LogId(100)).await.unwrap();

    assert!(!outcome.success());
    assert_eq!(outcome.status(), StatusCode::OPENCHAT_REJOIN_REQUIRED);
}

#[tokio::test]
async fn test_channel_info_fails_fast_as_not_implemented() {
    let (session, transport) = open_session();

    let result = session.channel_info().await;

    assert!(
        matches!(result, Err(SessionError::NotImplemented(_))),
        "must not return a default outcome"
    );
    assert!(transport.requests().is_empty(), "nothing may be sent");
}

#[tokio::test]
async fn test_channel_accessor_returns_bound_identity() {
    let (session, _) = open_session();
    assert_eq!(session.channel(), &OpenChannel::new(ChannelId(5), LinkId(9)));
}
