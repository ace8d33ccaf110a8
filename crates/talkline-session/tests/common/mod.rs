//! A recording in-memory `CommandSession` for façade tests.
//!
//! Every request is captured as `(method, body)`. Replies are queued ahead
//! of time; when the queue is empty the session answers `{ "status": 0 }`.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use talkline_protocol::{DataMap, DataResponse};
use talkline_transport::{CommandSession, TransportError};

pub struct RecordingSession {
    requests: Mutex<Vec<(String, Value)>>,
    replies: Mutex<VecDeque<Result<DataResponse, TransportError>>>,
}

impl RecordingSession {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            replies: Mutex::new(VecDeque::new()),
        })
    }

    /// Queues a response body. It must contain a `status` field.
    pub fn reply(&self, body: Value) {
        let Value::Object(map) = body else {
            panic!("reply body must be an object");
        };
        let res = DataResponse::from_body(map).expect("reply needs a status");
        self.replies.lock().unwrap().push_back(Ok(res));
    }

    /// Queues a transport failure.
    pub fn fail(&self, err: TransportError) {
        self.replies.lock().unwrap().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> (String, Value) {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl CommandSession for RecordingSession {
    async fn request(
        &self,
        method: &str,
        body: DataMap,
    ) -> Result<DataResponse, TransportError> {
        self.requests
            .lock()
            .unwrap()
            .push((method.to_string(), Value::Object(body)));

        self.replies.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(DataResponse::new(
                talkline_protocol::StatusCode::SUCCESS,
                DataMap::new(),
            ))
        })
    }
}
