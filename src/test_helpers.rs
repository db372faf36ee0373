//! Mock implementations of the HTTP and time seams for tests.

use crate::error::Error;
use crate::http::{HttpExecutor, HttpRequest, HttpResponse};
use crate::time::TimeOracle;
use crate::types::Timestamp;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use url::Url;

enum Reply {
    Response(StatusCode, HeaderMap, &'static str),
    Transport(&'static str),
}

/// Replays canned responses in order and records every request it receives.
pub struct MockExecutor {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockExecutor {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn respond(self: Arc<Self>, status: StatusCode, body: &'static str) -> Arc<Self> {
        self.replies.lock().unwrap().push_back(Reply::Response(status, HeaderMap::new(), body));
        self
    }

    pub fn respond_json(self: Arc<Self>, body: &'static str) -> Arc<Self> {
        self.respond(StatusCode::OK, body)
    }

    pub fn fail(self: Arc<Self>, message: &'static str) -> Arc<Self> {
        self.replies.lock().unwrap().push_back(Reply::Transport(message));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpExecutor for MockExecutor {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        self.requests.lock().unwrap().push(request);

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Response(status, headers, body)) => Ok(HttpResponse {
                status,
                headers,
                body: Bytes::from_static(body.as_bytes()),
            }),
            Some(Reply::Transport(message)) => {
                Err(Error::ReqwestMiddleware(anyhow::anyhow!(message)))
            },
            None => panic!("MockExecutor has no reply for request"),
        }
    }
}

/// Returns strictly increasing timestamps, counting how many were handed out.
pub struct SequenceOracle {
    next: AtomicI64,
    calls: AtomicUsize,
}

impl SequenceOracle {
    pub fn starting_at(timestamp: Timestamp) -> Arc<Self> {
        Arc::new(Self {
            next: AtomicI64::new(timestamp),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TimeOracle for SequenceOracle {
    async fn now(&self) -> Result<Timestamp, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        Ok(self.next.fetch_add(1, Ordering::SeqCst))
    }
}

/// Always fails as if Steam could not be reached.
pub struct UnreachableOracle;

#[async_trait]
impl TimeOracle for UnreachableOracle {
    async fn now(&self) -> Result<Timestamp, Error> {
        Err(Error::ReqwestMiddleware(anyhow::anyhow!("connection refused")))
    }
}

/// Decodes the query string of a recorded request.
pub fn query_of(request: &HttpRequest) -> HashMap<String, String> {
    Url::parse(&request.url)
        .unwrap()
        .query_pairs()
        .into_owned()
        .collect()
}
