//! Transport seam between the API client and the host's outbound HTTP.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use futures::channel::oneshot;

/// Raw response as returned by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status. Recorded, never inspected.
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Transport failure (host unreachable, connection reset, ...).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Issues a plain GET and returns whatever came back.
///
/// The screens are single-threaded, so the futures are not required to be `Send`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

/// Outbound HTTP through the Spin host.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinTransport;

#[async_trait(?Send)]
impl HttpTransport for SpinTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        use spin_sdk::http::{Method, Request, Response};

        let req = Request::builder().method(Method::Get).uri(url).build();
        let resp: Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = *resp.status();
        Ok(RawResponse::new(status, resp.into_body()))
    }
}

enum MockReply {
    Ready(Result<RawResponse, TransportError>),
    Gated(oneshot::Receiver<Result<RawResponse, TransportError>>),
}

/// In-memory transport for tests and local development.
///
/// Replies are queued per URL. A gated reply stays pending until the test
/// releases it, which lets a test choose the order responses arrive in.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<String, VecDeque<MockReply>>>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `url`.
    pub fn respond(&self, url: &str, status: u16, body: impl Into<Vec<u8>>) -> &Self {
        self.push(url, MockReply::Ready(Ok(RawResponse::new(status, body))));
        self
    }

    /// Queue a transport failure for `url`.
    pub fn fail(&self, url: &str, message: &str) -> &Self {
        self.push(url, MockReply::Ready(Err(TransportError(message.to_string()))));
        self
    }

    /// Queue a reply for `url` that is released through the returned sender.
    ///
    /// Dropping the sender without sending leaves the request pending forever.
    pub fn gate(&self, url: &str) -> oneshot::Sender<Result<RawResponse, TransportError>> {
        let (tx, rx) = oneshot::channel();
        self.push(url, MockReply::Gated(rx));
        tx
    }

    /// URLs requested so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn push(&self, url: &str, reply: MockReply) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.entry(url.to_string()).or_default().push_back(reply);
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        let reply = self
            .replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.get_mut(url).and_then(VecDeque::pop_front));

        match reply {
            Some(MockReply::Ready(result)) => result,
            Some(MockReply::Gated(rx)) => match rx.await {
                Ok(result) => result,
                Err(_) => futures::future::pending().await,
            },
            None => Err(TransportError(format!("no route to {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::FutureExt;

    #[test]
    fn test_mock_replies_in_queue_order() {
        let mock = MockTransport::new();
        mock.respond("http://x/a", 200, "one").respond("http://x/a", 404, "two");

        let first = block_on(mock.get("http://x/a")).unwrap();
        let second = block_on(mock.get("http://x/a")).unwrap();
        assert_eq!(first.body, b"one");
        assert_eq!(second.status, 404);
        assert_eq!(mock.requests(), ["http://x/a", "http://x/a"]);
    }

    #[test]
    fn test_mock_unknown_url_fails() {
        let mock = MockTransport::new();
        let err = block_on(mock.get("http://x/missing")).unwrap_err();
        assert!(err.0.contains("no route"));
    }

    #[test]
    fn test_mock_failure() {
        let mock = MockTransport::new();
        mock.fail("http://x/a", "connection refused");
        assert_eq!(
            block_on(mock.get("http://x/a")),
            Err(TransportError("connection refused".to_string()))
        );
    }

    #[test]
    fn test_gated_reply_waits_for_release() {
        let mock = MockTransport::new();
        let gate = mock.gate("http://x/a");

        let mut pending = mock.get("http://x/a");
        assert!(pending.as_mut().now_or_never().is_none());

        gate.send(Ok(RawResponse::new(200, "late"))).unwrap();
        let resp = block_on(pending).unwrap();
        assert_eq!(resp.body, b"late");
    }
}
