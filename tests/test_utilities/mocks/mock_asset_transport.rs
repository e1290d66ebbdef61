use async_trait::async_trait;
use ledger_license_export::prelude::*;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock AssetTransport for testing
///
/// Answers each call with the next scripted response. A transport built
/// with `yielding()` gives up the task once before answering, so a test can
/// interleave another view operation while the request is in flight.
#[derive(Clone)]
pub struct MockAssetTransport {
    responses: Arc<Mutex<VecDeque<std::result::Result<String, String>>>>,
    calls: Arc<AtomicUsize>,
    yield_first: bool,
}

#[allow(dead_code)]
impl MockAssetTransport {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(AtomicUsize::new(0)),
            yield_first: false,
        }
    }

    pub fn with_body(self, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(body.to_string()));
        self
    }

    pub fn with_failure(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    pub fn yielding(mut self) -> Self {
        self.yield_first = true;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetTransport for MockAssetTransport {
    async fn get(&self, endpoint: &QueryEndpoint) -> std::result::Result<String, AssetError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.yield_first {
            tokio::task::yield_now().await;
        }

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(Ok(body)) => Ok(body),
            Some(Err(message)) => Err(AssetError::Transport {
                endpoint: endpoint.url(),
                message,
            }),
            None => Err(AssetError::Transport {
                endpoint: endpoint.url(),
                message: "no scripted response left".to_string(),
            }),
        }
    }
}
