#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_sinkhole_application::ports::UpstreamForwarder;
use ferrous_sinkhole_domain::DomainError;
use std::sync::Mutex;

/// Records forwarded queries and answers with a canned reply or error.
pub struct MockUpstreamForwarder {
    reply: Mutex<Option<Vec<u8>>>,
    error: Mutex<Option<DomainError>>,
    forwarded: Mutex<Vec<Vec<u8>>>,
}

impl MockUpstreamForwarder {
    pub fn new() -> Self {
        Self {
            reply: Mutex::new(None),
            error: Mutex::new(None),
            forwarded: Mutex::new(Vec::new()),
        }
    }

    /// Reply with `reply` to every query.
    pub fn with_reply(reply: Vec<u8>) -> Self {
        let mock = Self::new();
        *mock.reply.lock().unwrap() = Some(reply);
        mock
    }

    pub fn with_error(error: DomainError) -> Self {
        let mock = Self::new();
        *mock.error.lock().unwrap() = Some(error);
        mock
    }

    pub fn forwarded(&self) -> Vec<Vec<u8>> {
        self.forwarded.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.forwarded.lock().unwrap().len()
    }
}

impl Default for MockUpstreamForwarder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamForwarder for MockUpstreamForwarder {
    async fn forward(&self, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.forwarded.lock().unwrap().push(query.to_vec());

        if let Some(error) = self.error.lock().unwrap().clone() {
            return Err(error);
        }

        // Without a canned reply, echo the query back with QR set.
        let reply = self.reply.lock().unwrap().clone().unwrap_or_else(|| {
            let mut echo = query.to_vec();
            if echo.len() > 2 {
                echo[2] |= 0x80;
            }
            echo
        });
        Ok(reply)
    }

    fn upstream_name(&self) -> String {
        "mock-upstream".to_string()
    }
}
