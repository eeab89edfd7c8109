use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use market_data_adapter::transport::{StatusSnafu, Transport, TransportError};

/// One request as the facade issued it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
}

/// Transport double that answers every request with one canned payload and
/// records what was asked of it.
pub struct StaticTransport {
    response: Value,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StaticTransport {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StaticTransport {
    async fn issue(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            query: query.to_vec(),
        });
        Ok(self.response.clone())
    }
}

/// Transport double that fails every request with an upstream status error.
pub struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn issue(
        &self,
        _method: Method,
        path: &str,
        _query: &[(String, String)],
    ) -> Result<Value, TransportError> {
        StatusSnafu {
            path,
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            body: "rate limit exceeded".to_string(),
        }
        .fail()
    }
}
