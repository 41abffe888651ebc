use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::{BoxError, HttpResponse, HttpTransport};
use crate::domain::BaseUrl;

pub(crate) fn base_url() -> BaseUrl {
    BaseUrl::new("https://mrix5api.saas.mrisoftware.com/mriapiservices/api.asp").unwrap()
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedRequest {
    pub(crate) method: &'static str,
    pub(crate) url: String,
    pub(crate) body: Option<Value>,
}

/// In-memory transport returning one canned response and recording every request.
#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    requests: Vec<RecordedRequest>,
    response: Result<HttpResponse, String>,
}

impl FakeTransport {
    pub(crate) fn new(status: u16, body: impl Into<String>) -> Self {
        Self::with_response(Ok(HttpResponse {
            status,
            body: body.into(),
        }))
    }

    pub(crate) fn failing(message: impl Into<String>) -> Self {
        Self::with_response(Err(message.into()))
    }

    fn with_response(response: Result<HttpResponse, String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                requests: Vec::new(),
                response,
            })),
        }
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub(crate) fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request was sent")
    }

    fn record(
        &self,
        method: &'static str,
        url: &str,
        body: Option<Value>,
    ) -> Result<HttpResponse, BoxError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(RecordedRequest {
            method,
            url: url.to_owned(),
            body,
        });
        state.response.clone().map_err(BoxError::from)
    }
}

impl HttpTransport for FakeTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, BoxError> {
        self.record("GET", url, None)
    }

    fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, BoxError> {
        self.record("POST", url, Some(body.clone()))
    }
}
