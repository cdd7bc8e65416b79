use crate::transport::{Error, Transport};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

enum Canned {
    Json(Value),
    Status(http::StatusCode),
}

/// A transport serving canned responses keyed by exact request URL, recording
/// every request it sees.
pub(crate) struct MockTransport {
    responses: HashMap<String, Canned>,
    requests: RefCell<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            requests: RefCell::new(vec![]),
        }
    }

    pub fn json(mut self, url: &str, body: Value) -> Self {
        self.responses.insert(url.to_string(), Canned::Json(body));
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(
            url.to_string(),
            Canned::Status(http::StatusCode::from_u16(status).unwrap()),
        );
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for MockTransport {
    fn get_json(&self, url: &str) -> Result<Value, Error> {
        self.requests.borrow_mut().push(url.to_string());

        match self.responses.get(url) {
            Some(Canned::Json(body)) => Ok(body.clone()),
            Some(Canned::Status(status)) => Err(Error::Status { status: *status }),
            None => panic!("Unexpected request: {}", url),
        }
    }
}
