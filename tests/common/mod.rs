use std::cell::RefCell;
use std::rc::Rc;

use corrections_ui::api::{HttpResponse, TableSink, Transport};
use corrections_ui::LoadError;
use futures::channel::oneshot;
use serde_json::Value;

/// Transport whose requests stay pending until the test answers them.
#[derive(Clone, Default)]
pub struct PendingTransport {
    pending: Rc<RefCell<Vec<(String, oneshot::Sender<HttpResponse>)>>>,
    requested: Rc<RefCell<Vec<String>>>,
}

impl PendingTransport {
    /// Every URL requested so far, in request order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Resolve the oldest pending request for `url`.
    pub fn respond(&self, url: &str, status: u16, body: &str) {
        let sender = {
            let mut pending = self.pending.borrow_mut();
            let idx = pending
                .iter()
                .position(|(u, _)| u == url)
                .unwrap_or_else(|| panic!("no pending request for {}", url));
            pending.remove(idx).1
        };
        sender
            .send(HttpResponse {
                status,
                body: body.to_string(),
            })
            .expect("request future was dropped");
    }
}

impl Transport for PendingTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, LoadError> {
        let (tx, rx) = oneshot::channel();
        self.requested.borrow_mut().push(url.to_string());
        self.pending.borrow_mut().push((url.to_string(), tx));
        rx.await
            .map_err(|_| LoadError::Network("request cancelled".to_string()))
    }
}

/// Sink that remembers every update it receives.
#[derive(Clone, Default)]
pub struct RecordingSink {
    calls: Rc<RefCell<Vec<Option<Value>>>>,
}

impl RecordingSink {
    pub fn calls(&self) -> Vec<Option<Value>> {
        self.calls.borrow().clone()
    }
}

impl TableSink for RecordingSink {
    fn update_table(&self, records: Option<Value>) -> Result<(), LoadError> {
        self.calls.borrow_mut().push(records);
        Ok(())
    }
}
