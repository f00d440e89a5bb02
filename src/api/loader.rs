use serde_json::Value;

use super::query::Params;
use crate::error::LoadError;

/// Path of the corrections list endpoint, relative to the page origin.
pub const DEFAULT_ENDPOINT: &str = "/corrections/api/corrections/";

/// Raw HTTP response as seen by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a GET request. Implemented over `fetch` in the browser.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<HttpResponse, LoadError>;
}

/// Receives the `corrections` field of every successful load.
///
/// `None` means the response body had no `corrections` field.
pub trait TableSink {
    fn update_table(&self, records: Option<Value>) -> Result<(), LoadError>;
}

/// Fetch-and-render cycle for the corrections table.
///
/// Holds no state between calls. Overlapping loads are neither cancelled nor
/// ordered, so the response that resolves last owns the table.
#[derive(Debug, Clone)]
pub struct CorrectionsLoader<T, S> {
    endpoint: String,
    transport: T,
    sink: S,
}

impl<T: Transport, S: TableSink> CorrectionsLoader<T, S> {
    pub fn new(endpoint: impl Into<String>, transport: T, sink: S) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
            sink,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Request `params`, then hand the `corrections` field to the sink.
    ///
    /// The HTTP status is not checked: any JSON body is forwarded. A body
    /// that is not JSON fails with [`LoadError::Decode`] and leaves the
    /// table as it was.
    pub async fn load(&self, params: &Params) -> Result<(), LoadError> {
        let url = params.to_url(&self.endpoint);
        tracing::debug!(%url, "Loading corrections");

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            tracing::warn!(
                status = response.status,
                %url,
                "Corrections endpoint returned a non-success status"
            );
        }

        let body: Value =
            serde_json::from_str(&response.body).map_err(|e| LoadError::Decode {
                status: response.status,
                message: e.to_string(),
            })?;

        let records = extract_corrections(body);
        if records.is_none() {
            tracing::warn!(%url, "Response has no `corrections` field");
        }
        self.sink.update_table(records)
    }
}

/// Take the `corrections` field out of a response body.
///
/// Non-object bodies have no fields, so they yield `None` like a missing key.
pub fn extract_corrections(body: Value) -> Option<Value> {
    match body {
        Value::Object(mut map) => map.remove("corrections"),
        _ => None,
    }
}
