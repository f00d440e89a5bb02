use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::loader::{HttpResponse, Transport};
use crate::error::LoadError;

/// `window.fetch` transport. Same-origin GET with a JSON `Accept` header.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, LoadError> {
        let window = web_sys::window().ok_or_else(|| LoadError::Network("No window".into()))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::SameOrigin);

        let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(network_error)?;

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?;
        let response: Response = response.dyn_into().map_err(network_error)?;
        let status = response.status();

        let text = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;

        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

fn network_error(err: JsValue) -> LoadError {
    LoadError::Network(js_error_message(&err))
}

/// Best-effort message from a thrown JS value.
pub(crate) fn js_error_message(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", err))
}
