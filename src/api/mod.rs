//! Loading corrections from the server into the table.

pub mod fetch;
pub mod loader;
pub mod query;
pub mod sink;

pub use fetch::FetchTransport;
pub use loader::{CorrectionsLoader, HttpResponse, TableSink, Transport, DEFAULT_ENDPOINT};
pub use query::{sort_params, status_params, ParamValue, Params};
pub use sink::{ExternalUpdateTable, Renderer, TableContent, TableState};

/// Loader wired to the browser: `fetch` in, configured renderer out.
pub type PageLoader = CorrectionsLoader<FetchTransport, Renderer>;
