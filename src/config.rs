//! Client configuration, read from data attributes on `<html>`.
//!
//! ```html
//! <html data-corrections-endpoint="/corrections/api/corrections/"
//!       data-table-renderer="external"
//!       data-log-filter="corrections_ui=debug">
//! ```

use crate::api::DEFAULT_ENDPOINT;

pub const ENDPOINT_ATTR: &str = "data-corrections-endpoint";
pub const RENDERER_ATTR: &str = "data-table-renderer";
pub const LOG_FILTER_ATTR: &str = "data-log-filter";

/// Which table sink receives loaded records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RendererKind {
    /// Render rows with the crate's own table component.
    #[default]
    Builtin,
    /// Call the page's global `updateTable(records)`.
    External,
}

impl RendererKind {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "builtin" => Some(RendererKind::Builtin),
            "external" => Some(RendererKind::External),
            _ => None,
        }
    }
}

/// An attribute value that was ignored while reading the configuration.
///
/// Logged by the caller once the subscriber is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub attribute: &'static str,
    pub value: String,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ignoring unknown value {:?} for {}", self.value, self.attribute)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub renderer: RendererKind,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            renderer: RendererKind::Builtin,
            log_filter: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Build from an attribute lookup. Blank or unknown values keep defaults;
    /// unknown ones are also returned as warnings.
    pub fn from_attributes(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, Vec<ConfigWarning>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(endpoint) = non_blank(ENDPOINT_ATTR) {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(renderer) = non_blank(RENDERER_ATTR) {
            match RendererKind::parse(&renderer) {
                Some(kind) => config.renderer = kind,
                None => warnings.push(ConfigWarning {
                    attribute: RENDERER_ATTR,
                    value: renderer,
                }),
            }
        }
        if let Some(filter) = non_blank(LOG_FILTER_ATTR) {
            config.log_filter = filter;
        }
        (config, warnings)
    }

    /// Read the current document. Falls back to defaults outside a browser.
    pub fn from_document() -> (Self, Vec<ConfigWarning>) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        match root {
            Some(el) => Self::from_attributes(|name| el.get_attribute(name)),
            None => (Self::default(), Vec::new()),
        }
    }
}
