//! Request parameters for the corrections endpoint.
//!
//! Lists are encoded as repeated keys (`status=0&status=2`), which is what
//! Django's `QueryDict.getlist` reads back. An empty list emits nothing.

use url::form_urlencoded;

/// Query key carrying the requested sort column.
pub const SORT_BY: &str = "sort_by";
/// Query key carrying the selected status codes.
pub const STATUS: &str = "status";

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::Many(values)
    }
}

/// Ordered key/value parameters for one load operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an earlier value in place.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            match value {
                ParamValue::Single(v) => {
                    serializer.append_pair(key, v);
                }
                ParamValue::Many(values) => {
                    for v in values {
                        serializer.append_pair(key, v);
                    }
                }
            }
        }
        serializer.finish()
    }

    /// `endpoint` with the encoded query appended, if there is one.
    pub fn to_url(&self, endpoint: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            endpoint.to_string()
        } else {
            format!("{}?{}", endpoint, query)
        }
    }
}

/// Parameters for a header click: the same key on every click.
pub fn sort_params(key: &str) -> Params {
    Params::new().set(SORT_BY, key)
}

/// Parameters for the filter button: every selected status, possibly none.
pub fn status_params(selected: Vec<String>) -> Params {
    Params::new().set(STATUS, selected)
}
