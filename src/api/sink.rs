//! Table sinks: where loaded records end up.

use leptos::prelude::*;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};

use super::fetch::js_error_message;
use super::loader::TableSink;
use crate::error::LoadError;

/// What the built-in table currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum TableContent {
    /// No load has completed yet.
    NotLoaded,
    /// The last response had no `corrections` field.
    Absent,
    /// The `corrections` field of the last response, as received.
    Present(Value),
}

/// Reactive state behind the built-in corrections table.
#[derive(Debug, Clone, Copy)]
pub struct TableState {
    content: RwSignal<TableContent>,
    in_flight: RwSignal<usize>,
}

impl TableState {
    pub fn new() -> Self {
        Self {
            content: RwSignal::new(TableContent::NotLoaded),
            in_flight: RwSignal::new(0),
        }
    }

    pub fn content(&self) -> TableContent {
        self.content.get()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.get() > 0
    }

    /// Mark a load as started. Pair with [`TableState::finish_load`].
    pub fn start_load(&self) {
        self.in_flight.update(|n| *n += 1);
    }

    pub fn finish_load(&self) {
        self.in_flight.update(|n| *n = n.saturating_sub(1));
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}

impl TableSink for TableState {
    fn update_table(&self, records: Option<Value>) -> Result<(), LoadError> {
        self.content.set(match records {
            Some(value) => TableContent::Present(value),
            None => TableContent::Absent,
        });
        Ok(())
    }
}

/// Hands records to a page-provided global `updateTable(records)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalUpdateTable;

impl TableSink for ExternalUpdateTable {
    fn update_table(&self, records: Option<Value>) -> Result<(), LoadError> {
        let window = web_sys::window().ok_or_else(|| LoadError::Render("No window".into()))?;
        let func = js_sys::Reflect::get(&window, &JsValue::from_str("updateTable"))
            .map_err(|e| LoadError::Render(js_error_message(&e)))?;
        let func: js_sys::Function = func
            .dyn_into()
            .map_err(|_| LoadError::Render("window.updateTable is not a function".into()))?;

        let arg = match records {
            Some(value) => value
                .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
                .map_err(|e| LoadError::Render(e.to_string()))?,
            None => JsValue::UNDEFINED,
        };

        func.call1(&JsValue::NULL, &arg)
            .map_err(|e| LoadError::Render(js_error_message(&e)))?;
        Ok(())
    }
}

/// The sink selected by configuration.
#[derive(Debug, Clone, Copy)]
pub enum Renderer {
    Builtin(TableState),
    External(ExternalUpdateTable),
}

impl TableSink for Renderer {
    fn update_table(&self, records: Option<Value>) -> Result<(), LoadError> {
        match self {
            Renderer::Builtin(state) => state.update_table(records),
            Renderer::External(external) => external.update_table(records),
        }
    }
}
