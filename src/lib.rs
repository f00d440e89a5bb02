//! Browser client for the schedule corrections table.
//!
//! Header clicks and the status filter trigger loads from the corrections
//! endpoint; each response replaces the table rows.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod types;

pub use error::LoadError;
