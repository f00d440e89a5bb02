//! Display model for correction records.
//!
//! The loader treats records as opaque JSON; only the built-in table looks
//! inside them, and anything it cannot read is still shown raw.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Review status of a correction, as the server encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum CorrectionStatus {
    Pending,
    Approved,
    Invalid,
}

impl CorrectionStatus {
    pub const ALL: [CorrectionStatus; 3] = [
        CorrectionStatus::Pending,
        CorrectionStatus::Approved,
        CorrectionStatus::Invalid,
    ];

    pub fn code(self) -> i64 {
        match self {
            CorrectionStatus::Pending => 0,
            CorrectionStatus::Approved => 1,
            CorrectionStatus::Invalid => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CorrectionStatus::Pending => "PENDING",
            CorrectionStatus::Approved => "APPROVED",
            CorrectionStatus::Invalid => "INVALID",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CorrectionStatus::Pending => "Awaiting review",
            CorrectionStatus::Approved => "Confirmed",
            CorrectionStatus::Invalid => "Annulled",
        }
    }

    /// Label with its description, e.g. `PENDING - Awaiting review`.
    pub fn display(self) -> String {
        format!("{} - {}", self.label(), self.description())
    }

    /// Row class carrying the status background colour.
    pub fn row_class(self) -> &'static str {
        match self {
            CorrectionStatus::Pending => "row-pending",
            CorrectionStatus::Approved => "row-approved",
            CorrectionStatus::Invalid => "row-invalid",
        }
    }
}

impl TryFrom<i64> for CorrectionStatus {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        CorrectionStatus::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or_else(|| format!("unknown correction status {}", code))
    }
}

impl From<CorrectionStatus> for i64 {
    fn from(status: CorrectionStatus) -> Self {
        status.code()
    }
}

/// The fields of a correction record the table knows how to show.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CorrectionRow {
    pub id: Option<i64>,
    pub subject: String,
    #[serde(deserialize_with = "lenient_status")]
    pub status: Option<CorrectionStatus>,
    pub hypotheses: Vec<String>,
    pub scope_id: i64,
}

/// Unknown status codes render without colour rather than failing the row.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<CorrectionStatus>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.and_then(|code| CorrectionStatus::try_from(code).ok()))
}

impl CorrectionRow {
    /// Hypotheses joined for display, or a dash when there are none.
    pub fn hypotheses_display(&self) -> String {
        if self.hypotheses.is_empty() {
            "\u{2014}".to_string()
        } else {
            self.hypotheses.join(", ")
        }
    }

    pub fn edit_url(&self) -> Option<String> {
        self.id
            .map(|id| format!("/admin/corrections/correction/{}/change/", id))
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Correction(CorrectionRow),
    /// A record that is not a readable correction, shown as raw JSON.
    Raw(String),
}

/// Turn the `corrections` payload into rows.
///
/// A non-array payload becomes a single raw row so nothing the server sent
/// is hidden.
pub fn rows_from_records(records: &Value) -> Vec<TableRow> {
    match records {
        Value::Array(items) => items.iter().map(row_from_record).collect(),
        Value::Null => vec![],
        other => vec![TableRow::Raw(other.to_string())],
    }
}

fn row_from_record(record: &Value) -> TableRow {
    if !record.is_object() {
        return TableRow::Raw(record.to_string());
    }
    match serde_json::from_value::<CorrectionRow>(record.clone()) {
        Ok(row) => TableRow::Correction(row),
        Err(e) => {
            tracing::debug!(error = %e, "Record is not a readable correction");
            TableRow::Raw(record.to_string())
        }
    }
}

/// A piece of text with spaces made visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment {
    Text(String),
    Space,
}

/// Split `text` so every space can be rendered as a marker.
pub fn space_segments(text: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if ch == ' ' {
            if !current.is_empty() {
                segments.push(TextSegment::Text(std::mem::take(&mut current)));
            }
            segments.push(TextSegment::Space);
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        segments.push(TextSegment::Text(current));
    }
    segments
}
