//! Corrections table with sortable headers.

use leptos::prelude::*;

use crate::api::{TableContent, TableState};
use crate::types::{rows_from_records, space_segments, CorrectionRow, TableRow, TextSegment};

/// Column count, used for full-width message rows.
const COLUMNS: &str = "6";

/// Table body element the external renderer is expected to fill.
pub const EXTERNAL_BODY_ID: &str = "corrections-body";

/// A header cell that requests a reload sorted by `sort_key` when clicked.
///
/// Every click sends the same key; there is no direction toggle.
#[component]
pub fn SortHeader(
    /// Column title.
    #[prop(into)]
    label: String,
    /// Value sent as `sort_by`.
    #[prop(into)]
    sort_key: String,
    on_sort: Callback<String>,
) -> impl IntoView {
    let key = sort_key.clone();
    view! {
        <th class="sortable" data-sort=sort_key on:click=move |_| on_sort.run(key.clone())>
            {label}
            <span class="sort-indicator">"\u{2195}"</span>
        </th>
    }
}

/// Renders text with each space shown as a faint dot.
#[component]
pub fn SpacedText(#[prop(into)] text: String) -> impl IntoView {
    space_segments(&text)
        .into_iter()
        .map(|segment| match segment {
            TextSegment::Text(t) => view! { <span>{t}</span> }.into_any(),
            TextSegment::Space => view! { <span class="space">"\u{00B7}"</span> }.into_any(),
        })
        .collect::<Vec<_>>()
}

#[component]
fn CorrectionRowView(row: CorrectionRow) -> impl IntoView {
    let class = row.status.map(|s| s.row_class()).unwrap_or_default();
    let status = row
        .status
        .map(|s| s.display())
        .unwrap_or_else(|| "UNKNOWN".to_string());
    let id = row.id.map(|id| id.to_string()).unwrap_or_default();
    let edit_url = row.edit_url();
    let hypotheses_title = row.hypotheses_display();
    let hypotheses = if row.hypotheses.is_empty() {
        view! { <span>"\u{2014}"</span> }.into_any()
    } else {
        row.hypotheses
            .iter()
            .enumerate()
            .map(|(i, h)| {
                view! {
                    {(i > 0).then_some(", ")}
                    <SpacedText text=h.clone() />
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };
    let subject = row.subject;
    let subject_title = subject.clone();

    view! {
        <tr class=class>
            <td>{id}</td>
            <td>
                <div class="monospace-cell" title=subject_title>
                    <SpacedText text=subject />
                </div>
            </td>
            <td>{status}</td>
            <td>
                <div class="monospace-cell" title=hypotheses_title>
                    {hypotheses}
                </div>
            </td>
            <td>{row.scope_id}</td>
            <td>
                {edit_url.map(|href| view! { <a href=href class="edit-link">"Edit"</a> })}
            </td>
        </tr>
    }
}

fn message_row(text: &'static str) -> AnyView {
    view! {
        <tr>
            <td colspan=COLUMNS class="table-message">{text}</td>
        </tr>
    }
    .into_any()
}

fn render_rows(content: TableContent) -> AnyView {
    match content {
        TableContent::NotLoaded => message_row("Loading corrections..."),
        TableContent::Absent => message_row("No data"),
        TableContent::Present(records) => {
            let rows = rows_from_records(&records);
            if rows.is_empty() {
                return message_row("No corrections yet. Create them in the admin panel.");
            }
            rows.into_iter()
                .map(|row| match row {
                    TableRow::Correction(c) => view! { <CorrectionRowView row=c /> }.into_any(),
                    TableRow::Raw(json) => view! {
                        <tr class="row-raw">
                            <td colspan=COLUMNS><code>{json}</code></td>
                        </tr>
                    }
                    .into_any(),
                })
                .collect::<Vec<_>>()
                .into_any()
        }
    }
}

/// The corrections table.
///
/// With `external` set the body is left empty for the page's own
/// `updateTable` to fill; headers still trigger loads.
#[component]
pub fn CorrectionsTable(
    state: TableState,
    on_sort: Callback<String>,
    #[prop(optional)] external: bool,
) -> impl IntoView {
    view! {
        <table class="corrections-table">
            <thead>
                <tr>
                    <SortHeader label="ID" sort_key="id" on_sort=on_sort />
                    <SortHeader label="Subject" sort_key="subject" on_sort=on_sort />
                    <SortHeader label="Status" sort_key="status" on_sort=on_sort />
                    <th>"Suggested fixes"</th>
                    <SortHeader label="Scope" sort_key="scope_id" on_sort=on_sort />
                    <th>"Actions"</th>
                </tr>
            </thead>
            {if external {
                view! { <tbody id=EXTERNAL_BODY_ID></tbody> }.into_any()
            } else {
                view! { <tbody>{move || render_rows(state.content())}</tbody> }.into_any()
            }}
        </table>
    }
}
