use leptos::html::Select;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

use crate::types::CorrectionStatus;

/// Values of every selected option, in document order.
pub fn selected_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|opt| opt.value())
        .collect()
}

/// Status multi-select (`#status-filter`) and its apply button
/// (`#apply-filters`).
///
/// The selection is read when the button is clicked, not on change. An empty
/// selection is passed on as an empty list.
#[component]
pub fn StatusFilter(on_apply: Callback<Vec<String>>) -> impl IntoView {
    let select_ref = NodeRef::<Select>::new();

    let apply = move |_: leptos::ev::MouseEvent| {
        let selected = select_ref
            .get()
            .map(|el| selected_values(&el))
            .unwrap_or_default();
        tracing::debug!(?selected, "Applying status filter");
        on_apply.run(selected);
    };

    view! {
        <div class="filters">
            <label for="status-filter">"Status"</label>
            <select id="status-filter" class="status-filter" multiple=true node_ref=select_ref>
                {CorrectionStatus::ALL
                    .into_iter()
                    .map(|s| view! { <option value=s.code().to_string()>{s.display()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <button id="apply-filters" class="btn btn-primary" on:click=apply>
                "Apply filters"
            </button>
        </div>
    }
}
