use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{sort_params, status_params, PageLoader, Params, TableState};
use crate::components::corrections_table::CorrectionsTable;
use crate::components::status_filter::StatusFilter;
use crate::config::{ClientConfig, RendererKind};

/// Start one load operation in the background.
///
/// Loads are never cancelled; errors are logged and shown, and leave the
/// table as it was.
fn spawn_load(
    loader: PageLoader,
    table: TableState,
    set_error: WriteSignal<Option<String>>,
    params: Params,
) {
    table.start_load();
    spawn_local(async move {
        match loader.load(&params).await {
            Ok(()) => set_error.set(None),
            Err(e) => {
                tracing::error!(error = %e, ?params, "Failed to load corrections");
                set_error.set(Some(e.into()));
            }
        }
        table.finish_load();
    });
}

#[component]
pub fn CorrectionsPage() -> impl IntoView {
    let loader = expect_context::<PageLoader>();
    let table = expect_context::<TableState>();
    let config = expect_context::<ClientConfig>();
    let (error, set_error) = signal::<Option<String>>(None);
    let external = config.renderer == RendererKind::External;

    let on_sort = {
        let loader = loader.clone();
        Callback::new(move |key: String| {
            spawn_load(loader.clone(), table, set_error, sort_params(&key));
        })
    };

    let on_filter = {
        let loader = loader.clone();
        Callback::new(move |selected: Vec<String>| {
            spawn_load(loader.clone(), table, set_error, status_params(selected));
        })
    };

    // Initial load on mount
    Effect::new(move |_| {
        spawn_load(loader.clone(), table, set_error, Params::new());
    });

    view! {
        <div class="page corrections-page">
            <style>{include_str!("corrections.css")}</style>

            <h2>"Corrections"</h2>
            <p class="page-description">
                "Text is shown in a monospace font. Spaces are marked as "
                <span class="space">"\u{00B7}"</span>
            </p>

            <div class="corrections-toolbar">
                <a href="/admin/corrections/correction/add/" rel="external" class="btn btn-success">
                    "Create correction"
                </a>
                <StatusFilter on_apply=on_filter />
                {move || table.is_loading().then(|| view! {
                    <span class="corrections-loading">"Loading..."</span>
                })}
            </div>

            {move || error.get().map(|e| view! {
                <div class="corrections-error">{e}</div>
            })}

            <CorrectionsTable state=table on_sort=on_sort external=external />
        </div>
    }
}
