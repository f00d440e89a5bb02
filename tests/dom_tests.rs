//! Browser-only checks. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use corrections_ui::api::{
    sort_params, status_params, ExternalUpdateTable, TableSink, TableState, DEFAULT_ENDPOINT,
};
use corrections_ui::app::App;
use corrections_ui::components::corrections_table::CorrectionsTable;
use corrections_ui::components::status_filter::{selected_values, StatusFilter};
use corrections_ui::config::ClientConfig;
use corrections_ui::LoadError;
use leptos::prelude::*;
use serde_json::json;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlOptionElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

fn status_select(selected: &[&str]) -> HtmlSelectElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let select: HtmlSelectElement = document
        .create_element("select")
        .unwrap()
        .dyn_into()
        .unwrap();
    select.set_multiple(true);
    for value in ["0", "1", "2"] {
        let option: HtmlOptionElement = document
            .create_element("option")
            .unwrap()
            .dyn_into()
            .unwrap();
        option.set_value(value);
        select.append_child(&option).unwrap();
        option.set_selected(selected.contains(&value));
    }
    select
}

fn set_update_table(body: &str) {
    let window = web_sys::window().unwrap();
    let func = js_sys::Function::new_with_args("records", body);
    js_sys::Reflect::set(&window, &JsValue::from_str("updateTable"), &func).unwrap();
}

fn window_prop(name: &str) -> JsValue {
    let window = web_sys::window().unwrap();
    js_sys::Reflect::get(&window, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn test_selected_values_reads_selected_options() {
    assert_eq!(selected_values(&status_select(&["0", "2"])), vec!["0", "2"]);
    assert!(selected_values(&status_select(&[])).is_empty());
}

#[wasm_bindgen_test]
fn test_external_update_table_receives_records() {
    set_update_table("window.__received = JSON.stringify(records);");

    ExternalUpdateTable
        .update_table(Some(json!([{"id": 1}])))
        .unwrap();

    assert_eq!(window_prop("__received").as_string().as_deref(), Some(r#"[{"id":1}]"#));
}

#[wasm_bindgen_test]
fn test_external_update_table_receives_undefined_when_absent() {
    set_update_table("window.__wasUndefined = (records === undefined);");

    ExternalUpdateTable.update_table(None).unwrap();

    assert_eq!(window_prop("__wasUndefined").as_bool(), Some(true));
}

#[wasm_bindgen_test]
fn test_external_update_table_errors_are_render_errors() {
    set_update_table("throw new Error('boom');");

    let err = ExternalUpdateTable.update_table(Some(json!([]))).unwrap_err();

    assert!(matches!(err, LoadError::Render(ref m) if m.contains("boom")));
}

/// Mount `f` into a fresh container attached to the document body.
fn mount_in_container<F, N>(f: F) -> HtmlElement
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let document = web_sys::window().unwrap().document().unwrap();
    let container: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    leptos::mount::mount_to(container.clone(), f).forget();
    container
}

fn all(container: &HtmlElement, selector: &str) -> Vec<Element> {
    let list = container.query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn click(el: &Element) {
    el.dyn_ref::<HtmlElement>().unwrap().click();
}

fn mount_table(calls: RwSignal<Vec<String>>) -> HtmlElement {
    let on_sort = Callback::new(move |key: String| {
        calls.update(|c| c.push(sort_params(&key).to_url(DEFAULT_ENDPOINT)));
    });
    mount_in_container(move || {
        view! { <CorrectionsTable state=TableState::new() on_sort=on_sort /> }
    })
}

fn mount_filter(calls: RwSignal<Vec<String>>) -> HtmlElement {
    let on_apply = Callback::new(move |selected: Vec<String>| {
        calls.update(|c| c.push(status_params(selected).to_url(DEFAULT_ENDPOINT)));
    });
    mount_in_container(move || view! { <StatusFilter on_apply=on_apply /> })
}

#[wasm_bindgen_test]
fn test_each_header_click_requests_its_sort_key_once() {
    let owner = Owner::new();
    owner.set();
    let calls = RwSignal::new(Vec::<String>::new());
    let container = mount_table(calls);

    let headers = all(&container, "th[data-sort]");
    let keys: Vec<String> = headers
        .iter()
        .map(|h| h.get_attribute("data-sort").unwrap())
        .collect();
    assert_eq!(keys, vec!["id", "subject", "status", "scope_id"]);

    for header in &headers {
        click(header);
    }

    let expected: Vec<String> = keys
        .iter()
        .map(|k| format!("/corrections/api/corrections/?sort_by={}", k))
        .collect();
    assert_eq!(calls.get_untracked(), expected);
}

#[wasm_bindgen_test]
fn test_repeated_header_clicks_send_the_same_key() {
    let owner = Owner::new();
    owner.set();
    let calls = RwSignal::new(Vec::<String>::new());
    let container = mount_table(calls);

    let status = container.query_selector("th[data-sort='status']").unwrap().unwrap();
    click(&status);
    click(&status);

    assert_eq!(
        calls.get_untracked(),
        vec![
            "/corrections/api/corrections/?sort_by=status",
            "/corrections/api/corrections/?sort_by=status",
        ]
    );
}

#[wasm_bindgen_test]
fn test_apply_filters_reads_current_selection() {
    let owner = Owner::new();
    owner.set();
    let calls = RwSignal::new(Vec::<String>::new());
    let container = mount_filter(calls);

    for option in all(&container, "#status-filter option") {
        let option: HtmlOptionElement = option.dyn_into().unwrap();
        let value = option.value();
        option.set_selected(value == "0" || value == "2");
    }
    let apply = container.query_selector("#apply-filters").unwrap().unwrap();
    click(&apply);

    assert_eq!(
        calls.get_untracked(),
        vec!["/corrections/api/corrections/?status=0&status=2"]
    );
}

#[wasm_bindgen_test]
fn test_apply_filters_with_nothing_selected() {
    let owner = Owner::new();
    owner.set();
    let calls = RwSignal::new(Vec::<String>::new());
    let container = mount_filter(calls);

    let apply = container.query_selector("#apply-filters").unwrap().unwrap();
    click(&apply);

    assert_eq!(calls.get_untracked(), vec![DEFAULT_ENDPOINT]);
}

fn mounts_corrections_page_at(path: &str) -> bool {
    let window = web_sys::window().unwrap();
    window
        .history()
        .unwrap()
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .unwrap();
    let container = mount_in_container(|| view! { <App config=ClientConfig::default() /> });
    container.query_selector(".corrections-page").unwrap().is_some()
}

#[wasm_bindgen_test]
fn test_corrections_page_routes_with_and_without_trailing_slash() {
    assert!(mounts_corrections_page_at("/corrections/"));
    assert!(mounts_corrections_page_at("/corrections"));
}
