//! Browser tests for the JavaScript `TableScroller` surface.
//!
//! Run with: wasm-pack test --headless --chrome
#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp, clippy::panic)]

use tablescroller::TableScroller;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

const GRID: &str = r#"
    <table id="grid">
        <thead><tr><th>name</th><th>q1</th><th>q2</th><th>q3</th></tr></thead>
        <tbody>
            <tr><td>alpha</td><td>1</td><td>2</td><td>3</td></tr>
            <tr><td>beta</td><td>4</td><td>5</td><td>6</td></tr>
            <tr><td>gamma</td><td>7</td><td>8</td><td>9</td></tr>
        </tbody>
    </table>
    <div id="box"></div>"#;

/// Put `GRID` in a fresh container and return the table.
fn install() -> HtmlElement {
    install_markup(GRID)
}

/// Put `markup` in a fresh container and return its `#grid` table.
fn install_markup(markup: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(old) = document.get_element_by_id("fixture") {
        old.remove();
    }
    let host = document.create_element("div").unwrap();
    host.set_id("fixture");
    host.set_inner_html(markup);
    document.body().unwrap().append_child(&host).unwrap();
    document
        .get_element_by_id("grid")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

/// A table large enough to overflow a small mount in both directions.
fn wide_grid(rows: usize, cols: usize) -> String {
    let mut html = String::from(r#"<table id="grid"><thead><tr>"#);
    for c in 0..cols {
        html.push_str(&format!("<th>heading{c:04}</th>"));
    }
    html.push_str("</tr></thead><tbody>");
    for r in 0..rows {
        html.push_str("<tr>");
        for c in 0..cols {
            html.push_str(&format!("<td>value{r:03}{c:03}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

fn options(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap()
}

fn scroll_position(element: &HtmlElement) -> (f64, f64) {
    let left = js_sys::Reflect::get(element, &"scrollLeft".into()).unwrap();
    let top = js_sys::Reflect::get(element, &"scrollTop".into()).unwrap();
    (left.as_f64().unwrap(), top.as_f64().unwrap())
}

/// Move `frame` the way a user would: set the offsets, then fire `scroll`.
fn user_scroll(frame: &HtmlElement, left: f64, top: f64) {
    js_sys::Reflect::set(frame, &"scrollLeft".into(), &left.into()).unwrap();
    js_sys::Reflect::set(frame, &"scrollTop".into(), &top.into()).unwrap();
    let event = web_sys::Event::new("scroll").unwrap();
    frame.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn test_null_element_throws() {
    let err = TableScroller::new(JsValue::NULL, options("{}"))
        .err()
        .expect("should throw");
    assert_eq!(err.as_string().as_deref(), Some("Invalid table element specified"));
}

#[wasm_bindgen_test]
fn test_non_table_element_throws() {
    install();
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.get_element_by_id("box").unwrap();
    let err = TableScroller::new(div.into(), options("{}"))
        .err()
        .expect("should throw");
    assert_eq!(err.as_string().as_deref(), Some("Invalid table element specified"));
}

#[wasm_bindgen_test]
fn test_missing_options_throw() {
    let table = install();
    let err = TableScroller::new(table.into(), JsValue::UNDEFINED)
        .err()
        .expect("should throw");
    assert_eq!(err.as_string().as_deref(), Some("Options must be specified"));
}

#[wasm_bindgen_test]
fn test_mounts_four_panes() {
    let table = install();
    let scroller = TableScroller::new(
        table.into(),
        options(r##"{"pinnedRows": 1, "pinnedCols": 1, "width": 120, "height": 60, "container": "#box"}"##),
    )
    .unwrap();

    assert_eq!(scroller.mount().id(), "box");
    assert_eq!(scroller.mount().children().length(), 4);
    assert!(scroller.corner().is_some());
    assert!(scroller.scrollable_columns().is_some());
    assert!(scroller.scrollable_rows().is_some());
    assert!(scroller
        .scrollable_window()
        .class_list()
        .contains("scrollable-data-frame"));
    assert!(scroller
        .scrollable_window_table()
        .class_list()
        .contains("scrollable-data-table"));
    assert!(scroller.scrollable_window_table().get_attribute("id").is_none());
}

#[wasm_bindgen_test]
fn test_rows_only_leaves_corner_undefined() {
    let table = install();
    let scroller = TableScroller::new(table.into(), options(r#"{"pinnedRows": 1}"#)).unwrap();
    assert!(scroller.corner().is_none());
    assert!(scroller.corner_table().is_none());
    assert!(scroller.scrollable_rows().is_none());
    assert!(scroller.scrollable_columns_table().is_some());
}

#[wasm_bindgen_test]
fn test_options_getter_reports_merged_config() {
    let table = install();
    let scroller = TableScroller::new(table.into(), options(r#"{"pinnedCols": 2}"#)).unwrap();
    let merged = scroller.options().unwrap();
    let pinned_rows = js_sys::Reflect::get(&merged, &"pinnedRows".into()).unwrap();
    let pinned_cols = js_sys::Reflect::get(&merged, &"pinnedCols".into()).unwrap();
    assert_eq!(pinned_rows.as_f64(), Some(1.0));
    assert_eq!(pinned_cols.as_f64(), Some(2.0));
}

#[wasm_bindgen_test]
fn test_remove_original_hides_table() {
    let table = install();
    let _scroller = TableScroller::new(
        table.clone().into(),
        options(r#"{"removeOriginal": true}"#),
    )
    .unwrap();
    assert_eq!(
        table.style().get_property_value("display").unwrap(),
        "none"
    );
}

#[wasm_bindgen_test]
fn test_headers_follow_body_scroll() {
    let table = install_markup(&wide_grid(30, 12));
    let scroller = TableScroller::new(
        table.into(),
        options(r#"{"pinnedRows": 1, "pinnedCols": 1, "width": 240, "height": 120}"#),
    )
    .unwrap();
    let body = scroller.scrollable_window();
    let column_header = scroller.scrollable_columns().unwrap();
    let row_header = scroller.scrollable_rows().unwrap();

    user_scroll(&body, 60.0, 40.0);

    let (left, top) = scroll_position(&body);
    assert!(left > 0.0 && top > 0.0);
    assert_eq!(scroll_position(&column_header).0, left);
    assert_eq!(scroll_position(&row_header).1, top);
    assert_eq!(scroll_position(&scroller.corner().unwrap()), (0.0, 0.0));
}

#[wasm_bindgen_test]
fn test_freed_scroller_stops_following() {
    let table = install_markup(&wide_grid(30, 12));
    let scroller = TableScroller::new(
        table.into(),
        options(r#"{"pinnedRows": 1, "pinnedCols": 1, "width": 240, "height": 120}"#),
    )
    .unwrap();
    let body = scroller.scrollable_window();
    let column_header = scroller.scrollable_columns().unwrap();

    drop(scroller);
    // The handler is gone, so the event reaches no freed closure.
    user_scroll(&body, 60.0, 40.0);

    assert!(scroll_position(&body).0 > 0.0);
    assert_eq!(scroll_position(&column_header).0, 0.0);
}

#[wasm_bindgen_test]
fn test_version_matches_package() {
    assert_eq!(tablescroller::version(), env!("CARGO_PKG_VERSION"));
}
