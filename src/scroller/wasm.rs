//! JavaScript surface: `new TableScroller(table, options)`.

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::{attach, ScrollerPanes};
use crate::error::ScrollerError;
use crate::host::web::WebDocument;
use crate::types::ScrollerOptions;

/// A table split into pinned panes, exported to JavaScript.
///
/// Keep the instance alive while the panes are on the page; it owns the
/// scroll listener that keeps the headers in step with the body.
#[wasm_bindgen]
pub struct TableScroller {
    doc: WebDocument,
    panes: ScrollerPanes<WebDocument>,
}

fn is_absent(value: &JsValue) -> bool {
    value.is_null() || value.is_undefined()
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

#[wasm_bindgen]
impl TableScroller {
    /// Split `element` (a `<table>`) into pinned panes.
    ///
    /// # Errors
    /// Throws when `element` is missing or not a table, when `options` is
    /// missing, or when `options` has fields of the wrong type.
    #[wasm_bindgen(constructor)]
    pub fn new(element: JsValue, options: JsValue) -> Result<TableScroller, JsValue> {
        console_error_panic_hook::set_once();

        if is_absent(&element) {
            return Err(ScrollerError::InvalidElement.into());
        }
        let element = element
            .dyn_into::<HtmlElement>()
            .map_err(|_| ScrollerError::InvalidElement)?;

        let options = if is_absent(&options) {
            None
        } else {
            Some(
                serde_wasm_bindgen::from_value::<ScrollerOptions>(options)
                    .map_err(|e| ScrollerError::Options(e.to_string()))?,
            )
        };

        let doc = WebDocument::from_window()?;
        let panes = attach(&doc, Some(&element), options.as_ref())?;
        Ok(TableScroller { doc, panes })
    }

    /// The merged configuration.
    #[wasm_bindgen(getter)]
    pub fn options(&self) -> Result<JsValue, JsValue> {
        to_js(self.panes.config())
    }

    #[wasm_bindgen(getter)]
    pub fn mount(&self) -> HtmlElement {
        self.panes.mount().clone()
    }

    #[wasm_bindgen(getter)]
    pub fn corner(&self) -> Option<HtmlElement> {
        self.panes.corner().map(|pane| pane.frame.clone())
    }

    #[wasm_bindgen(getter, js_name = cornerTable)]
    pub fn corner_table(&self) -> Option<HtmlElement> {
        self.panes.corner().map(|pane| pane.table.clone())
    }

    #[wasm_bindgen(getter, js_name = scrollableColumns)]
    pub fn scrollable_columns(&self) -> Option<HtmlElement> {
        self.panes.column_header().map(|pane| pane.frame.clone())
    }

    #[wasm_bindgen(getter, js_name = scrollableColumnsTable)]
    pub fn scrollable_columns_table(&self) -> Option<HtmlElement> {
        self.panes.column_header().map(|pane| pane.table.clone())
    }

    #[wasm_bindgen(getter, js_name = scrollableRows)]
    pub fn scrollable_rows(&self) -> Option<HtmlElement> {
        self.panes.row_header().map(|pane| pane.frame.clone())
    }

    #[wasm_bindgen(getter, js_name = scrollableRowsTable)]
    pub fn scrollable_rows_table(&self) -> Option<HtmlElement> {
        self.panes.row_header().map(|pane| pane.table.clone())
    }

    #[wasm_bindgen(getter, js_name = scrollableWindow)]
    pub fn scrollable_window(&self) -> HtmlElement {
        self.panes.body().frame.clone()
    }

    #[wasm_bindgen(getter, js_name = scrollableWindowTable)]
    pub fn scrollable_window_table(&self) -> HtmlElement {
        self.panes.body().table.clone()
    }

    /// Measure every pane as currently rendered.
    #[wasm_bindgen(js_name = layoutReport)]
    pub fn layout_report(&self) -> Result<JsValue, JsValue> {
        to_js(&self.panes.layout_report(&self.doc))
    }
}
