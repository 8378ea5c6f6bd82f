//! Browser DOM host backed by web-sys.

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCollection, HtmlElement, Window};

use super::HostDocument;
use crate::error::{Result, ScrollerError};
use crate::layout::measure::parse_px;

/// The page the widget runs in.
#[derive(Clone)]
pub struct WebDocument {
    window: Window,
    document: Document,
}

impl WebDocument {
    /// Bind to the global `window.document`.
    pub fn from_window() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| ScrollerError::Dom("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| ScrollerError::Dom("window has no document".to_string()))?;
        Ok(Self { window, document })
    }

    fn computed_px(&self, element: &HtmlElement, property: &str) -> f64 {
        self.window
            .get_computed_style(element)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value(property).ok())
            .and_then(|value| parse_px(&value))
            .unwrap_or(0.0)
    }
}

fn to_html(value: impl JsCast) -> Result<HtmlElement> {
    value
        .dyn_into::<HtmlElement>()
        .map_err(|_| ScrollerError::Dom("not an HTML element".to_string()))
}

fn html_elements(collection: &HtmlCollection) -> Vec<HtmlElement> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect()
}

// scrollLeft/scrollTop are fractional on high-DPI displays; read and write
// them as JS numbers rather than through the integer bindings.
fn number_property(element: &HtmlElement, name: &str) -> Option<f64> {
    Reflect::get(element.as_ref(), &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_f64())
}

fn set_number_property(element: &HtmlElement, name: &str, value: f64) {
    match Reflect::set(
        element.as_ref(),
        &JsValue::from_str(name),
        &JsValue::from_f64(value),
    ) {
        Ok(true) => {}
        Ok(false) => tracing::warn!(
            target: "tablescroller::scroller",
            property = name,
            value,
            "scroll offset write rejected"
        ),
        Err(err) => tracing::warn!(
            target: "tablescroller::scroller",
            property = name,
            value,
            ?err,
            "scroll offset write failed"
        ),
    }
}

/// A registered `scroll` handler. Dropping it removes the handler from its
/// element before the closure is freed.
pub struct WebListener {
    target: HtmlElement,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for WebListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref())
        {
            tracing::warn!(target: "tablescroller::scroller", ?err, "scroll listener removal failed");
        }
    }
}

impl HostDocument for WebDocument {
    type Element = HtmlElement;
    type Listener = WebListener;

    fn body(&self) -> Result<HtmlElement> {
        self.document
            .body()
            .ok_or_else(|| ScrollerError::Dom("document has no body".to_string()))
    }

    fn create_element(&self, tag: &str) -> Result<HtmlElement> {
        to_html(self.document.create_element(tag)?)
    }

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    fn tag_name(&self, element: &HtmlElement) -> String {
        element.tag_name().to_ascii_lowercase()
    }

    fn clone_element(&self, element: &HtmlElement, deep: bool) -> Result<HtmlElement> {
        to_html(element.clone_node_with_deep(deep)?)
    }

    fn append_child(&self, parent: &HtmlElement, child: &HtmlElement) -> Result<()> {
        parent.append_child(child)?;
        Ok(())
    }

    fn parent_element(&self, element: &HtmlElement) -> Option<HtmlElement> {
        element
            .parent_element()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
    }

    fn child_elements(&self, element: &HtmlElement) -> Vec<HtmlElement> {
        html_elements(&element.children())
    }

    fn elements_by_tag(&self, root: &HtmlElement, tag: &str) -> Vec<HtmlElement> {
        html_elements(&root.get_elements_by_tag_name(tag))
    }

    fn attribute(&self, element: &HtmlElement, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &HtmlElement, name: &str, value: &str) -> Result<()> {
        element.set_attribute(name, value)?;
        Ok(())
    }

    fn remove_attribute(&self, element: &HtmlElement, name: &str) -> Result<()> {
        element.remove_attribute(name)?;
        Ok(())
    }

    fn add_class(&self, element: &HtmlElement, class: &str) -> Result<()> {
        element.class_list().add_1(class)?;
        Ok(())
    }

    fn set_style(&self, element: &HtmlElement, property: &str, value: &str) -> Result<()> {
        element.style().set_property(property, value)?;
        Ok(())
    }

    fn computed_width(&self, element: &HtmlElement) -> f64 {
        self.computed_px(element, "width")
    }

    fn computed_height(&self, element: &HtmlElement) -> f64 {
        self.computed_px(element, "height")
    }

    fn offset_size(&self, element: &HtmlElement) -> (f64, f64) {
        (
            f64::from(element.offset_width()),
            f64::from(element.offset_height()),
        )
    }

    fn client_size(&self, element: &HtmlElement) -> (f64, f64) {
        (
            f64::from(element.client_width()),
            f64::from(element.client_height()),
        )
    }

    fn scroll_offset(&self, element: &HtmlElement) -> (f64, f64) {
        (
            number_property(element, "scrollLeft").unwrap_or_default(),
            number_property(element, "scrollTop").unwrap_or_default(),
        )
    }

    fn set_scroll_left(&self, element: &HtmlElement, value: f64) {
        set_number_property(element, "scrollLeft", value);
    }

    fn set_scroll_top(&self, element: &HtmlElement, value: f64) {
        set_number_property(element, "scrollTop", value);
    }

    fn listen_scroll(
        &self,
        element: &HtmlElement,
        handler: Box<dyn FnMut()>,
    ) -> Result<Self::Listener> {
        let mut handler = handler;
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            handler();
        }) as Box<dyn FnMut(web_sys::Event)>);
        element.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
        Ok(WebListener {
            target: element.clone(),
            closure,
        })
    }
}
