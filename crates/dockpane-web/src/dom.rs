//! DOM style helpers

use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Window};

use dockpane::Rect;

/// Get the browser window
pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

/// Get the document
pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Look up an element by id
pub(crate) fn element_by_id(id: &str) -> Result<HtmlElement, JsValue> {
    use wasm_bindgen::JsCast;
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{} not found", id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("element #{} is not an HtmlElement", id)))
}

/// Current viewport size in pixels
pub(crate) fn viewport_size() -> Result<(f32, f32), JsValue> {
    let win = window()?;
    let width = win.inner_width()?.as_f64().unwrap_or(0.0) as f32;
    let height = win.inner_height()?.as_f64().unwrap_or(0.0) as f32;
    Ok((width, height))
}

/// Write a rectangle to an element's position/size style
pub(crate) fn set_bounds(el: &HtmlElement, rect: Rect) {
    let style = el.style();
    let _ = style.set_property("left", &format!("{}px", rect.x));
    let _ = style.set_property("top", &format!("{}px", rect.y));
    let _ = style.set_property("width", &format!("{}px", rect.width));
    let _ = style.set_property("height", &format!("{}px", rect.height));
}

/// Write an element's opacity style
pub(crate) fn set_opacity(el: &HtmlElement, opacity: f32) {
    let _ = el.style().set_property("opacity", &format!("{}", opacity));
}

/// Write an element's cursor style
pub(crate) fn set_cursor(el: &HtmlElement, cursor: &str) {
    let _ = el.style().set_property("cursor", cursor);
}
